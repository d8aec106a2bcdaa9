//! Generic minimum-position search over forward-traversable sequences.
//!
//! This crate provides one algorithm in composable form: find the position
//! of the smallest element in a half-open cursor range, under a
//! caller-supplied strict ordering relation and an optional projection that
//! extracts the comparison key from each element. It offers:
//!
//! - **Cursor abstraction**: a minimal forward-traversal capability set
//!   (advance, read, position equality) any sequence type can implement
//! - **Two call shapes**: an explicit `(start, end)` cursor pair, or a
//!   whole-range object via an extension trait
//! - **Deterministic tie-break**: among equally minimal elements, the
//!   earliest position in traversal order always wins
//!
//! # Key Types
//!
//! - [`ForwardCursor`] - The traversal capability the scan requires
//! - [`SliceCursor`] - Non-owning cursor over a borrowed slice
//! - [`ForwardRange`] - A begin/end cursor pair behind a single value
//! - [`MinElementExt`] - Extension trait running the search on any range

pub mod cursor;
pub mod forward_range;
pub mod min_element;


pub use cursor::{ForwardCursor, SliceCursor};
pub use forward_range::ForwardRange;
pub use min_element::{
    MinElementExt, min_position, min_position_by, min_position_by_key, min_position_with,
    ordered_less,
};
