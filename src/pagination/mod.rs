//! Pagination module
//!
//! Fixed-size offset pagination over the launch list.
//!
//! # Overview
//!
//! [`PageCursor`] is the only page position type in the crate. Back and
//! Next move it by exactly one page; Back on the first page does nothing.

mod types;

pub use types::{Navigation, PageCursor};

#[cfg(test)]
mod tests;
