//! Core types for geocat
//!
//! This crate contains the study domain types and the filter predicate
//! builder shared across all other crates. It is pure: no I/O, no storage.

mod filter;
mod study;

pub use filter::*;
pub use study::*;
