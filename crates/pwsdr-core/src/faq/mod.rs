//! FAQ lookup over the loaded content document.

pub mod matcher;

pub use matcher::{FaqLookup, find_answer, lookup};
