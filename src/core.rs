//! Core error types and result aliases shared across the crate.

mod error;

pub use error::{ConfdocError, Result};
