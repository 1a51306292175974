//! Confdoc - configuration-reference documentation generator.
//!
//! Confdoc turns the server's statically declared configuration settings into
//! a single AsciiDoc reference document. The main pieces are:
//!
//! - Explicit per-namespace settings manifests with flags and defaults
//! - Cross-reference rewriting of setting names mentioned in prose
//! - AsciiDoc assembly with HTML/print output gating
//! - CLI interface for filtering and output selection
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use confdoc::docs::DocsGenerator;
//!
//! fn main() -> confdoc::Result<()> {
//!     // Generate the full reference with default options
//!     let generator = DocsGenerator::new();
//!     generator.write_to(Path::new("configuration-settings.adoc"))?;
//!     Ok(())
//! }
//! ```

/// Settings manifests, flags, and filtering.
pub mod registry;

/// Core error types and result aliases.
pub mod core;

/// Documentation generation for configuration settings.
pub mod docs;

/// Command-line interface for the generator binary.
pub mod cli;

/// Tracing/logging initialization.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{ConfdocError, Result};
