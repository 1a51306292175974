//! Documentation generation for configuration settings.
//!
//! Projects the settings registry into immutable description records,
//! rewrites setting names mentioned in prose into cross-references, and
//! assembles the result into one AsciiDoc document.

mod asciidoc;
mod description;
mod generator;
mod xref;

#[cfg(test)]
mod tests;

pub use asciidoc::{
    DEFAULT_ID_PREFIX, DEFAULT_SUMMARY_ID, DEFAULT_TITLE, DocumentOptions, assemble,
};
pub use description::{SettingDescription, anchor_id};
pub use generator::{DocsGenerator, OutputStyle};
pub use xref::XrefFormatter;
