//! Command-line interface for the generator binary.
//!
//! Maps the option surface onto a [`SettingFilter`] and document options,
//! reports defaulted options on stdout, and routes output to a file or to
//! standard output.

use std::{collections::BTreeSet, path::PathBuf};

use clap::Parser;
use tracing::debug;

use crate::{
    core::Result,
    docs::{DEFAULT_ID_PREFIX, DEFAULT_SUMMARY_ID, DEFAULT_TITLE, DocsGenerator, DocumentOptions},
    registry::SettingFilter,
};

/// Generate the configuration settings reference as AsciiDoc.
#[derive(Parser, Debug)]
#[command(name = "confdoc")]
#[command(about = "Generate the configuration settings reference as AsciiDoc")]
pub struct Cli {
    /// Output file path; prints to standard output when omitted.
    pub output: Option<PathBuf>,

    /// Anchor id for the generated summary block.
    #[arg(long, default_value = DEFAULT_SUMMARY_ID)]
    pub id: String,

    /// Human-readable title for the summary block.
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Prefix prepended to every per-setting anchor id.
    #[arg(long = "id-prefix", default_value = DEFAULT_ID_PREFIX)]
    pub id_prefix: String,

    /// Restrict output to settings changeable at runtime.
    #[arg(long)]
    pub dynamic_only: bool,

    /// Include internal settings when true; false matches the default.
    #[arg(long)]
    pub internal: Option<bool>,

    /// Restrict output to exactly one named setting.
    #[arg(long)]
    pub name: Option<String>,

    /// Restrict output to a comma-separated set of named settings.
    #[arg(long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// Restrict output to settings under a namespace prefix.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Include internal/unsupported settings filtered out by default.
    #[arg(long)]
    pub unsupported: bool,
}

/// Executes one generation run for the parsed command line.
///
/// # Errors
///
/// Propagates registry validation and document write errors; the caller is
/// expected to exit non-zero on any of them.
pub fn run(cli: Cli) -> Result<()> {
    for notice in default_notices(&cli) {
        println!("{notice}");
    }

    let filter = build_filter(&cli);
    debug!(?filter, "enumerating settings");

    let generator = DocsGenerator::new()
        .with_options(DocumentOptions {
            id: cli.id.clone(),
            title: cli.title.clone(),
            id_prefix: cli.id_prefix.clone(),
        })
        .with_filter(filter);

    match &cli.output {
        Some(path) => generator.write_to(path),
        None => {
            let document = generator.generate()?;
            print!("{document}");
            Ok(())
        }
    }
}

/// Produces one progress line for every option left at its default.
fn default_notices(cli: &Cli) -> Vec<String> {
    let mut notices = Vec::new();

    if cli.id == DEFAULT_SUMMARY_ID {
        notices.push(format!("Using default summary id: '{DEFAULT_SUMMARY_ID}'"));
    }
    if cli.title == DEFAULT_TITLE {
        notices.push(format!("Using default title: '{DEFAULT_TITLE}'"));
    }
    if cli.id_prefix == DEFAULT_ID_PREFIX {
        notices.push(format!("Using default id prefix: '{DEFAULT_ID_PREFIX}'"));
    }
    if cli.name.is_none() && cli.names.is_none() && cli.prefix.is_none() {
        notices.push("No name filter given: documenting all settings".to_string());
    }
    if !cli.dynamic_only {
        notices.push("Documenting static settings as well as dynamic ones".to_string());
    }
    if !cli.unsupported && cli.internal != Some(true) {
        notices.push("Excluding internal settings".to_string());
    }
    if cli.output.is_none() {
        notices.push("No output file given: printing to standard output".to_string());
    }

    notices
}

/// Builds the filter conjunction from the parsed options.
///
/// Internal settings are included only when `--unsupported` is given or
/// `--internal=true` is explicit; `--internal=false` matches the default.
fn build_filter(cli: &Cli) -> SettingFilter {
    SettingFilter {
        name: cli.name.clone(),
        names: cli
            .names
            .as_ref()
            .map(|names| names.iter().cloned().collect::<BTreeSet<String>>()),
        prefix: cli.prefix.clone(),
        dynamic_only: cli.dynamic_only,
        include_internal: cli.unsupported || cli.internal == Some(true),
    }
}
