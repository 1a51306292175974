//! Confdoc entry point - generates the configuration settings reference.
//!
//! Parses the command line, runs one synchronous generation pass, and exits
//! non-zero with a diagnostic when enumeration or writing fails.

use std::process;

use clap::Parser;
use confdoc::{
    cli::{self, Cli},
    tracing_config,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_config::init()?;

    let cli = Cli::parse();

    if let Err(e) = cli::run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    Ok(())
}
