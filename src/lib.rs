// src/lib.rs

pub mod cli;
pub mod config;
pub mod convert;
pub mod errors;
pub mod logging;
pub mod relative;
pub mod shell;
pub mod types;

use std::path::Path;

use anyhow::Result;
use tracing::{debug, warn};

use crate::cli::{CliArgs, Command};
use crate::config::ConfigFile;
use crate::errors::PathBenderError;
use crate::types::OutputStyle;

pub use crate::convert::{
    convert_path, convert_path_with, detect_format, normalize_path, results_as_text,
};
pub use crate::relative::calculate_relative_path;
pub use crate::shell::escape_for_shell;
pub use crate::types::{ConversionResult, FormatTag, Shell};

/// High-level entry point used by `main.rs`.
///
/// Resolves the config file, runs the requested subcommand and prints its
/// output to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = config::load_or_default(args.config.as_deref().map(Path::new))?;
    let output = execute(&args.command, &cfg)?;
    println!("{output}");
    Ok(())
}

/// Run one subcommand against an already-loaded config and return what
/// should be printed.
pub fn execute(command: &Command, cfg: &ConfigFile) -> errors::Result<String> {
    debug!(?command, "executing command");

    match command {
        Command::Convert {
            path,
            formats,
            output,
        } => {
            let formats = if formats.is_empty() {
                cfg.formats()
            } else {
                formats.as_slice()
            };

            let results = convert_path_with(path, formats);
            if results.is_empty() {
                warn!("input path is empty; nothing to convert");
            }

            match output.unwrap_or(cfg.output_style()) {
                OutputStyle::Text => Ok(results_as_text(&results)),
                OutputStyle::Json => Ok(serde_json::to_string_pretty(&results)?),
            }
        }
        Command::Detect { path } => Ok(detect_format(path)
            .map_or_else(|| "none".to_string(), |tag| tag.to_string())),
        Command::Normalize { path } => Ok(normalize_path(path)),
        Command::Escape { path, shell } => {
            Ok(escape_for_shell(path, shell.unwrap_or(cfg.shell())))
        }
        Command::Relative { from, to } => {
            if from.trim().is_empty() || to.trim().is_empty() {
                return Err(PathBenderError::InvalidInput(
                    "relative needs both FROM and TO to be non-empty".to_string(),
                ));
            }
            Ok(calculate_relative_path(from, to))
        }
    }
}
