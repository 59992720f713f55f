// src/cli.rs

//! CLI argument parsing using `clap`.

use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::{FormatTag, OutputStyle, Shell};

/// Command-line arguments for `pathbender`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pathbender",
    version,
    about = "Convert a path between Windows, POSIX, UNC, URL and string-literal forms.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a config file (TOML).
    ///
    /// Default: `PathBender.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PATHBENDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render a path in every supported format.
    Convert {
        /// The path, in any supported notation (quotes and `r"..."` allowed).
        path: String,

        /// Only print these formats (repeatable).
        #[arg(long = "format", value_name = "TAG", value_parser = FormatTag::from_str)]
        formats: Vec<FormatTag>,

        /// Output style; overrides `[output].style`.
        #[arg(long, value_enum)]
        output: Option<OutputStyle>,
    },

    /// Guess which notation a path is written in.
    Detect { path: String },

    /// Strip quotes, raw-string markers and `file:///` from a path.
    Normalize { path: String },

    /// Escape a path for a shell command line.
    Escape {
        path: String,

        /// bash, powershell or cmd; overrides `[escape].shell`.
        #[arg(long, value_name = "SHELL", value_parser = Shell::from_str)]
        shell: Option<Shell>,
    },

    /// Relative path from a file to another path.
    Relative { from: String, to: String },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
