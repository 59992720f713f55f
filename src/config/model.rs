// src/config/model.rs

use serde::Deserialize;

use crate::types::{FormatTag, OutputStyle, Shell};

/// Configuration exactly as read from TOML, before validation.
///
/// ```toml
/// [output]
/// style = "json"
/// formats = ["windows", "linux", "url"]
///
/// [escape]
/// shell = "powershell"
/// ```
///
/// Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub escape: EscapeSection,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// `"text"` (default) or `"json"`.
    #[serde(default)]
    pub style: OutputStyle,

    /// Formats `convert` prints when none are given on the command line.
    ///
    /// If `None`, all formats are printed.
    #[serde(default)]
    pub formats: Option<Vec<FormatTag>>,
}

/// `[escape]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EscapeSection {
    /// Shell used by `escape` when `--shell` is not given.
    #[serde(default)]
    pub shell: Shell,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (or `Default`), so the
/// format list is known to be non-empty and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    output_style: OutputStyle,
    formats: Vec<FormatTag>,
    shell: Shell,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        output_style: OutputStyle,
        formats: Vec<FormatTag>,
        shell: Shell,
    ) -> Self {
        Self {
            output_style,
            formats,
            shell,
        }
    }

    pub fn output_style(&self) -> OutputStyle {
        self.output_style
    }

    pub fn formats(&self) -> &[FormatTag] {
        &self.formats
    }

    pub fn shell(&self) -> Shell {
        self.shell
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(OutputStyle::default(), FormatTag::ALL.to_vec(), Shell::default())
    }
}
