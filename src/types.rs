// src/types.rs

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::PathBenderError;

/// One of the fixed target representations a path can be rendered into.
///
/// Variants are declared in emission order, so the derived `Ord` matches the
/// order `convert_path` produces results in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FormatTag {
    Windows,
    Linux,
    PythonRaw,
    PythonForward,
    Javascript,
    Json,
    Unc,
    Url,
}

impl FormatTag {
    /// Every format, in emission order.
    pub const ALL: [FormatTag; 8] = [
        FormatTag::Windows,
        FormatTag::Linux,
        FormatTag::PythonRaw,
        FormatTag::PythonForward,
        FormatTag::Javascript,
        FormatTag::Json,
        FormatTag::Unc,
        FormatTag::Url,
    ];

    /// Kebab-case tag, e.g. `"python-raw"`.
    pub fn as_str(self) -> &'static str {
        match self {
            FormatTag::Windows => "windows",
            FormatTag::Linux => "linux",
            FormatTag::PythonRaw => "python-raw",
            FormatTag::PythonForward => "python-forward",
            FormatTag::Javascript => "javascript",
            FormatTag::Json => "json",
            FormatTag::Unc => "unc",
            FormatTag::Url => "url",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormatTag::Windows => "Windows PowerShell",
            FormatTag::Linux => "Bash/Linux",
            FormatTag::PythonRaw => "Python Raw String",
            FormatTag::PythonForward => "Python Forward Slash",
            FormatTag::Javascript => "JavaScript/TypeScript",
            FormatTag::Json => "JSON",
            FormatTag::Unc => "UNC Network Path",
            FormatTag::Url => "File URL / URI Path",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FormatTag::Windows => "Windows backslash format for PowerShell and Command Prompt",
            FormatTag::Linux => "Unix-style forward slash format",
            FormatTag::PythonRaw => "Python raw string (no escaping needed)",
            FormatTag::PythonForward => "Python string with forward slashes",
            FormatTag::Javascript => "JavaScript string with escaped backslashes",
            FormatTag::Json => "JSON string with double-escaped backslashes",
            FormatTag::Unc => "Universal Naming Convention for network resources",
            FormatTag::Url => "file:// protocol URL/URI format",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatTag {
    type Err = PathBenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FormatTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == wanted)
            .ok_or_else(|| {
                PathBenderError::UnknownFormat(format!(
                    "{wanted} (expected one of: windows, linux, python-raw, python-forward, javascript, json, unc, url)"
                ))
            })
    }
}

/// Target shell for [`crate::shell::escape_for_shell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    #[default]
    Bash,
    PowerShell,
    Cmd,
}

impl Shell {
    pub fn as_str(self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::PowerShell => "powershell",
            Shell::Cmd => "cmd",
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shell {
    type Err = PathBenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "powershell" => Ok(Shell::PowerShell),
            "cmd" => Ok(Shell::Cmd),
            other => Err(PathBenderError::UnknownShell(format!(
                "{other} (expected \"bash\", \"powershell\" or \"cmd\")"
            ))),
        }
    }
}

/// How the CLI prints conversion results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// `Label: value` lines.
    #[default]
    Text,
    /// Pretty-printed JSON array of results.
    Json,
}

/// A single rendered representation of the input path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub tag: FormatTag,
    pub label: &'static str,
    pub value: String,
    pub description: &'static str,
}

impl ConversionResult {
    /// Pair a rendered value with the fixed label/description of its format.
    pub fn new(tag: FormatTag, value: String) -> Self {
        Self {
            tag,
            label: tag.label(),
            value,
            description: tag.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tags_parse_case_insensitively() {
        assert_eq!("Python-Raw".parse::<FormatTag>().unwrap(), FormatTag::PythonRaw);
        assert_eq!(" url ".parse::<FormatTag>().unwrap(), FormatTag::Url);
    }

    #[test]
    fn unknown_format_tag_is_rejected() {
        let err = "powershell".parse::<FormatTag>().unwrap_err();
        assert!(matches!(err, PathBenderError::UnknownFormat(msg) if msg.starts_with("powershell")));
    }

    #[test]
    fn all_is_sorted_in_emission_order() {
        let mut sorted = FormatTag::ALL;
        sorted.sort();
        assert_eq!(sorted, FormatTag::ALL);
    }

    #[test]
    fn display_matches_serde_name() {
        for tag in FormatTag::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{tag}\""));
        }
    }

    #[test]
    fn shell_round_trips_through_from_str() {
        for shell in [Shell::Bash, Shell::PowerShell, Shell::Cmd] {
            assert_eq!(shell.to_string().parse::<Shell>().unwrap(), shell);
        }
        assert!(matches!(
            "zsh".parse::<Shell>(),
            Err(PathBenderError::UnknownShell(_))
        ));
    }
}
