// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PathBenderError, Result};
use crate::types::FormatTag;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = PathBenderError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let formats = match raw.output.formats {
            Some(formats) => {
                validate_formats(&formats)?;
                formats
            }
            None => FormatTag::ALL.to_vec(),
        };

        Ok(ConfigFile::new_unchecked(
            raw.output.style,
            formats,
            raw.escape.shell,
        ))
    }
}

fn validate_formats(formats: &[FormatTag]) -> Result<()> {
    // Unknown tags are already rejected during deserialization.
    if formats.is_empty() {
        return Err(PathBenderError::ConfigError(
            "[output].formats must list at least one format".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for tag in formats {
        if !seen.insert(tag) {
            return Err(PathBenderError::ConfigError(format!(
                "[output].formats lists '{tag}' more than once"
            )));
        }
    }

    Ok(())
}
