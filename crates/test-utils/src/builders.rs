#![allow(dead_code)]

use pathbender::config::{ConfigFile, RawConfigFile};
use pathbender::types::{FormatTag, OutputStyle, Shell};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.config.output.style = style;
        self
    }

    pub fn with_format(mut self, tag: FormatTag) -> Self {
        self.config
            .output
            .formats
            .get_or_insert_with(Vec::new)
            .push(tag);
        self
    }

    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.config.escape.shell = shell;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
