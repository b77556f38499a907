//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;
use crate::services::{ColorMode, TimeBase};

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must load; without one, the default locations are
    /// tried and the defaults kept if none is found.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI time base
    pub fn with_time_base(mut self, time_base: Option<TimeBase>) -> Self {
        if let Some(t) = time_base {
            self.config.general.time_base = t;
        }
        self
    }

    /// Override with CLI color mode
    pub fn with_color_mode(mut self, color_mode: Option<ColorMode>) -> Self {
        if let Some(m) = color_mode {
            self.config.general.color_mode = m;
        }
        self
    }

    /// Override with CLI label visibility
    pub fn with_labels(mut self, show_labels: Option<bool>) -> Self {
        if let Some(s) = show_labels {
            self.config.general.show_labels = s;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert!(!config.general.verbose);
        assert_eq!(config.general.time_base, TimeBase::Wall);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_verbose(Some(true))
            .with_time_base(Some(TimeBase::Elapsed))
            .with_color_mode(Some(ColorMode::Progress))
            .with_labels(Some(false))
            .build();

        assert!(config.general.verbose);
        assert_eq!(config.general.time_base, TimeBase::Elapsed);
        assert_eq!(config.general.color_mode, ColorMode::Progress);
        assert!(!config.general.show_labels);
    }

    #[test]
    fn test_builder_none_keeps_values() {
        let config = ConfigBuilder::new()
            .with_time_base(None)
            .with_labels(None)
            .build();
        assert!(config.general.show_labels);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/ringclock.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
