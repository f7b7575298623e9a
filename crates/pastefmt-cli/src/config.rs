//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/pastefmt/config.toml` by default. Every section is optional.

use std::path::{Path, PathBuf};

use pastefmt_core::LengthUnit;
use serde::{Deserialize, Serialize};

/// Default truncation limit when neither the CLI nor the config sets one.
pub const DEFAULT_LIMIT: usize = 80;

/// Configuration for the pastefmt CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Debug mode.
    pub debug: bool,

    /// Truncation settings.
    pub truncate: TruncateSettings,

    /// Relative time settings.
    pub relative: RelativeSettings,
}

/// Settings for the `truncate` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TruncateSettings {
    /// Limit used when `--limit` is not given.
    pub default_limit: usize,

    /// How text length is measured.
    pub unit: LengthUnit,
}

impl Default for TruncateSettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            unit: LengthUnit::Chars,
        }
    }
}

/// Settings for the `ago` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RelativeSettings {
    /// Always use strict timestamp parsing.
    pub strict: bool,
}

impl CliConfig {
    /// Loads configuration from the default path, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns warnings for settings that are valid but probably unintended.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.truncate.default_limit == 0 {
            warnings.push(
                "truncate.default_limit is 0; every non-empty text becomes \"...\"".to_string(),
            );
        }
        warnings
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pastefmt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert!(!config.debug);
        assert_eq!(config.truncate.default_limit, DEFAULT_LIMIT);
        assert_eq!(config.truncate.unit, LengthUnit::Chars);
        assert!(!config.relative.strict);
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn full_file() {
        let toml_content = r#"
debug = true

[truncate]
default_limit = 40
unit = "utf16"

[relative]
strict = true
"#;
        let config = CliConfig::parse(toml_content).unwrap();
        assert!(config.debug);
        assert_eq!(config.truncate.default_limit, 40);
        assert_eq!(config.truncate.unit, LengthUnit::Utf16);
        assert!(config.relative.strict);
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let config = CliConfig::parse("[truncate]\nunit = \"utf16\"\n").unwrap();
        assert_eq!(config.truncate.default_limit, DEFAULT_LIMIT);
        assert_eq!(config.truncate.unit, LengthUnit::Utf16);
    }

    #[test]
    fn unknown_unit_errors() {
        let err = CliConfig::parse("[truncate]\nunit = \"bytes\"\n").unwrap_err();
        assert!(err.contains("failed to parse config"));
    }

    #[test]
    fn zero_limit_warns() {
        let config = CliConfig::parse("[truncate]\ndefault_limit = 0\n").unwrap();
        assert_eq!(config.warnings().len(), 1);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[relative]\nstrict = true").unwrap();
        let config = CliConfig::load_from(file.path()).unwrap();
        assert!(config.relative.strict);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn dump_roundtrips() {
        let config = CliConfig::parse("[truncate]\ndefault_limit = 12\n").unwrap();
        let dumped = toml::to_string_pretty(&config).unwrap();
        assert_eq!(CliConfig::parse(&dumped).unwrap(), config);
    }
}
