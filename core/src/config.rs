//! Source parameters and options as supplied by the completion host.
//!
//! Field names follow the host's camelCase keys (`convertCase`, `dict`,
//! `dflag`, `fflag`, `minKeywordLength`) so JSON and TOML settings map onto
//! these structs without translation. Every field is optional on input and
//! falls back to its default.
//!
//! # Example
//!
//! ```rust
//! use look_complete_core::LookConfig;
//!
//! let config = LookConfig::from_toml_str(
//!     r#"
//!     [params]
//!     dict = "/usr/share/dict/web2"
//!     dflag = true
//!
//!     [options]
//!     minKeywordLength = 3
//!     "#,
//! )
//! .unwrap();
//! assert!(config.params.convert_case);
//! assert_eq!(config.options.min_keyword_length, 3);
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-source parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceParams {
    /// Recase candidates to the casing of the query.
    pub convert_case: bool,
    /// Alternate word list. `None` uses look's default dictionary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict: Option<PathBuf>,
    /// Force a case-folded lookup even with a custom dictionary (`-d`).
    pub dflag: bool,
    /// Ignore trailing non-alphanumeric, non-blank characters (`-f`).
    pub fflag: bool,
}

impl Default for SourceParams {
    fn default() -> Self {
        Self {
            convert_case: true,
            dict: None,
            dflag: false,
            fflag: false,
        }
    }
}

impl SourceParams {
    /// True when look will search case-insensitively.
    ///
    /// The default dictionary is always searched folded; a custom one only
    /// when `dflag` asks for it. An empty `dict` counts as no dictionary
    /// here, although it is still passed through to look.
    pub fn case_fold(&self) -> bool {
        let custom = self
            .dict
            .as_ref()
            .is_some_and(|d| !d.as_os_str().is_empty());
        !custom || self.dflag
    }
}

/// Host-level options shared by every source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceOptions {
    /// Minimum number of alphanumeric query characters before a case-folded
    /// lookup is attempted.
    pub min_keyword_length: usize,
}

/// Complete configuration file: `[params]` and `[options]` tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LookConfig {
    pub params: SourceParams,
    pub options: SourceOptions,
}

impl LookConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: LookConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
