//! Configuration for mnemonic generation.
//!
//! A `Config` is an explicit value: load it from a JSON file, overlay
//! environment variables, then hand it to whatever builds encoders.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mnemonic::{Language, MnemonicEncoder, MnemonicResult, Strength, WordlistRegistry};

/// Environment variable overriding the language
pub const ENV_LANGUAGE: &str = "SEEDPHRASE_LANGUAGE";
/// Environment variable overriding the strength in bits
pub const ENV_STRENGTH: &str = "SEEDPHRASE_STRENGTH";
/// Environment variable overriding the wordlist directory
pub const ENV_WORDLIST_DIR: &str = "SEEDPHRASE_WORDLIST_DIR";
/// Environment variable overriding the log filter
pub const ENV_LOG: &str = "SEEDPHRASE_LOG";

/// Default log filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Mnemonic configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wordlist language
    pub language: Language,
    /// Entropy strength for generated mnemonics
    pub strength: Strength,
    /// Directory of `<language>.txt` wordlist files
    pub wordlist_dir: Option<PathBuf>,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            strength: Strength::default(),
            wordlist_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load a config from a JSON file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse a config from JSON text
    ///
    /// # Errors
    /// Returns error if the JSON is malformed or holds invalid values
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Get the default config directory
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".seedphrase")
    }

    /// Get the default config path
    #[must_use]
    pub fn default_path() -> PathBuf {
        Self::default_dir().join("config.json")
    }

    /// Load the default config file, or defaults if it does not exist
    ///
    /// # Errors
    /// Returns error if the file exists but is invalid
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Overlay values from the process environment
    ///
    /// # Errors
    /// Returns error if a variable holds an invalid value
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup`, keyed by the `SEEDPHRASE_*` names
    ///
    /// # Errors
    /// Returns error if a value is invalid
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(language) = lookup(ENV_LANGUAGE) {
            self.language = language.parse().map_err(|e| ConfigError::Invalid {
                key: ENV_LANGUAGE,
                message: format!("{e}"),
            })?;
        }

        if let Some(strength) = lookup(ENV_STRENGTH) {
            let bits: usize = strength.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ENV_STRENGTH,
                message: format!("not a number: {strength}"),
            })?;
            self.strength = Strength::from_bits(bits).map_err(|e| ConfigError::Invalid {
                key: ENV_STRENGTH,
                message: e.to_string(),
            })?;
        }

        if let Some(dir) = lookup(ENV_WORDLIST_DIR) {
            self.wordlist_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }

        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }

        Ok(self)
    }

    /// Registry honouring the configured wordlist directory
    #[must_use]
    pub fn registry(&self) -> WordlistRegistry {
        self.wordlist_dir
            .as_ref()
            .map_or_else(WordlistRegistry::new, WordlistRegistry::with_directory)
    }

    /// Encoder for the configured language
    ///
    /// # Errors
    /// Returns error if the wordlist cannot be resolved
    pub fn encoder(&self) -> MnemonicResult<MnemonicEncoder> {
        MnemonicEncoder::with_registry(&self.registry(), self.language)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid JSON or holds invalid values
    #[error("config parse error: {0}")]
    Parse(String),
    /// An override holds an invalid value
    #[error("invalid value for {key}: {message}")]
    Invalid {
        /// Variable name
        key: &'static str,
        /// What was wrong
        message: String,
    },
    /// Log filter rejected or subscriber already installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}
