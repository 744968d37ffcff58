//! Configuration file support for graphlens
//!
//! # Config File Locations
//!
//! The CLI searches for config files in the following order:
//! 1. Path specified via `--config` CLI argument
//! 2. `./graphlens.toml` (current directory)
//! 3. `./.graphlens.toml` (dotfile in current directory)
//! 4. `~/.config/graphlens/config.toml` (user config)
//!
//! # Example Config File
//!
//! ```toml
//! # graphlens.toml
//!
//! # JSON output style: "json" (pretty) or "compact"
//! format = "compact"
//!
//! # Colorize terminal output (default: true)
//! color = false
//!
//! # Log verbosity, same as repeating -v (default: 0)
//! verbose = 1
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::OutputFormat;

/// Root configuration that can contain sections for different tools
///
/// Supports two formats:
///
/// 1. **Sectioned format**:
/// ```toml
/// [graphlens]
/// format = "compact"
/// ```
///
/// 2. **Direct format**:
/// ```toml
/// format = "compact"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
struct RootConfig {
    pub graphlens: Option<CliConfig>,

    #[serde(flatten)]
    pub direct: Option<CliConfig>,
}

/// CLI configuration loaded from a TOML file
///
/// All fields are optional. CLI arguments override config file values.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// JSON output style
    pub format: Option<OutputFormat>,

    /// Colorize terminal output
    pub color: Option<bool>,

    /// Log verbosity level
    pub verbose: Option<u8>,
}

impl CliConfig {
    /// Load config from a TOML file, accepting both the sectioned and direct formats
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(path.as_ref().to_path_buf(), e))?;

        let root: RootConfig = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(path.as_ref().to_path_buf(), e))?;

        // Prefer sectioned format, fall back to direct format
        Ok(root.graphlens.or(root.direct).unwrap_or_default())
    }

    /// Find and load config file from standard locations
    ///
    /// Returns `None` if no config file found.
    pub fn find_and_load() -> Result<Option<Self>, ConfigError> {
        for candidate in ["./graphlens.toml", "./.graphlens.toml"] {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(Some(Self::load(&path)?));
            }
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".config/graphlens/config.toml");
            if user_config.exists() {
                return Ok(Some(Self::load(&user_config)?));
            }
        }

        Ok(None)
    }

    /// Merge with CLI arguments (CLI args take precedence)
    ///
    /// `no_color` forces color off; otherwise the file decides, defaulting to on.
    /// A verbosity of zero on the command line defers to the file.
    pub fn merge_with_cli(
        &self,
        format: Option<OutputFormat>,
        no_color: bool,
        verbose: u8,
    ) -> MergedConfig {
        MergedConfig {
            format: format.or(self.format).unwrap_or_default(),
            color: !no_color && self.color.unwrap_or(true),
            verbose: if verbose > 0 { verbose } else { self.verbose.unwrap_or(0) },
        }
    }
}

/// Merged configuration after combining config file + CLI args
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub format: OutputFormat,
    pub color: bool,
    pub verbose: u8,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}")]
    IoError(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file {0}")]
    ParseError(PathBuf, #[source] toml::de::Error),
}
