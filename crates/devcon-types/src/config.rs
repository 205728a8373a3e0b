//! Console configuration (`devcon.toml`).
//!
//! ```toml
//! # Show the suggestion list under the input field.
//! show_complete_list = true
//! # Hide the console after a line is submitted.
//! hide_on_submit = true
//! start_visible = false
//! # Drop the oldest history entry past this many (omit for unlimited).
//! history_limit = 100
//! prompt = "> "
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{DevconError, Result};

/// Runtime options for a console session. Every field has a default, so an
/// empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Whether the autocomplete list is computed and offered.
    #[serde(default = "yes")]
    pub show_complete_list: bool,
    /// Whether a submitted line hides the console.
    #[serde(default = "yes")]
    pub hide_on_submit: bool,
    /// Whether a new session starts visible.
    #[serde(default)]
    pub start_visible: bool,
    /// Maximum number of history entries to retain.
    #[serde(default)]
    pub history_limit: Option<usize>,
    /// Prompt shown by hosts in front of the input field.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn yes() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            show_complete_list: true,
            hide_on_submit: true,
            start_visible: false,
            history_limit: None,
            prompt: default_prompt(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a configuration from TOML source.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        if config.history_limit == Some(0) {
            return Err(DevconError::Config(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        log::debug!("Loaded console config from {}", path.display());
        Ok(config)
    }
}
