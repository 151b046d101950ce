//! Configuration for tabstack containers.
//!
//! Parses options with serde. The snake_case keys are canonical; the
//! camelCase names used by the browser-side option object are accepted as
//! aliases so the same options can come from `tabstack.toml` or from a
//! JavaScript object.
//!
//! ```
//! use tabstack_config::StackConfig;
//!
//! let config = StackConfig::from_toml_str(r#"
//! hash_prefix = "tab:"
//! max_height_rate = 0.5
//! "#).unwrap();
//! assert_eq!(config.hash_prefix, "tab:");
//! assert_eq!(config.bar_style, ":ncTabBar");
//! ```

mod token;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use token::StyleToken;

/// Options applied to every container passed to one initialization.
///
/// Immutable once the stack is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Token applied to each bar's list element.
    #[serde(alias = "styleBar", alias = "barStyleSelector")]
    pub bar_style: String,
    /// Token toggled on the current list items and page.
    #[serde(alias = "styleCurrent", alias = "currentStyleSelector")]
    pub current_style: String,
    /// Token reserved for external styling; never toggled.
    #[serde(alias = "styleActive", alias = "activeStyleSelector")]
    pub active_style: String,
    /// Prefix of generated page ids.
    #[serde(alias = "hashPrefix")]
    pub hash_prefix: String,
    /// Fraction of the viewport height above which no minimum height is reserved.
    #[serde(alias = "maxHeightRate")]
    pub max_height_rate: f64,
    /// Detach headings instead of keeping them as the first child of their page.
    #[serde(alias = "doRemoveHeader", alias = "removeHeadingFromPage")]
    pub remove_heading_from_page: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            bar_style: ":ncTabBar".to_owned(),
            current_style: ":ncCurrent".to_owned(),
            active_style: ":ncActive".to_owned(),
            hash_prefix: "tst:".to_owned(),
            max_height_rate: 0.8,
            remove_heading_from_page: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a style token to name something.
fn require_token(value: &str, field: &str) -> Result<(), ConfigError> {
    if StyleToken::new(value).is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl StackConfig {
    /// Parse and validate options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, can't be read, or is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate option values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_token(&self.bar_style, "bar_style")?;
        require_token(&self.current_style, "current_style")?;
        require_token(&self.active_style, "active_style")?;
        self.validate_hash_prefix()?;
        self.validate_max_height_rate()?;
        Ok(())
    }

    /// The prefix ends up inside a URL fragment.
    fn validate_hash_prefix(&self) -> Result<(), ConfigError> {
        if self.hash_prefix.contains('#') {
            return Err(ConfigError::Validation(
                "hash_prefix cannot contain '#'".to_owned(),
            ));
        }
        if self.hash_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "hash_prefix cannot contain whitespace".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_max_height_rate(&self) -> Result<(), ConfigError> {
        let rate = self.max_height_rate;
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::Validation(format!(
                "max_height_rate must be between 0 and 1, got {rate}"
            )));
        }
        Ok(())
    }

    /// Token applied to bar list elements.
    #[must_use]
    pub fn bar_token(&self) -> StyleToken {
        StyleToken::new(&self.bar_style)
    }

    /// Token toggled on the current list items and page.
    #[must_use]
    pub fn current_token(&self) -> StyleToken {
        StyleToken::new(&self.current_style)
    }
}
