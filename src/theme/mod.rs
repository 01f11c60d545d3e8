use crate::error::PinError;
use crate::spinner::SpinnerOption;
use crate::style::{Color, Position};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::get_theme_path;
use validation::validate_theme;

/// Spinner appearance stored as TOML.
///
/// Every field is optional; a missing field keeps the spinner default.
///
/// ```toml
/// frames = "|/-\\"
/// spinner_color = "cyan"
/// prefix = "build"
/// position = "right"
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Theme {
    /// Animation frames, one glyph per character
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spinner_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_symbol_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_symbol_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator_alpha: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Theme {
    /// Parses and validates a theme from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, PinError> {
        let theme: Theme = toml::from_str(content)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Loads the theme from the default location.
    ///
    /// The location is `$PIN_THEME` when set, otherwise `theme.toml` inside
    /// the platform config directory. A missing file yields the default
    /// theme; an unreadable or invalid one is an error.
    pub async fn load() -> Result<Self, PinError> {
        let theme_path = get_theme_path();
        if !Path::new(&theme_path).exists() {
            tracing::debug!("No theme file at {theme_path}, using defaults");
            return Ok(Theme::default());
        }
        Self::load_from_path(&theme_path).await
    }

    /// Loads and validates a theme from a specific file.
    pub async fn load_from_path(path: &str) -> Result<Self, PinError> {
        let content = fs::read_to_string(path).await?;
        let theme = Self::from_toml_str(&content)?;
        tracing::info!("Loaded spinner theme from {path}");
        Ok(theme)
    }

    /// Writes the theme as TOML, creating the parent directory if needed.
    ///
    /// # Errors
    /// * `PinError::Theme` - If the path has no parent directory
    /// * `PinError::Io` - If creating the directory or writing the file fails
    /// * `PinError::TomlSerialize` - If the theme cannot be serialized
    pub async fn save_to_path(&self, path: &str) -> Result<(), PinError> {
        let theme_dir = Path::new(path)
            .parent()
            .ok_or_else(|| PinError::theme_error(format!("Path '{path}' has no parent directory")))?;

        if !theme_dir.as_os_str().is_empty() && !theme_dir.exists() {
            fs::create_dir_all(theme_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), PinError> {
        validate_theme(
            &self.frames,
            &self.done_symbol,
            &self.fail_symbol,
            self.separator_alpha,
        )
    }

    /// Converts the set fields into spinner options.
    ///
    /// Symbols longer than one character contribute their first character;
    /// call [`validate`](Self::validate) first to reject them instead.
    pub fn into_options(self) -> Vec<SpinnerOption> {
        let mut options = Vec::new();
        if let Some(frames) = self.frames {
            options.push(SpinnerOption::Frames(frames.chars().collect()));
        }
        if let Some(color) = self.spinner_color {
            options.push(SpinnerOption::SpinnerColor(color));
        }
        if let Some(color) = self.text_color {
            options.push(SpinnerOption::TextColor(color));
        }
        if let Some(symbol) = self.done_symbol.and_then(|s| s.chars().next()) {
            options.push(SpinnerOption::DoneSymbol(symbol));
        }
        if let Some(color) = self.done_symbol_color {
            options.push(SpinnerOption::DoneSymbolColor(color));
        }
        if let Some(symbol) = self.fail_symbol.and_then(|s| s.chars().next()) {
            options.push(SpinnerOption::FailSymbol(symbol));
        }
        if let Some(color) = self.fail_symbol_color {
            options.push(SpinnerOption::FailSymbolColor(color));
        }
        if let Some(color) = self.fail_color {
            options.push(SpinnerOption::FailColor(color));
        }
        if let Some(prefix) = self.prefix {
            options.push(SpinnerOption::Prefix(prefix));
        }
        if let Some(color) = self.prefix_color {
            options.push(SpinnerOption::PrefixColor(color));
        }
        if let Some(separator) = self.separator {
            options.push(SpinnerOption::Separator(separator));
        }
        if let Some(color) = self.separator_color {
            options.push(SpinnerOption::SeparatorColor(color));
        }
        if let Some(alpha) = self.separator_alpha {
            options.push(SpinnerOption::SeparatorAlpha(alpha));
        }
        if let Some(position) = self.position {
            options.push(SpinnerOption::Position(position));
        }
        options
    }
}
