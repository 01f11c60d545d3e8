use thiserror::Error;

/// Errors from the configuration and logging surfaces.
///
/// The spinner control methods themselves never fail: output is best-effort
/// and misuse is a silent no-op. Only loading themes and installing the
/// diagnostic logger can report errors.
#[derive(Debug, Error)]
pub enum PinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Theme error: {0}")]
    Theme(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl PinError {
    /// Create a theme validation error with context
    pub fn theme_error(msg: impl Into<String>) -> Self {
        Self::Theme(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Whether the error came from reading or parsing a theme file
    pub fn is_theme_related(&self) -> bool {
        matches!(
            self,
            Self::Theme(_) | Self::TomlDeserialize(_) | Self::TomlSerialize(_)
        )
    }
}
