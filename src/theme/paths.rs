use crate::constants::env::{CONFIG_DIR_NAME, THEME_FILE_NAME, THEME_PATH_VAR};
use std::path::Path;

/// Returns the platform-specific path for the theme file.
///
/// # Notes
/// - `PIN_THEME` takes precedence when set and non-empty
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_theme_path() -> String {
    if let Ok(path) = std::env::var(THEME_PATH_VAR)
        && !path.trim().is_empty()
    {
        return path;
    }
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(CONFIG_DIR_NAME)
        .join(THEME_FILE_NAME)
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the diagnostic log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(CONFIG_DIR_NAME)
        .join("logs")
        .to_string_lossy()
        .to_string()
}
