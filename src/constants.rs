//! Crate-wide constants
//!
//! Timing, escape sequences and default glyphs live here so the renderer and
//! the spinner state machine agree on a single set of values.

/// Period of one animation tick in milliseconds
pub const TICK_INTERVAL_MS: u64 = 100;

/// Braille rotation used when no custom frames are supplied
pub const DEFAULT_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Default glyphs and separator
pub mod symbols {
    /// Shown in front of the final line after a successful stop
    pub const DONE: char = '✓';

    /// Shown in front of the final line after a failure
    pub const FAIL: char = '✖';

    /// Separator between the prefix and the spinner
    pub const SEPARATOR: &str = "›";

    /// Default separator opacity; anything below 1.0 renders dim
    pub const SEPARATOR_ALPHA: f32 = 0.5;
}

/// ANSI escape sequences
pub mod ansi {
    /// Return the cursor to column 0
    pub const CARRIAGE_RETURN: &str = "\r";

    /// Clear from the cursor to the end of the line
    pub const CLEAR_LINE: &str = "\x1b[K";

    /// Reset all SGR attributes
    pub const RESET: &str = "\x1b[0m";

    /// Faint/dim SGR attribute
    pub const DIM: &str = "\x1b[2m";
}

/// Environment and file names used by theme loading and logging
pub mod env {
    /// Overrides the theme file location
    pub const THEME_PATH_VAR: &str = "PIN_THEME";

    /// Directory under the platform config dir
    pub const CONFIG_DIR_NAME: &str = "pin_spinner";

    /// Theme file name inside [`CONFIG_DIR_NAME`]
    pub const THEME_FILE_NAME: &str = "theme.toml";

    /// Default diagnostic log file name
    pub const LOG_FILE_NAME: &str = "pin_spinner.log";

    /// Directive applied on top of `RUST_LOG`
    pub const DEFAULT_LOG_DIRECTIVE: &str = "pin_spinner=info";
}
