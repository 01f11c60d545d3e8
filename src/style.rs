//! Colors, glyph placement and the full render configuration of a spinner.

use crate::constants::{DEFAULT_FRAMES, ansi, symbols};
use serde::{Deserialize, Serialize};

/// Flat ANSI foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Terminal default; emits no escape code
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Bright black
    Gray,
}

impl Color {
    /// Returns the SGR sequence selecting this color, or an empty string for
    /// [`Color::Default`].
    pub fn ansi_code(self) -> &'static str {
        match self {
            Color::Default => "",
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
            Color::Gray => "\x1b[90m",
        }
    }
}

/// Where the glyph sits relative to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Glyph before the message
    #[default]
    Left,
    /// Glyph after the message
    Right,
}

/// Everything the renderer needs besides the message itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub frames: Vec<char>,
    pub spinner_color: Color,
    pub text_color: Color,
    pub done_symbol: char,
    pub done_symbol_color: Color,
    pub fail_symbol: char,
    pub fail_symbol_color: Color,
    /// Text color of the final line after `fail`; falls back to `text_color`
    pub fail_color: Option<Color>,
    pub prefix: String,
    pub prefix_color: Color,
    pub separator: String,
    pub separator_color: Color,
    pub separator_alpha: f32,
    pub position: Position,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            frames: DEFAULT_FRAMES.to_vec(),
            spinner_color: Color::Default,
            text_color: Color::Default,
            done_symbol: symbols::DONE,
            done_symbol_color: Color::Green,
            fail_symbol: symbols::FAIL,
            fail_symbol_color: Color::Red,
            fail_color: None,
            prefix: String::new(),
            prefix_color: Color::Default,
            separator: symbols::SEPARATOR.to_string(),
            separator_color: Color::White,
            separator_alpha: symbols::SEPARATOR_ALPHA,
            position: Position::Left,
        }
    }
}

impl Style {
    /// Separator color code with the alpha applied. Translucent separators are
    /// approximated with the dim attribute.
    pub fn separator_code(&self) -> String {
        if self.separator_color == Color::Default {
            return String::new();
        }
        if self.separator_alpha < 1.0 {
            format!("{}{}", ansi::DIM, self.separator_color.ansi_code())
        } else {
            self.separator_color.ansi_code().to_string()
        }
    }

    /// Text color used on the final line of a failed run
    pub fn fail_text_color(&self) -> Color {
        self.fail_color.unwrap_or(self.text_color)
    }
}

/// Clamps an opacity value into `[0, 1]`.
pub(crate) fn clamp_alpha(alpha: f32) -> f32 {
    if alpha.is_nan() {
        return symbols::SEPARATOR_ALPHA;
    }
    alpha.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Default.ansi_code(), "");
        assert_eq!(Color::Red.ansi_code(), "\x1b[31m");
        assert_eq!(Color::White.ansi_code(), "\x1b[37m");
        assert_eq!(Color::Gray.ansi_code(), "\x1b[90m");
    }

    #[test]
    fn test_style_defaults() {
        let style = Style::default();
        assert_eq!(style.frames.len(), 10);
        assert_eq!(style.done_symbol, '✓');
        assert_eq!(style.done_symbol_color, Color::Green);
        assert_eq!(style.fail_symbol, '✖');
        assert_eq!(style.fail_symbol_color, Color::Red);
        assert_eq!(style.separator, "›");
        assert_eq!(style.separator_color, Color::White);
        assert_eq!(style.position, Position::Left);
        assert!(style.prefix.is_empty());
    }

    #[test]
    fn test_separator_code_dims_below_full_alpha() {
        let mut style = Style::default();
        assert_eq!(style.separator_code(), "\x1b[2m\x1b[37m");

        style.separator_alpha = 1.0;
        assert_eq!(style.separator_code(), "\x1b[37m");

        style.separator_color = Color::Default;
        assert_eq!(style.separator_code(), "");
    }

    #[test]
    fn test_fail_text_color_fallback() {
        let mut style = Style {
            text_color: Color::Cyan,
            ..Style::default()
        };
        assert_eq!(style.fail_text_color(), Color::Cyan);

        style.fail_color = Some(Color::Red);
        assert_eq!(style.fail_text_color(), Color::Red);
    }

    #[test]
    fn test_clamp_alpha() {
        assert_eq!(clamp_alpha(-0.5), 0.0);
        assert_eq!(clamp_alpha(1.5), 1.0);
        assert_eq!(clamp_alpha(0.25), 0.25);
        assert_eq!(clamp_alpha(f32::NAN), 0.5);
    }

    #[test]
    fn test_color_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: Color,
            position: Position,
        }
        let parsed: Wrapper = toml::from_str("color = \"magenta\"\nposition = \"right\"").unwrap();
        assert_eq!(parsed.color, Color::Magenta);
        assert_eq!(parsed.position, Position::Right);
    }
}
