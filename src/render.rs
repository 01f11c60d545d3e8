//! Line formatting for the animated and final states.
//!
//! Nothing here performs I/O; the spinner writes the returned strings to its
//! destination.

use crate::constants::ansi::{CARRIAGE_RETURN, CLEAR_LINE, RESET};
use crate::style::{Color, Position, Style};

/// Carriage return followed by clear-to-end-of-line
pub fn clear_sequence() -> String {
    format!("{CARRIAGE_RETURN}{CLEAR_LINE}")
}

/// Renders `[prefix] [separator] ` or an empty string when no prefix is set.
pub fn prefix_block(style: &Style) -> String {
    if style.prefix.is_empty() {
        return String::new();
    }
    format!(
        "{}{}{RESET} {}{}{RESET} ",
        style.prefix_color.ansi_code(),
        style.prefix,
        style.separator_code(),
        style.separator,
    )
}

/// Orders a colored glyph and colored message according to `position`.
fn glyph_and_message(
    position: Position,
    glyph: char,
    glyph_color: Color,
    message: &str,
    text_color: Color,
) -> String {
    let glyph = format!("{}{glyph}{RESET}", glyph_color.ansi_code());
    let text = format!("{}{message}{RESET}", text_color.ansi_code());
    match position {
        Position::Left => format!("{glyph} {text}"),
        Position::Right => format!("{text} {glyph}"),
    }
}

/// One animation frame, prefixed with the redraw sequence and without a
/// trailing newline.
pub fn frame_line(style: &Style, frame: char, message: &str) -> String {
    format!(
        "{}{}{}",
        clear_sequence(),
        prefix_block(style),
        glyph_and_message(
            style.position,
            frame,
            style.spinner_color,
            message,
            style.text_color,
        )
    )
}

/// How a run ended, selecting the trailing symbol and text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Failed,
}

/// The summary line written after the animation stops, newline-terminated.
pub fn final_line(style: &Style, outcome: Outcome, message: &str) -> String {
    let (symbol, symbol_color, text_color) = match outcome {
        Outcome::Done => (style.done_symbol, style.done_symbol_color, style.text_color),
        Outcome::Failed => (
            style.fail_symbol,
            style.fail_symbol_color,
            style.fail_text_color(),
        ),
    };
    format!(
        "{}{}\n",
        prefix_block(style),
        glyph_and_message(style.position, symbol, symbol_color, message, text_color)
    )
}
