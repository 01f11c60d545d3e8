use crate::error::PinError;

/// Checks that a symbol field holds exactly one character.
fn validate_symbol(field: &str, value: &Option<String>) -> Result<(), PinError> {
    if let Some(symbol) = value
        && symbol.chars().count() != 1
    {
        return Err(PinError::theme_error(format!(
            "{field} must be a single character, got '{symbol}'"
        )));
    }
    Ok(())
}

/// Validates the theme settings
///
/// # Validation Rules
/// - Frames, if present, cannot be empty
/// - Done and fail symbols must be exactly one character
/// - Separator alpha must lie within 0.0..=1.0
pub fn validate_theme(
    frames: &Option<String>,
    done_symbol: &Option<String>,
    fail_symbol: &Option<String>,
    separator_alpha: Option<f32>,
) -> Result<(), PinError> {
    if let Some(frames) = frames
        && frames.is_empty()
    {
        return Err(PinError::theme_error("frames cannot be empty"));
    }

    validate_symbol("done_symbol", done_symbol)?;
    validate_symbol("fail_symbol", fail_symbol)?;

    if let Some(alpha) = separator_alpha
        && !(0.0..=1.0).contains(&alpha)
    {
        return Err(PinError::theme_error(format!(
            "separator_alpha must be between 0.0 and 1.0, got {alpha}"
        )));
    }

    Ok(())
}
