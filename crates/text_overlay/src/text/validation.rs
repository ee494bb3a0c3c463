//! Input validation
//!
//! Every check runs before the caller mutates anything, so a rejected call
//! leaves the overlay exactly as it was.

use super::corner::CORNER_COUNT;
use crate::error::{OverlayError, OverlayResult};

/// Check that a position is made of finite numbers
pub fn validate_position(x: f64, y: f64) -> OverlayResult<()> {
    if !x.is_finite() {
        return Err(OverlayError::invalid(format!("x position {x} is not a finite number")));
    }
    if !y.is_finite() {
        return Err(OverlayError::invalid(format!("y position {y} is not a finite number")));
    }
    Ok(())
}

/// Check that corner text has exactly one entry per corner
pub fn validate_corner_text<S: AsRef<str>>(items: &[S]) -> OverlayResult<()> {
    if items.len() != CORNER_COUNT {
        return Err(OverlayError::invalid(format!(
            "expected {} corner strings, got {}",
            CORNER_COUNT,
            items.len()
        )));
    }
    Ok(())
}

/// Check that a font size is positive
pub fn validate_font_size(size: u32) -> OverlayResult<()> {
    if size == 0 {
        return Err(OverlayError::invalid("font size must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_validation() {
        assert!(validate_position(0.0, 0.0).is_ok());
        assert!(validate_position(-5.0, 1e6).is_ok());
        assert!(matches!(validate_position(f64::NAN, 0.0), Err(OverlayError::InvalidInput(_))));
        assert!(validate_position(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_corner_text_length() {
        assert!(validate_corner_text(&["a", "b", "c", "d"]).is_ok());
        assert!(validate_corner_text(&["a", "b", "c"]).is_err());
        assert!(validate_corner_text::<&str>(&[]).is_err());
        assert!(validate_corner_text(&["a", "b", "c", "d", "e"]).is_err());
    }
}
