//! Text style

use serde::{Deserialize, Serialize};

use super::validation::validate_font_size;
use crate::error::{OverlayError, OverlayResult};
use crate::foundation::math::{is_unit_colour, Colour};

/// Font size used when none is given
pub const DEFAULT_FONT_SIZE: u32 = 24;

/// Font size and colour applied to a text actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: u32,
    /// RGB colour, each component in `[0.0, 1.0]`
    pub colour: [f64; 3],
}

impl TextStyle {
    /// Create a validated style
    pub fn new(font_size: u32, colour: Colour) -> OverlayResult<Self> {
        let style = Self {
            font_size,
            colour: [colour.x, colour.y, colour.z],
        };
        style.validate()?;
        Ok(style)
    }

    /// Colour as a vector
    pub fn colour(&self) -> Colour {
        Colour::from(self.colour)
    }

    /// Check font size and colour range
    pub fn validate(&self) -> OverlayResult<()> {
        validate_font_size(self.font_size)?;
        if !is_unit_colour(&self.colour()) {
            return Err(OverlayError::invalid(format!(
                "colour components must be within [0, 1], got {:?}",
                self.colour
            )));
        }
        Ok(())
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            colour: [1.0, 0.0, 0.0],
        }
    }
}
