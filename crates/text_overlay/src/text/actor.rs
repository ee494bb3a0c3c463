//! Toolkit text actors
//!
//! The traits are what overlays push their state into. [`TextProperties`]
//! and [`CornerTexts`] are plain in-memory actors: a renderer reads them
//! back each frame, and tests inspect them directly.

use super::corner::{Corner, CORNER_COUNT};
use crate::foundation::math::{Colour, Vec2};

/// Text rendering primitive
pub trait TextActor {
    /// Replace the displayed string
    fn set_input(&mut self, text: &str);
    /// Move the text; pixels from the bottom-left of the window
    fn set_position(&mut self, x: f64, y: f64);
    /// Set the font size in points
    fn set_font_size(&mut self, size: u32);
    /// Set the RGB colour
    fn set_colour(&mut self, colour: Colour);
}

/// Corner annotation primitive
pub trait CornerTextActor {
    /// Replace the string shown in one corner
    fn set_text_at_corner(&mut self, corner: Corner, text: &str);
}

/// Retained text actor state
#[derive(Debug, Clone, PartialEq)]
pub struct TextProperties {
    /// Displayed string
    pub input: String,
    /// Bottom-left position in pixels
    pub position: Vec2,
    /// Font size in points
    pub font_size: u32,
    /// RGB colour
    pub colour: Colour,
    /// Number of position updates received
    pub position_updates: usize,
}

impl Default for TextProperties {
    fn default() -> Self {
        Self {
            input: String::new(),
            position: Vec2::zeros(),
            font_size: 12,
            colour: Colour::new(1.0, 1.0, 1.0),
            position_updates: 0,
        }
    }
}

impl TextActor for TextProperties {
    fn set_input(&mut self, text: &str) {
        text.clone_into(&mut self.input);
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x, y);
        self.position_updates += 1;
    }

    fn set_font_size(&mut self, size: u32) {
        self.font_size = size;
    }

    fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }
}

/// Retained corner annotation state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CornerTexts {
    texts: [String; CORNER_COUNT],
}

impl CornerTexts {
    /// Text currently shown in a corner
    pub fn text(&self, corner: Corner) -> &str {
        &self.texts[corner.index()]
    }

    /// All four strings in corner order
    pub fn texts(&self) -> &[String; CORNER_COUNT] {
        &self.texts
    }
}

impl CornerTextActor for CornerTexts {
    fn set_text_at_corner(&mut self, corner: Corner, text: &str) {
        text.clone_into(&mut self.texts[corner.index()]);
    }
}
