//! Corner annotations

use log::debug;

use super::actor::{CornerTextActor, CornerTexts};
use super::validation::validate_corner_text;
use crate::config::OverlayConfig;
use crate::error::OverlayResult;

/// Number of annotation corners
pub const CORNER_COUNT: usize = 4;

/// Window corner, in the toolkit's slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Slot 0
    LowerLeft,
    /// Slot 1
    LowerRight,
    /// Slot 2
    UpperLeft,
    /// Slot 3
    UpperRight,
}

impl Corner {
    /// Every corner in slot order
    pub const ALL: [Corner; CORNER_COUNT] = [
        Corner::LowerLeft,
        Corner::LowerRight,
        Corner::UpperLeft,
        Corner::UpperRight,
    ];

    /// Slot index (0..=3)
    pub fn index(self) -> usize {
        match self {
            Corner::LowerLeft => 0,
            Corner::LowerRight => 1,
            Corner::UpperLeft => 2,
            Corner::UpperRight => 3,
        }
    }

    /// Corner for a slot index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Four-slot text overlay, one string per window corner
#[derive(Debug, Clone)]
pub struct CornerAnnotation<A: CornerTextActor = CornerTexts> {
    actor: A,
}

impl<A: CornerTextActor> CornerAnnotation<A> {
    /// Wrap an actor, labelling each corner with its slot number
    pub fn new(mut actor: A) -> Self {
        for corner in Corner::ALL {
            actor.set_text_at_corner(corner, &corner.index().to_string());
        }
        Self { actor }
    }

    /// Set all four corners in slot order
    ///
    /// Anything other than exactly four strings is rejected and no corner
    /// is changed.
    pub fn set_text<S: AsRef<str>>(&mut self, texts: &[S]) -> OverlayResult<()> {
        validate_corner_text(texts)?;
        for (corner, text) in Corner::ALL.into_iter().zip(texts) {
            self.actor.set_text_at_corner(corner, text.as_ref());
        }
        debug!("Corner annotation updated");
        Ok(())
    }

    /// Set a single corner
    pub fn set_corner(&mut self, corner: Corner, text: &str) {
        self.actor.set_text_at_corner(corner, text);
    }

    /// Apply configured corner text, if any
    pub fn set_text_from_config(&mut self, config: &OverlayConfig) -> OverlayResult<()> {
        match &config.corners {
            Some(corners) => self.set_text(corners.as_slice()),
            None => Ok(()),
        }
    }

    /// Underlying actor
    pub fn actor(&self) -> &A {
        &self.actor
    }
}

impl Default for CornerAnnotation<CornerTexts> {
    fn default() -> Self {
        Self::new(CornerTexts::default())
    }
}
