//! Positioned overlay text

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace, warn};

use super::actor::{TextActor, TextProperties};
use super::style::TextStyle;
use super::tracker::{AnchorPolicy, RelativePosition, RelativePositionTracker};
use super::validation::{validate_font_size, validate_position};
use crate::error::{OverlayError, OverlayResult};
use crate::foundation::math::{is_unit_colour, Colour, Vec2};
use crate::window::RenderWindow;

/// Overlay text shared between its owner and the window's notifications
pub type SharedText<A = TextProperties> = Rc<RefCell<OverlayText<A>>>;

/// Text at a pixel position (bottom-left anchored) inside a render window
///
/// Once attached to a window the text follows resizes according to its
/// [`AnchorPolicy`].
#[derive(Debug)]
pub struct OverlayText<A: TextActor = TextProperties> {
    actor: A,
    text: String,
    position: Vec2,
    style: TextStyle,
    tracker: RelativePositionTracker,
}

impl<A: TextActor> OverlayText<A> {
    /// Create text at `(x, y)` that keeps its relative place on resize
    pub fn new(
        text: &str,
        x: impl Into<f64>,
        y: impl Into<f64>,
        style: TextStyle,
        actor: A,
    ) -> OverlayResult<Self> {
        Self::with_policy(text, x, y, style, AnchorPolicy::Cached, actor)
    }

    /// Create text with an explicit anchor policy
    pub fn with_policy(
        text: &str,
        x: impl Into<f64>,
        y: impl Into<f64>,
        style: TextStyle,
        policy: AnchorPolicy,
        actor: A,
    ) -> OverlayResult<Self> {
        let (x, y) = (x.into(), y.into());
        validate_position(x, y)?;
        style.validate()?;

        let mut overlay = Self {
            actor,
            text: String::new(),
            position: Vec2::zeros(),
            style,
            tracker: RelativePositionTracker::new(policy)?,
        };
        overlay.set_text(text);
        overlay.apply_position(Vec2::new(x, y));
        overlay.actor.set_font_size(style.font_size);
        overlay.actor.set_colour(style.colour());
        Ok(overlay)
    }

    /// Wrap in the shared handle used for window attachment
    pub fn into_shared(self) -> SharedText<A> {
        Rc::new(RefCell::new(self))
    }

    /// Replace the displayed string
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.actor.set_input(text);
    }

    /// Move the text; pixels from the bottom-left corner
    ///
    /// Integers and reals are accepted. Non-finite coordinates are rejected
    /// and the previous position is kept. The stored window fraction is not
    /// updated; it is only derived when attaching.
    pub fn set_position(&mut self, x: impl Into<f64>, y: impl Into<f64>) -> OverlayResult<()> {
        let (x, y) = (x.into(), y.into());
        validate_position(x, y)?;
        self.apply_position(Vec2::new(x, y));
        Ok(())
    }

    fn apply_position(&mut self, position: Vec2) {
        self.position = position;
        self.actor.set_position(position.x, position.y);
    }

    /// Set the font size in points
    pub fn set_font_size(&mut self, size: u32) -> OverlayResult<()> {
        validate_font_size(size)?;
        self.style.font_size = size;
        self.actor.set_font_size(size);
        Ok(())
    }

    /// Set the colour, each component in `[0.0, 1.0]`
    pub fn set_colour(&mut self, r: f64, g: f64, b: f64) -> OverlayResult<()> {
        let colour = Colour::new(r, g, b);
        if !is_unit_colour(&colour) {
            return Err(OverlayError::invalid(format!(
                "colour ({r}, {g}, {b}) has a component outside [0, 1]"
            )));
        }
        self.style.colour = [r, g, b];
        self.actor.set_colour(colour);
        Ok(())
    }

    /// Displayed string
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current absolute position in pixels
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Fraction captured at attach time (cached policy only)
    pub fn relative_position(&self) -> Option<RelativePosition> {
        self.tracker.relative_position()
    }

    /// Current style
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Position tracker
    pub fn tracker(&self) -> &RelativePositionTracker {
        &self.tracker
    }

    /// Underlying actor
    pub fn actor(&self) -> &A {
        &self.actor
    }

    /// Re-derive the position from the window's live size
    ///
    /// Called for every window notification, including ones where nothing
    /// changed; those recompute the same position.
    pub fn on_resize_notification(&mut self) {
        let Some(target) = self.tracker.current_target() else {
            debug!("Notification for '{}' ignored: no live window", self.text);
            return;
        };
        if target == self.position {
            trace!("Notification for '{}' left position unchanged", self.text);
        }
        if let Err(err) = self.set_position(target.x, target.y) {
            warn!("Could not reposition '{}': {}", self.text, err);
        }
    }

    /// Forget the window and unregister from its notifications
    pub fn detach(&mut self) {
        self.tracker.detach();
    }
}

impl<A: TextActor + 'static> OverlayText<A> {
    /// Bind shared text to a window and follow its notifications
    ///
    /// With the cached policy the fraction is derived from the current
    /// position; a window with a zero dimension is rejected and nothing is
    /// registered. With the recomputed policy the text moves immediately.
    /// Re-attaching replaces the previous binding.
    pub fn attach_to_window(
        text: &SharedText<A>,
        window: &Rc<dyn RenderWindow>,
    ) -> OverlayResult<()> {
        {
            let mut overlay = text.borrow_mut();
            let current = overlay.position;
            if let Some(initial) = overlay.tracker.bind(window, current)? {
                overlay.apply_position(initial);
            }
        }

        let handle = Rc::downgrade(text);
        let id = window.add_resize_observer(Box::new(move || {
            let Some(text) = handle.upgrade() else {
                return;
            };
            match text.try_borrow_mut() {
                Ok(mut overlay) => overlay.on_resize_notification(),
                Err(_) => warn!("Overlay text busy during window notification; skipped"),
            };
        }));
        text.borrow_mut().tracker.set_observer(id);
        Ok(())
    }

    /// Alias of [`Self::attach_to_window`]
    pub fn set_parent_window(
        text: &SharedText<A>,
        window: &Rc<dyn RenderWindow>,
    ) -> OverlayResult<()> {
        Self::attach_to_window(text, window)
    }
}
