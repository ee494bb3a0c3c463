//! Window-relative positioning
//!
//! A tracker remembers which window a text element belongs to and turns the
//! window's live size into a pixel position. Two anchor policies exist:
//!
//! - [`AnchorPolicy::Cached`] stores the fraction `position / size` once at
//!   attach time and scales it by the live size on every notification.
//!   Recomputation always starts from the stored fraction, so repeated
//!   resizes never accumulate drift.
//! - [`AnchorPolicy::Recomputed`] ignores any previous state and places the
//!   text at `size / divisor` (integer division) on every notification.

use std::rc::{Rc, Weak};

use log::debug;

use crate::error::{OverlayError, OverlayResult};
use crate::events::ObserverId;
use crate::foundation::math::{size_to_vec, Vec2};
use crate::window::RenderWindow;

/// How a tracked position follows the window size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorPolicy {
    /// Fraction captured at attach time, scaled on every notification
    Cached,
    /// Position recomputed as `size / divisor` on every notification
    Recomputed {
        /// Integer divisor applied to width and height
        divisor: u32,
    },
}

impl AnchorPolicy {
    /// Banner placement at one third of the window
    pub const CENTRAL_THIRD: Self = Self::Recomputed { divisor: 3 };

    fn validate(self) -> OverlayResult<Self> {
        match self {
            Self::Recomputed { divisor: 0 } => {
                Err(OverlayError::invalid("anchor divisor must be non-zero"))
            }
            policy => Ok(policy),
        }
    }
}

/// Position expressed as fractions of the window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativePosition {
    /// `x / width`
    pub x_relative: f64,
    /// `y / height`
    pub y_relative: f64,
}

impl RelativePosition {
    /// Derive the fraction of `size` that `position` represents
    ///
    /// A zero dimension has no meaningful fraction and is rejected.
    pub fn from_absolute(position: Vec2, size: (u32, u32)) -> OverlayResult<Self> {
        let (width, height) = size;
        if width == 0 || height == 0 {
            return Err(OverlayError::DegenerateWindow { width, height });
        }
        let relative = position.component_div(&size_to_vec(size));
        Ok(Self {
            x_relative: relative.x,
            y_relative: relative.y,
        })
    }

    /// Scale the fraction by a window size
    pub fn to_absolute(&self, size: (u32, u32)) -> Vec2 {
        Vec2::new(self.x_relative, self.y_relative).component_mul(&size_to_vec(size))
    }
}

/// Tracks a text element's anchor within a window
///
/// The window is held weakly: the tracker never keeps a window alive and
/// never resizes or closes it. Dropping the tracker unregisters its
/// observer if the window still exists.
pub struct RelativePositionTracker {
    policy: AnchorPolicy,
    relative: Option<RelativePosition>,
    window: Option<Weak<dyn RenderWindow>>,
    observer: Option<ObserverId>,
}

impl RelativePositionTracker {
    /// Create a detached tracker
    pub fn new(policy: AnchorPolicy) -> OverlayResult<Self> {
        Ok(Self {
            policy: policy.validate()?,
            relative: None,
            window: None,
            observer: None,
        })
    }

    /// Detached tracker with the cached-fraction policy
    pub fn cached() -> Self {
        Self {
            policy: AnchorPolicy::Cached,
            relative: None,
            window: None,
            observer: None,
        }
    }

    /// Anchor policy chosen at construction
    pub fn policy(&self) -> AnchorPolicy {
        self.policy
    }

    /// Stored fraction; only set for the cached policy once attached
    pub fn relative_position(&self) -> Option<RelativePosition> {
        self.relative
    }

    /// Window the tracker is bound to, if it is still alive
    pub fn window(&self) -> Option<Rc<dyn RenderWindow>> {
        self.window.as_ref().and_then(Weak::upgrade)
    }

    /// Whether the tracker is bound to a live window
    pub fn is_attached(&self) -> bool {
        self.window().is_some()
    }

    /// Bind to a window given the element's current absolute position
    ///
    /// Unregisters any previous observer. For the cached policy the
    /// fraction is computed here; a zero-sized window is rejected and the
    /// tracker is left untouched. Returns the position to apply right away,
    /// which is only `Some` for the recomputed policy.
    pub fn bind(
        &mut self,
        window: &Rc<dyn RenderWindow>,
        current: Vec2,
    ) -> OverlayResult<Option<Vec2>> {
        let size = window.window_size();
        let relative = match self.policy {
            AnchorPolicy::Cached => Some(RelativePosition::from_absolute(current, size)?),
            AnchorPolicy::Recomputed { .. } => None,
        };

        self.detach();
        self.relative = relative;
        self.window = Some(Rc::downgrade(window));
        debug!("Tracker bound to {}x{} window with {:?}", size.0, size.1, self.policy);

        match self.policy {
            // Derived from the current position, so it already matches
            AnchorPolicy::Cached => Ok(None),
            AnchorPolicy::Recomputed { .. } => Ok(self.target_position(size)),
        }
    }

    /// Remember the observer registered for this tracker
    pub fn set_observer(&mut self, id: ObserverId) {
        self.observer = Some(id);
    }

    /// Position the policy assigns for a window size, if bound
    pub fn target_position(&self, size: (u32, u32)) -> Option<Vec2> {
        match self.policy {
            AnchorPolicy::Cached => self.relative.map(|relative| relative.to_absolute(size)),
            AnchorPolicy::Recomputed { divisor } => {
                Some(size_to_vec((size.0 / divisor, size.1 / divisor)))
            }
        }
    }

    /// Position for the bound window's current size
    ///
    /// `None` when unbound or when the window has been dropped.
    pub fn current_target(&self) -> Option<Vec2> {
        let window = self.window()?;
        self.target_position(window.window_size())
    }

    /// Unregister from the window and forget it
    pub fn detach(&mut self) {
        if let (Some(id), Some(window)) = (self.observer.take(), self.window()) {
            window.remove_resize_observer(id);
        }
        self.window = None;
        self.relative = None;
    }
}

impl Drop for RelativePositionTracker {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for RelativePositionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelativePositionTracker")
            .field("policy", &self.policy)
            .field("relative", &self.relative)
            .field("attached", &self.is_attached())
            .field("observer", &self.observer)
            .finish()
    }
}
