//! Text overlays
//!
//! - [`OverlayText`]: a label at a pixel position that keeps its relative
//!   place in the window when the window is resized
//! - [`CentredBanner`]: large text re-anchored at a fixed fraction of the
//!   window on every notification
//! - [`CornerAnnotation`]: four strings, one per window corner
//!
//! Each wrapper pushes its state into a toolkit actor ([`TextActor`] or
//! [`CornerTextActor`]) and validates input before touching any state.

mod actor;
mod banner;
mod corner;
mod overlay;
mod style;
mod tracker;
mod validation;

pub use actor::{CornerTextActor, CornerTexts, TextActor, TextProperties};
pub use banner::CentredBanner;
pub use corner::{Corner, CornerAnnotation, CORNER_COUNT};
pub use overlay::{OverlayText, SharedText};
pub use style::TextStyle;
pub use tracker::{AnchorPolicy, RelativePosition, RelativePositionTracker};
pub use validation::{validate_corner_text, validate_font_size, validate_position};
