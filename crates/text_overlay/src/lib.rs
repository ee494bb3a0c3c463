//! # Text Overlay
//!
//! Window-anchored text overlays for a render window, plus a latch for
//! toolkit error events.
//!
//! ## Features
//!
//! - **Positioned text**: labels keep their proportional place when the
//!   window is resized
//! - **Centred banner**: large text re-anchored at the central third of the
//!   window on every notification
//! - **Corner annotations**: one string per window corner
//! - **Error latch**: toolkit error callbacks become a pollable flag
//!
//! The toolkit itself stays outside this crate: windows and text actors are
//! injected through the [`window::RenderWindow`] and [`text::TextActor`]
//! traits.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use text_overlay::prelude::*;
//!
//! fn main() -> Result<(), OverlayError> {
//!     let window = Rc::new(HeadlessWindow::new(800, 600));
//!     let handle: Rc<dyn RenderWindow> = window.clone();
//!
//!     let style = TextStyle::default();
//!     let label =
//!         OverlayText::new("tip", 200, 150, style, TextProperties::default())?.into_shared();
//!     OverlayText::attach_to_window(&label, &handle)?;
//!
//!     window.set_size(1600, 1200);
//!     assert_eq!(label.borrow().position().x, 400.0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod diagnostics;
pub mod events;
pub mod foundation;
pub mod text;
pub mod window;

mod error;

pub use error::{OverlayError, OverlayResult};

/// Common imports for overlay users
pub mod prelude {
    pub use crate::{
        OverlayError, OverlayResult,
        config::{Config, ConfigError, ConfigFormat, OverlayConfig},
        diagnostics::{ErrorLatch, ErrorObserver, Severity, SharedErrorLatch},
        events::ObserverId,
        foundation::math::{Colour, Vec2},
        text::{
            AnchorPolicy, CentredBanner, Corner, CornerAnnotation, CornerTexts, OverlayText,
            RelativePosition, SharedText, TextActor, TextProperties, TextStyle,
        },
        window::{HeadlessWindow, RenderWindow, ResizeNotifier, WindowSize},
    };
}
