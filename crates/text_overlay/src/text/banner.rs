//! Large text in the central third of the window
//!
//! Useful for error messages and warnings. Unlike [`OverlayText`] with the
//! cached policy, the banner stores no fraction: every notification places
//! it at `window_size / divisor` from the live geometry.

use std::rc::Rc;

use super::actor::{TextActor, TextProperties};
use super::overlay::{OverlayText, SharedText};
use super::style::TextStyle;
use super::tracker::AnchorPolicy;
use crate::config::OverlayConfig;
use crate::error::OverlayResult;
use crate::foundation::math::Vec2;
use crate::window::RenderWindow;

/// Banner text re-centred on every window notification
#[derive(Debug)]
pub struct CentredBanner<A: TextActor = TextProperties> {
    text: SharedText<A>,
}

impl<A: TextActor + 'static> CentredBanner<A> {
    /// Show `text` at one third of the window's width and height
    ///
    /// Uses [`TextStyle::default`] (24pt red) so banners match labels; the
    /// actor's own font defaults are overwritten. Use [`Self::with_style`]
    /// to pick another style.
    pub fn new(text: &str, window: &Rc<dyn RenderWindow>, actor: A) -> OverlayResult<Self> {
        Self::with_style(text, window, TextStyle::default(), actor)
    }

    /// Show `text` at one third of the window in the given style
    pub fn with_style(
        text: &str,
        window: &Rc<dyn RenderWindow>,
        style: TextStyle,
        actor: A,
    ) -> OverlayResult<Self> {
        Self::with_divisor(text, window, 3, style, actor)
    }

    /// Show `text` at `window_size / divisor`
    pub fn with_divisor(
        text: &str,
        window: &Rc<dyn RenderWindow>,
        divisor: u32,
        style: TextStyle,
        actor: A,
    ) -> OverlayResult<Self> {
        let policy = AnchorPolicy::Recomputed { divisor };
        let text =
            OverlayText::with_policy(text, 0, 0, style, policy, actor)?.into_shared();
        OverlayText::attach_to_window(&text, window)?;
        Ok(Self { text })
    }

    /// Build from configured banner text, if any
    pub fn from_config(
        config: &OverlayConfig,
        window: &Rc<dyn RenderWindow>,
        actor: A,
    ) -> OverlayResult<Option<Self>> {
        config
            .banner
            .as_deref()
            .map(|text| {
                Self::with_divisor(text, window, config.banner_divisor, config.style, actor)
            })
            .transpose()
    }

    /// Replace the banner string
    pub fn set_text(&self, text: &str) {
        self.text.borrow_mut().set_text(text);
    }

    /// Current position in pixels
    pub fn position(&self) -> Vec2 {
        self.text.borrow().position()
    }

    /// Shared handle to the underlying text
    pub fn text(&self) -> &SharedText<A> {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Colour;
    use crate::window::HeadlessWindow;

    fn window(width: u32, height: u32) -> (Rc<HeadlessWindow>, Rc<dyn RenderWindow>) {
        let concrete = Rc::new(HeadlessWindow::new(width, height));
        let dynamic: Rc<dyn RenderWindow> = concrete.clone();
        (concrete, dynamic)
    }

    #[test]
    fn test_positioned_at_third_immediately() {
        let (_concrete, dynamic) = window(300, 200);
        let banner =
            CentredBanner::new("Tracking lost", &dynamic, TextProperties::default()).unwrap();
        assert_eq!(banner.position(), Vec2::new(100.0, 66.0));
        assert_eq!(banner.text().borrow().actor().input, "Tracking lost");
    }

    #[test]
    fn test_style_applied_to_actor() {
        let (_concrete, dynamic) = window(300, 300);
        let banner = CentredBanner::new("x", &dynamic, TextProperties::default()).unwrap();
        assert_eq!(banner.text().borrow().actor().font_size, 24);
        assert_eq!(banner.text().borrow().actor().colour, Colour::new(1.0, 0.0, 0.0));

        let style = TextStyle::new(48, Colour::new(1.0, 1.0, 0.0)).unwrap();
        let banner =
            CentredBanner::with_style("x", &dynamic, style, TextProperties::default()).unwrap();
        assert_eq!(banner.text().borrow().actor().font_size, 48);
        assert_eq!(banner.text().borrow().actor().colour, Colour::new(1.0, 1.0, 0.0));
        assert_eq!(banner.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_recentres_from_live_size() {
        let (concrete, dynamic) = window(300, 300);
        let banner = CentredBanner::new("x", &dynamic, TextProperties::default()).unwrap();

        concrete.set_size(1000, 500);
        assert_eq!(banner.position(), Vec2::new(333.0, 166.0));
        concrete.set_size(2, 2);
        assert_eq!(banner.position(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_zero_size_window_allowed() {
        let (_concrete, dynamic) = window(0, 0);
        let banner = CentredBanner::new("x", &dynamic, TextProperties::default()).unwrap();
        assert_eq!(banner.position(), Vec2::zeros());
    }

    #[test]
    fn test_from_config() {
        let (_concrete, dynamic) = window(400, 400);
        let mut config = OverlayConfig::default();
        assert!(CentredBanner::from_config(&config, &dynamic, TextProperties::default())
            .unwrap()
            .is_none());

        config.banner = Some("Registration failed".to_string());
        config.banner_divisor = 4;
        let banner = CentredBanner::from_config(&config, &dynamic, TextProperties::default())
            .unwrap()
            .unwrap();
        assert_eq!(banner.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let (_concrete, dynamic) = window(100, 100);
        let result = CentredBanner::with_divisor(
            "x",
            &dynamic,
            0,
            TextStyle::default(),
            TextProperties::default(),
        );
        assert!(result.is_err());
    }
}
