//! Overlay configuration

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::text::{TextStyle, CORNER_COUNT};

/// Default banner divisor: the banner sits at one third of the window
pub const DEFAULT_BANNER_DIVISOR: u32 = 3;

/// Render window settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in pixels
    pub width: u32,
    /// Initial height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Text Overlay".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// A positioned label to create at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Label text
    pub text: String,
    /// X position in pixels from the left edge
    pub x: f64,
    /// Y position in pixels from the bottom edge
    pub y: f64,
}

/// Overlay configuration
///
/// Scalar fields come first so the TOML form keeps values ahead of tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Divisor applied to the window size to place the banner
    pub banner_divisor: u32,
    /// Banner text shown in the central third, if any
    pub banner: Option<String>,
    /// Corner annotation text in toolkit corner order
    pub corners: Option<Vec<String>>,
    /// Window settings
    pub window: WindowConfig,
    /// Style applied to labels and the banner
    pub style: TextStyle,
    /// Labels to place at startup
    pub labels: Vec<LabelConfig>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            banner_divisor: DEFAULT_BANNER_DIVISOR,
            banner: None,
            corners: None,
            window: WindowConfig::default(),
            style: TextStyle::default(),
            labels: Vec::new(),
        }
    }
}

impl Config for OverlayConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.banner_divisor == 0 {
            return Err(ConfigError::Invalid("banner_divisor must be non-zero".to_string()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} has a zero dimension",
                self.window.width, self.window.height
            )));
        }
        if let Some(corners) = &self.corners {
            if corners.len() != CORNER_COUNT {
                return Err(ConfigError::Invalid(format!(
                    "expected {} corner strings, found {}",
                    CORNER_COUNT,
                    corners.len()
                )));
            }
        }
        if let Some(label) = self.labels.iter().find(|l| !l.x.is_finite() || !l.y.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "label '{}' has a non-finite position",
                label.text
            )));
        }
        self.style
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
