//! Headless overlay demo
//!
//! Builds labels, a banner and corner annotations from an optional config
//! file (`.toml` or `.ron`), replays a resize script against a headless
//! window and logs where everything ends up.
//!
//! Usage: `overlay_demo [config-path]`

use std::rc::Rc;

use log::{error, info, warn};
use text_overlay::foundation::logging;
use text_overlay::config::LabelConfig;
use text_overlay::prelude::*;

// Window sizes replayed after setup; the repeat exercises a spurious notification
const RESIZE_SCRIPT: [(u32, u32); 5] =
    [(1280, 720), (1280, 720), (640, 960), (1920, 1080), (320, 240)];

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Overlay(#[from] OverlayError),
}

fn load_config() -> Result<OverlayConfig, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading overlay configuration from {}", path);
            Ok(OverlayConfig::load_from_file(path)?)
        }
        None => {
            info!("No configuration given, using built-in demo overlay");
            let mut config = OverlayConfig::default();
            config.banner = Some("Tracking lost".to_string());
            config.corners = Some(vec![
                "frame 0".to_string(),
                "30 fps".to_string(),
                "left camera".to_string(),
                "registered".to_string(),
            ]);
            config.labels = vec![
                LabelConfig { text: "tip".to_string(), x: 200.0, y: 150.0 },
                LabelConfig { text: "target".to_string(), x: 640.0, y: 480.0 },
            ];
            Ok(config)
        }
    }
}

fn log_positions(labels: &[SharedText], banner: Option<&CentredBanner>) {
    for label in labels {
        let label = label.borrow();
        let position = label.position();
        info!("  '{}' at ({:.1}, {:.1})", label.text(), position.x, position.y);
    }
    if let Some(banner) = banner {
        let position = banner.position();
        info!("  banner at ({:.0}, {:.0})", position.x, position.y);
    }
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;

    let window = Rc::new(HeadlessWindow::from_config(&config.window));
    let handle: Rc<dyn RenderWindow> = window.clone();
    let errors = ErrorObserver::new();

    let mut labels = Vec::with_capacity(config.labels.len());
    for label in &config.labels {
        let actor = TextProperties::default();
        let text = OverlayText::new(&label.text, label.x, label.y, config.style, actor)?
            .into_shared();
        if let Err(err) = OverlayText::attach_to_window(&text, &handle) {
            // Surface the failure the same way toolkit errors are surfaced
            errors.observe("ErrorEvent", &err.to_string());
            continue;
        }
        labels.push(text);
    }

    let banner = CentredBanner::from_config(&config, &handle, TextProperties::default())?;

    let mut corners = CornerAnnotation::default();
    corners.set_text_from_config(&config)?;
    info!("Corners: {:?}", corners.actor().texts());

    info!("Initial layout in {}x{} window", config.window.width, config.window.height);
    log_positions(&labels, banner.as_ref());

    for (frame, (width, height)) in RESIZE_SCRIPT.into_iter().enumerate() {
        window.set_size(width, height);
        corners.set_corner(Corner::LowerLeft, &format!("frame {}", frame + 1));
        info!("After resize to {}x{}", width, height);
        log_positions(&labels, banner.as_ref());

        if errors.error_occurred() {
            warn!("Toolkit reported: {}", errors.error_message().unwrap_or_default());
        }
    }

    Ok(())
}

fn main() {
    logging::init();

    if let Err(err) = run() {
        error!("Overlay demo failed: {}", err);
        std::process::exit(1);
    }
}
