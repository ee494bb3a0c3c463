//! GLFW overlay demo
//!
//! Opens a resizable window, attaches the configured labels and banner, and
//! logs their positions every time the window reports a change. GLFW errors
//! are latched and reported once per frame.
//!
//! Usage: `overlay_window [config-path]`

use std::rc::Rc;
use std::time::Duration;

use log::{error, info, warn};
use text_overlay::foundation::logging;
use text_overlay::prelude::*;
use text_overlay::window::{GlfwRenderWindow, WindowError};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Overlay(#[from] OverlayError),

    #[error(transparent)]
    Window(#[from] WindowError),
}

fn run() -> Result<(), DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => OverlayConfig::load_from_file(path)?,
        None => OverlayConfig::default(),
    };

    let errors = SharedErrorLatch::new();
    let window = Rc::new(GlfwRenderWindow::new(&config.window, errors.clone())?);
    let handle: Rc<dyn RenderWindow> = window.clone();

    let mut labels = Vec::with_capacity(config.labels.len());
    for label in &config.labels {
        let actor = TextProperties::default();
        let text = OverlayText::new(&label.text, label.x, label.y, config.style, actor)?
            .into_shared();
        OverlayText::attach_to_window(&text, &handle)?;
        labels.push(text);
    }
    let banner = CentredBanner::from_config(&config, &handle, TextProperties::default())?;

    // Log once per change rather than once per frame
    let reporter_labels = labels.clone();
    let reporter_window = Rc::downgrade(&window);
    window.add_resize_observer(Box::new(move || {
        if let Some(window) = reporter_window.upgrade() {
            let (width, height) = window.window_size();
            info!("Window modified, now {}x{}", width, height);
        }
        for label in &reporter_labels {
            if let Ok(label) = label.try_borrow() {
                let position = label.position();
                info!("  '{}' at ({:.1}, {:.1})", label.text(), position.x, position.y);
            }
        }
    }));

    while !window.should_close() {
        window.poll_events();

        if errors.check_and_clear() {
            warn!("GLFW reported: {}", errors.last_message().unwrap_or_default());
        }
        std::thread::sleep(Duration::from_millis(16));
    }

    if let Some(banner) = banner {
        let position = banner.position();
        info!("Banner ended at ({:.0}, {:.0})", position.x, position.y);
    }
    Ok(())
}

fn main() {
    logging::init();

    if let Err(err) = run() {
        error!("Overlay window failed: {}", err);
        std::process::exit(1);
    }
}
