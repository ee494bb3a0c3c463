//! In-memory render window
//!
//! Holds a size and an observer registry, nothing else. Used by tests and
//! the headless demo to drive overlays through resize sequences.

use std::cell::Cell;

use log::debug;

use super::{ResizeNotifier, WindowSize};
use crate::config::WindowConfig;
use crate::events::{ObserverId, ObserverRegistry};

/// Window without a display surface
#[derive(Debug)]
pub struct HeadlessWindow {
    size: Cell<(u32, u32)>,
    observers: ObserverRegistry,
}

impl HeadlessWindow {
    /// Create a window with the given size in pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Cell::new((width, height)),
            observers: ObserverRegistry::new(),
        }
    }

    /// Create a window sized from configuration
    pub fn from_config(config: &WindowConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Resize the window and notify observers
    pub fn set_size(&self, width: u32, height: u32) {
        debug!("Headless window resized to {}x{}", width, height);
        self.size.set((width, height));
        self.observers.notify();
    }

    /// Fire a modified notification without changing anything
    pub fn modified(&self) {
        self.observers.notify();
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl WindowSize for HeadlessWindow {
    fn window_size(&self) -> (u32, u32) {
        self.size.get()
    }
}

impl ResizeNotifier for HeadlessWindow {
    fn add_resize_observer(&self, observer: Box<dyn FnMut()>) -> ObserverId {
        self.observers.add(observer)
    }

    fn remove_resize_observer(&self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_set_size_notifies() {
        let window = Rc::new(HeadlessWindow::new(100, 50));
        let seen = Rc::new(Cell::new((0, 0)));

        let handle = Rc::downgrade(&window);
        let seen_handle = Rc::clone(&seen);
        window.add_resize_observer(Box::new(move || {
            if let Some(window) = handle.upgrade() {
                seen_handle.set(window.window_size());
            }
        }));

        window.set_size(300, 200);
        assert_eq!(seen.get(), (300, 200));
        assert_eq!(window.window_size(), (300, 200));
    }

    #[test]
    fn test_from_config() {
        let window = HeadlessWindow::from_config(&WindowConfig::default());
        assert_eq!(window.window_size(), (800, 600));
        assert_eq!(window.observer_count(), 0);
    }
}
