//! Render window abstraction
//!
//! Overlays only need two things from a window: its current drawable size in
//! pixels and a way to be told when its state changes. Both are expressed as
//! traits so the toolkit's window, a GLFW window or a headless stand-in can
//! be injected.
//!
//! Methods take `&self`: notifications are delivered while overlays hold
//! shared references to the window, so implementations use interior
//! mutability for their state.

mod headless;
#[cfg(feature = "glfw")]
mod glfw_window;

pub use headless::HeadlessWindow;
#[cfg(feature = "glfw")]
pub use glfw_window::{GlfwRenderWindow, WindowError, WindowResult};

use crate::events::ObserverId;

/// Size query capability
pub trait WindowSize {
    /// Current drawable size in pixels (width, height)
    fn window_size(&self) -> (u32, u32);
}

/// Notification registration capability
pub trait ResizeNotifier {
    /// Register a callback fired on every window state change
    ///
    /// The notification is coarse: it may fire without the size changing.
    fn add_resize_observer(&self, observer: Box<dyn FnMut()>) -> ObserverId;

    /// Unregister a callback, returning whether it was registered
    fn remove_resize_observer(&self, id: ObserverId) -> bool;
}

/// A window overlays can be attached to
pub trait RenderWindow: WindowSize + ResizeNotifier {}

impl<T: WindowSize + ResizeNotifier + ?Sized> RenderWindow for T {}
