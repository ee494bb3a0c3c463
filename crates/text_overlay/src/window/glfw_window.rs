//! GLFW-backed render window
//!
//! Polls GLFW events and turns size, framebuffer, position, focus and
//! iconify events into a single modified notification per poll. GLFW errors
//! are routed into a [`SharedErrorLatch`] instead of panicking.

use std::cell::{Cell, RefCell};

use log::{debug, info};
use thiserror::Error;

use super::{ResizeNotifier, WindowSize};
use crate::config::WindowConfig;
use crate::diagnostics::{SharedErrorLatch, Severity};
use crate::events::{ObserverId, ObserverRegistry};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not be initialised
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The window could not be created
    #[error("Window creation failed")]
    CreationFailed,
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper implementing [`super::RenderWindow`]
pub struct GlfwRenderWindow {
    glfw: RefCell<glfw::Glfw>,
    window: RefCell<glfw::PWindow>,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    size: Cell<(u32, u32)>,
    observers: ObserverRegistry,
}

impl GlfwRenderWindow {
    /// Open a window and route GLFW errors into `errors`
    pub fn new(config: &WindowConfig, errors: SharedErrorLatch) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::log_errors).map_err(|_| WindowError::InitializationFailed)?;
        glfw.set_error_callback(move |error, description| {
            errors.record_event(Severity::Error, format!("{error:?}: {description}"));
        });

        // Overlays draw through the host toolkit, no client API context is needed here
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_close_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_pos_polling(true);
        window.set_focus_polling(true);
        window.set_iconify_polling(true);

        let (width, height) = window.get_framebuffer_size();
        info!("Opened '{}' at {}x{}", config.title, width, height);

        Ok(Self {
            glfw: RefCell::new(glfw),
            window: RefCell::new(window),
            events,
            size: Cell::new((clamp_dimension(width), clamp_dimension(height))),
            observers: ObserverRegistry::new(),
        })
    }

    /// Whether the user asked to close the window
    pub fn should_close(&self) -> bool {
        self.window.borrow().should_close()
    }

    /// Process pending events, notifying observers once if anything changed
    pub fn poll_events(&self) {
        self.glfw.borrow_mut().poll_events();

        let mut modified = false;
        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                glfw::WindowEvent::FramebufferSize(width, height) => {
                    self.size.set((clamp_dimension(width), clamp_dimension(height)));
                    modified = true;
                }
                glfw::WindowEvent::Size(..)
                | glfw::WindowEvent::Pos(..)
                | glfw::WindowEvent::Focus(_)
                | glfw::WindowEvent::Iconify(_) => modified = true,
                glfw::WindowEvent::Close => debug!("Close requested"),
                _ => {}
            }
        }

        if modified {
            self.observers.notify();
        }
    }
}

fn clamp_dimension(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

impl WindowSize for GlfwRenderWindow {
    fn window_size(&self) -> (u32, u32) {
        self.size.get()
    }
}

impl ResizeNotifier for GlfwRenderWindow {
    fn add_resize_observer(&self, observer: Box<dyn FnMut()>) -> ObserverId {
        self.observers.add(observer)
    }

    fn remove_resize_observer(&self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }
}
