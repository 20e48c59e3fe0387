//! Window management using winit

use std::sync::Arc;
use thiserror::Error;
use winit::{
    dpi::PhysicalSize,
    error::{EventLoopError, OsError},
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window as WinitWindow, WindowBuilder},
};

use crate::config::AppConfig;

/// Window error type
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[source] EventLoopError),
    #[error("Failed to create window: {0}")]
    WindowCreation(#[from] OsError),
    #[error("Event loop failed: {0}")]
    Run(#[source] EventLoopError),
}

pub type WindowResult<T> = Result<T, WindowError>;

/// Wrapper around winit window with additional state
pub struct Window {
    window: Arc<WinitWindow>,
    width: u32,
    height: u32,
    resized: bool,
    close_requested: bool,
}

impl Window {
    /// Create a new window with the given title and dimensions
    pub fn new(event_loop: &EventLoop<()>, title: &str, width: u32, height: u32) -> WindowResult<Self> {
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(PhysicalSize::new(width, height))
                .build(event_loop)?,
        );

        Ok(Self {
            window,
            width,
            height,
            resized: false,
            close_requested: false,
        })
    }

    /// Get current window dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check if window was resized since last frame
    pub fn was_resized(&self) -> bool {
        self.resized
    }

    /// Clear the resize flag
    pub fn clear_resize_flag(&mut self) {
        self.resized = false;
    }

    /// Check if close was requested
    pub fn should_close(&self) -> bool {
        self.close_requested
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    /// Handle window events
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                self.width = size.width;
                self.height = size.height;
                self.resized = true;
            }
            WindowEvent::CloseRequested => {
                self.close_requested = true;
            }
            _ => {}
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Receives window events and per-frame callbacks from [`run`]
pub trait FrameHandler {
    /// Called for every window event, after the window has updated its own state
    fn window_event(&mut self, window: &Window, event: &WindowEvent);

    /// Called once per loop iteration
    fn frame(&mut self, window: &mut Window);
}

/// Run the application until the window is closed
pub fn run<H>(config: &AppConfig, mut handler: H) -> WindowResult<()>
where
    H: FrameHandler + 'static,
{
    let event_loop = EventLoop::new().map_err(WindowError::EventLoop)?;
    let mut window = Window::new(&event_loop, &config.title, config.width, config.height)?;
    log::info!("Created window {}x{}", config.width, config.height);

    event_loop
        .run(move |event, elwt: &EventLoopWindowTarget<()>| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => {
                    window.handle_event(&event);
                    handler.window_event(&window, &event);

                    if let WindowEvent::CloseRequested = event {
                        log::info!("Close requested");
                        elwt.exit();
                    }
                }
                Event::AboutToWait => {
                    handler.frame(&mut window);
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .map_err(WindowError::Run)
}
