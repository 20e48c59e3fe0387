//! Lighting box demo
//!
//! Run with:
//!   cargo run --bin lighting_box
//!   cargo run --bin lighting_box -- --handedness rh --radius 8
//!
//! Controls:
//!   Left mouse drag  - Orbit the camera around the box
//!   Right mouse drag - Zoom in/out
//!
//! The window title shows the camera eye and the frame rate. Set
//! `RUST_LOG=lighting_box=trace` to follow every orbit update.

use glam::Vec2;
use lighting_box::{
    scene::{FrameConstants, Scene},
    window::{self, FrameHandler, Window},
    AppConfig, MouseButtons,
};
use std::time::{Duration, Instant};
use winit::event::{ElementState, WindowEvent};

const TITLE_REFRESH: Duration = Duration::from_millis(500);

struct LightingBoxApp {
    title: String,
    scene: Scene,
    cursor: Vec2,
    last_title_refresh: Instant,
    frames_since_refresh: u32,
}

impl LightingBoxApp {
    fn new(config: &AppConfig) -> Self {
        Self {
            title: config.title.clone(),
            scene: Scene::from_config(config),
            cursor: Vec2::ZERO,
            last_title_refresh: Instant::now(),
            frames_since_refresh: 0,
        }
    }

    /// Hand the packed constants to the renderer. Rendering lives outside this
    /// crate, so the demo only reports what would be uploaded.
    fn submit(&self, constants: &FrameConstants) {
        log::trace!(
            "frame constants: {} bytes, eye=({:.3}, {:.3}, {:.3})",
            bytemuck::bytes_of(constants).len(),
            constants.eye_position.x,
            constants.eye_position.y,
            constants.eye_position.z
        );
    }

    fn refresh_title(&mut self, window: &Window) {
        let elapsed = self.last_title_refresh.elapsed();
        if elapsed < TITLE_REFRESH {
            return;
        }

        let fps = self.frames_since_refresh as f32 / elapsed.as_secs_f32();
        let eye = self.scene.frame().eye;
        window.set_title(&format!(
            "{} - eye ({:.2}, {:.2}, {:.2}) - {:.0} FPS",
            self.title, eye.x, eye.y, eye.z, fps
        ));

        self.last_title_refresh = Instant::now();
        self.frames_since_refresh = 0;
    }
}

impl FrameHandler for LightingBoxApp {
    fn window_event(&mut self, _window: &Window, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                self.scene.rig.pointer_moved(self.cursor.x, self.cursor.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = MouseButtons::from_winit(*button);
                match state {
                    ElementState::Pressed => {
                        self.scene
                            .rig
                            .pointer_pressed(button, self.cursor.x, self.cursor.y);
                    }
                    ElementState::Released => self.scene.rig.pointer_released(button),
                }
            }
            WindowEvent::CursorLeft { .. } => self.scene.rig.pointer_left(),
            _ => {}
        }
    }

    fn frame(&mut self, window: &mut Window) {
        if window.should_close() {
            return;
        }

        if window.was_resized() {
            let (width, height) = window.dimensions();
            self.scene.resize(width, height);
            window.clear_resize_flag();
            log::debug!("Resized to {}x{}", width, height);
        }

        self.scene.update();
        let constants = self.scene.frame_constants();
        self.submit(&constants);

        self.frames_since_refresh += 1;
        self.refresh_title(window);
    }
}

fn main() {
    env_logger::init();

    let config = match AppConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid arguments: {}", e);
            eprintln!("Usage: lighting_box [--width <px>] [--height <px>] [--title <text>] [--radius <units>] [--handedness <lh|rh>]");
            std::process::exit(2);
        }
    };

    log::info!(
        "Starting {} ({}x{}, {:?}-handed)",
        config.title,
        config.width,
        config.height,
        config.handedness
    );

    let app = LightingBoxApp::new(&config);
    if let Err(e) = window::run(&config, app) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
