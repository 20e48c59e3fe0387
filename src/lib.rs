//! Lighting Box - a single lit box viewed through an orbit camera
//!
//! The scene holds three lights:
//! - **Directional**: fixed colour and direction
//! - **Point**: follows the camera eye
//! - **Spot**: follows the camera eye and aims at the origin
//!
//! Mouse drags orbit (primary button) or zoom (secondary button) the camera.
//! Each frame the [`scene::OrbitRig`] produces a consistent snapshot of the
//! eye position, view matrix and light placement, and [`scene::Scene`] packs
//! it into GPU-ready constants for whatever renderer consumes them.

pub mod config;
pub mod input;
pub mod resources;
pub mod scene;
pub mod window;

pub use config::{AppConfig, ConfigError, ConfigResult};
pub use input::{MouseButtons, PointerTracker};
pub use scene::{OrbitRig, RigFrame, Scene};
pub use window::{FrameHandler, Window, WindowError};
