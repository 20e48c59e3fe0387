//! Orbit camera controller
//!
//! The camera sits on a sphere around the origin, parameterised by:
//! - azimuth: angle around +Y, measured in the XZ plane from +X
//! - polar: angle down from +Y
//! - radius: distance from the origin
//!
//! Primary-button drags rotate, secondary-button drags zoom.

use glam::Vec3;

use crate::input::MouseButtons;

/// Spherical orbit parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Azimuth angle in radians
    pub azimuth: f32,
    /// Polar angle from +Y in radians
    pub polar: f32,
    /// Distance from the pivot in scene units
    pub radius: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            azimuth: 1.5 * std::f32::consts::PI,
            polar: 0.25 * std::f32::consts::PI,
            radius: 5.0,
        }
    }
}

impl OrbitState {
    /// Cartesian position relative to the pivot
    pub fn to_cartesian(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        Vec3::new(
            self.radius * sin_polar * cos_azimuth,
            self.radius * cos_polar,
            self.radius * sin_polar * sin_azimuth,
        )
    }
}

/// Clamp ranges and drag sensitivities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Radians of rotation per dragged pixel
    pub angle_per_pixel: f32,
    /// Scene units of zoom per dragged pixel
    pub zoom_per_pixel: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            min_polar: 0.1,
            max_polar: std::f32::consts::PI - 0.1,
            min_radius: 3.0,
            max_radius: 15.0,
            angle_per_pixel: 0.25_f32.to_radians(),
            zoom_per_pixel: 0.005,
        }
    }
}

/// Applies pointer drags to an [`OrbitState`]
#[derive(Debug, Clone, Default)]
pub struct OrbitController {
    pub state: OrbitState,
    pub settings: OrbitSettings,
}

impl OrbitController {
    /// Clamps `state` into the settings' ranges.
    ///
    /// Panics if a minimum exceeds its maximum, and cannot repair a NaN
    /// component. Run user input through [`crate::config::validate_orbit_state`]
    /// and [`crate::config::validate_orbit_settings`] first.
    pub fn new(state: OrbitState, settings: OrbitSettings) -> Self {
        let mut controller = Self { state, settings };
        controller.clamp();
        controller
    }

    /// Apply one drag event.
    ///
    /// Primary rotates, secondary zooms; primary wins if both are held.
    /// Values are clamped after accumulating, so an oversized drag saturates
    /// at the bound.
    pub fn apply_drag(&mut self, buttons: MouseButtons, dx: f32, dy: f32) {
        if buttons.contains(MouseButtons::PRIMARY) {
            self.state.azimuth += dx * self.settings.angle_per_pixel;
            self.state.polar += dy * self.settings.angle_per_pixel;
            self.state.azimuth = self.state.azimuth.rem_euclid(std::f32::consts::TAU);
            self.state.polar = self
                .state
                .polar
                .clamp(self.settings.min_polar, self.settings.max_polar);
        } else if buttons.contains(MouseButtons::SECONDARY) {
            self.state.radius += (dx - dy) * self.settings.zoom_per_pixel;
            self.state.radius = self
                .state
                .radius
                .clamp(self.settings.min_radius, self.settings.max_radius);
        }
    }

    /// Eye position around the origin
    pub fn eye(&self) -> Vec3 {
        self.state.to_cartesian()
    }

    fn clamp(&mut self) {
        let s = &self.settings;
        self.state.polar = self.state.polar.clamp(s.min_polar, s.max_polar);
        self.state.radius = self.state.radius.clamp(s.min_radius, s.max_radius);
    }
}
