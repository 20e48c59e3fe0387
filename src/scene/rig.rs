//! Orbit camera and light rig
//!
//! Owns the orbit controller and the three lights. Input events mutate the
//! orbit; [`OrbitRig::tick`] derives eye, view and light placement from one
//! snapshot of it.

use glam::{Mat4, Vec2, Vec3};

use super::{Camera, Handedness, LightSet, OrbitController, OrbitSettings, OrbitState};
use crate::input::{MouseButtons, PointerTracker};

/// Everything a renderer needs from the rig for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigFrame {
    pub eye: Vec3,
    pub view: Mat4,
    pub lights: LightSet,
}

/// Orbit camera with point and spot lights riding on the eye
#[derive(Debug, Clone)]
pub struct OrbitRig {
    controller: OrbitController,
    pointer: PointerTracker,
    lights: LightSet,
    camera: Camera,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(
            OrbitState::default(),
            OrbitSettings::default(),
            LightSet::default(),
            Handedness::default(),
        )
    }
}

impl OrbitRig {
    /// The orbit pivot and light target
    pub const TARGET: Vec3 = Vec3::ZERO;

    pub fn new(
        state: OrbitState,
        settings: OrbitSettings,
        lights: LightSet,
        handedness: Handedness,
    ) -> Self {
        let controller = OrbitController::new(state, settings);
        Self {
            camera: Camera::new(controller.eye(), Self::TARGET, handedness),
            controller,
            pointer: PointerTracker::new(),
            lights,
        }
    }

    pub fn orbit(&self) -> &OrbitState {
        &self.controller.state
    }

    pub fn settings(&self) -> &OrbitSettings {
        &self.controller.settings
    }

    pub fn lights(&self) -> &LightSet {
        &self.lights
    }

    /// Camera as of the last tick
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Apply a drag delta in pixels with the given buttons held
    pub fn apply_drag(&mut self, buttons: MouseButtons, dx: f32, dy: f32) {
        self.controller.apply_drag(buttons, dx, dy);
        log::trace!(
            "orbit: azimuth={:.4} polar={:.4} radius={:.4}",
            self.controller.state.azimuth,
            self.controller.state.polar,
            self.controller.state.radius
        );
    }

    /// A button went down at `(x, y)`; later moves are measured from here
    pub fn pointer_pressed(&mut self, button: MouseButtons, x: f32, y: f32) {
        self.pointer.press(button, Vec2::new(x, y));
    }

    pub fn pointer_released(&mut self, button: MouseButtons) {
        self.pointer.release(button);
    }

    /// The pointer moved to `(x, y)`.
    ///
    /// The delta from the last sampled position is applied with the currently
    /// held buttons, then `(x, y)` becomes the new reference position.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let delta = self.pointer.move_to(Vec2::new(x, y));
        let buttons = self.pointer.buttons();
        if !buttons.is_empty() && delta != Vec2::ZERO {
            self.apply_drag(buttons, delta.x, delta.y);
        }
    }

    /// The pointer left the window. Held buttons stay held; the next move
    /// only re-establishes the reference position.
    pub fn pointer_left(&mut self) {
        self.pointer.reset();
    }

    /// Recompute eye, view and the tracking lights
    pub fn tick(&mut self) -> RigFrame {
        let eye = self.controller.eye();
        self.camera.position = eye;
        self.camera.target = Self::TARGET;
        self.camera.up = Vec3::Y;
        let view = self.camera.view_matrix();

        self.lights.point.position = eye;
        self.lights.spot.aim(eye, Self::TARGET);

        RigFrame {
            eye,
            view,
            lights: self.lights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_moves_lights_to_eye() {
        let mut rig = OrbitRig::default();
        let frame = rig.tick();
        assert_eq!(frame.lights.point.position, frame.eye);
        assert_eq!(frame.lights.spot.position, frame.eye);
        assert!(frame
            .lights
            .spot
            .direction
            .abs_diff_eq((-frame.eye).normalize(), 1e-6));
    }

    #[test]
    fn tick_leaves_directional_untouched() {
        let mut rig = OrbitRig::default();
        rig.apply_drag(MouseButtons::PRIMARY, 40.0, 12.0);
        let frame = rig.tick();
        assert_eq!(frame.lights.directional, LightSet::default().directional);
    }

    #[test]
    fn pointer_moves_drive_drag() {
        let mut rig = OrbitRig::default();
        rig.pointer_pressed(MouseButtons::SECONDARY, 100.0, 100.0);
        rig.pointer_moved(300.0, 100.0);
        assert!((rig.orbit().radius - 6.0).abs() < 1e-5);

        rig.pointer_released(MouseButtons::SECONDARY);
        rig.pointer_moved(600.0, 100.0);
        assert!((rig.orbit().radius - 6.0).abs() < 1e-5);
    }

    #[test]
    fn drag_resumes_after_leaving_window() {
        let mut rig = OrbitRig::default();
        rig.pointer_pressed(MouseButtons::SECONDARY, 100.0, 100.0);
        rig.pointer_moved(300.0, 100.0);
        rig.pointer_left();

        // Re-entry far away must not jump
        rig.pointer_moved(700.0, 100.0);
        assert!((rig.orbit().radius - 6.0).abs() < 1e-5);

        rig.pointer_moved(900.0, 100.0);
        assert!((rig.orbit().radius - 7.0).abs() < 1e-5);

        rig.pointer_released(MouseButtons::SECONDARY);
        rig.pointer_moved(1100.0, 100.0);
        assert!((rig.orbit().radius - 7.0).abs() < 1e-5);
    }

    #[test]
    fn hover_without_buttons_does_nothing() {
        let mut rig = OrbitRig::default();
        rig.pointer_moved(0.0, 0.0);
        rig.pointer_moved(500.0, 500.0);
        assert_eq!(*rig.orbit(), OrbitState::default());
    }

    #[test]
    fn construction_clamps_and_keeps_config() {
        let settings = OrbitSettings {
            max_radius: 10.0,
            ..Default::default()
        };
        let state = OrbitState {
            radius: 12.0,
            ..Default::default()
        };
        let rig = OrbitRig::new(state, settings, LightSet::default(), Handedness::Right);
        assert_eq!(rig.orbit().radius, 10.0);
        assert_eq!(rig.settings().max_radius, 10.0);
        assert_eq!(rig.camera().handedness, Handedness::Right);
        assert_eq!(*rig.lights(), LightSet::default());
    }

    #[test]
    fn view_looks_at_origin() {
        let mut rig = OrbitRig::default();
        let frame = rig.tick();
        let origin = frame.view.transform_point3(Vec3::ZERO);
        assert!(origin.x.abs() < 1e-5);
        assert!(origin.y.abs() < 1e-5);
        assert!((origin.z - rig.orbit().radius).abs() < 1e-4);
    }
}
