//! Scene management

mod camera;
mod camera_controller;
mod light;
mod rig;
mod transform;

pub use camera::*;
pub use camera_controller::*;
pub use light::*;
pub use rig::*;
pub use transform::*;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

use crate::config::AppConfig;
use crate::resources::{Material, MaterialUniformData, Mesh};

/// Per-frame shader constants, in the order the lighting effect expects
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FrameConstants {
    pub world: Mat4,
    pub world_inv_transpose: Mat4,
    pub world_view_proj: Mat4,
    /// xyz = eye position, w = 1
    pub eye_position: Vec4,
    pub lights: GpuLightSet,
    pub material: MaterialUniformData,
}

/// The lit box, its camera rig and the current frame
pub struct Scene {
    pub rig: OrbitRig,
    pub mesh: Mesh,
    pub material: Material,
    pub transform: Transform,
    frame: RigFrame,
}

impl Scene {
    pub fn new(mut rig: OrbitRig) -> Self {
        let frame = rig.tick();
        Self {
            rig,
            mesh: Mesh::lighting_box(),
            material: Material::mirror_black(),
            transform: Transform::default(),
            frame,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let rig = OrbitRig::new(
            config.orbit,
            config.orbit_settings,
            LightSet::default(),
            config.handedness,
        );
        let mut scene = Self::new(rig);
        scene.resize(config.width, config.height);
        scene
    }

    /// Recompute the projection for a new viewport size
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.rig
            .camera_mut()
            .set_aspect(width as f32, height as f32);
    }

    /// Advance one frame
    pub fn update(&mut self) -> &RigFrame {
        self.frame = self.rig.tick();
        &self.frame
    }

    /// Most recent rig output
    pub fn frame(&self) -> &RigFrame {
        &self.frame
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.rig.camera().projection_matrix()
    }

    /// Pack the current frame into shader constants
    pub fn frame_constants(&self) -> FrameConstants {
        let world = self.transform.matrix();
        let world_view_proj = self.projection_matrix() * self.frame.view * world;

        FrameConstants {
            world,
            world_inv_transpose: self.transform.normal_matrix(),
            world_view_proj,
            eye_position: self.frame.eye.extend(1.0),
            lights: self.frame.lights.to_gpu_data(),
            material: self.material.uniform_data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButtons;
    use glam::Vec3;

    #[test]
    fn frame_constants_follow_rig() {
        let mut scene = Scene::new(OrbitRig::default());
        scene.rig.apply_drag(MouseButtons::SECONDARY, 400.0, 0.0);
        scene.update();

        let constants = scene.frame_constants();
        assert_eq!(constants.eye_position.truncate(), scene.frame().eye);
        assert_eq!(constants.lights.point.position, scene.frame().eye);
        assert_eq!(constants.lights.spot.position, scene.frame().eye);
        assert_eq!(constants.world, Mat4::IDENTITY);
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let mut scene = Scene::new(OrbitRig::default());
        scene.resize(800, 600);
        scene.update();

        let clip = scene.frame_constants().world_view_proj * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn constants_pack_box_transform() {
        let mut scene = Scene::new(OrbitRig::default());
        scene.transform = Transform::from_position(Vec3::new(0.0, 1.0, 0.0))
            .with_scale(Vec3::new(2.0, 1.0, 1.0));
        scene.update();

        let constants = scene.frame_constants();
        assert_eq!(constants.world, scene.transform.matrix());
        assert_eq!(constants.world_inv_transpose, scene.transform.normal_matrix());
        let expected = scene.projection_matrix() * scene.frame().view * constants.world;
        assert!(constants.world_view_proj.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn zero_sized_resize_keeps_aspect() {
        let mut scene = Scene::new(OrbitRig::default());
        scene.resize(1600, 900);
        scene.resize(0, 900);
        assert!((scene.rig.camera().projection.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn constants_are_uploadable() {
        let scene = Scene::new(OrbitRig::default());
        let constants = scene.frame_constants();
        let bytes = bytemuck::bytes_of(&constants);
        assert_eq!(bytes.len() % 16, 0);
    }
}
