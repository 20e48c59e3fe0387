//! Light types for the scene
//!
//! Every light carries separate ambient, diffuse and specular colours. Point
//! and spot lights additionally have attenuation coefficients
//! `(constant, linear, quadratic)` and a range beyond which they contribute
//! nothing.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// Directional light (like the sun)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        let red = Vec4::new(0.9952, 0.0975, 0.0, 1.0);
        Self::new(red, Vec3::new(0.57735, -0.57735, 0.57735))
    }
}

impl DirectionalLight {
    /// Light with a single colour for all three terms
    pub fn new(color: Vec4, direction: Vec3) -> Self {
        Self {
            ambient: color,
            diffuse: color,
            specular: color,
            direction: direction.normalize(),
        }
    }

    /// Convert to GPU data format
    pub fn to_gpu_data(&self) -> GpuDirectionalLight {
        GpuDirectionalLight {
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            direction: self.direction,
            _pad: 0.0,
        }
    }
}

/// Point light; the rig moves it to the camera eye every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub attenuation: Vec3,
    pub range: f32,
    pub position: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        let green = Vec4::new(0.0, 0.9988, 0.047, 1.0);
        Self {
            ambient: green,
            diffuse: green,
            specular: green,
            attenuation: Vec3::new(0.0, 0.1, 0.0),
            range: 25.0,
            position: Vec3::ZERO,
        }
    }
}

impl PointLight {
    /// Convert to GPU data format
    pub fn to_gpu_data(&self) -> GpuPointLight {
        GpuPointLight {
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            position: self.position,
            range: self.range,
            attenuation: self.attenuation,
            _pad: 0.0,
        }
    }
}

/// Spot light; the rig moves it to the camera eye and aims it at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub attenuation: Vec3,
    /// Cone falloff exponent; larger is tighter
    pub spot_exponent: f32,
    pub range: f32,
    pub position: Vec3,
    pub direction: Vec3,
}

impl Default for SpotLight {
    fn default() -> Self {
        let teal = Vec4::new(0.0, 0.9813, 0.1924, 1.0);
        Self {
            ambient: teal,
            diffuse: teal,
            specular: teal,
            attenuation: Vec3::new(1.0, 0.0, 0.0),
            spot_exponent: 96.0,
            range: 10000.0,
            position: Vec3::ZERO,
            direction: Vec3::Z,
        }
    }
}

impl SpotLight {
    /// Place the light at `position` and aim it at `target`.
    ///
    /// If the two coincide the previous direction is kept.
    pub fn aim(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        if let Some(direction) = (target - position).try_normalize() {
            self.direction = direction;
        }
    }

    /// Convert to GPU data format
    pub fn to_gpu_data(&self) -> GpuSpotLight {
        GpuSpotLight {
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            position: self.position,
            range: self.range,
            direction: self.direction,
            spot_exponent: self.spot_exponent,
            attenuation: self.attenuation,
            _pad: 0.0,
        }
    }
}

/// The three lights of the scene
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightSet {
    pub directional: DirectionalLight,
    pub point: PointLight,
    pub spot: SpotLight,
}

impl LightSet {
    /// Convert all lights to GPU data format
    pub fn to_gpu_data(&self) -> GpuLightSet {
        GpuLightSet {
            directional: self.directional.to_gpu_data(),
            point: self.point.to_gpu_data(),
            spot: self.spot.to_gpu_data(),
        }
    }
}

/// GPU layout of a directional light (HLSL constant buffer packing)
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GpuDirectionalLight {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub direction: Vec3,
    pub _pad: f32,
}

/// GPU layout of a point light
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GpuPointLight {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub position: Vec3,
    pub range: f32,
    pub attenuation: Vec3,
    pub _pad: f32,
}

/// GPU layout of a spot light
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GpuSpotLight {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub position: Vec3,
    pub range: f32,
    pub direction: Vec3,
    pub spot_exponent: f32,
    pub attenuation: Vec3,
    pub _pad: f32,
}

/// All three lights in upload order
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GpuLightSet {
    pub directional: GpuDirectionalLight,
    pub point: GpuPointLight,
    pub spot: GpuSpotLight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_layouts_are_16_byte_packed() {
        assert_eq!(std::mem::size_of::<GpuDirectionalLight>(), 64);
        assert_eq!(std::mem::size_of::<GpuPointLight>(), 80);
        assert_eq!(std::mem::size_of::<GpuSpotLight>(), 96);
        assert_eq!(std::mem::size_of::<GpuLightSet>() % 16, 0);
    }

    #[test]
    fn directional_direction_is_normalized() {
        let light = DirectionalLight::new(Vec4::ONE, Vec3::new(3.0, -4.0, 0.0));
        assert!((light.direction.length() - 1.0).abs() < 1e-6);
        assert!((DirectionalLight::default().direction.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn spot_aim_points_at_target() {
        let mut spot = SpotLight::default();
        spot.aim(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO);
        assert_eq!(spot.position, Vec3::new(0.0, 0.0, -10.0));
        assert!(spot.direction.abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn spot_aim_at_own_position_keeps_direction() {
        let mut spot = SpotLight::default();
        spot.direction = Vec3::X;
        spot.aim(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(spot.direction, Vec3::X);
    }

    #[test]
    fn gpu_data_carries_parameters() {
        let lights = LightSet::default();
        let gpu = lights.to_gpu_data();
        assert_eq!(gpu.point.range, 25.0);
        assert_eq!(gpu.point.attenuation, Vec3::new(0.0, 0.1, 0.0));
        assert_eq!(gpu.spot.spot_exponent, 96.0);
        assert_eq!(gpu.spot.range, 10000.0);
        assert_eq!(gpu.directional.diffuse, lights.directional.diffuse);
    }
}
