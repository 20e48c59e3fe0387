//! Surface material for the lit box

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

/// Ambient/diffuse/specular material. `specular.w` is the specular power.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            ambient: Vec4::new(0.5, 0.5, 0.5, 1.0),
            diffuse: Vec4::new(0.5, 0.5, 0.5, 1.0),
            specular: Vec4::new(0.5, 0.5, 0.5, 16.0),
        }
    }
}

impl Material {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ambient: Vec4) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_diffuse(mut self, diffuse: Vec4) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_specular(mut self, specular: Vec4) -> Self {
        self.specular = specular;
        self
    }

    /// Create a uniform data struct for GPU
    pub fn uniform_data(&self) -> MaterialUniformData {
        MaterialUniformData {
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            reflect: Vec4::ZERO,
        }
    }

    // Preset materials

    /// Black body that only shows specular highlights, so the box reads as
    /// the colour of whichever light hits it
    pub fn mirror_black() -> Self {
        Self::new("mirror_black")
            .with_ambient(Vec4::new(0.0, 0.0, 0.0, 1.0))
            .with_diffuse(Vec4::new(0.0, 0.0, 0.0, 1.0))
            .with_specular(Vec4::new(1.0, 1.0, 1.0, 1.0))
    }
}

/// Material uniform data for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct MaterialUniformData {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    /// Reserved for reflections, always zero
    pub reflect: Vec4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_black_matches_box_material() {
        let material = Material::mirror_black();
        assert_eq!(material.ambient, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(material.diffuse, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(material.specular, Vec4::ONE);
    }

    #[test]
    fn uniform_data_layout() {
        assert_eq!(std::mem::size_of::<MaterialUniformData>(), 64);
        let data = Material::mirror_black().uniform_data();
        assert_eq!(data.specular, Vec4::ONE);
        assert_eq!(data.reflect, Vec4::ZERO);
    }
}
