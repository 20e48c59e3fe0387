//! World transform of the box

use glam::{Mat4, Quat, Vec3};

/// Transform for positioning an object in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Get the model matrix for this transform
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Inverse transpose of the model matrix, for transforming normals.
    ///
    /// Translation is dropped first; it would otherwise leak into the last
    /// row after transposing and skew normals.
    pub fn normal_matrix(&self) -> Mat4 {
        let mut model = self.matrix();
        model.w_axis = glam::Vec4::W;
        model.inverse().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_by_default() {
        assert_eq!(Transform::new().matrix(), Mat4::IDENTITY);
        assert_eq!(Transform::new().normal_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn normal_matrix_ignores_translation() {
        let transform = Transform::from_position(Vec3::new(4.0, -2.0, 9.0));
        assert!(transform.normal_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn normal_matrix_inverts_scale() {
        let transform = Transform::new().with_scale(Vec3::new(2.0, 1.0, 1.0));
        let normal = transform
            .normal_matrix()
            .transform_vector3(Vec3::X);
        assert!(normal.abs_diff_eq(Vec3::new(0.5, 0.0, 0.0), 1e-6));
    }
}
