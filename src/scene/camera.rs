//! Camera and projection

use glam::{Mat4, Vec3};

/// Coordinate system convention for view and projection matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handedness {
    /// +Z points into the screen (Direct3D convention)
    #[default]
    Left,
    /// -Z points into the screen (OpenGL/Vulkan convention)
    Right,
}

/// Perspective projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 0.25 * std::f32::consts::PI,
            aspect: 4.0 / 3.0,
            near: 1.0,
            far: 1000.0,
        }
    }
}

impl Projection {
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn matrix(&self, handedness: Handedness) -> Mat4 {
        match handedness {
            Handedness::Left => Mat4::perspective_lh(self.fov_y, self.aspect, self.near, self.far),
            Handedness::Right => Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far),
        }
    }
}

/// Camera looking from `position` toward `target`
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    pub handedness: Handedness,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection: Projection::default(),
            handedness: Handedness::default(),
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, handedness: Handedness) -> Self {
        Self {
            position,
            target,
            handedness,
            ..Default::default()
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        match self.handedness {
            Handedness::Left => Mat4::look_at_lh(self.position, self.target, self.up),
            Handedness::Right => Mat4::look_at_rh(self.position, self.target, self.up),
        }
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix(self.handedness)
    }

    /// Update aspect ratio after a resize. A zero-height (minimised) viewport
    /// keeps the previous aspect.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 && width > 0.0 {
            self.projection.aspect = width / height;
        }
    }
}
