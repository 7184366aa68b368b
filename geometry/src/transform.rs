use crate::ray::Ray;
use math::hcm::{Mat4, Vec3};
use math::Angle;
use thiserror::Error;

/// Lengths below this are treated as zero when building transforms.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TransformError {
    #[error("rotation axis {0} has zero length")]
    DegenerateAxis(Vec3),
    #[error("scale {0} collapses at least one axis")]
    DegenerateScale(Vec3),
}

/// Maps world-space rays into the canonical model space of one shape.
///
/// Elementary operations are composed by pre-multiplying their *inverse* onto `world_to_model`:
///
///   new = inverse(elementary) * old
///
/// so translating, then rotating, then scaling yields `S^-1 * R^-1 * T^-1`, undoing the operations
/// in reverse order. `model_to_world` tracks the forward product and is the formal inverse of
/// `world_to_model`; `normal_to_world` is always the transpose of `world_to_model`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTransform {
    world_to_model: Mat4,
    model_to_world: Mat4,
    normal_to_world: Mat4,
}

impl Default for RayTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RayTransform {
    pub fn identity() -> Self {
        Self {
            world_to_model: Mat4::IDENTITY,
            model_to_world: Mat4::IDENTITY,
            normal_to_world: Mat4::IDENTITY,
        }
    }

    fn compose(self, inverse: Mat4, forward: Mat4) -> Self {
        let world_to_model = inverse * self.world_to_model;
        Self {
            world_to_model,
            model_to_world: self.model_to_world * forward,
            normal_to_world: world_to_model.transpose(),
        }
    }

    /// Moves the model axes by `t`.
    pub fn translate(self, t: Vec3) -> Self {
        self.compose(Mat4::translater(-t), Mat4::translater(t))
    }

    /// Rotates the model axes by `angle` around `axis` (right-handed).
    pub fn rotate(self, axis: Vec3, angle: Angle) -> Result<Self, TransformError> {
        if axis.norm() < DEGENERATE_EPSILON {
            return Err(TransformError::DegenerateAxis(axis));
        }
        Ok(self.compose(Mat4::rotater(axis, -angle), Mat4::rotater(axis, angle)))
    }

    /// Scales the model axes by `s`, independently for x, y and z.
    pub fn scale(self, s: Vec3) -> Result<Self, TransformError> {
        if s.x.abs() < DEGENERATE_EPSILON
            || s.y.abs() < DEGENERATE_EPSILON
            || s.z.abs() < DEGENERATE_EPSILON
        {
            return Err(TransformError::DegenerateScale(s));
        }
        let inv = Vec3::new(1.0 / s.x, 1.0 / s.y, 1.0 / s.z);
        Ok(self.compose(Mat4::nonuniform_scale(inv), Mat4::nonuniform_scale(s)))
    }

    pub fn world_to_model(&self) -> &Mat4 {
        &self.world_to_model
    }
    pub fn model_to_world(&self) -> &Mat4 {
        &self.model_to_world
    }
    pub fn normal_to_world(&self) -> &Mat4 {
        &self.normal_to_world
    }

    /// Transforms a world-space ray into model space. The ray parameter is preserved: a hit at `t`
    /// in model space is at `t` along the world-space ray as well.
    pub fn ray_to_model(&self, r: &Ray) -> Ray {
        Ray::new(self.world_to_model * r.origin, self.world_to_model * r.dir).with_extent(r.t_max)
    }

    pub fn ray_to_world(&self, r: &Ray) -> Ray {
        Ray::new(self.model_to_world * r.origin, self.model_to_world * r.dir).with_extent(r.t_max)
    }

    /// Carries a model-space normal into world space and renormalizes it.
    pub fn normal_to_world_hat(&self, n: Vec3) -> Vec3 {
        (self.normal_to_world * n).hat()
    }
}

impl std::fmt::Display for RayTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "world_to_model = {}", self.world_to_model)
    }
}
