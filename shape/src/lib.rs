mod hit;
mod simple;

use enum_dispatch::enum_dispatch;
use geometry::ray::Ray;
use geometry::{RayTransform, TransformError};
use math::hcm::{Point3, Vec3};
use math::Angle;
use radiometry::color::Color;

pub use hit::{Hit, Pattern, SKY_DISTANCE};
pub use simple::*;

/// Result of solving a model-space ray against a canonical surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    Miss,
    /// The ray starts on or inside a closed surface. Counts as a hit, but yields no shading data.
    FromInside,
    /// The nearest crossing is at this ray parameter; it may still lie behind the origin.
    At(f32),
}

/// Canonical surfaces living in their own model space: the infinite z = 0 plane, a disk in the
/// z = 0 plane, and the unit sphere at the origin.
/// - `solve()` finds where a model-space ray meets the surface,
/// - `model_normal()` and `pattern()` evaluate the surface at a model-space point on it.
#[enum_dispatch]
pub trait Primitive {
    fn summary(&self) -> String;
    fn solve(&self, r: &Ray) -> Crossing;
    fn model_normal(&self, p: Point3) -> Vec3;
    fn pattern(&self, p: Point3) -> Pattern;
}

#[enum_dispatch(Primitive)]
#[derive(Debug, Clone)]
pub enum ShapeKind {
    GroundPlane,
    Disk,
    Sphere,
}

/// The two colors of a shape: `base` for the surface, `line` for the procedural grid lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub base: Color,
    pub line: Color,
}

impl Material {
    pub const fn new(base: Color, line: Color) -> Self {
        Self { base, line }
    }
    pub const fn uniform(color: Color) -> Self {
        Self::new(color, color)
    }
}

/// One traceable primitive: what it is, how it's colored, and where it sits in the world.
///
/// Only the world-to-model transform is stored; rays are brought into model space for testing,
/// and the shape itself never moves.
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    material: Material,
    transform: RayTransform,
}

pub const GRID_LINE_COLOR: Color = Color::new(0.1, 0.5, 0.1);
pub const GRID_GAP_COLOR: Color = Color::new(0.9, 0.9, 0.9);
pub const SPHERE_COLOR: Color = Color::new(0.0, 0.3, 1.0);

impl Shape {
    pub fn new<K: Into<ShapeKind>>(kind: K, material: Material) -> Self {
        Self {
            kind: kind.into(),
            material,
            transform: RayTransform::identity(),
        }
    }

    /// Green grid lines on a near-white plane, one unit apart.
    pub fn ground_plane() -> Self {
        Self::new(
            GroundPlane::new(Grid::default()),
            Material::new(GRID_GAP_COLOR, GRID_LINE_COLOR),
        )
    }

    pub fn disk(radius: f32) -> Self {
        Self::new(
            Disk::new(radius, Grid::disk_default()),
            Material::new(GRID_GAP_COLOR, GRID_LINE_COLOR),
        )
    }

    pub fn sphere() -> Self {
        Self::new(Sphere, Material::uniform(SPHERE_COLOR))
    }

    pub fn with_material(self, material: Material) -> Self {
        Self { material, ..self }
    }

    pub fn translate(self, t: Vec3) -> Self {
        Self {
            transform: self.transform.translate(t),
            ..self
        }
    }

    pub fn rotate(self, axis: Vec3, angle: Angle) -> Result<Self, TransformError> {
        Ok(Self {
            transform: self.transform.rotate(axis, angle)?,
            ..self
        })
    }

    pub fn scale(self, s: Vec3) -> Result<Self, TransformError> {
        Ok(Self {
            transform: self.transform.scale(s)?,
            ..self
        })
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }
    pub fn material(&self) -> &Material {
        &self.material
    }
    pub fn transform(&self) -> &RayTransform {
        &self.transform
    }

    pub fn summary(&self) -> String {
        format!("{} {}", self.kind.summary(), self.transform)
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ShapeKind::GroundPlane(_) => "GroundPlane",
            ShapeKind::Disk(_) => "Disk",
            ShapeKind::Sphere(_) => "Sphere",
        }
    }

    /// Looks up the color for a pattern tag; `None` for the sky.
    pub fn color_of(&self, pattern: Pattern) -> Option<Color> {
        match pattern {
            Pattern::Base => Some(self.material.base),
            Pattern::Line => Some(self.material.line),
            Pattern::Sky => None,
        }
    }

    /// Tests the world-space ray `r` against this shape.
    ///
    /// For a regular ray, `hit` is overwritten only if this shape is hit strictly closer than the
    /// hit it already holds, so testing every shape in any order leaves the nearest one in `hit`.
    /// For a shadow ray, any crossing within the ray's extent returns true and `hit` is untouched.
    pub fn intersect<'a>(&'a self, r: &Ray, hit: &mut Hit<'a>, is_shadow_ray: bool) -> bool {
        let model_ray = self.transform.ray_to_model(r);
        let t = match self.kind.solve(&model_ray) {
            Crossing::Miss => return false,
            Crossing::FromInside => return true,
            Crossing::At(t) => t,
        };
        let t = match model_ray.truncated_t(t) {
            Some(t) => t,
            None => return false,
        };
        if is_shadow_ray {
            return true;
        }
        if !(t < hit.t) {
            return false;
        }

        let model_pos = model_ray.position_at(t);
        hit.t = t;
        hit.shape = Some(self);
        hit.model_pos = model_pos;
        hit.pos = r.position_at(t);
        hit.view_dir = (-r.dir).hat();
        hit.normal = self
            .transform
            .normal_to_world_hat(self.kind.model_normal(model_pos));
        hit.pattern = self.kind.pattern(model_pos);
        true
    }
}
