use math::hcm::{Point3, Vec3};
use radiometry::color::Color;
use std::fmt::{Display, Formatter, Result};

use crate::Shape;

/// Ray parameter of the "sky": farther than any hit point a scene can produce.
pub const SKY_DISTANCE: f32 = 1.23e16;

/// Which color a hit point takes from its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Base,
    Line,
    Sky,
}

/// The nearest ray-surface intersection found so far for one traced ray.
///
/// Start from `Hit::sky()` (or `reset()`), then let every shape in the scene try to improve it
/// with `Shape::intersect()`. Afterwards `t` and `shape` describe the closest hit in front of the
/// ray origin, or still hold the sky sentinel if nothing was hit.
///  - `pos`: world-space hit point; `model_pos`: the same point in the shape's model space, where
///    procedural patterns are evaluated so they stay glued to the shape.
///  - `normal`: unit world-space surface normal.
///  - `view_dir`: unit vector from the hit point back toward the ray origin.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub t: f32,
    pub shape: Option<&'a Shape>,
    pub pos: Point3,
    pub model_pos: Point3,
    pub normal: Vec3,
    pub view_dir: Vec3,
    pub pattern: Pattern,
    pub color: Color,
}

impl<'a> Hit<'a> {
    pub fn sky(sky_color: Color) -> Self {
        let far = Point3::new(SKY_DISTANCE, 0.0, 0.0);
        Hit {
            t: SKY_DISTANCE,
            shape: None,
            pos: far,
            model_pos: far,
            normal: -Vec3::X,
            view_dir: -Vec3::X,
            pattern: Pattern::Sky,
            color: sky_color,
        }
    }

    /// Forgets any previous hit, making `self` describe a ray that reaches the sky.
    pub fn reset(&mut self, sky_color: Color) {
        *self = Self::sky(sky_color);
    }

    pub fn is_sky(&self) -> bool {
        self.shape.is_none()
    }
}

impl Display for Hit<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.shape {
            None => write!(f, "sky"),
            Some(shape) => write!(
                f,
                "{} at t = {:.3}, pos = {}, normal = {}, pattern = {:?}",
                shape.kind_name(),
                self.t,
                self.pos,
                self.normal,
                self.pattern
            ),
        }
    }
}
