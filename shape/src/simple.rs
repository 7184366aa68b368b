use geometry::ray::Ray;
use math::float::Float;
use math::hcm::{Point3, Vec3};

use crate::{Crossing, Pattern, Primitive};

/// Procedural grid of lines of constant x and constant y.
///
/// A point lies on a line if the fractional part of `|x| / x_gap` or of `|y| / y_gap` is less than
/// `line_width`. `line_width` is a fraction of the spacing, not a length. Taking the absolute
/// value first keeps lines on both sides of each axis the same width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub x_gap: f32,
    pub y_gap: f32,
    pub line_width: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.1)
    }
}

impl Grid {
    pub fn new(x_gap: f32, y_gap: f32, line_width: f32) -> Self {
        assert!(x_gap > 0.0 && y_gap > 0.0, "grid spacing must be positive");
        Self {
            x_gap,
            y_gap,
            line_width,
        }
    }

    /// Disk grids use a spacing of 61/107 (a ratio of primes) so they never line up with the
    /// ground-plane grid.
    pub fn disk_default() -> Self {
        let gap = 61.0 / 107.0;
        Self::new(gap, gap, 0.1)
    }

    pub fn on_line(&self, p: Point3) -> bool {
        (p.x / self.x_gap).abs_fract() < self.line_width
            || (p.y / self.y_gap).abs_fract() < self.line_width
    }
}

/// Solves `origin.z + t * dir.z = 0`. Rays parallel to the plane never cross it.
fn cross_xy_plane(r: &Ray) -> Option<f32> {
    if r.dir.z == 0.0 {
        None
    } else {
        Some(-r.origin.z / r.dir.z)
    }
}

/// The unbounded z = 0 plane, facing +z.
#[derive(Debug, Clone, Copy)]
pub struct GroundPlane {
    pub grid: Grid,
}

impl GroundPlane {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}

impl Primitive for GroundPlane {
    fn summary(&self) -> String {
        format!(
            "GroundPlane{{ gap = ({:.3}, {:.3}), line width = {:.3} }}",
            self.grid.x_gap, self.grid.y_gap, self.grid.line_width
        )
    }
    fn solve(&self, r: &Ray) -> Crossing {
        cross_xy_plane(r).map_or(Crossing::Miss, Crossing::At)
    }
    fn model_normal(&self, _: Point3) -> Vec3 {
        Vec3::Z
    }
    fn pattern(&self, p: Point3) -> Pattern {
        if self.grid.on_line(p) {
            Pattern::Line
        } else {
            Pattern::Base
        }
    }
}

/// A disk of `radius` centered at the origin in the z = 0 plane.
///
/// Colors are swapped relative to the ground plane: grid lines show the base color, and the gaps
/// between them show the line color.
#[derive(Debug, Clone, Copy)]
pub struct Disk {
    pub radius: f32,
    pub grid: Grid,
}

impl Disk {
    pub fn new(radius: f32, grid: Grid) -> Self {
        assert!(radius > 0.0, "disk radius must be positive");
        Self { radius, grid }
    }
}

impl Primitive for Disk {
    fn summary(&self) -> String {
        format!(
            "Disk{{ radius = {:.3}, gap = ({:.3}, {:.3}), line width = {:.3} }}",
            self.radius, self.grid.x_gap, self.grid.y_gap, self.grid.line_width
        )
    }
    fn solve(&self, r: &Ray) -> Crossing {
        let t = match cross_xy_plane(r) {
            Some(t) => t,
            None => return Crossing::Miss,
        };
        let p = r.position_at(t);
        if p.x * p.x + p.y * p.y > self.radius * self.radius {
            Crossing::Miss
        } else {
            Crossing::At(t)
        }
    }
    fn model_normal(&self, _: Point3) -> Vec3 {
        Vec3::Z
    }
    fn pattern(&self, p: Point3) -> Pattern {
        if self.grid.on_line(p) {
            Pattern::Base
        } else {
            Pattern::Line
        }
    }
}

/// The unit sphere centered at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl Primitive for Sphere {
    fn summary(&self) -> String {
        String::from("Sphere{ unit }")
    }

    // Half-chord method: first measure the triangle made of the ray origin, the sphere center and
    // the chord midpoint, then the triangle made of the center, the chord midpoint and the nearer
    // crossing. Squared lengths are used throughout; `dir` can have any nonzero length.
    fn solve(&self, r: &Ray) -> Crossing {
        let to_center = Point3::ORIGIN - r.origin;
        let l2 = to_center.norm_squared();
        if l2 <= 1.0 {
            return Crossing::FromInside;
        }
        // Projection of `to_center` onto the ray, scaled by |dir|.
        let tca_scaled = r.dir.dot(to_center);
        if tca_scaled < 0.0 {
            return Crossing::Miss;
        }
        let dir_len2 = r.dir.norm_squared();
        // Squared distance from the center to the ray line. Taken from the cross product rather
        // than as `l2 - tca^2`, which loses most of its bits when the sphere is far away.
        let lm2 = to_center.cross(r.dir).norm_squared() / dir_len2;
        if lm2 > 1.0 {
            return Crossing::Miss;
        }
        // Squared half-chord length; zero for a tangent ray.
        let half_chord2 = 1.0 - lm2;
        Crossing::At(tca_scaled / dir_len2 - (half_chord2 / dir_len2).sqrt())
    }
    fn model_normal(&self, p: Point3) -> Vec3 {
        Vec3::from(p)
    }
    fn pattern(&self, _: Point3) -> Pattern {
        Pattern::Base
    }
}
