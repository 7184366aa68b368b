use geometry::ray::Ray;
use math::hcm::{self, Point3};
use radiometry::color::Color;
use shape::Hit;

use crate::Scene;

impl Scene {
    /// Traces `ray` through every shape and returns its color.
    ///
    /// `hit` is reset to the sky before the shapes are tested and holds the nearest hit
    /// afterwards. With `bounces` below 1 nothing is traced and black (no contribution) returns.
    pub fn trace_ray<'a>(&'a self, ray: &Ray, hit: &mut Hit<'a>, bounces: u32) -> Color {
        if bounces < 1 {
            return Color::black();
        }
        hit.reset(self.config.sky_color);
        for shape in self.shapes.iter() {
            shape.intersect(ray, hit, false);
        }
        self.shade(ray, hit, bounces)
    }

    /// Colors the nearest hit of `ray`: shadow color if the light is blocked, otherwise the
    /// surface color plus a weighted mirror reflection traced with one bounce less.
    pub fn shade<'a>(&'a self, ray: &Ray, hit: &mut Hit<'a>, bounces: u32) -> Color {
        let sky = self.config.sky_color;
        let shape = match hit.shape {
            None => {
                hit.color = sky;
                return sky;
            }
            Some(shape) => shape,
        };

        // Backs off along the incoming ray so the new rays start above the surface.
        let source = hit.pos - ray.dir.hat() * self.config.epsilon;
        if self.is_in_shadow(source, self.config.light_position) {
            hit.color = self.config.shadow_color;
            return hit.color;
        }

        let base = shape.color_of(hit.pattern).unwrap_or(sky);
        let reflected = hcm::reflect(hit.normal, ray.dir);

        let bounces = bounces.saturating_sub(1);
        if bounces < 1 {
            hit.color = base;
            return base;
        }
        let bounce_ray = self.camera.ray_in_direction(source, reflected);
        let mut bounce_hit = Hit::sky(sky);
        let bounced = self.trace_ray(&bounce_ray, &mut bounce_hit, bounces);
        log::trace!("bounce from {} with {} left: {}", hit, bounces, bounced);

        hit.color = base.add_weighted(bounced, self.config.reflectance);
        hit.color
    }

    /// Returns true if any shape lies between `source` and the point light at `light`.
    pub fn is_in_shadow(&self, source: Point3, light: Point3) -> bool {
        let shadow_ray = self.camera.ray_toward(source, light);
        // Shadow tests never write to the hit; it only satisfies the intersection interface.
        let mut unused = Hit::sky(self.config.sky_color);
        self.shapes
            .iter()
            .any(|shape| shape.intersect(&shadow_ray, &mut unused, true))
    }
}
