use math::hcm::{point3, Point3};
use radiometry::color::Color;

/// Constants of one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Distance a shadow or reflection ray starts back from its hit point, against the incoming
    /// ray, so that it doesn't hit the surface it leaves.
    pub epsilon: f32,
    pub sky_color: Color,
    /// Replaces the whole shading result of a point that can't see the light.
    pub shadow_color: Color,
    pub light_position: Point3,
    /// Upper bound on `trace_ray` nesting along one primary ray, the primary ray included.
    pub max_bounces: u32,
    /// Weight of the reflected color added on top of the surface color. Not energy-conserving.
    pub reflectance: f32,
    /// Each pixel averages `antialias` x `antialias` samples.
    pub antialias: u32,
    /// Randomizes sample positions within their sub-pixel cell.
    pub jitter: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-3,
            sky_color: Color::new(0.3, 1.0, 1.0),
            shadow_color: Color::black(),
            light_position: point3(-15.0, -15.0, 15.0),
            max_bounces: 3,
            reflectance: 0.4,
            antialias: 1,
            jitter: false,
        }
    }
}

impl SceneConfig {
    pub fn with_antialias(self, antialias: u32, jitter: bool) -> Self {
        assert!(antialias > 0, "need at least one sample per pixel");
        Self {
            antialias,
            jitter,
            ..self
        }
    }

    pub fn with_max_bounces(self, max_bounces: u32) -> Self {
        Self {
            max_bounces,
            ..self
        }
    }

    pub fn with_light(self, light_position: Point3) -> Self {
        Self {
            light_position,
            ..self
        }
    }
}
