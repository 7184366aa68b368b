use crate::ray::Ray;
use math::hcm::{self, Point3, Vec3};

/// Pinhole camera in a right-handed world.
///
/// Pixel coordinates start at the lower-left corner of the film: x grows rightward and y grows
/// upward. Fractional coordinates address points inside a pixel, so (i + 0.5, j + 0.5) is the
/// center of pixel (i, j).
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Point3,
    // Columns: camera right, camera up, viewing direction.
    orientation: hcm::Mat3,
    fov_y: math::Angle,

    // Half-extents of the image plane at unit distance from the eye.
    half_width: f32,
    half_height: f32,

    // Film image resolution.
    width: u32,
    height: u32,
}

impl Camera {
    /// Builds a camera at the origin looking down -z with +y up.
    pub fn new(resolution: (u32, u32), fov_y: math::Angle) -> Camera {
        let (width, height) = resolution;
        assert!(width > 0 && height > 0, "empty film {}x{}", width, height);
        let half_height = (fov_y * 0.5).tan();
        let half_width = half_height * width as f32 / height as f32;

        Camera {
            eye: Point3::ORIGIN,
            orientation: hcm::Mat3::from_cols(Vec3::X, Vec3::Y, -Vec3::Z),
            fov_y,
            half_width,
            half_height,
            width,
            height,
        }
    }

    /// Places the camera at `from` and aims it at `target`. `up` only needs to be non-parallel to
    /// the viewing direction; it is re-orthogonalized.
    pub fn looking_at(self, from: Point3, target: Point3, up: Vec3) -> Self {
        let forward = (target - from).hat();
        let right = forward.cross(up).hat();
        let up = right.cross(forward);

        Self {
            orientation: hcm::Mat3::from_cols(right, up, forward),
            eye: from,
            ..self
        }
    }

    /// Changes the film resolution, keeping the pose and the vertical field of view.
    pub fn with_resolution(self, resolution: (u32, u32)) -> Self {
        let resized = Self::new(resolution, self.fov_y);
        Self {
            eye: self.eye,
            orientation: self.orientation,
            ..resized
        }
    }

    /// Returns the world-space ray from the eye through film position (`x`, `y`).
    pub fn primary_ray(&self, x: f32, y: f32) -> Ray {
        let u = (2.0 * x / self.width as f32 - 1.0) * self.half_width;
        let v = (2.0 * y / self.height as f32 - 1.0) * self.half_height;
        let dir = self.orientation * Vec3::new(u, v, 1.0);
        Ray::new(self.eye, dir)
    }

    pub fn ray_in_direction(&self, origin: Point3, dir: Vec3) -> Ray {
        Ray::new(origin, dir)
    }

    /// Returns the ray from `origin` that reaches `target` at t = 1 and stops there.
    pub fn ray_toward(&self, origin: Point3, target: Point3) -> Ray {
        Ray::new(origin, target - origin).with_extent(1.0)
    }

    pub fn eye(&self) -> Point3 {
        self.eye
    }

    /// Returns resolution (width x height) of the camera film.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
