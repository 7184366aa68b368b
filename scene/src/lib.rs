pub mod config;
pub mod film;
pub mod preset;
mod render;
mod tracer;

use geometry::camera::Camera;
use geometry::TransformError;
use shape::Shape;

pub use config::SceneConfig;
pub use film::Film;

/// Everything a render pass reads: the shapes, the camera, and the tracing constants.
///
/// The shape list order is the test order, which never changes the result: every ray keeps only
/// its nearest hit.
#[derive(Debug, Clone)]
pub struct Scene {
    shapes: Vec<Shape>,
    pub camera: Camera,
    pub config: SceneConfig,
}

impl Scene {
    pub fn new(camera: Camera, config: SceneConfig) -> Self {
        Self {
            shapes: vec![],
            camera,
            config,
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.push(shape);
        self
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Adds a shape whose transform was built fallibly. A shape that failed to build is left out
    /// of the scene; returns whether the shape was added.
    pub fn try_push(&mut self, shape: Result<Shape, TransformError>) -> bool {
        match shape {
            Ok(shape) => {
                self.push(shape);
                true
            }
            Err(e) => {
                log::warn!("Dropping shape #{}: {}", self.shapes.len(), e);
                false
            }
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Resizes the camera film, e.g. to match a different output buffer.
    pub fn set_resolution(&mut self, resolution: (u32, u32)) {
        self.camera = self.camera.clone().with_resolution(resolution);
    }

    pub fn summary(&self) -> String {
        let (width, height) = self.camera.resolution();
        let mut lines = vec![format!(
            "{} shapes, {}x{} film, eye at {}",
            self.shapes.len(),
            width,
            height,
            self.camera.eye()
        )];
        lines.extend(
            self.shapes
                .iter()
                .enumerate()
                .map(|(i, s)| format!("  #{}: {}", i, s.summary())),
        );
        lines.join("\n")
    }
}
