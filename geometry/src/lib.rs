pub mod camera;
pub mod ray;
/// Builds world-to-model ray transforms out of translations, rotations and scalings.
pub mod transform;

pub use transform::{RayTransform, TransformError};
