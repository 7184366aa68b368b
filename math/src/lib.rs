/// Defines useful functions for common math operations, tools and constants:
/// - `Angle` to represent angles unambiguously,
/// - `Float::abs_fract()` for periodic patterns,
/// - Macros to check if two math quantities are close, less than / greater than (or equal to)
///   each other.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points and vectors, 3x3 and 4x4 matrices.
/// - `Point3` lifts to a `Vec4` with w = 1, `Vec3` with w = 0.
/// - Function `reflect()` to mirror a direction about a surface normal.
pub mod hcm;

pub use float::Angle;
pub fn new_rad(rad: f32) -> float::Angle {
    float::Angle::new_rad(rad)
}
pub fn new_deg(deg: f32) -> float::Angle {
    float::Angle::new_deg(deg)
}
