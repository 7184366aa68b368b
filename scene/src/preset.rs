use geometry::camera::Camera;
use geometry::TransformError;
use math::hcm::{point3, vec3, Vec3};
use radiometry::color::Color;
use shape::{Material, Shape, GRID_GAP_COLOR, GRID_LINE_COLOR};

use crate::{Scene, SceneConfig};

pub const NUM_PRESETS: u32 = 5;
pub const DISK_RADIUS: f32 = 2.0;

/// Default viewpoint shared by all presets: above and in front of the origin, looking down a bit.
pub fn default_camera(resolution: (u32, u32), fov_y: math::Angle) -> Camera {
    Camera::new(resolution, fov_y).looking_at(
        point3(0.0, -9.0, 4.0),
        point3(0.0, 0.0, 1.0),
        Vec3::Z,
    )
}

// Functions that build the shape lists.
// ------------------------------------------------------------------------------------------------

fn two_disks_and_a_sphere() -> Vec<Result<Shape, TransformError>> {
    let disk1 = Shape::disk(DISK_RADIUS)
        .with_material(Material::new(
            Color::new(0.3, 0.6, 0.7),
            Color::new(0.7, 0.3, 0.3),
        ))
        .translate(vec3(1.0, 1.0, 1.3))
        .rotate(Vec3::X, math::new_deg(45.0))
        .and_then(|s| s.rotate(Vec3::Z, math::new_deg(45.0)));
    let disk2 = Shape::disk(DISK_RADIUS)
        .with_material(Material::new(
            Color::new(0.0, 0.0, 1.0),
            Color::new(1.0, 1.0, 0.0),
        ))
        .translate(vec3(-1.0, 1.0, 1.3))
        .rotate(Vec3::X, math::new_deg(135.0))
        .and_then(|s| s.rotate(Vec3::Z, math::new_deg(60.0)));
    vec![
        Ok(Shape::ground_plane()),
        disk1,
        disk2,
        Ok(Shape::sphere().translate(vec3(1.2, -1.0, 1.0))),
    ]
}

fn three_spheres() -> Vec<Result<Shape, TransformError>> {
    vec![
        Ok(Shape::ground_plane()),
        Ok(Shape::sphere().translate(vec3(2.2, 0.2, 1.0))),
        Ok(Shape::sphere().translate(vec3(-2.2, 0.2, 1.0))),
        Ok(Shape::sphere().translate(vec3(0.0, 0.2, 1.0))),
    ]
}

fn spheres_and_flat_disk() -> Vec<Result<Shape, TransformError>> {
    vec![
        Ok(Shape::ground_plane()),
        Ok(Shape::sphere().translate(vec3(1.5, -1.5, 3.0))),
        Ok(Shape::sphere().translate(vec3(-2.5, 2.5, 3.0))),
        Ok(Shape::disk(DISK_RADIUS).translate(vec3(0.0, 0.0, 0.01))),
    ]
}

fn disk_over_sphere() -> Vec<Result<Shape, TransformError>> {
    vec![
        Ok(Shape::ground_plane()),
        Ok(Shape::sphere().translate(vec3(0.0, -1.5, 1.0))),
        Ok(Shape::disk(DISK_RADIUS)
            .with_material(Material::new(GRID_LINE_COLOR, GRID_GAP_COLOR))
            .translate(vec3(0.0, -1.5, 3.0))),
    ]
}

fn squashed_sphere() -> Vec<Result<Shape, TransformError>> {
    vec![
        Ok(Shape::ground_plane()),
        Shape::sphere()
            .translate(vec3(2.2, 0.2, 1.0))
            .scale(vec3(1.0, 0.2, 1.0)),
        Ok(Shape::sphere().translate(vec3(-2.2, 0.2, 1.0))),
    ]
}

/// Builds preset scene number `id`. Unknown numbers fall back to preset 0.
///
/// Shapes whose transforms fail to build are left out of the scene with a warning.
pub fn preset(id: u32, camera: Camera, config: SceneConfig) -> Scene {
    let shapes = match id {
        0 => two_disks_and_a_sphere(),
        1 => three_spheres(),
        2 => spheres_and_flat_disk(),
        3 => disk_over_sphere(),
        4 => squashed_sphere(),
        _ => {
            log::warn!("No preset #{}, using #0", id);
            two_disks_and_a_sphere()
        }
    };
    let mut scene = Scene::new(camera, config);
    for shape in shapes.into_iter() {
        scene.try_push(shape);
    }
    log::debug!("Preset #{}: {}", id, scene.summary());
    scene
}

#[cfg(test)]
mod test {
    use super::*;
    use shape::ShapeKind;

    fn build(id: u32) -> Scene {
        let camera = default_camera((16, 12), math::new_deg(40.0));
        preset(id, camera, SceneConfig::default())
    }

    #[test]
    fn shape_counts() {
        let counts = (0..NUM_PRESETS)
            .map(|id| build(id).shapes().len())
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![4, 4, 4, 3, 3]);
    }

    #[test]
    fn disks_use_the_standard_radius() {
        let radii = (0..NUM_PRESETS)
            .flat_map(|id| {
                build(id)
                    .shapes()
                    .iter()
                    .filter_map(|s| match s.kind() {
                        ShapeKind::Disk(disk) => Some(disk.radius),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        assert_eq!(radii, vec![2.0; 4]);
    }

    #[test]
    fn unknown_preset_falls_back() {
        let fallback = build(NUM_PRESETS + 3);
        let kinds = |s: &Scene| s.shapes().iter().map(|s| s.kind_name()).collect::<Vec<_>>();
        assert_eq!(kinds(&fallback), kinds(&build(0)));
    }

    #[test]
    fn every_preset_looks_at_something() {
        for id in 0..NUM_PRESETS {
            let scene = build(id);
            let (w, h) = scene.camera.resolution();
            let center = scene.camera.primary_ray(w as f32 * 0.5, h as f32 * 0.5);
            let mut hit = shape::Hit::sky(scene.config.sky_color);
            scene.trace_ray(&center, &mut hit, 1);
            assert!(!hit.is_sky(), "preset {} center pixel sees the sky", id);
        }
    }
}
