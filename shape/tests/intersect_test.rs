use geometry::ray::Ray;
use itertools::Itertools;
use math::hcm::{point3, vec3, Point3, Vec3};
use math::{assert_close, assert_le, assert_lt};
use radiometry::color::Color;
use shape::{Grid, GroundPlane, Hit, Material, Pattern, Shape, SKY_DISTANCE};

const SKY: Color = Color::new(0.3, 1.0, 1.0);

/// Casts a ray straight down onto model point (x, y, 0) from z = 1.
fn downward_at(x: f32, y: f32) -> Ray {
    Ray::new(point3(x, y, 1.0), vec3(0.0, 0.0, -1.0))
}

#[test]
fn ground_plane_line_test() {
    let plane = Shape::ground_plane();
    let mut hit = Hit::sky(SKY);
    assert!(plane.intersect(&downward_at(0.05, 0.5), &mut hit, false));
    assert_eq!(hit.pattern, Pattern::Line);
    assert_eq!(plane.color_of(hit.pattern), Some(plane.material().line));

    let mut hit = Hit::sky(SKY);
    assert!(plane.intersect(&downward_at(0.5, 0.5), &mut hit, false));
    assert_eq!(hit.pattern, Pattern::Base);

    // Lines of constant y count as well: y = 0 is on a line whatever x is.
    let mut hit = Hit::sky(SKY);
    assert!(plane.intersect(&downward_at(0.5, 0.0), &mut hit, false));
    assert_eq!(hit.pattern, Pattern::Line);
}

#[test]
fn ground_plane_hit_record() {
    let plane = Shape::ground_plane();
    let ray = Ray::new(point3(1.0, 2.0, 4.0), vec3(0.0, 3.0, -2.0));
    let mut hit = Hit::sky(SKY);
    assert!(plane.intersect(&ray, &mut hit, false));
    assert_eq!(hit.t, 2.0);
    assert_eq!(hit.pos, point3(1.0, 8.0, 0.0));
    assert_eq!(hit.model_pos, hit.pos);
    assert_close!(hit.normal, Vec3::Z);
    assert_close!(hit.view_dir, vec3(0.0, -3.0, 2.0).hat());
    assert!(std::ptr::eq(hit.shape.unwrap(), &plane));
}

#[test]
fn plane_behind_ray_is_rejected() {
    let plane = Shape::ground_plane();
    let mut hit = Hit::sky(SKY);
    let ray = Ray::new(point3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0));
    assert!(!plane.intersect(&ray, &mut hit, false));
    assert!(!plane.intersect(&ray, &mut hit, true));
    assert!(hit.is_sky());
}

#[test]
fn pattern_follows_transformed_plane() {
    // A plane lifted to z = 2 and shifted by half a cell: the model-space point decides the color.
    let plane = Shape::ground_plane().translate(vec3(0.5, 0.0, 2.0));
    let mut hit = Hit::sky(SKY);
    assert!(plane.intersect(&Ray::new(point3(0.55, 0.5, 5.0), -Vec3::Z), &mut hit, false));
    assert_eq!(hit.t, 3.0);
    assert_close!(hit.model_pos, point3(0.05, 0.5, 0.0));
    assert_eq!(hit.pattern, Pattern::Line);
}

#[test]
fn disk_radius_boundary() {
    let disk = Shape::disk(2.0);
    let mut hit = Hit::sky(SKY);
    assert!(disk.intersect(&downward_at(2.0, 0.0), &mut hit, false));
    assert_eq!(hit.t, 1.0);

    let mut hit = Hit::sky(SKY);
    assert!(!disk.intersect(&downward_at(2.0 + 1e-3, 0.0), &mut hit, false));
    assert!(!disk.intersect(&downward_at(2.0 + 1e-3, 0.0), &mut hit, true));
    assert!(hit.is_sky());
}

#[test]
fn disk_swaps_line_and_base() {
    let disk = Shape::disk(2.0);
    let grid = Grid::disk_default();
    let mut hit = Hit::sky(SKY);
    assert!(disk.intersect(&downward_at(0.01, 0.3), &mut hit, false));
    assert!(grid.on_line(hit.model_pos));
    assert_eq!(hit.pattern, Pattern::Base);

    let mut hit = Hit::sky(SKY);
    assert!(disk.intersect(&downward_at(0.3, 0.3), &mut hit, false));
    assert!(!grid.on_line(hit.model_pos));
    assert_eq!(hit.pattern, Pattern::Line);
}

#[test]
fn tilted_disk_normal() {
    let disk = Shape::disk(2.0)
        .rotate(Vec3::X, math::new_deg(90.0))
        .unwrap();
    // Rotated 90 degrees about x, the disk stands in the xz plane and faces -y.
    let mut hit = Hit::sky(SKY);
    let ray = Ray::new(point3(0.3, -5.0, 0.3), vec3(0.0, 1.0, 0.0));
    assert!(disk.intersect(&ray, &mut hit, false));
    assert_le!((hit.t - 5.0).abs(), 1e-5);
    assert_le!(1.0 - hit.normal.dot(-Vec3::Y), 1e-5);
}

#[test]
fn sphere_tangent_ray() {
    let sphere = Shape::sphere();
    let ray = Ray::new(point3(1.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));
    let mut hit = Hit::sky(SKY);
    assert!(sphere.intersect(&ray, &mut hit, false));
    assert!(hit.t.is_finite());
    assert_eq!(hit.t, 5.0);
    assert_eq!(hit.pos, point3(1.0, 0.0, 0.0));
    assert_close!(hit.normal, Vec3::X);
    assert_eq!(hit.pattern, Pattern::Base);

    let grazing = Ray::new(point3(1.0 + 1e-3, 0.0, 5.0), vec3(0.0, 0.0, -1.0));
    let mut hit = Hit::sky(SKY);
    assert!(!sphere.intersect(&grazing, &mut hit, false));
}

#[test]
fn distant_sphere_hit_stays_on_surface() {
    // Seen from 400 units away, the hit point must still land on the sphere, not inside it.
    let target = point3(0.6, 0.0, 0.8);
    let toward = vec3(-0.5, 0.3, -0.6).hat();
    let ray = Ray::new(target - toward * 400.0, toward * 400.0);
    let mut hit = Hit::sky(SKY);
    let sphere = Shape::sphere();
    assert!(sphere.intersect(&ray, &mut hit, false));
    assert_lt!((hit.pos - target).norm(), 1e-3);
    assert_lt!((Vec3::from(hit.pos).norm() - 1.0).abs(), 5e-4);
}

#[test]
fn ellipsoid_normal_is_not_radial() {
    // A sphere squashed along z: at the 45-degree point in the xz plane the normal tilts toward z.
    let ellipsoid = Shape::sphere().scale(vec3(1.0, 1.0, 0.5)).unwrap();
    let target = point3(0.5f32.sqrt(), 0.0, 0.5 * 0.5f32.sqrt());
    let ray = Ray::new(point3(target.x, 0.0, 5.0), -Vec3::Z);
    let mut hit = Hit::sky(SKY);
    assert!(ellipsoid.intersect(&ray, &mut hit, false));
    assert_close!(hit.pos, target);
    assert_close!(hit.normal, vec3(1.0, 0.0, 2.0).hat());
}

#[test]
fn ray_inside_sphere_is_a_silent_hit() {
    let sphere = Shape::sphere().scale(vec3(3.0, 3.0, 3.0)).unwrap();
    let ray = Ray::new(Point3::ORIGIN, Vec3::X);
    let mut hit = Hit::sky(SKY);
    assert!(sphere.intersect(&ray, &mut hit, false));
    assert!(hit.is_sky());
    assert_eq!(hit.t, SKY_DISTANCE);
}

#[test]
fn shadow_rays_leave_hit_untouched() {
    let shapes = vec![
        Shape::ground_plane(),
        Shape::disk(2.0).translate(vec3(0.0, 0.0, 1.0)),
        Shape::sphere().translate(vec3(0.0, 0.0, 3.0)),
    ];
    let ray = Ray::new(point3(0.2, 0.1, 10.0), vec3(0.0, 0.0, -1.0));
    let mut hit = Hit::sky(SKY);
    for shape in shapes.iter() {
        assert!(shape.intersect(&ray, &mut hit, true));
    }
    assert!(hit.is_sky());
    assert_eq!(hit.t, SKY_DISTANCE);
    assert_eq!(hit.pattern, Pattern::Sky);
    assert_eq!(hit.color, SKY);

    // Once a hit is recorded, shadow tests don't overwrite it either.
    assert!(shapes[2].intersect(&ray, &mut hit, false));
    let recorded = hit;
    for shape in shapes.iter() {
        shape.intersect(&ray, &mut hit, true);
    }
    assert_eq!(hit.t, recorded.t);
    assert_eq!(hit.pos, recorded.pos);
    assert_eq!(hit.pattern, recorded.pattern);
    assert!(std::ptr::eq(hit.shape.unwrap(), recorded.shape.unwrap()));
}

#[test]
fn shadow_ray_extent() {
    let plane = Shape::ground_plane();
    let mut hit = Hit::sky(SKY);
    // The plane is 2 units away but the ray stops after 1.
    let short = Ray::new(point3(0.0, 0.0, 2.0), vec3(0.0, 0.0, -1.0)).with_extent(1.0);
    assert!(!plane.intersect(&short, &mut hit, true));
    assert!(plane.intersect(&short.with_extent(2.0), &mut hit, true));
}

#[test]
fn nearest_hit_wins_in_any_order() {
    let shapes = vec![
        Shape::ground_plane(),
        Shape::disk(2.0).translate(vec3(0.0, 0.0, 1.0)),
        Shape::sphere().translate(vec3(0.0, 0.0, 3.0)),
        Shape::new(GroundPlane::new(Grid::default()), Material::uniform(Color::white()))
            .translate(vec3(0.0, 0.0, -1.0)),
    ];
    let rays = [
        Ray::new(point3(0.0, 0.0, 10.0), vec3(0.0, 0.0, -1.0)),
        Ray::new(point3(1.5, 0.3, 10.0), vec3(0.0, 0.0, -1.0)),
        Ray::new(point3(5.0, 5.0, 10.0), vec3(0.0, 0.1, -1.0)),
    ];
    let expected_t = [6.0, 9.0, 10.0];

    for (ray, t) in rays.iter().zip(expected_t.iter()) {
        for order in (0..shapes.len()).permutations(shapes.len()) {
            let mut hit = Hit::sky(SKY);
            for &i in order.iter() {
                shapes[i].intersect(ray, &mut hit, false);
            }
            assert_le!((hit.t - t).abs(), 1e-5);
            let nearest = shapes
                .iter()
                .min_by(|a, b| {
                    let ta = first_t(a, ray);
                    let tb = first_t(b, ray);
                    ta.partial_cmp(&tb).unwrap()
                })
                .unwrap();
            assert!(std::ptr::eq(hit.shape.unwrap(), nearest), "order = {:?}", order);
        }
    }
}

fn first_t(shape: &Shape, ray: &Ray) -> f32 {
    let mut hit = Hit::sky(SKY);
    shape.intersect(ray, &mut hit, false);
    hit.t
}
