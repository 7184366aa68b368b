use itertools::iproduct;
use rand::Rng;
use radiometry::color::Color;
use shape::Hit;

use crate::{Film, Scene};

impl Scene {
    /// Averages N x N stratified samples over pixel (`i`, `j`), N being the antialias setting.
    ///
    /// Sample (a, b) lands in the center of sub-cell (a, b), or at a uniformly random spot inside
    /// it when jittering. `rng` is only drawn from when jittering.
    pub fn render_pixel<R: Rng + ?Sized>(&self, i: u32, j: u32, rng: &mut R) -> Color {
        let n = self.config.antialias.max(1);
        let cell = 1.0 / n as f32;
        let mut hit = Hit::sky(self.config.sky_color);

        let total: Color = iproduct!(0..n, 0..n)
            .map(|(a, b)| {
                let (du, dv) = if self.config.jitter {
                    (rng.gen::<f32>(), rng.gen::<f32>())
                } else {
                    (0.5, 0.5)
                };
                let x = i as f32 + (a as f32 + du) * cell;
                let y = j as f32 + (b as f32 + dv) * cell;
                let ray = self.camera.primary_ray(x, y);
                self.trace_ray(&ray, &mut hit, self.config.max_bounces)
            })
            .sum();
        total.scale_down_by(n * n)
    }

    /// Renders film row `j` into `row`, one color per column.
    pub fn render_row<R: Rng + ?Sized>(&self, j: u32, row: &mut [Color], rng: &mut R) {
        for (i, pixel) in row.iter_mut().enumerate() {
            *pixel = self.render_pixel(i as u32, j, rng);
        }
    }

    /// Renders every pixel into `film`, bottom row first. `on_row` runs after each row, e.g. to
    /// report progress.
    ///
    /// Panics if the film and the camera resolutions differ.
    pub fn render<R, F>(&self, film: &mut Film, rng: &mut R, mut on_row: F)
    where
        R: Rng + ?Sized,
        F: FnMut(u32),
    {
        assert_eq!(
            film.resolution(),
            self.camera.resolution(),
            "film doesn't match the camera"
        );
        let (_, height) = film.resolution();
        for j in 0..height {
            self.render_row(j, film.row_mut(j), rng);
            on_row(j);
        }
        let samples = self.config.antialias.max(1);
        log::info!(
            "Rendered {}x{} pixels with {} samples each",
            film.resolution().0,
            height,
            samples * samples
        );
    }
}
