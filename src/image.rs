use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use scene::Film;

/// Writes the film as an 8-bit RGB PNG, top row first.
pub fn write_png(film: &Film, path: &Path) -> anyhow::Result<()> {
    let (width, height) = film.resolution();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let ref mut w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::RGB);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&film.to_rgb8())?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Writes the unclamped linear colors as an OpenEXR image.
pub fn write_exr(film: &Film, path: &Path) -> anyhow::Result<()> {
    let (width, height) = film.resolution();
    exr::prelude::write_rgb_file(path, width as usize, height as usize, |x, y| {
        // EXR rows run top-down; film rows bottom-up.
        let c = film.get(x as u32, height - 1 - y as u32);
        (c.r, c.g, c.b)
    })
    .with_context(|| format!("writing {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
