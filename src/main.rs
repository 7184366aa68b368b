mod cli_options;
mod image;

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli_options::CliOptions;
use scene::{preset, Film, SceneConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let options = cli_options::parse_args(args).map_err(anyhow::Error::msg)?;
    if options.show_help {
        println!("usage: {}", CliOptions::message());
        return Ok(());
    }

    let config = SceneConfig::default()
        .with_antialias(options.antialias, options.jitter)
        .with_max_bounces(options.bounces);
    let camera = preset::default_camera(
        (options.width, options.height),
        math::new_deg(options.fov_deg),
    );
    let scene = preset::preset(options.scene, camera, config);
    log::info!("Scene #{}: {} shapes", options.scene, scene.shapes().len());

    let mut film = Film::new(scene.camera.resolution());
    let mut rng = StdRng::seed_from_u64(options.seed);
    let progress = ProgressBar::new(options.height as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}"),
    );

    let start_time = std::time::Instant::now();
    scene.render(&mut film, &mut rng, |_| progress.inc(1));
    progress.finish();
    log::info!("Render time: {:.2?}", start_time.elapsed());

    image::write_png(&film, Path::new(&options.output))?;
    if let Some(exr_path) = options.exr_output.as_ref() {
        image::write_exr(&film, Path::new(exr_path))?;
    }
    Ok(())
}
