mod scenes;

use crate::scenes::ScenesType;
use bounce::config::{RenderSettings, ScatterConfig};
use bounce::trace::Renderer;
use bounce::{Result, Scatterer};
use log::{error, info};
use std::time::{Duration, Instant};

const IMAGE_WIDTH: usize = 320;
const IMAGE_HEIGHT: usize = 180;
const RAYS_PER_PIXEL: u32 = 500;
const MAX_DEPTH: i32 = 8;
const THREAD_CNT: usize = 4;
const REPORT_INTERVAL: u32 = 100;
const FILE_PATH_PREFIX: &str = "debug_images/image_";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let start_time = Instant::now();
    let settings = RenderSettings {
        width: IMAGE_WIDTH,
        height: IMAGE_HEIGHT,
        iterations: RAYS_PER_PIXEL,
        max_depth: MAX_DEPTH,
        thread_count: THREAD_CNT,
        report_interval: REPORT_INTERVAL,
        output_prefix: FILE_PATH_PREFIX.to_string(),
    };
    settings.output_dir()?;
    info!("{:?}", settings);
    let scene = scenes::get(ScenesType::Spheres, settings.aspect())?;
    info!(
        "Scene constructed. ({:.3} secs elapsed)",
        duration_to_secs(&start_time.elapsed())
    );
    let scatterer = Scatterer::new(ScatterConfig::default())?;
    let renderer = Renderer::new(&scene, scatterer, settings)?;
    let prefix = renderer.settings().output_prefix.clone();
    let film = renderer.render(|film| {
        film.save_png(&prefix, &start_time.elapsed())?;
        Ok(())
    })?;
    if film.count % REPORT_INTERVAL != 0 {
        film.save_png(&prefix, &start_time.elapsed())?;
    }
    info!(
        "Completed. ({:.3} secs elapsed)",
        duration_to_secs(&start_time.elapsed()),
    );
    Ok(())
}

fn duration_to_secs(dur: &Duration) -> f32 {
    dur.as_secs() as f32 + dur.subsec_millis() as f32 * 0.001
}
