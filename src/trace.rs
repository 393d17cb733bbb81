//! Host-side bounce loop: one segment per pixel, shaded bounce by bounce in
//! parallel, with the finished segments compacted out after every bounce.

use crate::aliases::Vec3;
use crate::config::RenderSettings;
use crate::error::{Error, Result};
use crate::film::Film;
use crate::material::Scatterer;
use crate::path_segment::PathSegment;
use crate::random::segment_rng;
use crate::scene::Scene;
use crate::termination::{compact, is_alive};
use itertools::iproduct;
use log::{debug, info};
use rand::Rng;

const T_MIN: f32 = 0.0001;

pub struct Renderer<'s> {
    scene: &'s Scene,
    scatterer: Scatterer,
    settings: RenderSettings,
}

impl<'s> Renderer<'s> {
    pub fn new(scene: &'s Scene, scatterer: Scatterer, settings: RenderSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Renderer {
            scene: scene,
            scatterer: scatterer,
            settings: settings,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// One jittered camera segment per pixel.
    pub fn generate_segments(&self, iteration: u32) -> Vec<PathSegment> {
        let (width, height) = (self.settings.width, self.settings.height);
        iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let pixel_index = x + y * width;
                let mut rng = segment_rng(iteration, pixel_index, 0);
                let u = (x as f32 + rng.gen::<f32>()) / width as f32;
                let v = 1.0 - (y as f32 + rng.gen::<f32>()) / height as f32;
                let ray = self.scene.camera.get_ray(u, v);
                PathSegment::new(&ray, self.settings.max_depth, pixel_index)
            })
            .collect()
    }

    fn shade_segment(&self, segment: &mut PathSegment, iteration: u32, depth: u32) {
        match self.scene.hitables.hit(&segment.ray, T_MIN, std::f32::MAX) {
            None => {
                let light = self.scene.bg.color(&segment.ray);
                segment.color.component_mul_assign(&light);
                segment.remaining_bounces = 0;
            }
            Some(rec) => {
                let mut rng = segment_rng(iteration, segment.pixel_index, depth);
                self.scatterer
                    .scatter(segment, &rec.point, &rec.normal, rec.material, &mut rng);
                if !is_alive(segment) {
                    // Out of bounces before reaching a light.
                    segment.color = Vec3::zeros();
                }
            }
        }
    }

    /// Shades every segment once, splitting them over the worker threads.
    pub fn shade_bounce(&self, segments: &mut [PathSegment], iteration: u32, depth: u32) -> Result<()> {
        if segments.is_empty() {
            return Ok(());
        }
        let thread_cnt = self.settings.thread_count;
        let chunk_size = (segments.len() + thread_cnt - 1) / thread_cnt;
        crossbeam::scope(|scope| {
            for chunk in segments.chunks_mut(chunk_size) {
                scope.spawn(move |_| {
                    for segment in chunk.iter_mut() {
                        self.shade_segment(segment, iteration, depth);
                    }
                });
            }
        })
        .map_err(|_| Error::WorkerPanicked)
    }

    /// Traces one sample per pixel to completion and adds it to `film`.
    pub fn render_iteration(&self, iteration: u32, film: &mut Film) -> Result<()> {
        let mut segments = self.generate_segments(iteration);
        let mut depth = 0;
        while !segments.is_empty() {
            depth += 1;
            self.shade_bounce(&mut segments, iteration, depth)?;
            let finished = compact(&mut segments);
            film.accumulate(&finished);
            debug!(
                "iteration {} depth {}: {} finished, {} alive",
                iteration,
                depth,
                finished.len(),
                segments.len()
            );
        }
        film.count += 1;
        Ok(())
    }

    /// Renders all iterations, calling `report` every `report_interval` of them.
    pub fn render<F>(&self, mut report: F) -> Result<Film>
    where
        F: FnMut(&Film) -> Result<()>,
    {
        let mut film = Film::zero(self.settings.width, self.settings.height);
        for iteration in 0..self.settings.iterations {
            self.render_iteration(iteration, &mut film)?;
            if film.count % self.settings.report_interval == 0 {
                info!("{} / {} iterations", film.count, self.settings.iterations);
                report(&film)?;
            }
        }
        Ok(film)
    }
}
