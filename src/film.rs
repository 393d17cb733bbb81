use crate::aliases::Vec3;
use crate::error::Result;
use crate::path_segment::PathSegment;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Per-pixel radiance sums over `count` iterations.
/// Pixels are stored row by row, top row first.
pub struct Film {
    width: usize,
    height: usize,
    pub count: u32,
    pub sum: Vec<Vec3>,
}

impl Film {
    pub fn zero(width: usize, height: usize) -> Self {
        Film {
            width: width,
            height: height,
            count: 0,
            sum: vec![Vec3::zeros(); width * height],
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Adds the throughput of finished segments to their pixels.
    pub fn accumulate(&mut self, finished: &[PathSegment]) {
        for segment in finished {
            self.sum[segment.pixel_index] += segment.color;
        }
    }
    /// Mean radiance of pixel (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> Vec3 {
        if self.count == 0 {
            return Vec3::zeros();
        }
        self.sum[x + y * self.width] / self.count as f32
    }
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut buffer: Vec<u8> = vec![0; self.width * self.height * 4];
        let scale = if self.count > 0 {
            1.0 / self.count as f32
        } else {
            0.0
        };
        for (idx, sum) in self.sum.iter().enumerate() {
            let col = sum * scale;
            for c in 0..3 {
                buffer[idx * 4 + c] = (255.99 * col[c].min(1.0).max(0.0)) as u8;
            }
            buffer[idx * 4 + 3] = 255;
        }
        buffer
    }
    pub fn save_png(&self, prefix: &str, elapsed_time: &Duration) -> Result<PathBuf> {
        debug_assert!(self.count > 0);
        let path = PathBuf::from(format!(
            "{}{}rays{}secs.png",
            prefix,
            self.count,
            elapsed_time.as_secs()
        ));
        self.save_png_to(&path)?;
        info!("saved {}", path.display());
        Ok(path)
    }
    pub fn save_png_to(&self, path: &Path) -> Result<()> {
        image::save_buffer(
            path,
            self.to_rgba8().as_slice(),
            self.width as u32,
            self.height as u32,
            image::ColorType::Rgba8,
        )?;
        Ok(())
    }
}
