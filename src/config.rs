use crate::constants::{DIELECTRIC_OFFSET, SURFACE_OFFSET};
use crate::error::{Error, Result};
use crate::random::{MAX_DEPTH, MAX_ITERATIONS, MAX_PIXELS};
use std::path::Path;

/// How a dielectric chooses between reflection and refraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FresnelSplit {
    /// Reflect when a uniform draw exceeds Schlick's reflectance divided by 1.5.
    /// Matches the images of the renderer this crate replaces; not an unbiased
    /// Fresnel estimator.
    Legacy,
    /// Reflect with probability equal to Schlick's reflectance.
    Unbiased,
}

/// What total internal reflection does to the throughput.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TirPolicy {
    /// Zero the throughput (legacy behaviour).
    Absorb,
    /// Carry the specular tint through the forced reflection.
    Reflect,
}

/// Tuning of the scatter step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterConfig {
    /// Offset along the normal after diffuse and mirror bounces.
    pub surface_offset: f32,
    /// Offset after dielectric bounces.
    pub dielectric_offset: f32,
    pub fresnel_split: FresnelSplit,
    pub tir_policy: TirPolicy,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        ScatterConfig {
            surface_offset: SURFACE_OFFSET,
            dielectric_offset: DIELECTRIC_OFFSET,
            fresnel_split: FresnelSplit::Legacy,
            tir_policy: TirPolicy::Absorb,
        }
    }
}

impl ScatterConfig {
    /// Physically consistent dielectric handling.
    pub fn unbiased() -> Self {
        ScatterConfig {
            fresnel_split: FresnelSplit::Unbiased,
            tir_policy: TirPolicy::Reflect,
            ..Self::default()
        }
    }
    pub fn validate(&self) -> Result<()> {
        check_offset("surface_offset", self.surface_offset)?;
        check_offset("dielectric_offset", self.dielectric_offset)
    }
}

fn check_offset(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            field: field,
            value: value.to_string(),
        })
    }
}

fn check_nonzero(field: &'static str, value: usize) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            field: field,
            value: value.to_string(),
        })
    }
}

/// Settings of the host renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub iterations: u32,    // samples per pixel
    pub max_depth: i32,     // bounce budget of a fresh segment
    pub thread_count: usize,
    pub report_interval: u32, // iterations between progress images
    pub output_prefix: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: 200,
            height: 200,
            iterations: 256,
            max_depth: 8,
            thread_count: 4,
            report_interval: 64,
            output_prefix: "debug_images/image_".to_string(),
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<()> {
        check_nonzero("width", self.width)?;
        check_nonzero("height", self.height)?;
        check_nonzero("iterations", self.iterations as usize)?;
        check_nonzero("thread_count", self.thread_count)?;
        check_nonzero("report_interval", self.report_interval as usize)?;
        if self.max_depth <= 0 || self.max_depth as u32 >= MAX_DEPTH {
            return Err(Error::InvalidConfig {
                field: "max_depth",
                value: self.max_depth.to_string(),
            });
        }
        // Larger values would make per-segment random sources collide.
        if self.iterations >= MAX_ITERATIONS {
            return Err(Error::InvalidConfig {
                field: "iterations",
                value: self.iterations.to_string(),
            });
        }
        if (self.width as u64).saturating_mul(self.height as u64) > MAX_PIXELS {
            return Err(Error::InvalidConfig {
                field: "width * height",
                value: format!("{} * {}", self.width, self.height),
            });
        }
        Ok(())
    }
    /// Directory part of `output_prefix`, which must already exist.
    pub fn output_dir(&self) -> Result<&Path> {
        Path::new(&self.output_prefix)
            .parent()
            .filter(|dir| dir.as_os_str().is_empty() || dir.is_dir())
            .ok_or_else(|| Error::OutputDirMissing(Path::new(&self.output_prefix).to_path_buf()))
    }
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
