pub mod dielectric;
pub mod lambertian;
pub mod mirror;

use crate::aliases::Vec3;
use crate::config::ScatterConfig;
use crate::error::{Error, Result};
use crate::material::dielectric::Dielectric;
use crate::material::lambertian::Lambertian;
use crate::material::mirror::Mirror;
use crate::path_segment::PathSegment;
use rand::Rng;

pub trait Scatter {
    /// Moves `segment` to its next bounce off the surface at `point`.
    /// Updates the ray and the throughput in place and spends one bounce,
    /// or terminates the segment on a degenerate sample.
    /// * `normal` - outward, must be normalized
    fn scatter<R: Rng + ?Sized>(
        &self,
        segment: &mut PathSegment,
        point: &Vec3,
        normal: &Vec3,
        config: &ScatterConfig,
        rng: &mut R,
    );
}

/// Surface description. Exactly one scattering model per material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    Diffuse(Lambertian),
    Mirror(Mirror),
    Dielectric(Dielectric),
}

impl Material {
    pub fn diffuse(color: &Vec3) -> Self {
        Material::Diffuse(Lambertian::new(color))
    }
    pub fn mirror(specular: &Vec3) -> Self {
        Material::Mirror(Mirror::new(specular))
    }
    /// Panics unless `index_of_refraction` is finite and positive; use
    /// `from_flags` for unvalidated input.
    pub fn dielectric(specular: &Vec3, index_of_refraction: f32) -> Self {
        Material::Dielectric(Dielectric::new(specular, index_of_refraction))
    }
    /// Builds a material from the flag layout of scene files:
    /// (0, 0) diffuse, (1, 0) mirror, (1, 1) dielectric.
    pub fn from_flags(
        color: &Vec3,
        has_reflective: f32,
        has_refractive: f32,
        specular: &Vec3,
        index_of_refraction: f32,
    ) -> Result<Self> {
        if has_reflective == 0.0 && has_refractive == 0.0 {
            Ok(Material::diffuse(color))
        } else if has_reflective == 1.0 && has_refractive == 0.0 {
            Ok(Material::mirror(specular))
        } else if has_reflective == 1.0 && has_refractive == 1.0 {
            if !(index_of_refraction.is_finite() && index_of_refraction > 0.0) {
                return Err(Error::InvalidIndexOfRefraction(index_of_refraction));
            }
            Ok(Material::dielectric(specular, index_of_refraction))
        } else {
            Err(Error::InvalidMaterialFlags {
                has_reflective: has_reflective,
                has_refractive: has_refractive,
            })
        }
    }
}

impl Scatter for Material {
    fn scatter<R: Rng + ?Sized>(
        &self,
        segment: &mut PathSegment,
        point: &Vec3,
        normal: &Vec3,
        config: &ScatterConfig,
        rng: &mut R,
    ) {
        debug_assert!((normal.norm() - 1.0).abs() < 1e-3);
        match self {
            Material::Diffuse(m) => m.scatter(segment, point, normal, config, rng),
            Material::Mirror(m) => m.scatter(segment, point, normal, config, rng),
            Material::Dielectric(m) => m.scatter(segment, point, normal, config, rng),
        }
    }
}

/// The scatter step with a validated configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scatterer {
    config: ScatterConfig,
}

impl Scatterer {
    pub fn new(config: ScatterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Scatterer { config: config })
    }
    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        segment: &mut PathSegment,
        hit_point: &Vec3,
        normal: &Vec3,
        material: &Material,
        rng: &mut R,
    ) {
        material.scatter(segment, hit_point, normal, &self.config, rng)
    }
}

/// Scatters `segment` off `material` with the default configuration.
pub fn scatter<R: Rng + ?Sized>(
    segment: &mut PathSegment,
    hit_point: &Vec3,
    normal: &Vec3,
    material: &Material,
    rng: &mut R,
) {
    Scatterer::default().scatter(segment, hit_point, normal, material, rng)
}
