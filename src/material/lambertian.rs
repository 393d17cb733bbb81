use crate::aliases::Vec3;
use crate::config::ScatterConfig;
use crate::constants::PI;
use crate::material::Scatter;
use crate::path_segment::PathSegment;
use crate::pdf::{cosine_hemisphere_density, sample_cosine_hemisphere};
use crate::ray::Ray;
use log::trace;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lambertian {
    pub albedo: Vec3,
}

impl Lambertian {
    pub fn new(albedo: &Vec3) -> Self {
        Lambertian { albedo: *albedo }
    }
    pub fn brdf(&self) -> Vec3 {
        self.albedo / PI
    }
}

impl Scatter for Lambertian {
    fn scatter<R: Rng + ?Sized>(
        &self,
        segment: &mut PathSegment,
        point: &Vec3,
        normal: &Vec3,
        config: &ScatterConfig,
        rng: &mut R,
    ) {
        let dir = sample_cosine_hemisphere(normal, rng);
        let n_dot_r = normal.dot(&dir).abs();
        let pdf = cosine_hemisphere_density(n_dot_r);
        if pdf == 0.0 {
            // Tangent sample: contributes nothing.
            trace!("tangent diffuse sample, pixel {}", segment.pixel_index);
            segment.terminate();
            return;
        }
        // f * cos / pdf; reduces to the albedo for cosine-weighted sampling.
        let weight = self.brdf() * (n_dot_r / pdf);
        segment.color.component_mul_assign(&weight);
        segment.remaining_bounces -= 1;
        segment.ray = Ray::new(&(point + normal * config.surface_offset), &dir);
    }
}
