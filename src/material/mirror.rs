use crate::aliases::Vec3;
use crate::config::ScatterConfig;
use crate::material::dielectric::reflect;
use crate::material::Scatter;
use crate::path_segment::PathSegment;
use crate::ray::Ray;
use rand::Rng;

/// Perfect specular reflector. A delta distribution sampled exactly, so the
/// throughput is only tinted, never divided by a probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mirror {
    pub specular: Vec3,
}

impl Mirror {
    pub fn new(specular: &Vec3) -> Self {
        Mirror {
            specular: *specular,
        }
    }
}

impl Scatter for Mirror {
    fn scatter<R: Rng + ?Sized>(
        &self,
        segment: &mut PathSegment,
        point: &Vec3,
        normal: &Vec3,
        config: &ScatterConfig,
        _rng: &mut R,
    ) {
        let reflected = reflect(&segment.ray.direction, normal);
        segment.color.component_mul_assign(&self.specular);
        segment.remaining_bounces -= 1;
        segment.ray = Ray::new(&(point + normal * config.surface_offset), &reflected);
    }
}
