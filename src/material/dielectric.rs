use crate::aliases::Vec3;
use crate::config::{FresnelSplit, ScatterConfig, TirPolicy};
use crate::constants::LEGACY_FRESNEL_DIVISOR;
use crate::material::Scatter;
use crate::path_segment::PathSegment;
use crate::ray::Ray;
use log::trace;
use rand::Rng;

/// * `n` - must be normalized
pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    debug_assert!((n.norm() - 1.0).abs() < 1e-3);
    v - 2.0 * v.dot(n) * n
}

/// Refracts `v` through a surface with normal `n` (facing against `v`) and
/// relative refractive index `r`, or None on total internal reflection.
pub fn refract(v: &Vec3, n: &Vec3, r: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let d = 1.0 - r * r * (1.0 - dt * dt);
    if d > 0.0 {
        Some((r * (uv - n * dt) - n * f32::sqrt(d)).normalize())
    } else {
        None
    }
}

/// Approximation formula of probability of reflection when a light enter into a material
pub fn schlick_formula(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Smooth dielectric boundary choosing stochastically between reflection and
/// refraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dielectric {
    pub specular: Vec3,
    pub ref_idx: f32,
}

impl Dielectric {
    /// Panics unless `ref_idx` is finite and positive.
    pub fn new(specular: &Vec3, ref_idx: f32) -> Self {
        assert!(
            ref_idx.is_finite() && ref_idx > 0.0,
            "invalid index of refraction: {}",
            ref_idx
        );
        Dielectric {
            specular: *specular,
            ref_idx: ref_idx,
        }
    }

    fn total_internal_reflection(
        &self,
        segment: &mut PathSegment,
        point: &Vec3,
        n: &Vec3,
        config: &ScatterConfig,
    ) {
        trace!("total internal reflection, pixel {}", segment.pixel_index);
        let reflected = reflect(&segment.ray.direction, n);
        match config.tir_policy {
            TirPolicy::Absorb => segment.color = Vec3::zeros(),
            TirPolicy::Reflect => segment.color.component_mul_assign(&self.specular),
        }
        segment.remaining_bounces -= 1;
        segment.ray = Ray::new(&(point + n * config.dielectric_offset), &reflected);
    }
}

impl Scatter for Dielectric {
    fn scatter<R: Rng + ?Sized>(
        &self,
        segment: &mut PathSegment,
        point: &Vec3,
        normal: &Vec3,
        config: &ScatterConfig,
        rng: &mut R,
    ) {
        let in_dir = segment.ray.direction;
        // r = relative refractive index
        // n = normal facing the incoming ray
        let (r, n) = if in_dir.dot(normal) > 0.0 {
            (self.ref_idx, -normal)
        } else {
            (1.0 / self.ref_idx, *normal)
        };
        let cosine = in_dir.dot(&n); // <= 0
        let refracted = match refract(&in_dir, &n, r) {
            Some(refracted) => refracted,
            None => {
                self.total_internal_reflection(segment, point, &n, config);
                return;
            }
        };
        let reflects = match config.fresnel_split {
            FresnelSplit::Legacy => {
                rng.gen::<f32>() > schlick_formula(cosine.max(0.0), r) / LEGACY_FRESNEL_DIVISOR
            }
            FresnelSplit::Unbiased => {
                // Schlick wants the angle on the less dense side.
                let c = if r > 1.0 {
                    -refracted.dot(&n)
                } else {
                    -cosine
                };
                rng.gen::<f32>() < schlick_formula(c, r)
            }
        };
        segment.color.component_mul_assign(&self.specular);
        segment.remaining_bounces -= 1;
        segment.ray = if reflects {
            Ray::new(
                &(point + n * config.dielectric_offset),
                &reflect(&in_dir, &n),
            )
        } else {
            Ray::new(&(point + refracted * config.dielectric_offset), &refracted)
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::Vec3;
    use crate::config::ScatterConfig;
    use crate::material::dielectric::{refract, schlick_formula, Dielectric};
    use crate::material::Scatter;
    use crate::path_segment::PathSegment;
    use crate::ray::Ray;
    use float_cmp::approx_eq;
    use rand::rngs::mock::StepRng;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const UP: [f32; 3] = [0.0, 1.0, 0.0];

    fn glass() -> Dielectric {
        Dielectric::new(&Vec3::new(1.0, 1.0, 1.0), 1.5)
    }

    fn segment_towards(dir: &Vec3) -> PathSegment {
        let dir = dir.normalize();
        PathSegment::new(&Ray::new(&(-dir), &dir), 5, 0)
    }

    fn assert_vec_eq(a: &Vec3, b: &Vec3) {
        for i in 0..3 {
            assert!(
                approx_eq!(f32, a[i], b[i], epsilon = 1e-5),
                "{:?} != {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn schlick_at_normal_incidence() {
        assert!(approx_eq!(f32, schlick_formula(1.0, 1.5), 0.04, epsilon = 1e-6));
        assert!(approx_eq!(f32, schlick_formula(1.0, 1.0 / 1.5), 0.04, epsilon = 1e-6));
        assert!(approx_eq!(f32, schlick_formula(0.0, 1.5), 1.0, epsilon = 1e-6));
    }

    #[test]
    fn refraction_obeys_snell() {
        let normal = Vec3::from(UP);
        let v = Vec3::new(1.0, -1.0, 0.0).normalize();
        let t = refract(&v, &normal, 1.0 / 1.5).unwrap();
        let sin_i = v.x;
        assert!(approx_eq!(f32, t.x, sin_i / 1.5, epsilon = 1e-5));
        assert!(t.y < 0.0);
        assert!(approx_eq!(f32, t.norm(), 1.0, epsilon = 1e-5));
        assert!(refract(&Vec3::new(1.0, 0.05, 0.0), &-normal, 1.5).is_none());
    }

    #[test]
    fn grazing_exit_is_total_internal_reflection() {
        let normal = Vec3::from(UP);
        let in_dir = Vec3::new(1.0, 0.05, 0.0).normalize();
        let mut segment = segment_towards(&in_dir);
        let point = Vec3::new(0.0, 0.0, 0.0);
        let mut rng = StepRng::new(0, 0);
        glass().scatter(&mut segment, &point, &normal, &ScatterConfig::default(), &mut rng);
        assert_eq!(segment.color, Vec3::zeros());
        assert_eq!(segment.remaining_bounces, 4);
        assert_vec_eq(&segment.ray.direction, &Vec3::new(in_dir.x, -in_dir.y, 0.0));
        // offset along the flipped normal, back into the dense medium
        assert_vec_eq(&segment.ray.origin, &Vec3::new(0.0, -0.01, 0.0));
    }

    #[test]
    fn tir_can_keep_energy() {
        let normal = Vec3::from(UP);
        let mut segment = segment_towards(&Vec3::new(1.0, 0.05, 0.0));
        let material = Dielectric::new(&Vec3::new(0.9, 0.8, 0.7), 1.5);
        let mut rng = StepRng::new(0, 0);
        let config = ScatterConfig::unbiased();
        material.scatter(&mut segment, &Vec3::zeros(), &normal, &config, &mut rng);
        assert_eq!(segment.color, Vec3::new(0.9, 0.8, 0.7));
        assert!(segment.ray.direction.y < 0.0);
    }

    #[test]
    fn legacy_split_refracts_on_low_draw() {
        let normal = Vec3::from(UP);
        let mut segment = segment_towards(&Vec3::new(0.0, -1.0, 0.0));
        let point = Vec3::new(2.0, 0.0, 0.0);
        let mut rng = StepRng::new(0, 0);
        glass().scatter(&mut segment, &point, &normal, &ScatterConfig::default(), &mut rng);
        assert_vec_eq(&segment.ray.direction, &Vec3::new(0.0, -1.0, 0.0));
        assert_vec_eq(&segment.ray.origin, &Vec3::new(2.0, -0.01, 0.0));
        assert_eq!(segment.color, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(segment.remaining_bounces, 4);
    }

    #[test]
    fn legacy_split_reflects_on_high_draw() {
        let normal = Vec3::from(UP);
        let mut segment = segment_towards(&Vec3::new(0.0, -1.0, 0.0));
        let mut rng = StepRng::new(std::u64::MAX, 0);
        glass().scatter(&mut segment, &Vec3::zeros(), &normal, &ScatterConfig::default(), &mut rng);
        assert_vec_eq(&segment.ray.direction, &Vec3::new(0.0, 1.0, 0.0));
        assert_vec_eq(&segment.ray.origin, &Vec3::new(0.0, 0.01, 0.0));
    }

    #[test]
    fn legacy_split_reflects_a_third_of_the_time() {
        // Incidence cosines are never positive here, so the reflectance term
        // saturates at 1 and the split is 1/1.5.
        const SAMPLE_CNT: usize = 20000;
        let normal = Vec3::from(UP);
        let mut rng = SmallRng::seed_from_u64(3);
        let reflected = (0..SAMPLE_CNT)
            .filter(|_| {
                let mut segment = segment_towards(&Vec3::new(0.3, -1.0, 0.0));
                glass().scatter(&mut segment, &Vec3::zeros(), &normal, &ScatterConfig::default(), &mut rng);
                segment.ray.direction.y > 0.0
            })
            .count();
        let ratio = reflected as f32 / SAMPLE_CNT as f32;
        assert!((ratio - 1.0 / 3.0).abs() < 0.02);
    }

    #[test]
    fn unbiased_split_follows_fresnel() {
        const SAMPLE_CNT: usize = 20000;
        let normal = Vec3::from(UP);
        let mut rng = SmallRng::seed_from_u64(4);
        let config = ScatterConfig::unbiased();
        let mut reflected = 0;
        for _ in 0..SAMPLE_CNT {
            let mut segment = segment_towards(&Vec3::new(0.0, -1.0, 0.0));
            glass().scatter(&mut segment, &Vec3::zeros(), &normal, &config, &mut rng);
            assert_eq!(segment.color, Vec3::new(1.0, 1.0, 1.0));
            if segment.ray.direction.y > 0.0 {
                reflected += 1;
            }
        }
        let ratio = reflected as f32 / SAMPLE_CNT as f32;
        println!("[unbiased_split_follows_fresnel] ratio: {}", ratio);
        assert!((ratio - 0.04).abs() < 0.01);
    }

    /// Share of `SAMPLE_CNT` scatters of a ray along `dir` that come back on
    /// the incoming side of the surface with normal UP.
    fn unbiased_reflect_ratio(dir: &Vec3, seed: u64) -> f32 {
        const SAMPLE_CNT: usize = 20000;
        let normal = Vec3::from(UP);
        let config = ScatterConfig::unbiased();
        let mut rng = SmallRng::seed_from_u64(seed);
        let incoming_side = dir.y.signum();
        let reflected = (0..SAMPLE_CNT)
            .filter(|_| {
                let mut segment = segment_towards(dir);
                glass().scatter(&mut segment, &Vec3::zeros(), &normal, &config, &mut rng);
                segment.ray.direction.y.signum() != incoming_side
            })
            .count();
        reflected as f32 / SAMPLE_CNT as f32
    }

    #[test]
    fn unbiased_split_is_symmetric_across_the_boundary() {
        // A 45 degree ray entering the glass and the ray leaving it along the
        // matching refracted angle see the same reflectance.
        let s = std::f32::consts::FRAC_1_SQRT_2;
        let entering = Vec3::new(s, -s, 0.0);
        let sin_t = s / 1.5;
        let exiting = Vec3::new(sin_t, (1.0 - sin_t * sin_t).sqrt(), 0.0);
        let expected = schlick_formula(s, 1.5);
        let ratio_in = unbiased_reflect_ratio(&entering, 21);
        let ratio_out = unbiased_reflect_ratio(&exiting, 22);
        println!(
            "[unbiased_split_is_symmetric_across_the_boundary] in: {}, out: {}, expected: {}",
            ratio_in, ratio_out, expected
        );
        assert!((ratio_in - ratio_out).abs() < 0.01);
        assert!((ratio_in - expected).abs() < 0.01);
        assert!((ratio_out - expected).abs() < 0.01);
    }

    #[test]
    fn unbiased_exit_at_normal_incidence() {
        let ratio = unbiased_reflect_ratio(&Vec3::new(0.0, 1.0, 0.0), 23);
        assert!((ratio - 0.04).abs() < 0.01);
    }

    #[test]
    fn exiting_ray_refracts_away_from_normal() {
        let normal = Vec3::from(UP);
        let in_dir = Vec3::new(0.3, 1.0, 0.0).normalize();
        let mut segment = segment_towards(&in_dir);
        let mut rng = StepRng::new(0, 0);
        glass().scatter(&mut segment, &Vec3::zeros(), &normal, &ScatterConfig::default(), &mut rng);
        let out = segment.ray.direction;
        assert!(out.y > 0.0);
        assert!(approx_eq!(f32, out.x, in_dir.x * 1.5, epsilon = 1e-5));
        assert!(segment.ray.origin.y > 0.0);
    }
}
