pub mod cosine;

pub use self::cosine::sample_cosine_hemisphere;

use crate::aliases::Vec3;
use crate::constants::{PI, TWO_PI};
use rand::Rng;

/// Calculates a random point on a unit hemisphere (x^2+y^2+z^2=1, z>=0)
/// such that pdf(d) = cos(t)/PI where t is angle between d and n=(0,0,1)
pub fn random_cosine_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u1 = rng.gen::<f32>();
    let u2 = rng.gen::<f32>();
    let cos_theta = u1.sqrt();
    let sin_theta = (1.0 - u1).sqrt();
    let phi = TWO_PI * u2;
    Vec3::new(phi.cos() * sin_theta, phi.sin() * sin_theta, cos_theta)
}

/// Density (per solid angle) of a cosine-weighted direction whose cosine
/// to the normal is `cosine`.
pub fn cosine_hemisphere_density(cosine: f32) -> f32 {
    cosine.max(0.0) / PI // since integral of cos(theta) on a unit hemisphere = pi.
}
