use crate::aliases::Vec3;
use crate::onb::Onb;
use crate::pdf::random_cosine_direction;
use rand::Rng;

/// Draws a unit direction around `normal` distributed proportionally to the
/// cosine of its angle with `normal`.
/// * `normal` - must be normalized
pub fn sample_cosine_hemisphere<R: Rng + ?Sized>(normal: &Vec3, rng: &mut R) -> Vec3 {
    Onb::build_from_normal(normal).local_to_global_vec(&random_cosine_direction(rng))
}
