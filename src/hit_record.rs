use crate::aliases::Vec3;
use crate::material::Material;

/// Intersection geometry handed to the scatter step.
#[derive(Clone, Copy, Debug)]
pub struct HitRecord<'a> {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3, // outward, normalized
    pub material: &'a Material,
}
