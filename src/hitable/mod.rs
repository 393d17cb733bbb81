pub mod hitable_list;
pub mod sphere;

use crate::hit_record::HitRecord;
use crate::ray::Ray;

pub trait Hitable: Send + Sync {
    /// Closest intersection with `ray` in the open interval (t_min, t_max).
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord>;
}
