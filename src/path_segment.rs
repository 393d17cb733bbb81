use crate::aliases::Vec3;
use crate::ray::Ray;

/// A single in-flight light path sample, traced backward from the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSegment {
    pub ray: Ray,
    pub color: Vec3, // throughput
    pub remaining_bounces: i32,
    pub pixel_index: usize,
}

impl PathSegment {
    pub fn new(ray: &Ray, remaining_bounces: i32, pixel_index: usize) -> Self {
        PathSegment {
            ray: *ray,
            color: Vec3::new(1.0, 1.0, 1.0),
            remaining_bounces: remaining_bounces,
            pixel_index: pixel_index,
        }
    }
    /// Drops the segment's contribution and takes it out of further tracing.
    pub fn terminate(&mut self) {
        self.remaining_bounces = 0;
        self.color = Vec3::zeros();
    }
}
