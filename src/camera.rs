use crate::aliases::Vec3;
use crate::ray::Ray;
use std::f32::consts::PI;

/// Pinhole camera.
pub struct Camera {
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    origin: Vec3,
}

impl Camera {
    pub fn new(
        look_from: &Vec3,
        look_at: &Vec3,
        view_up: &Vec3,
        vfov: f32,   // vertical field of view
        aspect: f32, // width over height
    ) -> Self {
        let theta = vfov * PI / 180.0;
        let half_height = (theta * 0.5).tan();
        let half_width = aspect * half_height;
        let origin: Vec3 = *look_from;
        let w: Vec3 = (look_from - look_at).normalize();
        let u: Vec3 = view_up.cross(&w).normalize();
        let v: Vec3 = w.cross(&u);
        Camera {
            lower_left_corner: origin - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
            origin: origin,
        }
    }
    /// Ray through the film position (u, v), both in [0, 1], v pointing up.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let dir = self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin;
        Ray::new(&self.origin, &dir.normalize())
    }
}
