use crate::aliases::Vec3;
use crate::ray::Ray;

/// Radiance arriving along rays that leave the scene.
pub trait Background: Send + Sync {
    fn color(&self, ray: &Ray) -> Vec3;
}

pub struct AmbientLight {
    color: Vec3,
}

impl AmbientLight {
    pub fn new(color: &Vec3) -> Self {
        Self { color: *color }
    }
}

impl Background for AmbientLight {
    fn color(&self, _ray: &Ray) -> Vec3 {
        self.color
    }
}

/// Linear blend from `horizon` to `zenith` with the ray's elevation.
pub struct SkyGradient {
    horizon: Vec3,
    zenith: Vec3,
}

impl SkyGradient {
    pub fn new(horizon: &Vec3, zenith: &Vec3) -> Self {
        Self {
            horizon: *horizon,
            zenith: *zenith,
        }
    }
}

impl Background for SkyGradient {
    fn color(&self, ray: &Ray) -> Vec3 {
        let t = 0.5 * (ray.direction.normalize().y + 1.0);
        (1.0 - t) * self.horizon + t * self.zenith
    }
}
