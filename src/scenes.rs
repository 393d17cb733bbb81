mod spheres;

use bounce::scene::Scene;
use bounce::Result;

#[allow(dead_code)]
pub enum ScenesType {
    Spheres,
}

pub fn get(scene_type: ScenesType, aspect_ratio: f32) -> Result<Scene> {
    match scene_type {
        ScenesType::Spheres => self::spheres::scene(aspect_ratio),
    }
}
