use bounce::aliases::Vec3;
use bounce::background::SkyGradient;
use bounce::camera::Camera;
use bounce::hitable::hitable_list::HitableList;
use bounce::hitable::sphere::Sphere;
use bounce::hitable::Hitable;
use bounce::material::Material;
use bounce::scene::Scene;
use bounce::Result;

/// (center, radius, color, has_reflective, has_refractive, specular, ior),
/// the flag layout scene files use.
type SphereDesc = ([f32; 3], f32, [f32; 3], f32, f32, [f32; 3], f32);

const SPHERES: [SphereDesc; 6] = [
    ([0.0, -100.5, -1.0], 100.0, [0.5, 0.5, 0.5], 0.0, 0.0, [0.0; 3], 0.0), // floor
    ([0.0, 0.0, -1.0], 0.5, [0.8, 0.3, 0.3], 0.0, 0.0, [0.0; 3], 0.0),      // diffuse
    ([1.0, 0.0, -1.0], 0.5, [0.0; 3], 1.0, 0.0, [0.8, 0.6, 0.2], 0.0),      // mirror
    ([-1.0, 0.0, -1.0], 0.5, [0.0; 3], 1.0, 1.0, [1.0, 1.0, 1.0], 1.5),     // glass
    ([-0.3, -0.35, -0.4], 0.15, [0.2, 0.4, 0.9], 0.0, 0.0, [0.0; 3], 0.0),  // small diffuse
    ([0.4, -0.35, -0.3], 0.15, [0.0; 3], 1.0, 1.0, [0.9, 1.0, 0.9], 1.3),   // small glass
];

pub fn scene(aspect_ratio: f32) -> Result<Scene> {
    let mut objs = Vec::<Box<dyn Hitable>>::new();
    for &(center, radius, color, refl, refr, specular, ior) in SPHERES.iter() {
        let material = Material::from_flags(
            &Vec3::from(color),
            refl,
            refr,
            &Vec3::from(specular),
            ior,
        )?;
        objs.push(Box::new(Sphere::new(&Vec3::from(center), radius, material)));
    }
    Ok(Scene {
        hitables: Box::new(HitableList::new(objs)),
        camera: Camera::new(
            &Vec3::new(0.0, 0.5, 1.5),
            &Vec3::new(0.0, 0.0, -1.0),
            &Vec3::new(0.0, 1.0, 0.0),
            50.0,
            aspect_ratio,
        ),
        bg: Box::new(SkyGradient::new(
            &Vec3::new(1.0, 1.0, 1.0),
            &Vec3::new(0.5, 0.7, 1.0),
        )),
    })
}
