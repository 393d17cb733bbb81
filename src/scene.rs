use crate::background::Background;
use crate::camera::Camera;
use crate::hitable::Hitable;

pub struct Scene {
    pub hitables: Box<dyn Hitable>, // rendered hitables
    pub camera: Camera,
    pub bg: Box<dyn Background>,
}
