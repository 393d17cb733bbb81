use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;

pub struct HitableList {
    pub list: Vec<Box<dyn Hitable>>,
}

impl HitableList {
    pub fn new(objs: Vec<Box<dyn Hitable>>) -> Self {
        HitableList { list: objs }
    }
}

impl Hitable for HitableList {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        let mut res: Option<HitRecord> = None;
        let mut closest_so_far = t_max;
        for obj in &self.list {
            if let Some(tmp_rec) = obj.hit(ray, t_min, closest_so_far) {
                closest_so_far = tmp_rec.t;
                res = Some(tmp_rec);
            }
        }
        res
    }
}
