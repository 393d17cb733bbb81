use crate::aliases::Vec3;
use crate::constants::SQRT_OF_ONE_THIRD;
use std::ops::Index;

/// Orthogonal normal basis
/// 0=t1, 1=t2, 2=n
pub struct Onb {
    axis: [Vec3; 3],
}

impl Onb {
    /// Build an orthonormal basis around a unit normal.
    /// The helper axis is the first coordinate axis on which the normal is
    /// shorter than sqrt(1/3), so the cross products never degenerate.
    pub fn build_from_normal(normal: &Vec3) -> Self {
        debug_assert!((normal.norm() - 1.0).abs() < 1e-3);
        let not_normal = if normal[0].abs() < SQRT_OF_ONE_THIRD {
            Vec3::new(1.0, 0.0, 0.0)
        } else if normal[1].abs() < SQRT_OF_ONE_THIRD {
            Vec3::new(0.0, 1.0, 0.0)
        } else {
            Vec3::new(0.0, 0.0, 1.0)
        };
        let t1 = normal.cross(&not_normal).normalize();
        let t2 = normal.cross(&t1).normalize();
        Onb {
            axis: [t1, t2, *normal],
        }
    }
    pub fn t1(&self) -> &Vec3 {
        &self.axis[0]
    }
    pub fn t2(&self) -> &Vec3 {
        &self.axis[1]
    }
    pub fn n(&self) -> &Vec3 {
        &self.axis[2]
    }
    pub fn local_to_global_vec(&self, local: &Vec3) -> Vec3 {
        local[0] * self.t1() + local[1] * self.t2() + local[2] * self.n()
    }
}

impl Index<usize> for Onb {
    type Output = Vec3;
    fn index(&self, index: usize) -> &Vec3 {
        &self.axis[index]
    }
}
