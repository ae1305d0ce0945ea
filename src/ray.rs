use crate::*;

#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: P3,
    pub dir: V3,
}

impl Ray {
    /// `dir` is normalized here; intersection math relies on it.
    pub fn new(origin: P3, dir: V3) -> Self {
        Ray {
            origin,
            dir: dir.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> P3 {
        self.origin + self.dir * t
    }

    /// The ray continuing from `hit` after a mirror bounce.
    pub fn reflect(&self, hit: &shape::Hit) -> Self {
        Ray::new(hit.pos, math::reflect(&self.dir, &hit.normal))
    }
}
