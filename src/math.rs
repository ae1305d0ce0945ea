use nalgebra::*;
pub type P3 = Point3<f32>;
pub type V3 = Vector3<f32>;

/// Mirror `v` about the plane with unit normal `n`.
pub fn reflect(v: &V3, n: &V3) -> V3 {
    v - n * (2.0 * v.dot(n))
}

/// Orthonormal frame; local `-w` is the viewing direction.
#[derive(Clone, Debug)]
pub struct Frame {
    origin: P3,
    u: V3,
    v: V3,
    w: V3,
}

impl Frame {
    pub fn new_wv(origin: &P3, w: &V3, v_like: &V3) -> Self {
        let w = w.normalize();
        let u = v_like.cross(&w).normalize();
        let v = w.cross(&u);
        Frame {
            origin: *origin,
            u,
            v,
            w,
        }
    }

    pub fn origin(&self) -> &P3 {
        &self.origin
    }

    //local to world
    pub fn l2w(&self, local: &V3) -> V3 {
        self.u * local[0] + self.v * local[1] + self.w * local[2]
    }

    //world to local
    pub fn w2l(&self, world: &V3) -> V3 {
        V3::new(world.dot(&self.u), world.dot(&self.v), world.dot(&self.w))
    }
}
