use crate::math::Frame;
use crate::*;

pub trait Camera {
    /// Primary ray through normalized device coordinates `u, v` in [-1, 1].
    fn ray_to(&self, u: f32, v: f32) -> Ray;
}

/// Maps the center of pixel `(x, y)` to [-1, 1]^2, row 0 at the top.
pub fn pixel_to_ndc(x: u32, y: u32, w: u32, h: u32) -> (f32, f32) {
    let u = 2.0 * (x as f32 + 0.5) / w as f32 - 1.0;
    let v = 1.0 - 2.0 * (y as f32 + 0.5) / h as f32;
    (u, v)
}

#[derive(Clone, Debug)]
pub struct PinHole {
    frame: Frame,
    film_width: f32,
}

impl PinHole {
    pub fn new(origin: P3, view_at: P3, view_up: V3, fov_degree: f32) -> Self {
        let frame = Frame::new_wv(&origin, &(origin - view_at), &view_up);
        let fov_rad = fov_degree * std::f32::consts::PI / 180.0;
        let half_tan = (fov_rad / 2.0).tan();
        PinHole {
            frame,
            film_width: 2.0 * half_tan,
        }
    }

    /// Eye at `(0, 0, 4)` looking down `-Z` with a unit image plane, so that
    /// `ray_to(u, v)` points along `(u, v, -1)`.
    pub fn reference() -> Self {
        let mut camera = Self::new(
            P3::new(0.0, 0.0, 4.0),
            P3::origin(),
            V3::new(0.0, 1.0, 0.0),
            90.0,
        );
        camera.film_width = 2.0;
        camera
    }

    pub fn eye(&self) -> &P3 {
        self.frame.origin()
    }
}

impl Camera for PinHole {
    fn ray_to(&self, u: f32, v: f32) -> Ray {
        let half = self.film_width / 2.0;
        let local = V3::new(half * u, half * v, -1.0);
        Ray::new(*self.frame.origin(), self.frame.l2w(&local))
    }
}
