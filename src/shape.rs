use crate::error::{Error, Result};
use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    pub dist: f32,
    pub pos: P3,
    pub normal: V3,
}

/// Real roots of `a t^2 + b t + c = 0`, larger-numerator root first.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        None
    } else if disc == 0.0 {
        let t = -b / (2.0 * a);
        Some((t, t))
    } else {
        let sq = disc.sqrt();
        Some(((-b + sq) / (2.0 * a), (-b - sq) / (2.0 * a)))
    }
}

#[derive(Clone, Debug)]
pub struct Sphere {
    center: P3,
    radius: f32,
    color: RGBA,
    shininess: f32,
}

impl Sphere {
    pub fn new(center: P3, radius: f32, color: RGBA, shininess: f32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidRadius(radius));
        }
        if !(shininess.is_finite() && shininess >= 0.0) {
            return Err(Error::InvalidShininess(shininess));
        }
        Ok(Sphere {
            center,
            radius,
            color,
            shininess,
        })
    }

    pub fn center(&self) -> &P3 {
        &self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> &RGBA {
        &self.color
    }

    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    /// Nearest intersection in front of `origin` along `dir`.
    ///
    /// `dir` does not have to be unit length; `Hit::dist` is then measured in
    /// multiples of `dir`. When the origin is inside the sphere the far root is
    /// used. A sphere entirely behind the origin is a miss.
    pub fn intersect(&self, origin: &P3, dir: &V3) -> Option<Hit> {
        let rel = origin - self.center;
        let a = dir.dot(dir);
        let b = 2.0 * dir.dot(&rel);
        let c = rel.dot(&rel) - self.radius * self.radius;

        let (mut t0, mut t1) = solve_quadratic(a, b, c)?;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 < 0.0 {
            t0 = t1;
            if t0 < 0.0 {
                return None;
            }
        }

        let pos = origin + dir * t0;
        Some(Hit {
            dist: t0,
            pos,
            normal: (pos - self.center).normalize(),
        })
    }
}
