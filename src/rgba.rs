use std::ops::{Add, AddAssign, Mul, MulAssign};

/// Linear color with alpha. Arithmetic is component-wise and unclamped.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGBA {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RGBA {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        RGBA { r, g, b, a }
    }

    pub fn all(x: f32) -> Self {
        Self::new(x, x, x, x)
    }

    /// `(0, 0, 0, 1)`; the background and the starting value of every pixel.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        RGBA { a, ..self }
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps to [0, 1] and quantizes for display.
    pub fn to_rgba8(&self) -> [u8; 4] {
        fn q(x: f32) -> u8 {
            (x.min(1.0).max(0.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl<'a> Add<&'a Self> for RGBA {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        RGBA {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl Add for RGBA {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for RGBA {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Mul<&'a Self> for RGBA {
    type Output = Self;
    fn mul(self, rhs: &'a Self) -> Self {
        RGBA {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
            a: self.a * rhs.a,
        }
    }
}

impl Mul for RGBA {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl Mul<f32> for RGBA {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        RGBA {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
            a: self.a * rhs,
        }
    }
}

impl MulAssign for RGBA {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
