use crate::camera::PinHole;
use crate::error::Result;
use crate::material::MaterialCoeffs;
use crate::scene::{Light, Scene};
use crate::*;

const SHININESS: f32 = 20.0;

/// Large red sphere at the back, green and blue in front of it, and a big
/// gray sphere underneath acting as the floor.
pub fn reference_spheres() -> Result<Vec<Sphere>> {
    let gray = 211.0 / 255.0;
    Ok(vec![
        Sphere::new(
            P3::new(0.0, 1.0, -2.5),
            2.4,
            RGBA::opaque(1.0, 0.0, 0.0),
            SHININESS,
        )?,
        Sphere::new(
            P3::new(-1.5, 0.2, 1.3),
            0.9,
            RGBA::opaque(0.0, 1.0, 0.0),
            SHININESS,
        )?,
        Sphere::new(
            P3::new(1.5, 0.2, 1.3),
            0.9,
            RGBA::opaque(0.0, 0.0, 1.0),
            SHININESS,
        )?,
        Sphere::new(
            P3::new(0.0, -16.0, -2.0),
            14.0,
            RGBA::opaque(gray, gray, gray),
            SHININESS,
        )?,
    ])
}

/// Light above and in front of the spheres; only X is adjustable.
pub fn reference_light(light_x: f32) -> Light {
    let mut light = Light::default();
    light.position[0] = light_x;
    light
}

pub fn reference(light_x: f32) -> Result<(PinHole, Scene)> {
    let scene = Scene::new(
        reference_spheres()?,
        reference_light(light_x),
        MaterialCoeffs::default(),
    );
    Ok((PinHole::reference(), scene))
}

/// A unit sphere at the origin, straight in front of the reference camera.
pub fn lone_sphere() -> Result<(PinHole, Scene)> {
    let sphere = Sphere::new(
        P3::origin(),
        1.0,
        RGBA::opaque(1.0, 0.0, 0.0),
        SHININESS,
    )?;
    let scene = Scene::new(vec![sphere], Light::default(), MaterialCoeffs::default());
    Ok((PinHole::reference(), scene))
}
