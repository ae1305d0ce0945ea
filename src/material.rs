use crate::scene::Light;
use crate::*;

/// Phong coefficients shared by every sphere in a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialCoeffs {
    pub ambient: RGBA,
    pub diffuse: RGBA,
    pub specular: RGBA,
    pub shininess: f32,
}

impl Default for MaterialCoeffs {
    fn default() -> Self {
        MaterialCoeffs {
            ambient: RGBA::opaque(0.2, 0.2, 0.2),
            diffuse: RGBA::opaque(0.5, 0.5, 0.5),
            specular: RGBA::opaque(0.9, 0.9, 0.9),
            shininess: 20.0,
        }
    }
}

/// Local Phong shading at `pos`. No occlusion test; the result is unclamped.
pub fn shade(
    view_dir: &V3,
    pos: &P3,
    object_color: &RGBA,
    normal: &V3,
    light: &Light,
    coeffs: &MaterialCoeffs,
) -> RGBA {
    let light_vec = (light.position - pos).normalize();
    let reflection = (-math::reflect(&light_vec, normal)).normalize();
    let view = view_dir.normalize();

    let ambient = coeffs.ambient * object_color;

    let ndotl = normal.dot(&light_vec).max(0.0);
    let diffuse = coeffs.diffuse * object_color * ndotl;

    let rdotv = (-reflection).dot(&view).max(0.0);
    let specular = if rdotv > 0.0 {
        coeffs.specular * light.specular * rdotv.powf(coeffs.shininess)
    } else {
        RGBA::black()
    };

    ambient + diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_at(position: P3) -> Light {
        Light {
            position,
            ..Light::default()
        }
    }

    fn close(x: &RGBA, y: &RGBA) -> bool {
        (x.r - y.r).abs() < 1e-5 && (x.g - y.g).abs() < 1e-5 && (x.b - y.b).abs() < 1e-5
    }

    #[test]
    fn light_behind_surface_is_ambient_only() {
        let coeffs = MaterialCoeffs::default();
        let color = RGBA::opaque(1.0, 0.0, 0.0);
        let c = shade(
            &V3::new(0.0, 0.0, -1.0),
            &P3::new(0.0, 0.0, 1.0),
            &color,
            &V3::new(0.0, 0.0, 1.0),
            &light_at(P3::new(0.0, 0.0, -10.0)),
            &coeffs,
        );
        assert!(close(&c, &(coeffs.ambient * color)));
    }

    #[test]
    fn head_on_light_is_full_phong() {
        // light, eye and normal aligned: ndotl = rdotv = 1
        let coeffs = MaterialCoeffs::default();
        let light = light_at(P3::new(0.0, 0.0, 10.0));
        let color = RGBA::opaque(0.0, 1.0, 0.0);
        let c = shade(
            &V3::new(0.0, 0.0, -1.0),
            &P3::new(0.0, 0.0, 1.0),
            &color,
            &V3::new(0.0, 0.0, 1.0),
            &light,
            &coeffs,
        );
        let expected = coeffs.ambient * color + coeffs.diffuse * color + coeffs.specular * light.specular;
        assert!(close(&c, &expected));
        assert!((c.g - (0.2 + 0.5 + 0.81)).abs() < 1e-5);
        assert!((c.r - 0.81).abs() < 1e-5);
    }

    #[test]
    fn grazing_view_has_no_highlight() {
        let coeffs = MaterialCoeffs::default();
        let color = RGBA::opaque(0.0, 0.0, 1.0);
        let normal = V3::new(0.0, 0.0, 1.0);
        let pos = P3::new(0.0, 0.0, 1.0);
        let light = light_at(P3::new(0.0, 0.0, 10.0));
        // viewing along the mirrored light direction away from the surface
        let c = shade(&V3::new(0.0, 0.0, 1.0), &pos, &color, &normal, &light, &coeffs);
        let expected = coeffs.ambient * color + coeffs.diffuse * color;
        assert!(close(&c, &expected));
    }
}
