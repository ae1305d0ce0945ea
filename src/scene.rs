use crate::material::MaterialCoeffs;
use crate::object::{ObjectHit, ObjectList};
use crate::*;

/// Single point light. Only `position` and `specular` enter the shading.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: P3,
    pub ambient: RGBA,
    pub diffuse: RGBA,
    pub specular: RGBA,
}

impl Default for Light {
    fn default() -> Self {
        Light {
            position: P3::new(0.0, 7.0, 10.0),
            ambient: RGBA::opaque(0.0, 1.0, 0.0),
            diffuse: RGBA::opaque(0.0, 1.0, 0.0),
            specular: RGBA::opaque(0.9, 0.9, 0.9),
        }
    }
}

pub struct Scene {
    objects: ObjectList,
    light: Light,
    coeffs: MaterialCoeffs,
}

impl Scene {
    pub fn new(objects: Vec<Sphere>, light: Light, coeffs: MaterialCoeffs) -> Self {
        Scene {
            objects: ObjectList::new(objects),
            light,
            coeffs,
        }
    }

    pub fn objects(&self) -> &[Sphere] {
        self.objects.objects()
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn coeffs(&self) -> &MaterialCoeffs {
        &self.coeffs
    }

    pub fn test_hit(&self, ray: &Ray, exclude: Option<usize>) -> Option<ObjectHit> {
        self.objects.test_hit(ray, exclude)
    }

    /// Attenuation factor for `pos` from spheres between it and the light.
    ///
    /// Every occluder other than `exclude` multiplies the factor by
    /// `2 * ambient`, so several occluders compound.
    pub fn occlusion(&self, pos: &P3, exclude: usize) -> RGBA {
        let shadow = self.light.position - pos;
        let distance_to_light = shadow.norm();
        let attenuation = self.coeffs.ambient * 2.0;
        self.objects()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != exclude)
            .filter_map(|(_, o)| o.intersect(pos, &shadow))
            .filter(|hit| hit.dist > 0.0 && hit.dist < distance_to_light)
            .fold(RGBA::all(1.0), |factor, _| factor * attenuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with(objects: Vec<Sphere>) -> Scene {
        let light = Light {
            position: P3::new(10.0, 0.0, 1.0),
            ..Light::default()
        };
        Scene::new(objects, light, MaterialCoeffs::default())
    }

    fn sphere(x: f32, y: f32, z: f32) -> Sphere {
        Sphere::new(P3::new(x, y, z), 1.0, RGBA::black(), 20.0).unwrap()
    }

    #[test]
    fn unoccluded_factor_is_one() {
        let scene = scene_with(vec![sphere(0.0, 0.0, 0.0)]);
        assert_eq!(scene.occlusion(&P3::new(0.0, 0.0, 1.0), 0), RGBA::all(1.0));
    }

    #[test]
    fn excluded_surface_does_not_shadow_itself() {
        let scene = scene_with(vec![sphere(0.0, 0.0, 0.0)]);
        // a point on the far side would be blocked by its own sphere
        assert_eq!(scene.occlusion(&P3::new(-1.0, 0.0, 0.0), 0), RGBA::all(1.0));
    }

    #[test]
    fn one_occluder_attenuates_once() {
        let scene = scene_with(vec![sphere(0.0, 0.0, 0.0), sphere(5.0, 0.0, 1.0)]);
        let factor = scene.occlusion(&P3::new(0.0, 0.0, 1.0), 0);
        assert_eq!(factor, scene.coeffs().ambient * 2.0);
    }

    #[test]
    fn occluders_compound() {
        let scene = scene_with(vec![
            sphere(0.0, 0.0, 0.0),
            sphere(4.0, 0.0, 1.0),
            sphere(7.0, 0.0, 1.0),
        ]);
        let factor = scene.occlusion(&P3::new(0.0, 0.0, 1.0), 0);
        let once = scene.coeffs().ambient * 2.0;
        assert_eq!(factor, once * once);
    }

    #[test]
    fn spheres_behind_point_do_not_shadow() {
        let scene = scene_with(vec![sphere(0.0, 0.0, 0.0), sphere(-5.0, 0.0, 1.0)]);
        assert_eq!(scene.occlusion(&P3::new(0.0, 0.0, 1.0), 0), RGBA::all(1.0));
    }

    #[test]
    fn occluder_distance_is_in_shadow_vector_units() {
        // hit at t = 1.9 along a shadow vector of length 10: counted, even
        // though the sphere lies past the light
        let scene = scene_with(vec![sphere(0.0, 0.0, 0.0), sphere(20.0, 0.0, 1.0)]);
        let factor = scene.occlusion(&P3::new(0.0, 0.0, 1.0), 0);
        assert_eq!(factor, scene.coeffs().ambient * 2.0);
    }
}
