use super::*;
use crate::material::shade;

/// Per-pixel state carried across bounces.
struct TraceState {
    ray: Ray,
    accum: RGBA,
    previous: Option<usize>,
    bounce: usize,
}

/// Color seen along `ray`.
///
/// The first hit contributes its full Phong shade, attenuated by occluders
/// when `mode` enables shadows. Each reflection bounce after it contributes
/// its shade weighted by `specular * light.specular`; the sphere just left is
/// skipped so a bounce cannot hit its own origin. Without reflections the
/// loop stops after the first hit. Alpha of the result is always 1.
pub fn radiance(scene: &Scene, ray: &Ray, mode: RenderMode, bounce_limit: usize) -> RGBA {
    let limit = if mode.reflections() {
        bounce_limit
    } else {
        bounce_limit.min(1)
    };
    let light = scene.light();
    let coeffs = scene.coeffs();
    let mut state = TraceState {
        ray: ray.clone(),
        accum: RGBA::black(),
        previous: None,
        bounce: 0,
    };

    while state.bounce < limit {
        let hit = match scene.test_hit(&state.ray, state.previous) {
            Some(hit) => hit,
            None => break,
        };
        let object = &scene.objects()[hit.obj_ix];
        let mut color = shade(
            &state.ray.dir,
            &hit.hit.pos,
            object.color(),
            &hit.hit.normal,
            light,
            coeffs,
        );

        if state.bounce == 0 {
            if mode.shadows() {
                color *= scene.occlusion(&hit.hit.pos, hit.obj_ix);
            }
            state.accum += color;
        } else {
            state.accum += coeffs.specular * light.specular * color;
        }

        state.ray = state.ray.reflect(&hit.hit);
        state.previous = Some(hit.obj_ix);
        state.bounce += 1;
    }

    state.accum.with_alpha(1.0)
}
