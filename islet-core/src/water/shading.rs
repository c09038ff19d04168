//! Fragment-stage shading of the water surface.
//!
//! The diffuse texture and the bump map scroll at independent rates, which
//! keeps the visible ripple pattern from locking to the normal
//! perturbation. A fresnel term brightens grazing-angle fragments toward
//! white in place of a real reflection pass. Alpha is constant.

use bevy::math::{Vec2, Vec3};

use super::surface::WaveParameters;

/// Per-fragment output: linear RGB plus constant alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedSample {
    pub color: Vec3,
    pub alpha: f32,
}

/// UV used to sample the water texture: a slow circular wobble plus a
/// constant diagonal drift.
pub fn scrolled_texture_uv(uv: Vec2, t: f32) -> Vec2 {
    uv + Vec2::new(
        (t * 0.2).sin() * 0.01 + t * 0.02,
        (t * 0.2).cos() * 0.01 + t * 0.02,
    )
}

/// UV used to sample the bump map: the wobble only, no drift.
pub fn scrolled_bump_uv(uv: Vec2, t: f32) -> Vec2 {
    uv + Vec2::new((t * 0.2).sin(), (t * 0.2).cos()) * 0.01
}

/// Folds a bump sample (RGB in [0, 1], 0.5 = flat) into a surface normal.
pub fn bump_perturb(normal: Vec3, bump_rgb: Vec3, bump_scale: f32) -> Vec3 {
    (normal + bump_scale * (bump_rgb - Vec3::splat(0.5))).normalize()
}

/// Grazing-angle reflectance approximation, in [0, 1] for unit inputs.
pub fn fresnel(normal: Vec3, view_dir: Vec3) -> f32 {
    (1.0 - normal.dot(view_dir).max(0.0)).powi(3)
}

/// Full fragment-stage shading for one fragment.
///
/// `normal` is the (already wave-perturbed) surface normal, `view_dir` the
/// unit direction from fragment to camera, `tex_rgb`/`bump_rgb` the two
/// texture samples at the scrolled UVs.
pub fn shade(
    params: &WaveParameters,
    normal: Vec3,
    view_dir: Vec3,
    tex_rgb: Vec3,
    bump_rgb: Vec3,
) -> ShadedSample {
    let normal = bump_perturb(normal, bump_rgb, params.bump_scale);
    let fresnel = fresnel(normal, view_dir);
    let base = params.base_color.lerp(tex_rgb, 0.4);
    ShadedSample {
        color: base.lerp(Vec3::ONE, fresnel * 0.5),
        alpha: params.opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_directions() -> Vec<Vec3> {
        let mut dirs = Vec::new();
        for yaw in 0..12 {
            for pitch in -5..=5 {
                let yaw = yaw as f32 * std::f32::consts::TAU / 12.0;
                let pitch = pitch as f32 * std::f32::consts::FRAC_PI_2 / 5.5;
                dirs.push(Vec3::new(
                    pitch.cos() * yaw.cos(),
                    pitch.sin(),
                    pitch.cos() * yaw.sin(),
                ));
            }
        }
        dirs
    }

    #[test]
    fn fresnel_stays_in_unit_range() {
        for n in unit_directions() {
            for v in unit_directions() {
                let f = fresnel(n, v);
                assert!((0.0..=1.0).contains(&f), "fresnel {f} for n={n}, v={v}");
            }
        }
    }

    #[test]
    fn fresnel_extremes() {
        // Head-on view: dot = 1, no brightening.
        assert!(fresnel(Vec3::Y, Vec3::Y).abs() < 1e-6);
        // Grazing view: dot = 0, full term.
        assert!((fresnel(Vec3::Y, Vec3::X) - 1.0).abs() < 1e-6);
        // Back-facing view clamps to the grazing value instead of exceeding it.
        assert!((fresnel(Vec3::Y, Vec3::NEG_Y) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scroll_uvs_match_formulas() {
        let uv = Vec2::new(0.25, 0.75);
        let t = 1.234;
        let tex = scrolled_texture_uv(uv, t);
        assert!((tex.x - (0.25 + (t * 0.2).sin() * 0.01 + t * 0.02)).abs() < 1e-6);
        assert!((tex.y - (0.75 + (t * 0.2).cos() * 0.01 + t * 0.02)).abs() < 1e-6);

        let bump = scrolled_bump_uv(uv, t);
        assert!((bump.x - (0.25 + (t * 0.2).sin() * 0.01)).abs() < 1e-6);
        assert!((bump.y - (0.75 + (t * 0.2).cos() * 0.01)).abs() < 1e-6);
    }

    #[test]
    fn texture_and_bump_scroll_are_desynchronized() {
        let uv = Vec2::ZERO;
        // The diffuse drift accumulates over time, the bump wobble does not.
        let d1 = scrolled_texture_uv(uv, 10.0) - scrolled_bump_uv(uv, 10.0);
        let d2 = scrolled_texture_uv(uv, 20.0) - scrolled_bump_uv(uv, 20.0);
        assert!((d2 - d1).length() > 0.1);
    }

    #[test]
    fn shade_uses_constant_opacity_and_blends_toward_white() {
        let params = WaveParameters::default();
        let tex = Vec3::new(0.2, 0.4, 0.6);
        let bump = Vec3::splat(0.5);

        let head_on = shade(&params, Vec3::Y, Vec3::Y, tex, bump);
        let grazing = shade(&params, Vec3::Y, Vec3::X, tex, bump);

        assert_eq!(head_on.alpha, params.opacity);
        assert_eq!(grazing.alpha, params.opacity);
        // Grazing fragments are brighter on every channel.
        assert!(grazing.color.x > head_on.color.x);
        assert!(grazing.color.y > head_on.color.y);
        assert!(grazing.color.z > head_on.color.z);
        // Head-on color is the plain base/texture mix.
        let base = params.base_color.lerp(tex, 0.4);
        assert!((head_on.color - base).length() < 1e-6);
    }

    #[test]
    fn flat_bump_sample_leaves_normal_unchanged() {
        let n = bump_perturb(Vec3::Y, Vec3::splat(0.5), 0.4);
        assert!((n - Vec3::Y).length() < 1e-6);
    }
}
