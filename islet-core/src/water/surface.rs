//! Vertex-stage wave displacement.
//!
//! Three stacked sinusoids at different spatial/temporal frequencies and
//! phase signs, so no single sine term produces visible periodicity. The
//! normal perturbation reuses the wave magnitudes rather than the analytic
//! gradient of the displacement; the surface is shading-only, never
//! physically simulated, and the approximation is kept deliberately (see
//! DESIGN.md).

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sum of the per-term amplitude factors (1.0 + 0.5 + 0.3). The total
/// displacement can never exceed `amplitude * WAVE_STACK_GAIN`.
pub const WAVE_STACK_GAIN: f32 = 1.8;

/// Rejected wave configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WaveParameterError {
    #[error("wave amplitude must be positive, got {0}")]
    Amplitude(f32),
    #[error("wave frequency must be positive, got {0}")]
    Frequency(f32),
    #[error("bump scale must be non-negative, got {0}")]
    BumpScale(f32),
    #[error("texture scale must be positive, got {0}")]
    TextureScale(f32),
    #[error("opacity must be within [0, 1], got {0}")]
    Opacity(f32),
}

/// Immutable configuration of the water surface, set once at construction.
///
/// Construct through [`WaveParameters::new`], which rejects out-of-range
/// values instead of letting the arithmetic produce phase-inverted waves or
/// negative opacity downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParameters {
    /// Peak height of the primary wave term, world units.
    pub amplitude: f32,
    /// Spatial frequency of the primary wave term, radians per world unit.
    pub frequency: f32,
    /// Strength of the bump-map normal perturbation in the fragment stage.
    pub bump_scale: f32,
    /// UV multiplier for the water texture (the shader tiles at
    /// `uv * texture_scale * 0.25`).
    pub texture_scale: f32,
    /// Constant output alpha of the surface.
    pub opacity: f32,
    /// Base water color, linear RGB.
    pub base_color: Vec3,
}

impl WaveParameters {
    pub fn new(
        amplitude: f32,
        frequency: f32,
        bump_scale: f32,
        texture_scale: f32,
        opacity: f32,
        base_color: Vec3,
    ) -> Result<Self, WaveParameterError> {
        let params = Self {
            amplitude,
            frequency,
            bump_scale,
            texture_scale,
            opacity,
            base_color,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), WaveParameterError> {
        if !(self.amplitude > 0.0) {
            return Err(WaveParameterError::Amplitude(self.amplitude));
        }
        if !(self.frequency > 0.0) {
            return Err(WaveParameterError::Frequency(self.frequency));
        }
        if !(self.bump_scale >= 0.0) {
            return Err(WaveParameterError::BumpScale(self.bump_scale));
        }
        if !(self.texture_scale > 0.0) {
            return Err(WaveParameterError::TextureScale(self.texture_scale));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(WaveParameterError::Opacity(self.opacity));
        }
        Ok(())
    }
}

impl Default for WaveParameters {
    /// The parameters the scene ships with: gentle ripples, dodger-blue
    /// water, 60% opacity.
    fn default() -> Self {
        Self {
            amplitude: 0.08,
            frequency: 1.5,
            bump_scale: 0.4,
            texture_scale: 200.0,
            opacity: 0.6,
            base_color: Vec3::new(0.118, 0.565, 1.0),
        }
    }
}

/// A displaced vertex: position plus perturbed unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub position: Vec3,
    pub normal: Vec3,
}

/// The three wave terms at surface-local (x, z) and time `t`.
fn wave_terms(x: f32, z: f32, t: f32, params: &WaveParameters) -> (f32, f32, f32) {
    let f = params.frequency;
    let a = params.amplitude;
    let wave1 = (x * f + t).sin() * (z * f + t).sin() * a;
    let wave2 = (x * f * 1.5 + t * 1.2).sin() * (z * f * 1.5 + t * 1.2).sin() * a * 0.5;
    let wave3 = (x * f * 0.8 - t * 0.9).sin() * (z * f * 0.8 - t * 0.9).sin() * a * 0.3;
    (wave1, wave2, wave3)
}

/// Vertical displacement of the resting surface at (x, z) and time `t`.
pub fn surface_height(x: f32, z: f32, t: f32, params: &WaveParameters) -> f32 {
    let (w1, w2, w3) = wave_terms(x, z, t, params);
    w1 + w2 + w3
}

/// Displaces a base vertex position along +Y.
pub fn displace(position: Vec3, t: f32, params: &WaveParameters) -> Vec3 {
    position + Vec3::Y * surface_height(position.x, position.z, t, params)
}

/// Perturbs a base normal by the wave magnitudes and renormalizes.
pub fn perturbed_normal(normal: Vec3, x: f32, z: f32, t: f32, params: &WaveParameters) -> Vec3 {
    let (w1, w2, w3) = wave_terms(x, z, t, params);
    (normal + Vec3::new(w1 + w3, w2, w1 + w2)).normalize()
}

/// Full vertex-stage output for one base vertex.
pub fn surface_sample(
    position: Vec3,
    normal: Vec3,
    t: f32,
    params: &WaveParameters,
) -> SurfaceSample {
    SurfaceSample {
        position: displace(position, t, params),
        normal: perturbed_normal(normal, position.x, position.z, t, params),
    }
}

/// Upper bound on |displacement| for these parameters.
pub fn max_displacement(params: &WaveParameters) -> f32 {
    params.amplitude * WAVE_STACK_GAIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_is_bounded_by_stacked_amplitude() {
        let params = WaveParameters::default();
        let bound = max_displacement(&params) + 1e-6;
        for xi in -20..=20 {
            for zi in -20..=20 {
                for ti in 0..50 {
                    let (x, z, t) = (xi as f32 * 7.3, zi as f32 * 5.1, ti as f32 * 0.37);
                    let h = surface_height(x, z, t, &params);
                    assert!(
                        h.abs() <= bound,
                        "height {h} exceeds bound {bound} at ({x}, {z}, {t})"
                    );
                }
            }
        }
    }

    #[test]
    fn displacement_matches_formula_at_t_zero() {
        let params = WaveParameters::default();
        let (f, a) = (params.frequency, params.amplitude);
        for (x, z) in [(0.0, 0.0), (1.0, 2.0), (-3.5, 0.25), (10.0, -7.0)] {
            let expected = (x * f).sin() * (z * f).sin() * a
                + (x * f * 1.5).sin() * (z * f * 1.5).sin() * a * 0.5
                + (x * f * 0.8).sin() * (z * f * 0.8).sin() * a * 0.3;
            let actual = surface_height(x, z, 0.0, &params);
            assert!(
                (actual - expected).abs() < 1e-6,
                "t=0 mismatch at ({x}, {z}): {actual} vs {expected}"
            );
        }
    }

    #[test]
    fn displacement_is_continuous_in_time() {
        let params = WaveParameters::default();
        let dt = 1e-4;
        for ti in 0..100 {
            let t = ti as f32 * 0.31;
            let delta = (surface_height(4.2, -1.7, t + dt, &params)
                - surface_height(4.2, -1.7, t, &params))
            .abs();
            // Slope of each sine product is bounded by its angular rates, so
            // a tiny time step can only move the surface a tiny amount.
            assert!(delta < 0.01, "discontinuity at t={t}: delta {delta}");
        }
    }

    #[test]
    fn perturbed_normal_is_unit_length() {
        let params = WaveParameters::default();
        for ti in 0..20 {
            let t = ti as f32 * 0.77;
            let n = perturbed_normal(Vec3::Y, 3.0, -8.0, t, &params);
            assert!((n.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn displace_only_moves_along_y() {
        let params = WaveParameters::default();
        let base = Vec3::new(12.0, 40.0, -3.0);
        let displaced = displace(base, 2.5, &params);
        assert_eq!(displaced.x, base.x);
        assert_eq!(displaced.z, base.z);
        assert_ne!(displaced.y, base.y);
    }

    #[test]
    fn out_of_range_parameters_are_rejected() {
        let ok = WaveParameters::default();
        assert!(ok.validate().is_ok());

        let cases = [
            (
                WaveParameters { amplitude: -0.08, ..ok },
                WaveParameterError::Amplitude(-0.08),
            ),
            (
                WaveParameters { amplitude: 0.0, ..ok },
                WaveParameterError::Amplitude(0.0),
            ),
            (
                WaveParameters { frequency: 0.0, ..ok },
                WaveParameterError::Frequency(0.0),
            ),
            (
                WaveParameters { bump_scale: -1.0, ..ok },
                WaveParameterError::BumpScale(-1.0),
            ),
            (
                WaveParameters { texture_scale: 0.0, ..ok },
                WaveParameterError::TextureScale(0.0),
            ),
            (
                WaveParameters { opacity: 1.5, ..ok },
                WaveParameterError::Opacity(1.5),
            ),
        ];
        for (params, expected) in cases {
            assert_eq!(params.validate(), Err(expected));
        }
    }
}
