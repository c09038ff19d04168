//! Water surface model.
//!
//! CPU-side reference of the wave model implemented in the app's water
//! shader (`islet/src/water/water.wgsl`). The shader and these functions
//! must use identical formulas and constants, so that anything that wants
//! to query the surface on the CPU (tests, a future floating object) sees
//! the same water the GPU draws.
//!
//! The model has two halves:
//! - [`surface`]: per-vertex vertical displacement and perturbed normal as
//!   a function of (surface-local position, elapsed time).
//! - [`shading`]: per-fragment color and opacity as a function of (surface
//!   coordinate, elapsed time, two texture samples, view direction).

mod shading;
mod surface;

pub use shading::{
    bump_perturb, fresnel, scrolled_bump_uv, scrolled_texture_uv, shade, ShadedSample,
};
pub use surface::{
    displace, max_displacement, perturbed_normal, surface_height, surface_sample, SurfaceSample,
    WaveParameterError, WaveParameters,
};
