// Re-export the scalar type and constants for the active float size.

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Cutoff below which a length is treated as degenerate (zero-area facets,
/// coincident interpolation endpoints).
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-6;
/// Cutoff below which a length is treated as degenerate (zero-area facets,
/// coincident interpolation endpoints).
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-12;
