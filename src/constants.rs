//! Numeric constants shared by the sampling and scattering code.

pub use std::f32::consts::PI;

pub const TWO_PI: f32 = 2.0 * PI;

/// Largest absolute component a unit vector can have on every axis at once.
/// Any unit normal has at least one component below this, which keeps the
/// helper axis of [`crate::onb::Onb`] away from the normal.
pub const SQRT_OF_ONE_THIRD: f32 = 0.577_350_26;

/// Offset applied along the normal after diffuse and mirror bounces.
pub const SURFACE_OFFSET: f32 = 1.0e-4;

/// Offset applied after dielectric bounces (along the working normal or the
/// refracted direction).
pub const DIELECTRIC_OFFSET: f32 = 1.0e-2;

/// Divisor applied to the Schlick reflectance in the legacy dielectric split.
pub const LEGACY_FRESNEL_DIVISOR: f32 = 1.5;
