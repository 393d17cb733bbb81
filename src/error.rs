//! Error types for the crate's input boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type of the crate. The scatter step itself never fails; these
/// come from validating external input and from the host renderer.
#[derive(Error, Debug)]
pub enum Error {
    /// Material flags do not select exactly one of diffuse, mirror or dielectric
    #[error("invalid material flags: has_reflective = {has_reflective}, has_refractive = {has_refractive}")]
    InvalidMaterialFlags {
        has_reflective: f32,
        has_refractive: f32,
    },

    /// Index of refraction must be finite and positive
    #[error("invalid index of refraction: {0}")]
    InvalidIndexOfRefraction(f32),

    /// A configuration value is out of range
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfig { field: &'static str, value: String },

    /// The directory images are written to does not exist
    #[error("output directory does not exist: {0}")]
    OutputDirMissing(PathBuf),

    /// A render worker panicked
    #[error("render worker thread panicked")]
    WorkerPanicked,

    /// Writing an output image failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
