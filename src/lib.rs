pub mod aliases;
pub mod background;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod film;
pub mod hit_record;
pub mod hitable;
pub mod material;
pub mod onb;
pub mod path_segment;
pub mod pdf;
pub mod random;
pub mod ray;
pub mod scene;
pub mod termination;
pub mod trace;

pub use crate::error::{Error, Result};
pub use crate::material::{scatter, Material, Scatter, Scatterer};
pub use crate::path_segment::PathSegment;
pub use crate::pdf::sample_cosine_hemisphere;
pub use crate::termination::is_alive;
