//! Basic utilities: error types and math re-exports.

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{wrap_angle, Mat2, Quat, Vec2, Vec3, Vec4};
