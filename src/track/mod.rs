//! Animation track codecs.
//!
//! Currently covers the packed UV affine transform used by animated
//! texture-coordinate tracks; see [`uv`].

pub mod uv;

pub use uv::{PackedUv, UvAffine, UV_EPSILON};
