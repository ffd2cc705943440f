//! Math type re-exports and small angle utilities.
//!
//! Re-exports the `glam` types used throughout the crate so callers
//! do not need a direct glam dependency for the common cases.

pub use glam::{Mat2, Quat, Vec2, Vec3, Vec4};

use std::f32::consts::PI;

/// Wrap an angle in radians into `(-PI, PI]`.
///
/// Rotation extracted from a packed affine is only defined up to a full
/// turn; comparisons should wrap both sides first.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle % (2.0 * PI);
    if a <= -PI {
        a += 2.0 * PI;
    } else if a > PI {
        a -= 2.0 * PI;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-6);
        // -3*PI lands on the wrap boundary, either sign is acceptable
        assert!((wrap_angle(-3.0 * PI).abs() - PI).abs() < 1e-6);
        assert!((wrap_angle(PI / 2.0) - PI / 2.0).abs() < 1e-6);
    }
}
