//! Packed UV affine transform codec.
//!
//! Animated UV transforms are stored per keyframe as two packed
//! 3-vectors: `uv0 = (a, b, tx)`, `uv1 = (c, d, ty)`, where `(a, b, c, d)`
//! is a 2x2 linear map composed as `rotation * shear_x * scale`. This
//! module converts between that packed form and decomposed
//! translate/rotate/scale/shear parameters.
//!
//! The decomposition carries the ambiguities inherent to 2D affine
//! decomposition: rotation is only defined modulo a full turn, and a
//! negated scale pair is indistinguishable from a half-turn rotation.
//! The packed format does not disambiguate, so neither does this codec;
//! round-tripping the packed form is exact (within float tolerance) even
//! when the decomposed parameters are not the ones originally authored.

use bytemuck::{Pod, Zeroable};
use glam::{Mat2, Vec2, Vec3};

use crate::util::{Error, Result};

/// Below this |sy| the decomposition is undefined (division by the
/// Y scale factor).
pub const UV_EPSILON: f32 = 1e-8;

/// One keyframe of a UV affine track, as stored in the file.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PackedUv {
    /// `(a, b, tx)` - first row of the affine, plus X translation.
    pub uv0: Vec3,
    /// `(c, d, ty)` - second row of the affine, plus Y translation.
    pub uv1: Vec3,
}

/// Decomposed UV transform parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvAffine {
    pub translation: Vec2,
    /// Radians.
    pub rotation: f32,
    pub scale: Vec2,
    pub shear_x: f32,
}

impl Default for PackedUv {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PackedUv {
    /// Identity transform, the authoring-time default for UV tracks.
    pub const IDENTITY: Self = Self {
        uv0: Vec3::new(1.0, 0.0, 0.0),
        uv1: Vec3::new(0.0, 1.0, 0.0),
    };

    /// Create from the two packed rows.
    #[inline]
    pub const fn new(uv0: Vec3, uv1: Vec3) -> Self {
        Self { uv0, uv1 }
    }

    /// Decompose into translation, rotation, non-uniform scale, and X shear.
    ///
    /// Fails with [`Error::DegenerateTransform`] when the Y scale factor
    /// collapses below [`UV_EPSILON`], instead of propagating NaN/Inf.
    pub fn decompose(&self) -> Result<UvAffine> {
        let (a, b, tx) = (self.uv0.x, self.uv0.y, self.uv0.z);
        let (c, d, ty) = (self.uv1.x, self.uv1.y, self.uv1.z);

        let rotation = c.atan2(a);
        let (sin, cos) = rotation.sin_cos();
        let sx = (a * a + c * c).sqrt();
        let sy = d * cos - b * sin;
        if sy.abs() < UV_EPSILON {
            return Err(Error::DegenerateTransform { sy });
        }
        let shear_x = (b * cos + d * sin) / sy;

        Ok(UvAffine {
            translation: Vec2::new(tx, ty),
            rotation,
            scale: Vec2::new(sx, sy),
            shear_x,
        })
    }

    /// UV translation `(tx, ty)`. Stored directly, never degenerate.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.uv0.z, self.uv1.z)
    }

    /// Set the UV translation without touching the linear part.
    #[inline]
    pub fn set_translation(&mut self, translation: Vec2) {
        self.uv0.z = translation.x;
        self.uv1.z = translation.y;
    }

    /// Rotation component in radians.
    pub fn rotation(&self) -> Result<f32> {
        Ok(self.decompose()?.rotation)
    }

    /// Replace the rotation component, preserving the others.
    pub fn set_rotation(&mut self, rotation: f32) -> Result<()> {
        let mut params = self.decompose()?;
        params.rotation = rotation;
        *self = params.compose();
        Ok(())
    }

    /// Non-uniform scale component.
    pub fn scale(&self) -> Result<Vec2> {
        Ok(self.decompose()?.scale)
    }

    /// Replace the scale component, preserving the others.
    pub fn set_scale(&mut self, scale: Vec2) -> Result<()> {
        let mut params = self.decompose()?;
        params.scale = scale;
        *self = params.compose();
        Ok(())
    }

    /// Shear along the X axis.
    pub fn shear_x(&self) -> Result<f32> {
        Ok(self.decompose()?.shear_x)
    }

    /// Replace the X shear component, preserving the others.
    pub fn set_shear_x(&mut self, shear_x: f32) -> Result<()> {
        let mut params = self.decompose()?;
        params.shear_x = shear_x;
        *self = params.compose();
        Ok(())
    }
}

impl UvAffine {
    /// Identity parameters.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
        shear_x: 0.0,
    };

    /// Pack into the on-disk two-row form.
    ///
    /// The linear part is the product `rotation * shear_x * scale`, in
    /// exactly that order; reordering breaks the round trip with
    /// [`PackedUv::decompose`].
    pub fn compose(&self) -> PackedUv {
        let rotation = Mat2::from_angle(self.rotation);
        // rows ((1, shear_x), (0, 1))
        let shear = Mat2::from_cols(Vec2::new(1.0, 0.0), Vec2::new(self.shear_x, 1.0));
        let scale = Mat2::from_diagonal(self.scale);

        let m = rotation * shear * scale;

        PackedUv {
            // row 0 = (m00, m01), row 1 = (m10, m11); glam is column-major
            uv0: Vec3::new(m.x_axis.x, m.y_axis.x, self.translation.x),
            uv1: Vec3::new(m.x_axis.y, m.y_axis.y, self.translation.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::wrap_angle;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const TOL: f32 = 1e-6;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!((a - b).abs().max_element() < TOL, "{a:?} != {b:?}");
    }

    fn assert_packed_near(a: PackedUv, b: PackedUv) {
        assert_vec3_near(a.uv0, b.uv0);
        assert_vec3_near(a.uv1, b.uv1);
    }

    #[test]
    fn test_identity() {
        let params = PackedUv::IDENTITY.decompose().unwrap();
        assert_eq!(params.translation, Vec2::ZERO);
        assert_eq!(params.rotation, 0.0);
        assert_vec3_near(params.scale.extend(0.0), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(params.shear_x, 0.0);

        assert_packed_near(UvAffine::IDENTITY.compose(), PackedUv::IDENTITY);
    }

    #[test]
    fn test_compose_rotation() {
        let packed = UvAffine {
            rotation: FRAC_PI_2,
            ..UvAffine::IDENTITY
        }
        .compose();
        // quarter turn: a ~ 0, b = -1, c = 1, d ~ 0
        assert_vec3_near(packed.uv0, Vec3::new(0.0, -1.0, 0.0));
        assert_vec3_near(packed.uv1, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_roundtrip_packed() {
        let cases = [
            PackedUv::new(Vec3::new(1.0, 0.0, 0.25), Vec3::new(0.0, 1.0, -0.5)),
            PackedUv::new(Vec3::new(0.8, -0.6, 0.0), Vec3::new(0.6, 0.8, 0.0)),
            PackedUv::new(Vec3::new(2.0, 0.3, 1.0), Vec3::new(-0.1, 0.9, 2.0)),
            PackedUv::new(Vec3::new(-1.5, 0.2, 0.1), Vec3::new(0.4, 1.1, 0.2)),
        ];
        for packed in cases {
            let roundtripped = packed.decompose().unwrap().compose();
            assert_packed_near(roundtripped, packed);
        }
    }

    #[test]
    fn test_roundtrip_params() {
        let cases = [
            UvAffine {
                translation: Vec2::new(0.5, -0.25),
                rotation: FRAC_PI_4,
                scale: Vec2::new(2.0, 0.5),
                shear_x: 0.3,
            },
            UvAffine {
                translation: Vec2::ZERO,
                rotation: -2.5,
                scale: Vec2::new(1.0, 3.0),
                shear_x: -1.0,
            },
        ];
        for params in cases {
            let back = params.compose().decompose().unwrap();
            assert!((back.translation - params.translation).abs().max_element() < TOL);
            assert!(wrap_angle(back.rotation - params.rotation).abs() < TOL);
            assert!((back.scale - params.scale).abs().max_element() < 1e-5);
            assert!((back.shear_x - params.shear_x).abs() < 1e-5);
        }
    }

    #[test]
    fn test_negative_scale_ambiguity() {
        // A negative X scale re-reads as a rotated positive scale; only
        // the packed form is canonical.
        let params = UvAffine {
            scale: Vec2::new(-1.0, 1.0),
            ..UvAffine::IDENTITY
        };
        let packed = params.compose();
        let back = packed.decompose().unwrap();
        assert!(back.scale.x > 0.0);
        assert!((wrap_angle(back.rotation).abs() - PI).abs() < 1e-5);
        assert_packed_near(back.compose(), packed);
    }

    #[test]
    fn test_degenerate() {
        // d = 0, b = 0 gives sy = 0
        let packed = PackedUv::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
        let err = packed.decompose().unwrap_err();
        assert!(matches!(err, Error::DegenerateTransform { .. }));
    }

    #[test]
    fn test_setters_preserve_components() {
        let mut packed = UvAffine {
            translation: Vec2::new(0.1, 0.2),
            rotation: 0.4,
            scale: Vec2::new(1.5, 0.75),
            shear_x: 0.2,
        }
        .compose();

        packed.set_rotation(1.0).unwrap();
        let params = packed.decompose().unwrap();
        assert!((params.rotation - 1.0).abs() < TOL);
        assert!((params.scale - Vec2::new(1.5, 0.75)).abs().max_element() < 1e-5);
        assert!((params.shear_x - 0.2).abs() < 1e-5);
        assert!((params.translation - Vec2::new(0.1, 0.2)).abs().max_element() < TOL);

        packed.set_scale(Vec2::new(2.0, 2.0)).unwrap();
        let params = packed.decompose().unwrap();
        assert!((params.rotation - 1.0).abs() < 1e-5);
        assert!((params.scale - Vec2::new(2.0, 2.0)).abs().max_element() < 1e-5);

        packed.set_shear_x(0.0).unwrap();
        let params = packed.decompose().unwrap();
        assert!(params.shear_x.abs() < 1e-5);

        packed.set_translation(Vec2::new(3.0, 4.0));
        assert_eq!(packed.translation(), Vec2::new(3.0, 4.0));
    }
}
