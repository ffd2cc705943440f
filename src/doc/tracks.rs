//! Animation track sets.
//!
//! A track set is a collection of named float/vector channels attached to
//! one animated target (a bone, a camera, a UV-animated material slot).
//! The UV channels `uv0`/`uv1` hold the packed affine rows consumed by
//! the track codec.

use glam::{Quat, Vec3};

use crate::track::{PackedUv, UvAffine};
use crate::util::{Error, Result};

/// Channel name for the first packed UV row.
pub const UV0: &str = "uv0";
/// Channel name for the second packed UV row.
pub const UV1: &str = "uv1";

/// Typed value held by a track channel at one keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelValue {
    Float(f32),
    Vec3(Vec3),
    Quat(Quat),
}

impl ChannelValue {
    /// Human-readable type name, used in type-mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "Float",
            Self::Vec3(_) => "Vec3",
            Self::Quat(_) => "Quat",
        }
    }
}

/// A named channel in a track set.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub name: String,
    pub value: ChannelValue,
}

/// Named collection of animation channels.
#[derive(Clone, Debug, Default)]
pub struct TrackSet {
    pub name: String,
    channels: Vec<Channel>,
}

impl TrackSet {
    /// Create an empty track set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channels: Vec::new(),
        }
    }

    /// Add or replace a channel value.
    pub fn set(&mut self, name: impl Into<String>, value: ChannelValue) {
        let name = name.into();
        for ch in &mut self.channels {
            if ch.name == name {
                ch.value = value;
                return;
            }
        }
        self.channels.push(Channel { name, value });
    }

    /// Look up a channel by name.
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name == name)
    }

    /// Typed lookup of a Vec3 channel.
    pub fn vec3(&self, name: &str) -> Result<Vec3> {
        match self.channel(name) {
            Some(Channel {
                value: ChannelValue::Vec3(v),
                ..
            }) => Ok(*v),
            Some(ch) => Err(Error::TypeMismatch {
                expected: "Vec3",
                actual: ch.value.type_name(),
            }),
            None => Err(Error::ChannelNotFound(name.to_string())),
        }
    }

    /// Typed lookup of a float channel.
    pub fn float(&self, name: &str) -> Result<f32> {
        match self.channel(name) {
            Some(Channel {
                value: ChannelValue::Float(v),
                ..
            }) => Ok(*v),
            Some(ch) => Err(Error::TypeMismatch {
                expected: "Float",
                actual: ch.value.type_name(),
            }),
            None => Err(Error::ChannelNotFound(name.to_string())),
        }
    }

    /// Current packed UV value; absent channels default to identity.
    pub fn packed_uv(&self) -> Result<PackedUv> {
        let uv0 = match self.channel(UV0) {
            Some(_) => self.vec3(UV0)?,
            None => PackedUv::IDENTITY.uv0,
        };
        let uv1 = match self.channel(UV1) {
            Some(_) => self.vec3(UV1)?,
            None => PackedUv::IDENTITY.uv1,
        };
        Ok(PackedUv::new(uv0, uv1))
    }

    /// Store a packed UV value into the `uv0`/`uv1` channels.
    pub fn set_packed_uv(&mut self, packed: PackedUv) {
        self.set(UV0, ChannelValue::Vec3(packed.uv0));
        self.set(UV1, ChannelValue::Vec3(packed.uv1));
    }

    /// Decompose the current UV channels.
    ///
    /// On a degenerate transform the error names this track set.
    pub fn uv_affine(&self) -> Result<UvAffine> {
        self.packed_uv()?
            .decompose()
            .map_err(|e| e.in_entry(self.name.clone()))
    }

    /// Compose parameters and store them into the UV channels.
    pub fn set_uv_affine(&mut self, params: &UvAffine) {
        self.set_packed_uv(params.compose());
    }

    /// Iterate over channels.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }
}
