//! In-memory document model.
//!
//! A document is the already-loaded scene data handed to this crate by
//! the host integration layer: named materials with typed node values,
//! animation track sets, and an explicit schema version. File I/O and
//! the host's own object graph are out of scope; migration and export
//! operate on this model only.

pub mod material;
pub mod tracks;

pub use material::{Material, Node, NodeValue, PaintLayer};
pub use tracks::{Channel, ChannelValue, TrackSet, UV0, UV1};

use glam::Vec3;

/// Explicit schema version tag.
///
/// Older documents carried no version field; those import as
/// [`Legacy`](SchemaVersion::Legacy) and are classified by shape once,
/// at migration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchemaVersion {
    /// Versionless legacy file, shape unknown.
    Legacy,
    /// 2.50: materials carry a paint-layer classification.
    V250,
}

impl SchemaVersion {
    /// The version written by the current tooling.
    pub const CURRENT: Self = Self::V250;
}

/// Document-wide configuration, passed to the constructor explicitly
/// rather than registered globally.
#[derive(Clone, Debug)]
pub struct DocumentConfig {
    /// Name of the diffuse color node in material graphs.
    pub diffuse_node: String,
    /// Stock diffuse color of non-paintable default materials.
    pub default_paint_diffuse: Vec3,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            diffuse_node: "matDiffuseColor".to_string(),
            default_paint_diffuse: Vec3::new(2.0, 5.0, 5.0),
        }
    }
}

/// An in-memory document: materials, track sets, schema version.
#[derive(Clone, Debug)]
pub struct Document {
    pub schema_version: SchemaVersion,
    pub materials: Vec<Material>,
    pub track_sets: Vec<TrackSet>,
    config: DocumentConfig,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DocumentConfig::default())
    }
}

impl Document {
    /// Create an empty legacy document with the given configuration.
    pub fn new(config: DocumentConfig) -> Self {
        Self {
            schema_version: SchemaVersion::Legacy,
            materials: Vec::new(),
            track_sets: Vec::new(),
            config,
        }
    }

    /// Document configuration.
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Look up a material by name.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// Look up a material by name, mutably.
    pub fn material_mut(&mut self, name: &str) -> Option<&mut Material> {
        self.materials.iter_mut().find(|m| m.name == name)
    }

    /// Look up a track set by name.
    pub fn track_set(&self, name: &str) -> Option<&TrackSet> {
        self.track_sets.iter().find(|t| t.name == name)
    }
}
