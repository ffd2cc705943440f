//! # ragedict
//!
//! Codec core for hash-ordered game resource dictionaries - the
//! container shape used by drawable and clip dictionaries, where entry
//! order on disk is determined by the Jenkins hash of each entry's base
//! name rather than by insertion order.
//!
//! Documents are loaded by the caller, brought to the current schema by
//! [`versioning::do_versions`], and on export collected into a
//! [`dict::Dictionary`], sorted, and serialized. Animated UV transforms
//! are converted per keyframe between the packed two-row form and
//! decomposed parameters by [`track::uv`].
//!
//! ## Modules
//!
//! - [`util`] - Error types and math re-exports
//! - [`dict`] - Hash-ordered dictionary container
//! - [`track`] - Packed UV affine track codec
//! - [`doc`] - In-memory document model (materials, track sets)
//! - [`versioning`] - Schema migration of loaded documents
//!
//! ## Example
//!
//! ```
//! use ragedict::dict::Dictionary;
//!
//! let mut dict = Dictionary::new();
//! dict.insert("prop_chair.001", vec![0u8; 4])?;
//! dict.insert("prop_table", vec![0u8; 4])?;
//! dict.sort()?;
//!
//! let mut out = Vec::new();
//! dict.serialize(&mut out, |w, payload| {
//!     use std::io::Write;
//!     w.write_all(payload)?;
//!     Ok(())
//! })?;
//! # Ok::<(), ragedict::Error>(())
//! ```

pub mod dict;
pub mod doc;
pub mod track;
pub mod util;
pub mod versioning;

// Re-export commonly used types
pub use dict::{base_name, Dictionary, Entry};
pub use track::{PackedUv, UvAffine};
pub use util::{Error, Result};
pub use versioning::do_versions;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dict::{base_name, Dictionary, Entry};
    pub use crate::doc::{
        Document, DocumentConfig, Material, NodeValue, PaintLayer, SchemaVersion, TrackSet,
    };
    pub use crate::track::{PackedUv, UvAffine};
    pub use crate::util::{Error, Result};
    pub use crate::versioning::{do_versions, MigrationStep, Migrator};
}
