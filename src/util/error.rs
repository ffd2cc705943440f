//! Error types for the ragedict library.

use thiserror::Error;

/// Main error type for dictionary, track codec, and migration operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Entry name is empty at insertion time
    #[error("Entry name is empty")]
    EmptyName,

    /// Strict-mode dictionary collision on base name
    #[error("Duplicate entry name: {0}")]
    DuplicateName(String),

    /// Serialization requested before the dictionary was sorted
    #[error("Dictionary must be sorted before serialization")]
    Unsorted,

    /// Dictionary has been serialized and is immutable
    #[error("Dictionary is frozen and cannot be modified")]
    Frozen,

    /// UV affine decomposition is undefined (zero scale along Y)
    #[error("Degenerate UV transform: |sy| = {sy:e} is below epsilon")]
    DegenerateTransform { sy: f32 },

    /// Error in a named entry (track set, material), wrapping the cause
    #[error("Entry '{name}': {source}")]
    Entry {
        name: String,
        #[source]
        source: Box<Error>,
    },

    /// Material node not found by name
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Track channel not found by name
    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    /// Typed lookup found a value of a different type
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Migration step registration violates the no-refire ordering
    #[error("Migration step '{step}' breaks registration order: {reason}")]
    MigrationOrder { step: String, reason: String },

    /// No migration rule matched and the document shape is not current
    #[error("Unrecognized document shape: {0}")]
    UnrecognizedShape(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Attach the offending entry's name as context to an error.
    pub fn in_entry(self, name: impl Into<String>) -> Self {
        Self::Entry {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for ragedict operations.
pub type Result<T> = std::result::Result<T, Error>;
