//! Hash-ordered resource dictionaries.
//!
//! A dictionary is a named collection of sub-resources (drawables, clips)
//! serialized together. The on-disk entry order is not insertion order:
//! entries are sorted ascending by the Jenkins hash of their base name,
//! because the hash doubles as the lookup key for every other tool in the
//! format ecosystem. Ties keep insertion order.
//!
//! Payload byte layout is owned by the caller; this module only governs
//! entry ordering, base-name derivation, and the container framing.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use tracing::debug;

use crate::util::{Error, Result};

/// Magic bytes at the start of a serialized dictionary container.
pub const DICT_MAGIC: &[u8; 4] = b"DICT";

/// Container format version written into the header.
pub const DICT_VERSION: u32 = 1;

/// A single named dictionary entry.
#[derive(Clone, Debug)]
pub struct Entry<T> {
    /// Display name, possibly carrying a `.NNN` disambiguation suffix.
    pub name: String,
    /// Opaque payload, serialized by the caller.
    pub payload: T,
}

impl<T> Entry<T> {
    /// Base name of this entry (suffix stripped), used for hashing.
    pub fn base_name(&self) -> &str {
        base_name(&self.name)
    }

    /// Content key: Jenkins hash of the lowercased base name.
    pub fn name_hash(&self) -> u32 {
        jenkhash::hash(self.base_name())
    }
}

/// Strip a single trailing `.NNN` disambiguation suffix from a name.
///
/// `"foo.002"` becomes `"foo"`; names without a trailing dot-digits
/// suffix pass through unchanged. Only one suffix is stripped, so
/// `"foo.001.002"` becomes `"foo.001"`.
pub fn base_name(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, suffix))
            if !stem.is_empty()
                && !suffix.is_empty()
                && suffix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            stem
        }
        _ => name,
    }
}

/// Named-entry container serialized in hash order.
///
/// Lifecycle: constructed empty, entries appended during collection,
/// [`sort`](Dictionary::sort) called before [`serialize`](Dictionary::serialize),
/// immutable afterwards.
#[derive(Clone, Debug)]
pub struct Dictionary<T> {
    entries: Vec<Entry<T>>,
    strict: bool,
    sorted: bool,
    frozen: bool,
}

impl<T> Default for Dictionary<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Dictionary<T> {
    /// Create an empty dictionary. Duplicate names are accepted;
    /// disambiguation is the caller's responsibility.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            strict: false,
            sorted: false,
            frozen: false,
        }
    }

    /// Create an empty dictionary that rejects duplicate base names at
    /// insertion time. Surfaces authoring mistakes before export instead
    /// of silently colliding on the content key.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::new()
        }
    }

    /// Append an entry.
    ///
    /// Fails with [`Error::EmptyName`] for empty names, [`Error::Frozen`]
    /// after serialization, and [`Error::DuplicateName`] in strict mode
    /// when another entry shares the same base name (case-insensitive,
    /// since the content key is).
    pub fn insert(&mut self, name: impl Into<String>, payload: T) -> Result<()> {
        if self.frozen {
            return Err(Error::Frozen);
        }
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.strict {
            let base = base_name(&name);
            if self
                .entries
                .iter()
                .any(|e| e.base_name().eq_ignore_ascii_case(base))
            {
                return Err(Error::DuplicateName(name));
            }
        }
        self.entries.push(Entry { name, payload });
        self.sorted = false;
        Ok(())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether [`sort`](Dictionary::sort) has been called since the last insert.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Look up an entry by exact display name.
    pub fn get(&self, name: &str) -> Option<&Entry<T>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Iterate over entries in current order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    /// Entry names in current order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Stable sort ascending by base-name hash.
    ///
    /// Entries whose base names collide (e.g. `"b.001"` and `"b.002"`)
    /// share a hash and keep their insertion order.
    pub fn sort(&mut self) -> Result<()> {
        if self.frozen {
            return Err(Error::Frozen);
        }
        self.entries.sort_by_key(|e| e.name_hash());
        self.sorted = true;
        debug!(entries = self.entries.len(), "dictionary sorted by name hash");
        Ok(())
    }

    /// Serialize the container: header, then each entry in sorted order.
    ///
    /// Per-entry framing is the base-name hash (u32), the display name
    /// (u16 length + UTF-8 bytes), then the payload written by
    /// `write_payload`. Requires a prior [`sort`](Dictionary::sort);
    /// freezes the dictionary on success.
    pub fn serialize<W, F>(&mut self, writer: &mut W, mut write_payload: F) -> Result<()>
    where
        W: Write,
        F: FnMut(&mut W, &T) -> Result<()>,
    {
        if self.frozen {
            return Err(Error::Frozen);
        }
        if !self.sorted {
            return Err(Error::Unsorted);
        }

        writer.write_all(DICT_MAGIC)?;
        writer.write_u32::<LittleEndian>(DICT_VERSION)?;
        writer.write_u32::<LittleEndian>(self.entries.len() as u32)?;

        for entry in &self.entries {
            writer.write_u32::<LittleEndian>(entry.name_hash())?;
            writer.write_u16::<LittleEndian>(entry.name.len() as u16)?;
            writer.write_all(entry.name.as_bytes())?;
            write_payload(writer, &entry.payload)?;
        }

        self.frozen = true;
        debug!(entries = self.entries.len(), "dictionary serialized");
        Ok(())
    }
}
