//! Jenkins one-at-a-time 32-bit hash ("joaat"), lowercase variant.
//!
//! Original algorithm by Bob Jenkins. This is the variant used as a
//! content key for named resources in the dictionary format ecosystem:
//! input is ASCII-lowercased before hashing and the seed is 0. Output
//! must stay bit-for-bit compatible with the other tools in that
//! ecosystem, so do not change the folding or the final avalanche.
//!
//! # Example
//! ```
//! assert_eq!(jenkhash::hash("a"), 0xCA2E9442);
//! assert_eq!(jenkhash::hash("A"), jenkhash::hash("a"));
//! ```

#![cfg_attr(not(test), no_std)]

/// Hash a string, ASCII-lowercasing each byte, seed 0.
#[inline]
pub fn hash(key: &str) -> u32 {
    hash_bytes(key.as_bytes())
}

/// Hash raw bytes, ASCII-lowercasing each byte, seed 0.
pub fn hash_bytes(key: &[u8]) -> u32 {
    let mut h: u32 = 0;
    for &b in key {
        h = h.wrapping_add(b.to_ascii_lowercase() as u32);
        h = h.wrapping_add(h << 10);
        h ^= h >> 6;
    }
    h = h.wrapping_add(h << 3);
    h ^= h >> 11;
    h.wrapping_add(h << 15)
}

/// Hash raw bytes without case folding.
///
/// Only for callers that pre-fold or hash non-name data; named
/// resources always go through [`hash`] / [`hash_bytes`].
pub fn hash_bytes_exact(key: &[u8]) -> u32 {
    let mut h: u32 = 0;
    for &b in key {
        h = h.wrapping_add(b as u32);
        h = h.wrapping_add(h << 10);
        h ^= h >> 6;
    }
    h = h.wrapping_add(h << 3);
    h ^= h >> 11;
    h.wrapping_add(h << 15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(hash(""), 0);
    }

    #[test]
    fn test_known_vector() {
        // Reference value shared across the format's tooling.
        assert_eq!(hash("a"), 0xCA2E9442);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(hash("Vehicle_Paint1"), hash("vehicle_paint1"));
        assert_eq!(hash("ABC"), hash("abc"));
        assert_ne!(hash_bytes_exact(b"ABC"), hash_bytes_exact(b"abc"));
        assert_eq!(hash_bytes_exact(b"abc"), hash("abc"));
    }

    #[test]
    fn test_deterministic() {
        let names = ["prop_chair_01", "skel_head", "uv_anim.002"];
        for name in names {
            assert_eq!(hash(name), hash(name));
        }
    }
}
