//! Archetype fingerprinting.
//!
//! A fingerprint summarises one combination of component keys as a fixed-width
//! integer, so an external matcher can compare component sets against system
//! queries without re-hashing raw key lists on every check.
//!
//! The hash is FNV-1a with 32-bit wrapping arithmetic, folded over the keys'
//! bytes in sequence order with a `,` separator after every key. The
//! separator keeps multi-key sequences unambiguous: `["a","bc"]` and
//! `["ab","c"]` would otherwise collide.

use serde::{Deserialize, Serialize};

use crate::key::ComponentKey;

/// A fixed-width hash of an ordered component-key sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArchetypeFingerprint(pub u32);

impl ArchetypeFingerprint {
    /// FNV-1a 32-bit offset basis.
    const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

    /// FNV-1a 32-bit prime.
    const FNV_PRIME: u32 = 16_777_619;

    /// Folded in after every key, including the last.
    const SEPARATOR: u8 = b',';

    /// Hash an ordered sequence of component keys.
    ///
    /// The sequence is hashed in the order given; callers that need the
    /// canonical archetype fingerprints sort their keys first (see
    /// [`suffix_fingerprints`]). A single-key sequence still gets the
    /// trailing separator fold, and the empty sequence hashes to the offset
    /// basis.
    #[must_use]
    pub fn of_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hash = Self::FNV_OFFSET_BASIS;
        for key in keys {
            for &byte in key.as_ref().as_bytes() {
                hash = (hash ^ u32::from(byte)).wrapping_mul(Self::FNV_PRIME);
            }
            hash = (hash ^ u32::from(Self::SEPARATOR)).wrapping_mul(Self::FNV_PRIME);
        }
        Self(hash)
    }

    /// Returns the raw 32-bit fingerprint value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ArchetypeFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Fingerprint every contiguous tail of a sorted key sequence.
///
/// For `n` keys this yields `n` fingerprints: entry `i` covers
/// `sorted_keys[i..]`, so the first entry covers the full set and the last
/// covers only the greatest single key. Tails only — this is deliberately
/// not a power-set enumeration.
#[must_use]
pub fn suffix_fingerprints(sorted_keys: &[ComponentKey]) -> Vec<ArchetypeFingerprint> {
    (0..sorted_keys.len())
        .map(|i| ArchetypeFingerprint::of_keys(sorted_keys[i..].iter().map(ComponentKey::as_str)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<ComponentKey> {
        names.iter().copied().map(ComponentKey::from).collect()
    }

    #[test]
    fn test_empty_sequence_hashes_to_offset_basis() {
        let empty: [&str; 0] = [];
        assert_eq!(
            ArchetypeFingerprint::of_keys(empty),
            ArchetypeFingerprint(0x811c_9dc5)
        );
    }

    #[test]
    fn test_single_key_known_vector() {
        // FNV-1a over the bytes `a` then `,`.
        assert_eq!(
            ArchetypeFingerprint::of_keys(["a"]),
            ArchetypeFingerprint(0xff24_8b00)
        );
    }

    #[test]
    fn test_pos_vel_known_vectors() {
        assert_eq!(
            ArchetypeFingerprint::of_keys(["pos", "vel"]),
            ArchetypeFingerprint(0x4682_041a)
        );
        assert_eq!(
            ArchetypeFingerprint::of_keys(["vel"]),
            ArchetypeFingerprint(0x3c11_9a3c)
        );
    }

    #[test]
    fn test_separator_disambiguates_key_boundaries() {
        assert_ne!(
            ArchetypeFingerprint::of_keys(["a", "bc"]),
            ArchetypeFingerprint::of_keys(["ab", "c"])
        );
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        assert_ne!(
            ArchetypeFingerprint::of_keys(["pos", "vel"]),
            ArchetypeFingerprint::of_keys(["vel", "pos"])
        );
    }

    #[test]
    fn test_suffixes_cover_tails_in_order() {
        let keys = keys(&["hp", "pos", "vel"]);
        let prints = suffix_fingerprints(&keys);

        assert_eq!(prints.len(), 3);
        assert_eq!(prints[0], ArchetypeFingerprint::of_keys(["hp", "pos", "vel"]));
        assert_eq!(prints[1], ArchetypeFingerprint::of_keys(["pos", "vel"]));
        assert_eq!(prints[2], ArchetypeFingerprint::of_keys(["vel"]));
    }

    #[test]
    fn test_no_keys_no_fingerprints() {
        assert!(suffix_fingerprints(&[]).is_empty());
    }
}
