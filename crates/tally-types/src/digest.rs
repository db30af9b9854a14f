use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// SHA-256 fingerprint of a sealed block.
///
/// A `BlockDigest` is both a block's identity and the value the next block
/// links to through its `previous_hash` field. Identical field values always
/// produce the same digest, which is what makes after-the-fact tampering
/// detectable by recomputation.
///
/// On the wire a digest is a lowercase 64-character hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockDigest([u8; 32]);

impl BlockDigest {
    /// Create a digest from a pre-computed hash.
    pub const fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The sentinel digest (all zeros), used as `previous_hash` by the
    /// genesis block, which has no real predecessor.
    pub const fn sentinel() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the sentinel digest.
    pub fn is_sentinel(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for BlockDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockDigest({})", self.short_hex())
    }
}

impl fmt::Display for BlockDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for BlockDigest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<BlockDigest> for [u8; 32] {
    fn from(digest: BlockDigest) -> Self {
        digest.0
    }
}

impl Serialize for BlockDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BlockDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_all_zeros() {
        let sentinel = BlockDigest::sentinel();
        assert!(sentinel.is_sentinel());
        assert_eq!(sentinel.as_bytes(), &[0u8; 32]);
    }

    #[test]
    fn non_zero_digest_is_not_sentinel() {
        let digest = BlockDigest::from_hash([7u8; 32]);
        assert!(!digest.is_sentinel());
    }

    #[test]
    fn hex_roundtrip() {
        let digest = BlockDigest::from_hash([0xab; 32]);
        let hex = digest.to_hex();
        let parsed = BlockDigest::from_hex(&hex).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = BlockDigest::from_hex("abcd").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(matches!(
            BlockDigest::from_hex("zz"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn short_hex_is_8_chars() {
        let digest = BlockDigest::from_hash([0xff; 32]);
        assert_eq!(digest.short_hex().len(), 8);
    }

    #[test]
    fn display_is_full_hex() {
        let digest = BlockDigest::from_hash([1u8; 32]);
        let display = format!("{digest}");
        assert_eq!(display.len(), 64);
        assert_eq!(display, digest.to_hex());
    }

    #[test]
    fn serde_uses_hex_strings() {
        let digest = BlockDigest::from_hash([0x0f; 32]);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", digest.to_hex()));
        let parsed: BlockDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn ordering_is_consistent() {
        let a = BlockDigest::from_hash([0; 32]);
        let b = BlockDigest::from_hash([1; 32]);
        assert!(a < b);
    }
}
