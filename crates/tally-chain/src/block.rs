use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use tally_types::{BlockDigest, Timestamp};

/// One sealed record in the chain.
///
/// A block is logically immutable after [`Block::seal`]: there are no public
/// mutators, and the stored `hash` is always the digest of the fields as they
/// were at sealing time. Tampering is still representable — a block can be
/// deserialized from hostile input — but any mismatch between the stored hash
/// and a fresh [`Block::compute_hash`] is caught by chain validation.
///
/// Serde field names are the wire names the HTTP API exposes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub(crate) index: u64,
    pub(crate) previous_hash: BlockDigest,
    pub(crate) hash: BlockDigest,
    pub(crate) data: String,
    pub(crate) timestamp: Timestamp,
}

impl Block {
    /// Seal a new block, computing its digest from the given fields.
    ///
    /// The digest is SHA-256 over the concatenation of the decimal index, the
    /// hex previous hash, the raw payload, and the canonical timestamp, in
    /// that order with no separators. Sealing is total: any well-typed input
    /// produces a block.
    pub fn seal(
        index: u64,
        previous_hash: BlockDigest,
        data: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        let data = data.into();
        let hash = digest_fields(index, &previous_hash, &data, timestamp);
        Self {
            index,
            previous_hash,
            hash,
            data,
            timestamp,
        }
    }

    /// Recompute this block's digest from its current field values.
    ///
    /// Pure; used only at validation time. For an untampered block the result
    /// equals [`Block::hash`].
    pub fn compute_hash(&self) -> BlockDigest {
        digest_fields(self.index, &self.previous_hash, &self.data, self.timestamp)
    }

    /// Position in the chain, 0 for genesis.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Digest of the predecessor block; the sentinel for genesis.
    pub fn previous_hash(&self) -> BlockDigest {
        self.previous_hash
    }

    /// The digest computed at sealing time.
    pub fn hash(&self) -> BlockDigest {
        self.hash
    }

    /// Caller-supplied payload. Opaque to the chain.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Creation time.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns `true` if this block carries the genesis anchor.
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.previous_hash.is_sentinel()
    }
}

/// SHA-256 over `dec(index) ∥ hex(previous_hash) ∥ data ∥ canonical(timestamp)`.
///
/// The preimage format is fixed: changing it would silently invalidate every
/// existing chain, so both `seal` and `compute_hash` go through here.
fn digest_fields(
    index: u64,
    previous_hash: &BlockDigest,
    data: &str,
    timestamp: Timestamp,
) -> BlockDigest {
    let mut hasher = Sha256::new();
    hasher.update(index.to_string().as_bytes());
    hasher.update(previous_hash.to_hex().as_bytes());
    hasher.update(data.as_bytes());
    hasher.update(timestamp.canonical().as_bytes());
    BlockDigest::from_hash(hasher.finalize().into())
}
