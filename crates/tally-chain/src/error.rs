use thiserror::Error;

/// Errors produced by chain operations and validation.
///
/// Validation failures carry the index of the first offending block. A chain
/// reporting one of these is not broken as a data structure — it is evidence
/// of tampering, surfaced to callers who asked for a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("block data must not be empty")]
    EmptyData,

    #[error("a chain must contain at least a genesis block")]
    EmptyChain,

    #[error("genesis block is not anchored to the sentinel hash")]
    GenesisNotAnchored,

    #[error("index mismatch: expected {expected}, found {found}")]
    IndexMismatch { expected: u64, found: u64 },

    #[error("hash mismatch at index {index}: stored digest differs from recomputation")]
    HashMismatch { index: u64 },

    #[error("broken link at index {index}: previous_hash does not match predecessor")]
    BrokenLink { index: u64 },
}
