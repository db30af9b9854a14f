use crate::block::Block;
use crate::error::ChainError;

/// Verify a full block sequence against every chain invariant.
///
/// Checks, in order:
/// 1. The genesis block is anchored to the sentinel, sits at index 0, and its
///    stored digest matches a fresh recomputation.
/// 2. For every later block: index continuity, digest recomputation against
///    the stored hash, and the `previous_hash` link against the predecessor's
///    *stored* hash.
///
/// The link check deliberately compares against the predecessor's stored
/// digest rather than a recomputation: a tampered predecessor keeps its old
/// stored digest, so the forgery is caught by the digest check on the
/// predecessor itself, while the link check catches splices.
///
/// Returns the first violation found; `Ok(())` means the chain is intact.
pub fn verify_blocks(blocks: &[Block]) -> Result<(), ChainError> {
    let genesis = blocks.first().ok_or(ChainError::EmptyChain)?;

    if !genesis.previous_hash.is_sentinel() {
        return Err(ChainError::GenesisNotAnchored);
    }
    if genesis.index != 0 {
        return Err(ChainError::IndexMismatch {
            expected: 0,
            found: genesis.index,
        });
    }
    if genesis.compute_hash() != genesis.hash {
        return Err(ChainError::HashMismatch { index: 0 });
    }

    for (position, window) in blocks.windows(2).enumerate() {
        let (previous, current) = (&window[0], &window[1]);
        let expected_index = (position + 1) as u64;

        if current.index != expected_index {
            return Err(ChainError::IndexMismatch {
                expected: expected_index,
                found: current.index,
            });
        }
        if current.compute_hash() != current.hash {
            return Err(ChainError::HashMismatch {
                index: current.index,
            });
        }
        if current.previous_hash != previous.hash {
            return Err(ChainError::BrokenLink {
                index: current.index,
            });
        }
    }

    Ok(())
}
