use std::sync::{Arc, RwLock};

use tally_chain::{Block, Chain};

use crate::error::{ServerError, ServerResult};

/// Shared handle to the process's single [`Chain`].
///
/// The chain itself is single-writer by contract; this wrapper is the
/// serialization point for the concurrent HTTP host. Appends take the write
/// lock, and reads take a consistent snapshot (blocks plus validity) under
/// one read guard, so validation never observes a half-finished append.
#[derive(Clone)]
pub struct AppState {
    chain: Arc<RwLock<Chain>>,
}

/// A consistent read of the chain: the blocks and their integrity verdict,
/// captured under the same lock guard.
pub struct ChainSnapshot {
    pub blocks: Vec<Block>,
    pub valid: bool,
}

impl AppState {
    /// State owning a fresh chain (genesis only).
    pub fn new() -> Self {
        Self::with_chain(Chain::new())
    }

    /// State owning an existing chain, e.g. one rebuilt from a dump.
    pub fn with_chain(chain: Chain) -> Self {
        Self {
            chain: Arc::new(RwLock::new(chain)),
        }
    }

    /// Snapshot the full chain and its validity.
    pub fn snapshot(&self) -> ServerResult<ChainSnapshot> {
        let chain = self
            .chain
            .read()
            .map_err(|_| ServerError::Internal("chain read lock poisoned".into()))?;
        Ok(ChainSnapshot {
            blocks: chain.blocks().to_vec(),
            valid: chain.is_valid(),
        })
    }

    /// Append a block carrying `data`, stamped with the current time.
    pub fn mine(&self, data: &str) -> ServerResult<Block> {
        if data.is_empty() {
            return Err(ServerError::DataRequired);
        }
        let mut chain = self
            .chain
            .write()
            .map_err(|_| ServerError::Internal("chain write lock poisoned".into()))?;
        let block = chain.append_now(data)?.clone();
        tracing::info!(index = block.index(), hash = %block.hash().short_hex(), "block mined");
        Ok(block)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_snapshot_is_genesis_only() {
        let state = AppState::new();
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.blocks.len(), 1);
        assert!(snapshot.valid);
    }

    #[test]
    fn mine_extends_the_chain() {
        let state = AppState::new();
        let block = state.mine("hello").unwrap();
        assert_eq!(block.index(), 1);

        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.blocks.len(), 2);
        assert!(snapshot.valid);
        assert_eq!(snapshot.blocks[1].previous_hash(), snapshot.blocks[0].hash());
    }

    #[test]
    fn mine_rejects_empty_data() {
        let state = AppState::new();
        assert!(matches!(state.mine(""), Err(ServerError::DataRequired)));
        assert_eq!(state.snapshot().unwrap().blocks.len(), 1);
    }

    #[test]
    fn clones_share_the_same_chain() {
        let state = AppState::new();
        let other = state.clone();
        state.mine("from-first-handle").unwrap();
        assert_eq!(other.snapshot().unwrap().blocks.len(), 2);
    }
}
