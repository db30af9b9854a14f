use tally_types::Timestamp;

use crate::block::Block;
use crate::error::ChainError;
use crate::validation::verify_blocks;
use crate::GENESIS_DATA;

/// The append-only ledger: an ordered, exclusively-owned block sequence.
///
/// A chain always holds at least its genesis block. Blocks are appended one
/// at a time and never removed or reordered; `append` is the only writer.
/// There is no internal locking — hosts with concurrent callers must
/// serialize access themselves.
#[derive(Clone, Debug)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain holding a freshly sealed genesis block.
    pub fn new() -> Self {
        let genesis = Block::seal(
            0,
            tally_types::BlockDigest::sentinel(),
            GENESIS_DATA,
            Timestamp::now(),
        );
        Self {
            blocks: vec![genesis],
        }
    }

    /// Rebuild a chain from an already-sealed block sequence, e.g. one
    /// deserialized from a `/chain` dump.
    ///
    /// Only the at-least-genesis invariant is enforced here; the sequence may
    /// still be tampered. Run [`Chain::verify`] to find out.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, ChainError> {
        if blocks.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        Ok(Self { blocks })
    }

    /// Append a new block carrying `data`, linked to the current tip.
    ///
    /// Rejects empty payloads before touching the sequence. Otherwise cannot
    /// fail: the new block takes `index = len`, links to the tip's stored
    /// digest, and is sealed with the supplied timestamp.
    pub fn append(
        &mut self,
        data: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<&Block, ChainError> {
        let data = data.into();
        if data.is_empty() {
            return Err(ChainError::EmptyData);
        }

        let block = Block::seal(self.blocks.len() as u64, self.tip().hash(), data, timestamp);
        tracing::debug!(index = block.index(), hash = %block.hash().short_hex(), "block appended");
        self.blocks.push(block);
        Ok(self.tip())
    }

    /// Append with the current wall-clock time.
    pub fn append_now(&mut self, data: impl Into<String>) -> Result<&Block, ChainError> {
        self.append(data, Timestamp::now())
    }

    /// The most recent block.
    ///
    /// A constructed chain always has a tip; an empty sequence here is a
    /// programming error, not a recoverable condition.
    pub fn tip(&self) -> &Block {
        self.blocks
            .last()
            .expect("chain invariant: genesis block always present")
    }

    /// The genesis block.
    pub fn genesis(&self) -> &Block {
        &self.blocks[0]
    }

    /// All blocks in chain order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks, genesis included. Always ≥ 1.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Present for completeness; a constructed chain is never empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Walk the whole chain and return the first integrity violation, if any.
    pub fn verify(&self) -> Result<(), ChainError> {
        verify_blocks(&self.blocks)
    }

    /// Boolean integrity verdict: `false` means tampering was detected.
    ///
    /// An invalid chain is an expected outcome, not an error.
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tally_types::{BlockDigest, Timestamp};

    use super::*;

    #[test]
    fn new_chain_holds_a_valid_genesis() {
        let chain = Chain::new();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.genesis().index(), 0);
        assert!(chain.genesis().previous_hash().is_sentinel());
        assert_eq!(chain.genesis().data(), GENESIS_DATA);
        assert!(chain.is_valid());
    }

    #[test]
    fn append_links_to_current_tip() {
        let mut chain = Chain::new();
        let genesis_hash = chain.genesis().hash();

        let first = chain.append_now("hello").unwrap().clone();
        assert_eq!(first.index(), 1);
        assert_eq!(first.previous_hash(), genesis_hash);

        let second = chain.append_now("world").unwrap().clone();
        assert_eq!(second.index(), 2);
        assert_eq!(second.previous_hash(), first.hash());

        assert_eq!(chain.len(), 3);
        assert!(chain.is_valid());
    }

    #[test]
    fn linkage_holds_across_many_appends() {
        let mut chain = Chain::new();
        for i in 0..50 {
            chain.append_now(format!("entry-{i}")).unwrap();
        }
        let blocks = chain.blocks();
        for i in 1..blocks.len() {
            assert_eq!(blocks[i].index(), i as u64);
            assert_eq!(blocks[i].previous_hash(), blocks[i - 1].hash());
        }
        assert!(chain.is_valid());
    }

    #[test]
    fn empty_payload_is_rejected_without_mutation() {
        let mut chain = Chain::new();
        let err = chain.append_now("").unwrap_err();
        assert_eq!(err, ChainError::EmptyData);
        assert_eq!(chain.len(), 1);
        assert!(chain.is_valid());
    }

    #[test]
    fn tip_tracks_last_append() {
        let mut chain = Chain::new();
        chain.append_now("a").unwrap();
        chain.append_now("b").unwrap();
        assert_eq!(chain.tip().data(), "b");
        assert_eq!(chain.tip().index(), 2);
    }

    #[test]
    fn from_blocks_rejects_empty_sequence() {
        assert_eq!(Chain::from_blocks(vec![]).unwrap_err(), ChainError::EmptyChain);
    }

    #[test]
    fn from_blocks_accepts_a_serialized_dump() {
        let mut original = Chain::new();
        original.append_now("hello").unwrap();
        original.append_now("world").unwrap();

        let json = serde_json::to_string(original.blocks()).unwrap();
        let blocks: Vec<Block> = serde_json::from_str(&json).unwrap();
        let rebuilt = Chain::from_blocks(blocks).unwrap();

        assert_eq!(rebuilt.len(), 3);
        assert!(rebuilt.is_valid());
    }

    #[test]
    fn tampered_dump_is_detected_after_rebuild() {
        let mut original = Chain::new();
        original.append_now("hello").unwrap();
        original.append_now("world").unwrap();

        let mut dump = serde_json::to_value(original.blocks()).unwrap();
        dump[1]["data"] = serde_json::json!("tampered");
        let blocks: Vec<Block> = serde_json::from_value(dump).unwrap();
        let rebuilt = Chain::from_blocks(blocks).unwrap();

        assert!(!rebuilt.is_valid());
        assert_eq!(rebuilt.verify(), Err(ChainError::HashMismatch { index: 1 }));
    }

    #[test]
    fn in_place_payload_mutation_is_detected() {
        let mut chain = Chain::new();
        chain.append_now("hello").unwrap();
        chain.append_now("world").unwrap();
        assert!(chain.is_valid());

        chain.blocks[1].data = "tampered".into();

        assert!(!chain.is_valid());
        assert_eq!(chain.verify(), Err(ChainError::HashMismatch { index: 1 }));
    }

    #[test]
    fn forged_digest_with_matching_link_is_detected() {
        let mut chain = Chain::new();
        chain.append_now("hello").unwrap();
        chain.append_now("world").unwrap();

        // Forge block 1's digest and relink block 2 so the link check alone
        // would pass; recomputation at block 1 must still expose the forgery.
        let forged = BlockDigest::from_hash([0xee; 32]);
        chain.blocks[1].hash = forged;
        chain.blocks[2].previous_hash = forged;

        assert_eq!(chain.verify(), Err(ChainError::HashMismatch { index: 1 }));
    }

    #[test]
    fn end_to_end_scenario() {
        let mut chain = Chain::new();
        assert!(chain.is_valid());
        assert_eq!(chain.len(), 1);
        let genesis_hash = chain.genesis().hash();

        let first = chain.append("hello", Timestamp::now()).unwrap();
        assert_eq!(first.index(), 1);
        assert_eq!(first.previous_hash(), genesis_hash);
        let first_hash = first.hash();

        let second = chain.append("world", Timestamp::now()).unwrap();
        assert_eq!(second.index(), 2);
        assert_eq!(second.previous_hash(), first_hash);

        assert!(chain.is_valid());
        assert_eq!(chain.len(), 3);

        chain.blocks[1].data = "tampered".into();
        assert!(!chain.is_valid());
    }
}
