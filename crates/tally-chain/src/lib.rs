//! Append-only, tamper-evident block chain for tally.
//!
//! This crate is the heart of tally. It provides:
//! - [`Block`] — an immutable-once-sealed record carrying position, payload,
//!   timestamp, and a SHA-256 digest binding it to its predecessor
//! - [`Chain`] — the single-owner sequence of blocks: genesis construction,
//!   append, and whole-chain integrity verification
//! - [`validation`] — the recompute-and-compare walk that detects tampering
//!
//! The chain detects mutation rather than preventing it: a block's digest is
//! recomputable from its fields at any time, so any post-hoc edit of a sealed
//! block (or a broken predecessor link) surfaces during [`Chain::verify`].
//!
//! There is no internal synchronization. The chain assumes a single logical
//! writer; concurrent hosts must serialize `append` calls and keep validation
//! off in-progress appends (the server crate wraps a `Chain` in one `RwLock`).

pub mod block;
pub mod chain;
pub mod error;
pub mod validation;

pub use block::Block;
pub use chain::Chain;
pub use error::ChainError;
pub use validation::verify_blocks;

/// Payload of the genesis block every chain starts from.
pub const GENESIS_DATA: &str = "Genesis Block";
