//! Foundation types for the tally ledger.
//!
//! This crate provides the identity and temporal types shared by every other
//! tally crate.
//!
//! # Key Types
//!
//! - [`BlockDigest`] — 32-byte SHA-256 fingerprint of a sealed block
//! - [`Timestamp`] — seconds-since-epoch creation time, wire-compatible `f64`
//! - [`TypeError`] — parse/encoding failures for the above

pub mod digest;
pub mod error;
pub mod timestamp;

pub use digest::BlockDigest;
pub use error::TypeError;
pub use timestamp::Timestamp;
