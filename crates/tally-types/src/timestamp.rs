use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Block creation time as seconds since the UNIX epoch.
///
/// Stored and serialized as an `f64` to match the wire format (numeric
/// seconds, fractional part allowed). Timestamps are expected to be
/// non-decreasing along a chain but this is not enforced; the digest, not the
/// clock, is what seals a block.
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(f64);

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();
        Self(secs)
    }

    /// Create a timestamp from raw epoch seconds.
    pub const fn from_secs_f64(secs: f64) -> Self {
        Self(secs)
    }

    /// Raw epoch seconds.
    pub const fn as_secs_f64(&self) -> f64 {
        self.0
    }

    /// The exact string rendered into a block's hash preimage.
    ///
    /// Rust's default `f64` formatting is the shortest representation that
    /// round-trips, so equal timestamps always canonicalize identically.
    pub fn canonical(&self) -> String {
        format!("{}", self.0)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({}s)", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Timestamp {
    fn from(secs: f64) -> Self {
        Self(secs)
    }
}
