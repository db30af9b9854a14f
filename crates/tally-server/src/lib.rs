//! HTTP adapter for the tally ledger.
//!
//! Thin axum layer over [`tally_chain::Chain`]: chain inspection
//! (`GET /chain`), block mining (`POST /mine`), and a static landing page.
//! The chain lives in an explicitly-owned [`AppState`] — no process-wide
//! singleton — and all handler access goes through its lock.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ServerError, ServerResult};
pub use handler::{ChainResponse, MineRequest, MineResponse};
pub use router::build_router;
pub use server::LedgerServer;
pub use state::{AppState, ChainSnapshot};
