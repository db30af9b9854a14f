use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use serde::{Deserialize, Serialize};

use tally_chain::Block;
use tally_types::{BlockDigest, Timestamp};

use crate::error::ServerError;
use crate::state::AppState;

/// `GET /chain` response document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChainResponse {
    pub length: usize,
    pub chain: Vec<Block>,
    pub valid: bool,
}

/// `POST /mine` request body.
#[derive(Debug, Deserialize)]
pub struct MineRequest {
    #[serde(default)]
    pub data: Option<String>,
}

/// `POST /mine` success body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MineResponse {
    pub message: String,
    pub index: u64,
    pub hash: BlockDigest,
    pub previous_hash: BlockDigest,
    pub data: String,
    pub timestamp: Timestamp,
}

/// Landing page.
pub async fn home_handler() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Full chain with its integrity verdict.
pub async fn chain_handler(
    State(state): State<AppState>,
) -> Result<Json<ChainResponse>, ServerError> {
    let snapshot = state.snapshot()?;
    Ok(Json(ChainResponse {
        length: snapshot.blocks.len(),
        chain: snapshot.blocks,
        valid: snapshot.valid,
    }))
}

/// Append a new block carrying the posted data.
pub async fn mine_handler(
    State(state): State<AppState>,
    Json(request): Json<MineRequest>,
) -> Result<(StatusCode, Json<MineResponse>), ServerError> {
    let data = request.data.unwrap_or_default();
    let block = state.mine(&data)?;
    Ok((
        StatusCode::CREATED,
        Json(MineResponse {
            message: "Block mined successfully".to_string(),
            index: block.index(),
            hash: block.hash(),
            previous_hash: block.previous_hash(),
            data: block.data().to_string(),
            timestamp: block.timestamp(),
        }),
    ))
}
