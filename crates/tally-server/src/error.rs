use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use tally_chain::ChainError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Data is required")]
    DataRequired,

    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::DataRequired | Self::Chain(ChainError::EmptyData) => {
                (StatusCode::BAD_REQUEST, "Data is required".to_string())
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
