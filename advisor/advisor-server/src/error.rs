//! Error types for the advisor service

use std::{error::Error, fmt::Display, io, path::PathBuf};

use serde_json::json;
use thiserror::Error;
use tracing::error;
use warp::{
    http::StatusCode,
    reject::Reject,
    reply::{Json, WithStatus},
    Rejection,
};

/// An error producing the advisor's prompt or answer
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// A fixture could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that failed to read
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
    /// The portfolio fixture is not valid JSON
    #[error("failed to parse portfolio: {0}")]
    Parse(#[from] serde_json::Error),
}

/// API-specific error type
#[derive(Debug)]
pub enum ApiError {
    /// The request body is malformed
    BadRequest(String),
    /// The prompt or answer could not be produced
    InternalError(String),
}

impl ApiError {
    /// Create an internal error
    #[allow(clippy::needless_pass_by_value)]
    pub fn internal<T: ToString>(msg: T) -> Self {
        Self::InternalError(msg.to_string())
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(e) => write!(f, "Bad request: {e}"),
            ApiError::InternalError(e) => write!(f, "Internal error: {e}"),
        }
    }
}

impl Error for ApiError {}
impl Reject for ApiError {}

/// Handle rejections and convert them to JSON responses
pub async fn handle_rejection(err: Rejection) -> Result<WithStatus<Json>, Rejection> {
    let (code, body) = if let Some(api_error) = err.find::<ApiError>() {
        match api_error {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::InternalError(details) => {
                error!("API Error: {api_error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal error", "details": details }),
                )
            },
        }
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, json!({ "error": "Not found" }))
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, json!({ "error": "Method not allowed" }))
    } else {
        error!("Unhandled rejection: {err:?}");
        return Err(err);
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), code))
}
