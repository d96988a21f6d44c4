//! Error types for the vault proxy

use std::{error::Error, fmt::Display};

use serde_json::{json, Value};
use tracing::error;
use warp::{
    http::StatusCode,
    reject::Reject,
    reply::{Json, WithStatus},
    Rejection,
};

/// The remediation given when a write is attempted without a signer
pub const SIGNER_REMEDIATION: &str =
    "Please check your PRIVATE_KEY and RPC_URL configuration and restart the server.";

/// API-specific error type
#[derive(Debug)]
pub enum ApiError {
    /// The request is malformed or missing a field
    BadRequest(String),
    /// A write was attempted without a configured signer
    SignerNotConfigured,
    /// A transaction failed to send or confirm
    TransactionFailed {
        /// The operation that failed, e.g. "Deposit"
        action: &'static str,
        /// The underlying error text
        details: String,
    },
    /// Internal server error
    InternalError(String),
}

impl ApiError {
    /// Create a bad request error
    #[allow(clippy::needless_pass_by_value)]
    pub fn bad_request<T: ToString>(msg: T) -> Self {
        Self::BadRequest(msg.to_string())
    }

    /// Create an internal error
    #[allow(clippy::needless_pass_by_value)]
    pub fn internal<T: ToString>(msg: T) -> Self {
        Self::InternalError(msg.to_string())
    }

    /// The status code and body for the error
    fn as_response_parts(&self) -> (StatusCode, Value) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::SignerNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Signer not set", "message": SIGNER_REMEDIATION }),
            ),
            ApiError::TransactionFailed { action, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": format!("{action} failed"), "details": details }),
            ),
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            },
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(e) => write!(f, "Bad request: {e}"),
            ApiError::SignerNotConfigured => write!(f, "Signer not configured"),
            ApiError::TransactionFailed { action, details } => {
                write!(f, "{action} failed: {details}")
            },
            ApiError::InternalError(e) => write!(f, "Internal error: {e}"),
        }
    }
}

impl Error for ApiError {}
impl Reject for ApiError {}

// ------------------
// | Error Handling |
// ------------------

/// Handle rejections and convert them to JSON responses
pub async fn handle_rejection(err: Rejection) -> Result<WithStatus<Json>, Rejection> {
    if let Some(api_error) = err.find::<ApiError>() {
        let (code, body) = api_error.as_response_parts();
        if code.is_server_error() {
            error!("API Error: {api_error}");
        }
        Ok(warp::reply::with_status(warp::reply::json(&body), code))
    } else if err.is_not_found() {
        Ok(json_error("Not found", StatusCode::NOT_FOUND))
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        Ok(json_error("Method not allowed", StatusCode::METHOD_NOT_ALLOWED))
    } else {
        error!("Unhandled rejection: {err:?}");
        Err(err)
    }
}

/// Return a json error from a string message
fn json_error(msg: &str, code: StatusCode) -> WithStatus<Json> {
    let json = json!({ "error": msg });
    warp::reply::with_status(warp::reply::json(&json), code)
}
