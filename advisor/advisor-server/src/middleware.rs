//! Middleware for the advisor server

use std::{convert::Infallible, sync::Arc};

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::info_span;
use warp::Filter;

use crate::{error::ApiError, server::Server};

/// Helper function to clone and pass the server to filters
pub(crate) fn with_server(
    server: Arc<Server>,
) -> impl Filter<Extract = (Arc<Server>,), Error = Infallible> + Clone {
    warp::any().map(move || server.clone())
}

/// Extract a JSON body from a request, an empty body decodes as `{}`
#[allow(clippy::needless_pass_by_value)]
pub fn with_json_body<T: DeserializeOwned + Send>(body: Bytes) -> Result<T, warp::Rejection> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) { b"{}" } else { &body };
    serde_json::from_slice(body)
        .map_err(|e| warp::reject::custom(ApiError::BadRequest(format!("Invalid JSON: {e}"))))
}

/// Identity map for a handler's middleware
pub async fn identity<T>(res: T) -> T {
    res
}

/// Creates an info level span for each request
pub(crate) fn with_tracing(
) -> warp::trace::Trace<impl Fn(warp::trace::Info) -> tracing::Span + Clone> {
    warp::trace(|info| {
        info_span!(
            target: "advisor_server::request",
            "handle_request",
            method = %info.method(),
            path = %info.path(),
        )
    })
}
