//! Route handlers for the advisor

use std::sync::Arc;

use advisor_api::{AskRequest, AskResponse, HealthResponse};
use tracing::debug;
use warp::reply::Json;

use crate::{advisor::fill_prompt, error::ApiError, server::Server};

/// Handler for asking the advisor a question
pub(crate) async fn ask_handler(
    req: AskRequest,
    server: Arc<Server>,
) -> Result<Json, warp::Rejection> {
    debug!(question = ?req.question, "received question");

    let prompt = fill_prompt(&server.portfolio_path, &server.prompt_path)
        .await
        .map_err(|e| warp::reject::custom(ApiError::internal(e)))?;
    let answer = server
        .advisor
        .answer(req.question_text(), &prompt)
        .await
        .map_err(|e| warp::reject::custom(ApiError::internal(e)))?;

    Ok(warp::reply::json(&AskResponse { prompt, answer }))
}

/// Handler for the health check
pub(crate) fn health_handler() -> Json {
    warp::reply::json(&HealthResponse::default())
}
