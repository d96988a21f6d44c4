//! Route definitions for the advisor

use std::sync::Arc;

use advisor_api::{AskRequest, API_PREFIX, ASK_ROUTE, HEALTH_ROUTE};
use warp::{Filter, Rejection, Reply};

use crate::{
    error::handle_rejection,
    handlers::{ask_handler, health_handler},
    middleware::{identity, with_json_body, with_server, with_tracing},
    server::Server,
};

/// The request headers browsers may send cross-origin
const CORS_ALLOWED_HEADERS: [&str; 6] = [
    "accept",
    "authorization",
    "cache-control",
    "content-type",
    "origin",
    "x-requested-with",
];

/// Build the full route tree for the server
pub(crate) fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health = warp::path(API_PREFIX)
        .and(warp::path(HEALTH_ROUTE))
        .and(warp::path::end())
        .and(warp::get())
        .map(health_handler);

    let ask = warp::path(ASK_ROUTE)
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .map(with_json_body::<AskRequest>)
        .and_then(identity)
        .and(with_server(server))
        .and_then(ask_handler);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(CORS_ALLOWED_HEADERS);

    health.or(ask).recover(handle_rejection).with(cors).with(with_tracing())
}
