//! Route definitions for the vault proxy

use std::sync::Arc;

use vault_proxy_api::{
    DepositRequest, WithdrawRequest, API_PREFIX, DEPOSIT_ROUTE, HEALTH_ROUTE,
    ONCHAIN_BALANCE_ROUTE, VAULT_DATA_ROUTE, VAULT_INFO_ROUTE, VAULT_ROUTE, WITHDRAW_ROUTE,
};
use warp::{Filter, Rejection, Reply};

use crate::{
    error::handle_rejection,
    handlers::{
        banner_handler, deposit_handler, get_onchain_balance_handler, get_vault_data_handler,
        get_vault_info_handler, health_handler, withdraw_handler,
    },
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
    // Paths are matched before methods so unknown paths report 404 rather
    // than the 405 of the last method filter tried

    // --- Status --- //

    let banner = warp::path::end().and(warp::get()).map(banner_handler);

    let health = warp::path(API_PREFIX)
        .and(warp::path(HEALTH_ROUTE))
        .and(warp::path::end())
        .and(warp::get())
        .map(health_handler);

    // --- Vault Reads --- //

    let vault_data = warp::path(API_PREFIX)
        .and(warp::path(VAULT_ROUTE))
        .and(warp::path(VAULT_DATA_ROUTE).or(warp::any()).unify())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_server(server.clone()))
        .and_then(get_vault_data_handler);

    let vault_info = warp::path(API_PREFIX)
        .and(warp::path(VAULT_ROUTE))
        .and(warp::path(VAULT_INFO_ROUTE))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_server(server.clone()))
        .and_then(get_vault_info_handler);

    let onchain_balance = warp::path(API_PREFIX)
        .and(warp::path(VAULT_ROUTE))
        .and(warp::path(ONCHAIN_BALANCE_ROUTE))
        .and(warp::path::param::<String>()) // wallet_address
        .and(warp::path::end())
        .and(warp::get())
        .and(with_server(server.clone()))
        .and_then(get_onchain_balance_handler);

    // --- Vault Writes --- //

    let deposit = warp::path(API_PREFIX)
        .and(warp::path(VAULT_ROUTE))
        .and(warp::path(DEPOSIT_ROUTE))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .map(with_json_body::<DepositRequest>)
        .and_then(identity)
        .and(with_server(server.clone()))
        .and_then(deposit_handler);

    let withdraw = warp::path(API_PREFIX)
        .and(warp::path(VAULT_ROUTE))
        .and(warp::path(WITHDRAW_ROUTE))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::bytes())
        .map(with_json_body::<WithdrawRequest>)
        .and_then(identity)
        .and(with_server(server))
        .and_then(withdraw_handler);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(CORS_ALLOWED_HEADERS);

    banner
        .or(health)
        .or(vault_data)
        .or(vault_info)
        .or(onchain_balance)
        .or(deposit)
        .or(withdraw)
        .recover(handle_rejection)
        .with(cors)
        .with(with_tracing())
}
