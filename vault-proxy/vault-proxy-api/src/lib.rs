//! The API for the vault proxy service
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

mod types;
pub use types::*;

// --------------
// | Api Routes |
// --------------

/// The prefix shared by every route
pub const API_PREFIX: &str = "api";
/// The health check route
pub const HEALTH_ROUTE: &str = "health";
/// The vault route prefix, also serves the vault snapshot
pub const VAULT_ROUTE: &str = "vault";
/// The vault snapshot route, an alias of `/api/vault`
pub const VAULT_DATA_ROUTE: &str = "data";
/// The static vault metadata route
pub const VAULT_INFO_ROUTE: &str = "info";
/// The deposit route
pub const DEPOSIT_ROUTE: &str = "deposit";
/// The withdraw route
pub const WITHDRAW_ROUTE: &str = "withdraw";
/// The onchain balance route, takes the wallet address as a path param
pub const ONCHAIN_BALANCE_ROUTE: &str = "onchain-balance";
