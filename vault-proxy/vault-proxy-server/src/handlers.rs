//! Route handlers for the vault proxy

use std::sync::Arc;

use alloy_primitives::U256;
use tracing::{info, warn};
use vault_proxy_api::{
    BannerResponse, DecimalInput, DepositRequest, DepositResponse, HealthResponse,
    OnchainBalanceResponse, SnapshotSource, VaultDataResponse, VaultInfoResponse,
    WithdrawRequest, WithdrawResponse, STATUS_SUCCESS,
};
use warp::reply::Json;

use crate::{
    conversion::to_base_units,
    error::ApiError,
    server::Server,
    vault_client::{parse_address, TxReport, VaultSnapshot, VaultWriter},
};

/// The total shares reported when the vault cannot be read
pub const FALLBACK_TOTAL_SHARES: u128 = 1_000_000_000_000_000_000;
/// The total supplied reported when the vault cannot be read
pub const FALLBACK_TOTAL_SUPPLIED: u128 = 1_500_000_000_000_000_000;
/// The message attached to a live snapshot
pub const LIVE_SNAPSHOT_MESSAGE: &str = "Real data from deployed vault contract";
/// The message attached to a fallback snapshot
pub const FALLBACK_SNAPSHOT_MESSAGE: &str = "Mock data - Contract not accessible";
/// The banner served at the root path
pub const BANNER_MESSAGE: &str = "EulerMax AI Vault API is running!";

// ------------------
// | Vault Snapshot |
// ------------------

/// The result of reading the vault's accounting
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotReading {
    /// The snapshot was read from the contract
    Live(VaultSnapshot),
    /// The contract could not be read, the snapshot is synthetic
    Degraded {
        /// The synthetic snapshot
        snapshot: VaultSnapshot,
        /// Why the contract could not be read
        reason: String,
    },
}

impl SnapshotReading {
    /// The snapshot served while the contract is unreachable
    pub fn fallback_snapshot() -> VaultSnapshot {
        VaultSnapshot {
            total_shares: U256::from(FALLBACK_TOTAL_SHARES),
            total_supplied: U256::from(FALLBACK_TOTAL_SUPPLIED),
        }
    }

    /// Degrade to the fallback snapshot
    fn degraded(reason: String) -> Self {
        Self::Degraded { snapshot: Self::fallback_snapshot(), reason }
    }

    /// Convert the reading into its API response
    pub fn into_response(self) -> VaultDataResponse {
        let (snapshot, message, source) = match self {
            Self::Live(snapshot) => (snapshot, LIVE_SNAPSHOT_MESSAGE, SnapshotSource::Onchain),
            Self::Degraded { snapshot, .. } => {
                (snapshot, FALLBACK_SNAPSHOT_MESSAGE, SnapshotSource::Fallback)
            },
        };

        VaultDataResponse {
            total_shares: snapshot.total_shares.to_string(),
            total_supplied: snapshot.total_supplied.to_string(),
            message: message.to_string(),
            source,
        }
    }
}

/// Read the vault snapshot, degrading to mock data on any failure
pub(crate) async fn read_snapshot(server: &Server) -> SnapshotReading {
    let reader = match &server.reader {
        Some(reader) => reader,
        None => return SnapshotReading::degraded("provider not configured".to_string()),
    };

    match reader.vault_snapshot().await {
        Ok(snapshot) => SnapshotReading::Live(snapshot),
        Err(e) => SnapshotReading::degraded(e.to_string()),
    }
}

/// Handler for reading the vault snapshot
pub(crate) async fn get_vault_data_handler(server: Arc<Server>) -> Result<Json, warp::Rejection> {
    let reading = read_snapshot(&server).await;
    if let SnapshotReading::Degraded { reason, .. } = &reading {
        warn!("contract access failed, using mock data: {reason}");
    }

    Ok(warp::reply::json(&reading.into_response()))
}

/// Handler for reading the vault's static metadata
pub(crate) async fn get_vault_info_handler(server: Arc<Server>) -> Result<Json, warp::Rejection> {
    let reader = server.reader.as_ref().ok_or_else(provider_not_configured)?;
    let info = reader.vault_info().await.map_err(|e| warp::reject::custom(ApiError::internal(e)))?;

    let resp = VaultInfoResponse {
        owner: info.owner.to_checksum(None),
        asset: info.asset.to_checksum(None),
        euler: info.euler.to_checksum(None),
        euler_swap: info.euler_swap.to_checksum(None),
        total_supplied: info.total_supplied.to_string(),
        vault_apy: info.vault_apy.to_string(),
    };
    Ok(warp::reply::json(&resp))
}

// -------------
// | Transfers |
// -------------

/// Handler for depositing into the vault
pub(crate) async fn deposit_handler(
    req: DepositRequest,
    server: Arc<Server>,
) -> Result<Json, warp::Rejection> {
    let amount = require_field(req.amount, "Amount is required")?;
    let writer = require_writer(&server)?;
    let base_units = parse_amount(&amount, server.asset_decimals)?;

    info!("sending deposit transaction for {amount} ({base_units} base units)");
    let report = writer.deposit(base_units).await.map_err(|e| {
        warp::reject::custom(ApiError::TransactionFailed {
            action: "Deposit",
            details: e.to_string(),
        })
    })?;

    let resp = DepositResponse {
        tx_hash: format_hash(&report),
        status: STATUS_SUCCESS.to_string(),
        amount,
        message: "Deposit successful".to_string(),
        block_number: report.block_number,
        gas_used: report.gas_used.to_string(),
    };
    Ok(warp::reply::json(&resp))
}

/// Handler for withdrawing from the vault
pub(crate) async fn withdraw_handler(
    req: WithdrawRequest,
    server: Arc<Server>,
) -> Result<Json, warp::Rejection> {
    let shares = require_field(req.shares, "Shares amount is required")?;
    let writer = require_writer(&server)?;
    let base_units = parse_amount(&shares, server.share_decimals)?;

    info!("sending withdraw transaction for {shares} shares ({base_units} base units)");
    let report = writer.withdraw(base_units).await.map_err(|e| {
        warp::reject::custom(ApiError::TransactionFailed {
            action: "Withdraw",
            details: e.to_string(),
        })
    })?;

    let resp = WithdrawResponse {
        tx_hash: format_hash(&report),
        status: STATUS_SUCCESS.to_string(),
        shares,
        message: "Withdraw successful".to_string(),
        block_number: report.block_number,
        gas_used: report.gas_used.to_string(),
    };
    Ok(warp::reply::json(&resp))
}

// ------------
// | Balances |
// ------------

/// Handler for reading a wallet's balance on the balance contract
pub(crate) async fn get_onchain_balance_handler(
    wallet_address: String,
    server: Arc<Server>,
) -> Result<Json, warp::Rejection> {
    let reader = server.reader.as_ref().ok_or_else(provider_not_configured)?;
    let wallet =
        parse_address(&wallet_address).map_err(|e| warp::reject::custom(ApiError::internal(e)))?;
    let balance =
        reader.balance_of(wallet).await.map_err(|e| warp::reject::custom(ApiError::internal(e)))?;

    let resp = OnchainBalanceResponse { wallet_address, onchain_balance: balance.to_string() };
    Ok(warp::reply::json(&resp))
}

// ----------
// | Status |
// ----------

/// Handler for the health check
pub(crate) fn health_handler() -> Json {
    warp::reply::json(&HealthResponse::default())
}

/// Handler for the root banner
pub(crate) fn banner_handler() -> Json {
    warp::reply::json(&BannerResponse { message: BANNER_MESSAGE.to_string() })
}

// -----------
// | Helpers |
// -----------

/// Reject a missing or blank field
fn require_field(
    field: Option<DecimalInput>,
    message: &str,
) -> Result<DecimalInput, warp::Rejection> {
    field
        .filter(|value| !value.is_blank())
        .ok_or_else(|| warp::reject::custom(ApiError::bad_request(message)))
}

/// Get the signing client or reject with a configuration error
fn require_writer(server: &Server) -> Result<&Arc<dyn VaultWriter>, warp::Rejection> {
    server.writer.as_ref().ok_or_else(|| warp::reject::custom(ApiError::SignerNotConfigured))
}

/// Scale a client amount into base units
fn parse_amount(input: &DecimalInput, decimals: u8) -> Result<U256, warp::Rejection> {
    to_base_units(&input.to_string(), decimals)
        .map_err(|e| warp::reject::custom(ApiError::bad_request(e)))
}

/// The rejection for reads attempted without a provider
fn provider_not_configured() -> warp::Rejection {
    warp::reject::custom(ApiError::internal("Provider not configured"))
}

/// Format a transaction hash as 0x-prefixed hex
fn format_hash(report: &TxReport) -> String {
    format!("{:#x}", report.tx_hash)
}
