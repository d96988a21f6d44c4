//! Request and response types for the vault proxy

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// The literal status reported by the health check and successful transactions
pub const STATUS_OK: &str = "ok";
/// The status reported for a confirmed transaction
pub const STATUS_SUCCESS: &str = "success";

// ----------
// | Inputs |
// ----------

/// A decimal quantity as sent by a client
///
/// Browsers send these either as JSON strings or as bare JSON numbers, both
/// are accepted and the original form is echoed back in responses
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecimalInput {
    /// A decimal string, e.g. `"1.5"`
    Text(String),
    /// A JSON number, e.g. `1.5`
    Number(serde_json::Number),
}

impl DecimalInput {
    /// Whether the input counts as absent
    ///
    /// An empty string and a numeric zero are treated the same as a missing
    /// field
    pub fn is_blank(&self) -> bool {
        match self {
            DecimalInput::Text(s) => s.is_empty(),
            DecimalInput::Number(n) => n.as_f64() == Some(0.0),
        }
    }
}

impl Display for DecimalInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalInput::Text(s) => write!(f, "{s}"),
            DecimalInput::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The request body for a deposit
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DepositRequest {
    /// The amount of the vault asset to deposit, in whole units
    #[serde(default)]
    pub amount: Option<DecimalInput>,
}

/// The request body for a withdrawal
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WithdrawRequest {
    /// The number of vault shares to redeem, in whole units
    #[serde(default)]
    pub shares: Option<DecimalInput>,
}

// -------------
// | Responses |
// -------------

/// Where a vault snapshot came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSource {
    /// Read from the deployed contract
    Onchain,
    /// Synthesized because the contract could not be read
    Fallback,
}

/// The response to a vault snapshot query
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultDataResponse {
    /// The total shares minted by the vault
    pub total_shares: String,
    /// The total assets supplied to the vault
    pub total_supplied: String,
    /// A human readable description of the data's provenance
    pub message: String,
    /// The machine readable provenance
    pub source: SnapshotSource,
}

/// The response to a confirmed deposit
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositResponse {
    /// The transaction hash
    pub tx_hash: String,
    /// Always `"success"`
    pub status: String,
    /// The amount as sent by the client
    pub amount: DecimalInput,
    /// A human readable confirmation
    pub message: String,
    /// The block the transaction was included in
    pub block_number: u64,
    /// The gas used by the transaction
    pub gas_used: String,
}

/// The response to a confirmed withdrawal
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawResponse {
    /// The transaction hash
    pub tx_hash: String,
    /// Always `"success"`
    pub status: String,
    /// The shares as sent by the client
    pub shares: DecimalInput,
    /// A human readable confirmation
    pub message: String,
    /// The block the transaction was included in
    pub block_number: u64,
    /// The gas used by the transaction
    pub gas_used: String,
}

/// The response to an onchain balance query
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnchainBalanceResponse {
    /// The wallet that was queried, as given in the path
    pub wallet_address: String,
    /// The raw integer balance
    pub onchain_balance: String,
}

/// Static metadata about the vault contract
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultInfoResponse {
    /// The vault owner
    pub owner: String,
    /// The underlying asset token
    pub asset: String,
    /// The Euler lending vault the assets are supplied to
    pub euler: String,
    /// The EulerSwap pool, zero if unset
    pub euler_swap: String,
    /// The total assets supplied to the vault
    pub total_supplied: String,
    /// The vault APY as reported by the contract
    #[serde(rename = "vaultAPY")]
    pub vault_apy: String,
}

/// The health check response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: STATUS_OK.to_string() }
    }
}

/// The root banner response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BannerResponse {
    /// The banner message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_input_accepts_string_and_number() {
        let req: DepositRequest = serde_json::from_str(r#"{"amount":"1.5"}"#).unwrap();
        assert_eq!(req.amount, Some(DecimalInput::Text("1.5".to_string())));

        let req: DepositRequest = serde_json::from_str(r#"{"amount":1.5}"#).unwrap();
        assert_eq!(req.amount.unwrap().to_string(), "1.5");

        let req: WithdrawRequest = serde_json::from_str("{}").unwrap();
        assert!(req.shares.is_none());
    }

    #[test]
    fn test_decimal_input_blank() {
        assert!(DecimalInput::Text(String::new()).is_blank());
        assert!(DecimalInput::Number(0.into()).is_blank());
        assert!(!DecimalInput::Text("0".to_string()).is_blank());
        assert!(!DecimalInput::Number(3.into()).is_blank());
    }

    #[test]
    fn test_snapshot_field_names() {
        let resp = VaultDataResponse {
            total_shares: "1".to_string(),
            total_supplied: "2".to_string(),
            message: "m".to_string(),
            source: SnapshotSource::Fallback,
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["totalShares"], "1");
        assert_eq!(value["totalSupplied"], "2");
        assert_eq!(value["source"], "fallback");
    }
}
