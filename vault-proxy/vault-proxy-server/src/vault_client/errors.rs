//! Possible errors thrown by the vault client

use alloy::providers::PendingTransactionError;
use alloy_contract::Error as ContractError;

/// The error type returned by the vault client configuration interface
#[derive(Debug, thiserror::Error)]
pub enum VaultConfigError {
    /// Error thrown when the RPC url cannot be parsed
    #[error("Failed to parse RPC URL: {0}")]
    RpcUrl(String),
    /// Error thrown when a contract address can't be parsed
    #[error("Failed to parse contract address: {0}")]
    AddressParsing(String),
    /// Error thrown when the signing key can't be parsed
    #[error("Failed to parse private key: {0}")]
    PrivateKey(String),
    /// A required configuration value is missing
    #[error("Missing configuration: {0}")]
    Missing(String),
}

/// The error type returned by the vault client
#[derive(Debug, thiserror::Error)]
pub enum VaultClientError {
    /// The client is missing a piece of configuration the call needs
    #[error("{0}")]
    Config(String),
    /// Error thrown when a contract call fails
    #[error("Contract interaction error: {0}")]
    ContractInteraction(String),
    /// Error thrown while waiting for a transaction to be included
    #[error("Pending transaction error: {0}")]
    PendingTransaction(String),
    /// The transaction was included but reverted
    #[error("Transaction {0} reverted")]
    Reverted(String),
    /// An error interacting with the lower level rpc client
    #[error("RPC error: {0}")]
    Rpc(String),
}

impl VaultClientError {
    /// Create a new configuration error
    #[allow(clippy::needless_pass_by_value)]
    pub fn config<T: ToString>(msg: T) -> Self {
        Self::Config(msg.to_string())
    }

    /// Create a new RPC error
    #[allow(clippy::needless_pass_by_value)]
    pub fn rpc<T: ToString>(msg: T) -> Self {
        Self::Rpc(msg.to_string())
    }
}

impl From<ContractError> for VaultClientError {
    fn from(e: ContractError) -> Self {
        Self::ContractInteraction(e.to_string())
    }
}

impl From<PendingTransactionError> for VaultClientError {
    fn from(e: PendingTransactionError) -> Self {
        Self::PendingTransaction(e.to_string())
    }
}
