//! Defines the transaction paths of the `OnchainVaultClient`
use alloy::{network::ReceiptResponse, rpc::types::TransactionReceipt};
use alloy_primitives::U256;
use async_trait::async_trait;
use tracing::{info, instrument};

use crate::vault_client::{errors::VaultClientError, OnchainVaultClient, TxReport, VaultWriter};

#[async_trait]
impl VaultWriter for OnchainVaultClient {
    #[instrument(skip(self))]
    async fn deposit(&self, amount: U256) -> Result<TxReport, VaultClientError> {
        let pending = self.vault.deposit(amount).send().await?;
        info!("sent deposit transaction: {:#x}", pending.tx_hash());

        let receipt = pending.get_receipt().await?;
        to_report(&receipt)
    }

    #[instrument(skip(self))]
    async fn withdraw(&self, shares: U256) -> Result<TxReport, VaultClientError> {
        let pending = self.vault.withdraw(shares).send().await?;
        info!("sent withdraw transaction: {:#x}", pending.tx_hash());

        let receipt = pending.get_receipt().await?;
        to_report(&receipt)
    }
}

/// Summarize a receipt, rejecting reverted transactions
fn to_report(receipt: &TransactionReceipt) -> Result<TxReport, VaultClientError> {
    let tx_hash = receipt.transaction_hash();
    if !receipt.status() {
        return Err(VaultClientError::Reverted(format!("{tx_hash:#x}")));
    }

    let block_number = receipt
        .block_number()
        .ok_or_else(|| VaultClientError::rpc(format!("receipt for {tx_hash:#x} has no block")))?;
    info!("transaction {tx_hash:#x} confirmed in block {block_number}");

    Ok(TxReport { tx_hash, block_number, gas_used: receipt.gas_used() })
}
