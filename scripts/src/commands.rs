//! Implementations of the script subcommands

use alloy::{
    network::ReceiptResponse,
    primitives::{
        utils::{parse_units, ParseUnits},
        Address, U256,
    },
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use anyhow::{anyhow, bail, Result};

use crate::abis::{IERC20, IEulerMaxVault};

/// Approve the vault to spend `amount` of `asset`
///
/// When `asset` is omitted the vault's own asset is approved
pub async fn approve(
    rpc_url: &str,
    private_key: &str,
    vault_address: Address,
    asset: Option<Address>,
    amount: &str,
) -> Result<()> {
    let signer: PrivateKeySigner =
        private_key.parse().map_err(|e| anyhow!("invalid private key: {e}"))?;
    let owner = signer.address();
    let provider =
        ProviderBuilder::new().wallet(signer).connect_http(rpc_url.parse()?).erased();

    let asset = match asset {
        Some(asset) => asset,
        None => IEulerMaxVault::new(vault_address, provider.clone()).asset().call().await?,
    };
    let token = IERC20::new(asset, provider);
    let decimals = token.decimals().call().await?;
    let base_units = to_approval_units(amount, decimals)?;

    println!("Approving {vault_address} to spend {amount} ({base_units} base units) of {asset}");
    println!("Owner: {owner}");
    let pending = token.approve(vault_address, base_units).send().await?;
    println!("Approve tx sent: {:#x}", pending.tx_hash());

    let receipt = pending.get_receipt().await?;
    if !receipt.status() {
        bail!("approve transaction {:#x} reverted", receipt.transaction_hash());
    }
    println!("Approve confirmed in block {}", receipt.block_number().unwrap_or_default());

    Ok(())
}

/// Scale a whole-unit amount into base units of a token with `decimals`
/// decimals
pub fn to_approval_units(amount: &str, decimals: u8) -> Result<U256> {
    match parse_units(amount, decimals) {
        Ok(ParseUnits::U256(units)) => Ok(units),
        Ok(ParseUnits::I256(_)) => bail!("amount must not be negative: {amount}"),
        Err(e) => bail!("invalid amount {amount}: {e}"),
    }
}

/// Print the vault's metadata
pub async fn inspect(rpc_url: &str, vault_address: Address) -> Result<()> {
    let provider: DynProvider = ProviderBuilder::new().connect_http(rpc_url.parse()?).erased();
    let chain_id = provider.get_chain_id().await?;
    let vault = IEulerMaxVault::new(vault_address, provider.clone());

    let asset = vault.asset().call().await?;
    let token = IERC20::new(asset, provider);
    let symbol = token.symbol().call().await.unwrap_or_else(|_| "?".to_string());

    println!("Vault:          {vault_address} (chain {chain_id})");
    println!("Owner:          {}", vault.owner().call().await?);
    println!("Asset:          {asset} ({symbol})");
    println!("Euler:          {}", vault.euler().call().await?);
    println!("EulerSwap:      {}", vault.eulerSwap().call().await?);
    println!("Total shares:   {}", vault.totalShares().call().await?);
    println!("Total supplied: {}", vault.totalSupplied().call().await?);
    println!("Vault APY:      {}", vault.vaultAPY().call().await?);

    Ok(())
}
