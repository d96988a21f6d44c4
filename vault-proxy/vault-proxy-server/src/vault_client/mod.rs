//! The vault client, which wraps the deployed vault contract behind the read
//! and write interfaces the route handlers depend on
use std::str::FromStr;

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use eulermax_util::err_str;
use tracing::instrument;
use url::Url;

use crate::vault_client::{
    abis::{IEulerMaxVault::IEulerMaxVaultInstance, IERC20::IERC20Instance},
    errors::{VaultClientError, VaultConfigError},
};

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
pub mod abis;
mod contract_interaction;
pub mod errors;
#[cfg(test)]
pub mod mock;

/// A type alias for the provider the client is bound to, with or without a
/// wallet layer
pub type VaultProvider = DynProvider;

// ---------
// | Types |
// ---------

/// The vault's share accounting as reported by the contract
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultSnapshot {
    /// The total shares minted
    pub total_shares: U256,
    /// The total assets supplied
    pub total_supplied: U256,
}

/// Static metadata about the vault contract
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaultInfo {
    /// The vault owner
    pub owner: Address,
    /// The underlying asset token
    pub asset: Address,
    /// The Euler lending vault
    pub euler: Address,
    /// The EulerSwap pool
    pub euler_swap: Address,
    /// The total assets supplied
    pub total_supplied: U256,
    /// The APY reported by the vault
    pub vault_apy: U256,
}

/// The outcome of a confirmed transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxReport {
    /// The transaction hash
    pub tx_hash: B256,
    /// The block the transaction was included in
    pub block_number: u64,
    /// The gas consumed by the transaction
    pub gas_used: u64,
}

// --------------
// | Interfaces |
// --------------

/// Read access to the vault and the balance contract
#[async_trait]
pub trait VaultReader: Send + Sync {
    /// Read the vault's share accounting
    async fn vault_snapshot(&self) -> Result<VaultSnapshot, VaultClientError>;

    /// Read the vault's static metadata
    async fn vault_info(&self) -> Result<VaultInfo, VaultClientError>;

    /// Read a wallet's balance on the balance contract
    async fn balance_of(&self, wallet: Address) -> Result<U256, VaultClientError>;
}

/// Write access to the vault, only available with a signing key
#[async_trait]
pub trait VaultWriter: Send + Sync {
    /// Deposit `amount` base units of the vault asset and await inclusion
    async fn deposit(&self, amount: U256) -> Result<TxReport, VaultClientError>;

    /// Redeem `shares` base units of vault shares and await inclusion
    async fn withdraw(&self, shares: U256) -> Result<TxReport, VaultClientError>;
}

// ----------
// | Config |
// ----------

/// The configuration needed to reach the vault contract
#[derive(Clone, Debug)]
pub struct VaultClientConfig {
    /// The JSON-RPC endpoint
    pub rpc_url: String,
    /// The vault contract address
    pub vault_address: Address,
    /// The contract serving `balanceOf` queries, if configured
    pub balance_contract_address: Option<Address>,
}

impl VaultClientConfig {
    /// Create a new configuration, parsing the vault address
    pub fn new(
        rpc_url: String,
        vault_address: &str,
        balance_contract_address: Option<Address>,
    ) -> Result<Self, VaultConfigError> {
        let vault_address = parse_address(vault_address)?;
        Ok(Self { rpc_url, vault_address, balance_contract_address })
    }

    /// Create a read-only HTTP provider
    fn get_provider(&self) -> Result<VaultProvider, VaultConfigError> {
        let url = self.rpc_url.parse::<Url>().map_err(err_str!(VaultConfigError::RpcUrl))?;
        Ok(ProviderBuilder::new().connect_http(url).erased())
    }

    /// Create an HTTP provider that signs with the given key
    fn get_signing_provider(
        &self,
        signer: PrivateKeySigner,
    ) -> Result<VaultProvider, VaultConfigError> {
        let url = self.rpc_url.parse::<Url>().map_err(err_str!(VaultConfigError::RpcUrl))?;
        Ok(ProviderBuilder::new().wallet(signer).connect_http(url).erased())
    }
}

/// Parse a hex encoded address
pub fn parse_address(address: &str) -> Result<Address, VaultConfigError> {
    Address::from_str(address).map_err(err_str!(VaultConfigError::AddressParsing))
}

// ----------
// | Client |
// ----------

/// The onchain vault client
#[derive(Clone)]
pub struct OnchainVaultClient {
    /// The vault contract instance
    vault: IEulerMaxVaultInstance<VaultProvider>,
    /// The balance contract instance, if configured
    balance_contract: Option<IERC20Instance<VaultProvider>>,
    /// The shared provider
    provider: VaultProvider,
}

impl OnchainVaultClient {
    /// Create a read-only client
    pub fn new(config: &VaultClientConfig) -> Result<Self, VaultConfigError> {
        let provider = config.get_provider()?;
        Ok(Self::with_provider(config, provider))
    }

    /// Create a client that signs transactions with the given key
    pub fn new_signing(
        config: &VaultClientConfig,
        private_key: &str,
    ) -> Result<Self, VaultConfigError> {
        let signer = PrivateKeySigner::from_str(private_key)
            .map_err(err_str!(VaultConfigError::PrivateKey))?;
        let provider = config.get_signing_provider(signer)?;
        Ok(Self::with_provider(config, provider))
    }

    /// Bind the contracts to a provider
    fn with_provider(config: &VaultClientConfig, provider: VaultProvider) -> Self {
        let vault = IEulerMaxVaultInstance::new(config.vault_address, provider.clone());
        let balance_contract =
            config.balance_contract_address.map(|addr| IERC20Instance::new(addr, provider.clone()));
        Self { vault, balance_contract, provider }
    }

    /// The id of the chain the provider is connected to
    pub async fn chain_id(&self) -> Result<u64, VaultClientError> {
        self.provider.get_chain_id().await.map_err(VaultClientError::rpc)
    }

    /// The decimals of the vault's underlying asset
    pub async fn asset_decimals(&self) -> Result<u8, VaultClientError> {
        let asset = self.vault.asset().call().await?;
        let erc20 = IERC20Instance::new(asset, self.provider.clone());
        Ok(erc20.decimals().call().await?)
    }
}

#[async_trait]
impl VaultReader for OnchainVaultClient {
    #[instrument(skip_all)]
    async fn vault_snapshot(&self) -> Result<VaultSnapshot, VaultClientError> {
        let total_shares = self.vault.totalShares().call().await?;
        let total_supplied = self.vault.totalSupplied().call().await?;
        Ok(VaultSnapshot { total_shares, total_supplied })
    }

    #[instrument(skip_all)]
    async fn vault_info(&self) -> Result<VaultInfo, VaultClientError> {
        Ok(VaultInfo {
            owner: self.vault.owner().call().await?,
            asset: self.vault.asset().call().await?,
            euler: self.vault.euler().call().await?,
            euler_swap: self.vault.eulerSwap().call().await?,
            total_supplied: self.vault.totalSupplied().call().await?,
            vault_apy: self.vault.vaultAPY().call().await?,
        })
    }

    #[instrument(skip(self))]
    async fn balance_of(&self, wallet: Address) -> Result<U256, VaultClientError> {
        let contract = self.balance_contract.as_ref().ok_or_else(|| {
            VaultClientError::config("Balance contract address not configured")
        })?;
        Ok(contract.balanceOf(wallet).call().await?)
    }
}
