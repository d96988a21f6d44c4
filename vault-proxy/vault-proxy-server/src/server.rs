//! Defines the server which encapsulates all dependencies for the vault proxy

use std::{error::Error, sync::Arc};

use alloy_primitives::Address;
use tracing::{info, warn};

use crate::{
    cli::{Cli, Network},
    vault_client::{
        parse_address, OnchainVaultClient, VaultClientConfig, VaultReader, VaultWriter,
    },
};

/// The server
#[derive(Clone)]
pub(crate) struct Server {
    /// Read access to the vault, `None` when no RPC endpoint is configured
    pub reader: Option<Arc<dyn VaultReader>>,
    /// Write access to the vault, `None` when no signer is configured
    pub writer: Option<Arc<dyn VaultWriter>>,
    /// The decimals deposits are scaled by
    pub asset_decimals: u8,
    /// The decimals withdrawals are scaled by
    pub share_decimals: u8,
}

impl Server {
    /// Build a server from the CLI
    pub async fn build_from_cli(args: Cli) -> Result<Self, Box<dyn Error>> {
        let vault_address = args.get_vault_address()?;
        let mut asset_decimals = args.asset_decimals;

        let rpc_url = match args.rpc_url {
            Some(url) => url,
            None => {
                warn!("RPC_URL not configured, vault reads will fall back to mock data");
                warn!("write operations disabled");
                return Ok(Self {
                    reader: None,
                    writer: None,
                    asset_decimals,
                    share_decimals: args.share_decimals,
                });
            },
        };

        let balance_contract = parse_balance_contract(args.balance_contract_address.as_deref());
        let config = VaultClientConfig::new(rpc_url, &vault_address, balance_contract)?;
        info!("targeting vault {:#x} on {:?}", config.vault_address, args.network);

        let client = OnchainVaultClient::new(&config)?;
        check_chain_id(&client, args.network).await;
        if let Some(onchain) = fetch_asset_decimals(&client).await {
            if onchain != asset_decimals {
                warn!(
                    "configured asset decimals ({asset_decimals}) disagree with the asset contract ({onchain}), using {onchain}"
                );
            }
            asset_decimals = onchain;
        }

        let writer = build_writer(&config, args.private_key.as_deref());
        Ok(Self {
            reader: Some(Arc::new(client)),
            writer,
            asset_decimals,
            share_decimals: args.share_decimals,
        })
    }
}

// -----------
// | Helpers |
// -----------

/// Build the signing client, if a usable key is configured
///
/// A missing or malformed key disables writes rather than failing startup
fn build_writer(
    config: &VaultClientConfig,
    private_key: Option<&str>,
) -> Option<Arc<dyn VaultWriter>> {
    let key = match private_key {
        Some(key) if !key.is_empty() => key,
        _ => {
            warn!("PRIVATE_KEY not configured, write operations disabled");
            return None;
        },
    };

    match OnchainVaultClient::new_signing(config, key) {
        Ok(client) => {
            info!("signer configured");
            Some(Arc::new(client))
        },
        Err(e) => {
            warn!("invalid signer configuration, write operations disabled: {e}");
            None
        },
    }
}

/// Parse the balance contract address
///
/// A malformed address only disables the balance endpoint
fn parse_balance_contract(address: Option<&str>) -> Option<Address> {
    let address = address.filter(|addr| !addr.is_empty())?;
    match parse_address(address) {
        Ok(addr) => Some(addr),
        Err(e) => {
            warn!("invalid balance contract address, balance queries disabled: {e}");
            None
        },
    }
}

/// Warn if the node is on a different chain than the network we target
async fn check_chain_id(client: &OnchainVaultClient, network: Network) {
    match client.chain_id().await {
        Ok(id) if id == network.chain_id() => info!("connected to chain {id}"),
        Ok(id) => warn!("node reports chain {id}, expected {} for {network:?}", network.chain_id()),
        Err(e) => warn!("could not fetch chain id: {e}"),
    }
}

/// Read the asset's decimals from chain, `None` if it cannot be read
async fn fetch_asset_decimals(client: &OnchainVaultClient) -> Option<u8> {
    match client.asset_decimals().await {
        Ok(decimals) => Some(decimals),
        Err(e) => {
            warn!("could not read asset decimals, using configured value: {e}");
            None
        },
    }
}
