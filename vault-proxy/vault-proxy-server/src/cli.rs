//! The CLI for the vault proxy

use clap::{Parser, ValueEnum};
use eulermax_util::telemetry::{setup_system_logger, LevelFilter};

use crate::vault_client::errors::VaultConfigError;

/// The vault deployment on Sepolia
pub const SEPOLIA_VAULT_ADDRESS: &str = "0x3C9c14a184946642Af10b09890A01fadbD874502";
/// The Sepolia chain id
const SEPOLIA_CHAIN_ID: u64 = 11_155_111;
/// The chain id of a local anvil or hardhat node
const LOCAL_CHAIN_ID: u64 = 31_337;

/// The network the proxy targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Network {
    /// The Sepolia testnet
    Sepolia,
    /// A local development node
    Local,
}

impl Network {
    /// The chain id the network is expected to report
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Sepolia => SEPOLIA_CHAIN_ID,
            Network::Local => LOCAL_CHAIN_ID,
        }
    }

    /// The vault deployment on this network, if there is a canonical one
    pub fn vault_address(&self) -> Option<&'static str> {
        match self {
            Network::Sepolia => Some(SEPOLIA_VAULT_ADDRESS),
            Network::Local => None,
        }
    }
}

/// The CLI for the vault proxy
#[rustfmt::skip]
#[derive(Clone, Debug, Parser)]
#[clap(about = "EulerMax vault proxy server")]
pub struct Cli {
    // --- Chain Config --- //

    /// The JSON-RPC endpoint to reach the vault through
    ///
    /// Without it every read falls back to mock data and writes are disabled
    #[clap(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,
    /// The private key used to sign deposits and withdrawals
    ///
    /// Without it deposits and withdrawals are rejected
    #[clap(long = "private-key", env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
    /// The network to target
    #[clap(long, value_enum, default_value = "sepolia", env = "NETWORK")]
    pub network: Network,
    /// Overrides the network's vault deployment
    #[clap(long, env = "VAULT_ADDRESS")]
    pub vault_address: Option<String>,
    /// The contract queried by the onchain balance endpoint
    #[clap(long, env = "VAULT_CONTRACT_ADDRESS")]
    pub balance_contract_address: Option<String>,

    // --- Token Config --- //

    /// The decimals of the vault asset, replaced by the onchain value when
    /// the asset can be read
    #[clap(long, default_value = "6", env = "ASSET_DECIMALS")]
    pub asset_decimals: u8,
    /// The decimals of vault shares
    #[clap(long, default_value = "6", env = "SHARE_DECIMALS")]
    pub share_decimals: u8,

    // --- Server Config --- //

    /// The port to run the server on
    #[clap(short, long, default_value = "3000", env = "PORT")]
    pub port: u16,

    // --- Telemetry --- //

    /// Whether to emit JSON formatted logs
    #[clap(long, env = "JSON_LOGS")]
    pub json_logs: bool,
    /// The default log level
    #[clap(long, default_value = "info", env = "LOG_LEVEL")]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Configure telemetry from the CLI
    pub fn configure_telemetry(&self) {
        setup_system_logger(self.json_logs, self.log_level);
    }

    /// The vault address to bind to
    pub fn get_vault_address(&self) -> Result<String, VaultConfigError> {
        self.vault_address
            .clone()
            .or_else(|| self.network.vault_address().map(str::to_string))
            .ok_or_else(|| {
                VaultConfigError::Missing(format!(
                    "--vault-address is required for the {:?} network",
                    self.network
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vault-proxy"]).unwrap();
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.network, Network::Sepolia);
        assert_eq!(cli.asset_decimals, 6);
        assert_eq!(cli.get_vault_address().unwrap(), SEPOLIA_VAULT_ADDRESS);
    }

    #[test]
    fn test_local_network_requires_address() {
        let cli = Cli::try_parse_from(["vault-proxy", "--network", "local"]).unwrap();
        assert!(cli.get_vault_address().is_err());

        let addr = "0x0000000000000000000000000000000000000001";
        let cli =
            Cli::try_parse_from(["vault-proxy", "--network", "local", "--vault-address", addr])
                .unwrap();
        assert_eq!(cli.get_vault_address().unwrap(), addr);
        assert_eq!(cli.network.chain_id(), 31_337);
    }
}
