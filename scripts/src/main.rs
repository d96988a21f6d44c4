use alloy::primitives::Address;
use anyhow::Result;
use clap::{Parser, Subcommand};

mod abis;
mod commands;

use commands::{approve, inspect};

/// The vault deployment on Sepolia
const SEPOLIA_VAULT_ADDRESS: &str = "0x3C9c14a184946642Af10b09890A01fadbD874502";

// -------
// | Cli |
// -------

#[derive(Parser)]
#[command(name = "vault-scripts")]
#[command(about = "Operator scripts for the EulerMax vault")]
struct Cli {
    /// The JSON-RPC endpoint to reach the vault through
    #[arg(long, env = "RPC_URL", global = true, default_value = "http://localhost:8545")]
    rpc_url: String,
    /// The vault to operate on
    #[arg(long, env = "VAULT_ADDRESS", global = true, default_value = SEPOLIA_VAULT_ADDRESS)]
    vault_address: Address,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Approve the vault to spend the signer's asset
    Approve {
        /// The amount to approve, in whole units of the asset
        #[arg(long, default_value = "100")]
        amount: String,
        /// The token to approve, defaults to the vault's asset
        #[arg(long)]
        asset_address: Option<Address>,
        /// The key of the account granting the approval
        #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// Print the vault's metadata
    Inspect,
}

// --------------
// | Entrypoint |
// --------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Approve { amount, asset_address, private_key } => {
            approve(&cli.rpc_url, &private_key, cli.vault_address, asset_address, &amount).await?;
        },
        Commands::Inspect => {
            inspect(&cli.rpc_url, cli.vault_address).await?;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_defaults_to_sepolia() {
        let cli = Cli::try_parse_from(["vault-scripts", "inspect"]).unwrap();
        assert_eq!(cli.vault_address, SEPOLIA_VAULT_ADDRESS.parse::<Address>().unwrap());
        assert!(matches!(cli.command, Commands::Inspect));
    }

    #[test]
    fn test_approve_args() {
        let key = "0x0123456789012345678901234567890123456789012345678901234567890123";
        let cli =
            Cli::try_parse_from(["vault-scripts", "approve", "--amount", "2.5", "--private-key", key])
                .unwrap();
        match cli.command {
            Commands::Approve { amount, asset_address, .. } => {
                assert_eq!(amount, "2.5");
                assert!(asset_address.is_none());
            },
            Commands::Inspect => panic!("expected approve"),
        }
    }
}
