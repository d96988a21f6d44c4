//! The vault proxy, serves the EulerMax dashboard's reads and writes against
//! the deployed vault contract
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(unsafe_code)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::needless_pass_by_ref_mut)]

pub mod cli;
pub mod conversion;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod vault_client;

use std::{error::Error, net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::info;

use crate::{cli::Cli, routes::routes, server::Server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    cli.configure_telemetry();

    let port = cli.port; // copy `cli.port` to use after moving `cli`
    let server = Server::build_from_cli(cli).await?;

    let listen_addr: SocketAddr = ([0, 0, 0, 0], port).into();
    info!("starting vault proxy on {listen_addr}");
    warp::serve(routes(Arc::new(server))).run(listen_addr).await;

    Ok(())
}
