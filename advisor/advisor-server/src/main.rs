//! The advisor service, answers portfolio questions for the EulerMax dashboard
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(unsafe_code)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::needless_pass_by_ref_mut)]

pub mod advisor;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::info;

use crate::{cli::Cli, routes::routes, server::Server};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli.configure_telemetry();

    let port = cli.port;
    let server = Server::build_from_cli(cli);
    info!(
        "serving portfolio {} with prompt {}",
        server.portfolio_path.display(),
        server.prompt_path.display()
    );

    let listen_addr: SocketAddr = ([0, 0, 0, 0], port).into();
    info!("starting advisor on {listen_addr}");
    warp::serve(routes(Arc::new(server))).run(listen_addr).await;
}
