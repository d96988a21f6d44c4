//! Defines the server which encapsulates all dependencies for the advisor

use std::{path::PathBuf, sync::Arc};

use crate::{
    advisor::{Advisor, CannedAdvisor},
    cli::Cli,
};

/// The server
#[derive(Clone)]
pub(crate) struct Server {
    /// The source of answers
    pub advisor: Arc<dyn Advisor>,
    /// The portfolio fixture
    pub portfolio_path: PathBuf,
    /// The prompt template
    pub prompt_path: PathBuf,
}

impl Server {
    /// Build a server from the CLI
    pub fn build_from_cli(args: Cli) -> Self {
        Self {
            advisor: Arc::new(CannedAdvisor),
            portfolio_path: args.portfolio_path,
            prompt_path: args.prompt_path,
        }
    }
}
