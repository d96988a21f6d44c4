//! The CLI for the advisor service

use std::path::PathBuf;

use clap::Parser;
use eulermax_util::telemetry::{setup_system_logger, LevelFilter};

/// The CLI for the advisor service
#[rustfmt::skip]
#[derive(Clone, Debug, Parser)]
#[clap(about = "EulerMax portfolio advisor")]
pub struct Cli {
    // --- Fixtures --- //

    /// The portfolio fixture filled into the prompt
    #[clap(long, default_value = "memory/userPortfolio.json", env = "PORTFOLIO_PATH")]
    pub portfolio_path: PathBuf,
    /// The prompt template, `{portfolioData}` marks where the portfolio goes
    #[clap(long, default_value = "prompts/advisor.txt", env = "PROMPT_PATH")]
    pub prompt_path: PathBuf,

    // --- Server Config --- //

    /// The port to run the server on
    #[clap(short, long, default_value = "4000", env = "PORT")]
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["advisor-server"]).unwrap();
        assert_eq!(cli.port, 4000);
        assert_eq!(cli.portfolio_path, PathBuf::from("memory/userPortfolio.json"));
        assert_eq!(cli.prompt_path, PathBuf::from("prompts/advisor.txt"));
    }
}
