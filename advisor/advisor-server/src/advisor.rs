//! Produces the advisor's prompt and answer
//!
//! The prompt is the template with the portfolio fixture pretty-printed into
//! its first `{portfolioData}` placeholder. Both files are read on every
//! request so edits take effect without a restart.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AdvisorError;

/// The placeholder the portfolio is substituted into
pub const PORTFOLIO_PLACEHOLDER: &str = "{portfolioData}";
/// The answer given by the canned advisor
pub const CANNED_ANSWER: &str = "✅ After reviewing your portfolio: now is not a good time to \
                                 withdraw because of high impermanent loss on the ETH/USDC \
                                 pair. Rebalancing today is recommended.";

/// A source of answers to portfolio questions
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Answer a question given the filled prompt
    async fn answer(&self, question: Option<&str>, prompt: &str) -> Result<String, AdvisorError>;
}

/// An advisor that always gives the same answer
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedAdvisor;

#[async_trait]
impl Advisor for CannedAdvisor {
    async fn answer(&self, _question: Option<&str>, _prompt: &str) -> Result<String, AdvisorError> {
        Ok(CANNED_ANSWER.to_string())
    }
}

// ----------
// | Prompt |
// ----------

/// Read both fixtures from disk and fill the prompt
pub async fn fill_prompt(portfolio_path: &Path, prompt_path: &Path) -> Result<String, AdvisorError> {
    let portfolio = read_file(portfolio_path).await?;
    let portfolio: Value = serde_json::from_str(&portfolio)?;
    let template = read_file(prompt_path).await?;

    render_prompt(&template, &portfolio)
}

/// Substitute the portfolio into the template's first placeholder
///
/// A template without a placeholder is returned unchanged
pub fn render_prompt(template: &str, portfolio: &Value) -> Result<String, AdvisorError> {
    let pretty = serde_json::to_string_pretty(portfolio)?;
    Ok(template.replacen(PORTFOLIO_PLACEHOLDER, &pretty, 1))
}

/// Read a UTF-8 file
async fn read_file(path: &Path) -> Result<String, AdvisorError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AdvisorError::Io { path: path.to_path_buf(), source })
}
