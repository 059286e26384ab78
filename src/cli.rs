//! CLI arguments, each also readable from the action's `INPUT_*` variables.
use clap::Parser;
use secrecy::SecretString;
use std::time::Duration;

use crate::{
    Result,
    analyzer::config::{ChangelogConfig, ChangelogMode, DEFAULT_CHANGELOG_PATH},
    config::ReleaseConfig,
    forge::config::DEFAULT_API_URL,
    orchestrator::config::{DEFAULT_SETTLE_DELAY, OrchestratorConfig},
};

/// Release bot driven by pull request and issue comment webhooks.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "INPUT_REPO_OWNER")]
    /// Repository owner.
    pub repo_owner: Option<String>,

    #[arg(long, env = "INPUT_REPO_NAME")]
    /// Repository name.
    pub repo_name: Option<String>,

    #[arg(long, env = "INPUT_BASE_BRANCH")]
    /// Branch the changelog is committed to.
    pub base_branch: Option<String>,

    #[arg(long, env = "INPUT_TARGET_BRANCH")]
    /// Branch releases are created from.
    pub target_branch: Option<String>,

    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    /// GitHub access token.
    pub github_token: Option<String>,

    #[arg(long, env = "INPUT_GITHUB_EVENT", hide_env_values = true)]
    /// JSON payload of the webhook event that triggered the run.
    pub github_event: Option<String>,

    #[arg(long, env = "INPUT_API_URL", default_value = DEFAULT_API_URL)]
    /// GitHub REST API base URL, for GitHub Enterprise installations.
    pub api_url: String,

    #[arg(
        long,
        env = "INPUT_SETTLE_SECONDS",
        default_value_t = DEFAULT_SETTLE_DELAY.as_secs()
    )]
    /// Seconds to wait between publishing the changelog and merging.
    pub settle_seconds: u64,

    #[arg(long, env = "INPUT_CHANGELOG_PATH", default_value = DEFAULT_CHANGELOG_PATH)]
    /// Changelog location in the repository.
    pub changelog_path: String,

    #[arg(
        long,
        env = "INPUT_CHANGELOG_MODE",
        value_enum,
        default_value_t = ChangelogMode::Replace
    )]
    /// Whether new notes replace the changelog or are placed above it.
    pub changelog_mode: ChangelogMode,

    #[arg(long, env = "INPUT_DEBUG", default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Validate the required settings.
    pub fn release_config(&self) -> Result<ReleaseConfig> {
        let mut builder = ReleaseConfig::builder();

        if let Some(owner) = &self.repo_owner {
            builder.repo_owner(owner);
        }
        if let Some(name) = &self.repo_name {
            builder.repo_name(name);
        }
        if let Some(branch) = &self.base_branch {
            builder.base_branch(branch);
        }
        if let Some(branch) = &self.target_branch {
            builder.target_branch(branch);
        }
        if let Some(token) = &self.github_token {
            builder.token(SecretString::from(token.clone()));
        }
        if let Some(event) = &self.github_event {
            builder.event(event);
        }

        builder.build()
    }

    pub fn orchestrator_config(
        &self,
        release_config: &ReleaseConfig,
    ) -> Result<OrchestratorConfig> {
        OrchestratorConfig::builder()
            .base_branch(release_config.base_branch.clone())
            .target_branch(release_config.target_branch.clone())
            .settle_delay(Duration::from_secs(self.settle_seconds))
            .changelog(ChangelogConfig {
                path: self.changelog_path.clone(),
                mode: self.changelog_mode,
            })
            .build()
    }
}
