use derive_builder::Builder;
use std::time::Duration;

use crate::{
    ReleaseBotError, Result,
    analyzer::config::ChangelogConfig,
    forge::config::{MERGED_LABEL, PENDING_LABEL},
};

/// Comment text that requests a release.
pub const MERGE_COMMAND: &str = "/merge";
/// Commit message used when merging the release pull request.
pub const MERGE_COMMIT_MESSAGE: &str = "Merged by Create Release Bot";
/// Prefix of the confirmation comment, followed by the release URL.
pub const RELEASE_COMMENT_PREFIX: &str = "Release is at:";
/// Prefix of the release name, followed by the tag.
pub const RELEASE_NAME_PREFIX: &str = "Release";
/// Tagger name recorded on release tags.
pub const BOT_NAME: &str = "Create Release Bot";
/// Tagger email recorded on release tags.
pub const BOT_EMAIL: &str = "githubaction@github.com";
/// Default pause between publishing the changelog and merging.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(40);

/// Fixed names the bot shares with repositories already using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConstants {
    pub pending_label: String,
    pub merged_label: String,
    pub merge_command: String,
    pub merge_commit_message: String,
    pub release_comment_prefix: String,
    pub release_name_prefix: String,
    pub bot_name: String,
    pub bot_email: String,
}

impl Default for WorkflowConstants {
    fn default() -> Self {
        Self {
            pending_label: PENDING_LABEL.into(),
            merged_label: MERGED_LABEL.into(),
            merge_command: MERGE_COMMAND.into(),
            merge_commit_message: MERGE_COMMIT_MESSAGE.into(),
            release_comment_prefix: RELEASE_COMMENT_PREFIX.into(),
            release_name_prefix: RELEASE_NAME_PREFIX.into(),
            bot_name: BOT_NAME.into(),
            bot_email: BOT_EMAIL.into(),
        }
    }
}

/// Settings for a single workflow run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct OrchestratorConfig {
    /// Branch the changelog is written to.
    pub base_branch: String,
    /// Branch releases are cut from.
    pub target_branch: String,
    #[builder(default = "DEFAULT_SETTLE_DELAY")]
    pub settle_delay: Duration,
    #[builder(default)]
    pub changelog: ChangelogConfig,
    #[builder(default)]
    pub constants: WorkflowConstants,
}

impl OrchestratorConfigBuilder {
    pub fn build(&self) -> Result<OrchestratorConfig> {
        self._build().map_err(|e| {
            ReleaseBotError::invalid_config(format!(
                "Failed to build orchestrator config: {}",
                e
            ))
        })
    }
}

impl OrchestratorConfig {
    pub fn builder() -> OrchestratorConfigBuilder {
        OrchestratorConfigBuilder::default()
    }
}
