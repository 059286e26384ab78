//! Release workflow driven by webhook events.
use chrono::Utc;
use derive_builder::Builder;
use log::*;
use std::rc::Rc;

use crate::{
    ReleaseBotError, Result,
    analyzer::{
        changelog::{self, ChangelogWriter},
        commit::CategorizedCommits,
        version::VersionIncrementer,
    },
    event::{
        self, COMMENT_CREATED_ACTION, IssueCommentEvent, PR_CLOSED_ACTION,
        PullRequestEvent, WebhookEvent,
    },
    forge::{
        manager::ForgeManager,
        request::{CreateCommentRequest, CreateReleaseRequest, MergePrRequest},
    },
    orchestrator::{
        config::OrchestratorConfig, labels::LabelStateMachine,
        settle::SettleTimer,
    },
};

pub mod config;
pub mod labels;
pub mod settle;

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do for this event.
    Skipped(String),
    /// A pending release was abandoned because its pull request closed.
    Abandoned { pr_number: u64 },
    /// A release was published.
    Released { tag: String, url: String },
}

#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct OrchestratorParams {
    pub config: Rc<OrchestratorConfig>,
    pub forge: Rc<ForgeManager>,
    pub settle_timer: SettleTimer,
}

impl OrchestratorParamsBuilder {
    pub fn build(&self) -> Result<Orchestrator> {
        let params = self._build().map_err(|e| {
            ReleaseBotError::invalid_config(format!(
                "Failed to build orchestrator: {}",
                e
            ))
        })?;
        Ok(Orchestrator::new(params))
    }
}

pub struct Orchestrator {
    config: Rc<OrchestratorConfig>,
    forge: Rc<ForgeManager>,
    settle_timer: SettleTimer,
}

impl Orchestrator {
    pub fn builder() -> OrchestratorParamsBuilder {
        OrchestratorParamsBuilder::default()
    }

    pub fn new(params: OrchestratorParams) -> Self {
        Self {
            config: Rc::clone(&params.config),
            forge: Rc::clone(&params.forge),
            settle_timer: params.settle_timer,
        }
    }

    fn labels(&self) -> LabelStateMachine<'_> {
        LabelStateMachine::new(&self.config.constants)
    }

    /// Decode a raw webhook payload and handle it.
    pub async fn run(&self, payload: &str) -> Result<Outcome> {
        let event = event::route(payload)?;
        self.handle_event(event).await
    }

    pub async fn handle_event(&self, event: WebhookEvent) -> Result<Outcome> {
        match event {
            WebhookEvent::PullRequest(event) => {
                self.handle_pull_request(&event).await
            }
            WebhookEvent::IssueComment(event) => {
                self.handle_issue_comment(&event).await
            }
            WebhookEvent::Unrecognized => Err(ReleaseBotError::decode(
                "payload is neither a pull request nor an issue comment event",
            )),
        }
    }

    /// Drops the pending label from a pull request closed before release.
    pub async fn handle_pull_request(
        &self,
        event: &PullRequestEvent,
    ) -> Result<Outcome> {
        if event.action != PR_CLOSED_ACTION {
            return Ok(skip(format!(
                "pull request action '{}' is not handled",
                event.action
            )));
        }

        if !self.labels().has_pending_label(&event.labels) {
            return Ok(skip(format!(
                "pull request #{} is not pending release",
                event.number
            )));
        }

        info!("pull request #{} closed: abandoning release", event.number);

        self.labels()
            .transition_to_closed(&self.forge, event.number, &event.labels)
            .await?;

        Ok(Outcome::Abandoned {
            pr_number: event.number,
        })
    }

    /// Runs the release when a pending pull request receives the merge
    /// command.
    pub async fn handle_issue_comment(
        &self,
        event: &IssueCommentEvent,
    ) -> Result<Outcome> {
        let constants = &self.config.constants;

        if event.action != COMMENT_CREATED_ACTION {
            return Ok(skip(format!(
                "comment action '{}' is not handled",
                event.action
            )));
        }

        if !self.labels().has_pending_label(&event.labels) {
            return Ok(skip(format!(
                "#{} is not pending release",
                event.number
            )));
        }

        if !event.body.contains(&constants.merge_command) {
            return Ok(skip(format!(
                "comment on #{} does not request a merge",
                event.number
            )));
        }

        info!("release requested on #{}: {}", event.number, event.title);

        let forge_commits = self.forge.get_pr_commits(event.number).await?;
        let categorized = CategorizedCommits::from_forge_commits(&forge_commits);

        if categorized.is_empty() {
            warn!("#{} has no commits: changelog will be empty", event.number);
        }

        debug!("categorized commits: {:?}", categorized.groups());

        let notes =
            changelog::render(&categorized, &event.title, Utc::now().date_naive());

        let changelog_commit = ChangelogWriter::new(
            &self.forge,
            &self.config.changelog,
            &self.config.base_branch,
        )
        .write(notes)
        .await?;

        self.settle_timer.wait().await?;

        info!("merging #{}", event.number);

        self.forge
            .merge_pr(MergePrRequest {
                pr_number: event.number,
                message: constants.merge_commit_message.clone(),
            })
            .await?;

        self.labels()
            .transition_to_merged(&self.forge, event.number, &event.labels)
            .await?;

        let tag = VersionIncrementer::new(
            &self.forge,
            &constants.bot_name,
            &constants.bot_email,
        )
        .tag_next_release(&changelog_commit.sha)
        .await?;

        let release = self
            .forge
            .create_release(CreateReleaseRequest {
                tag: tag.clone(),
                name: format!("{} {tag}", constants.release_name_prefix),
                target_commitish: self.config.target_branch.clone(),
            })
            .await?;

        info!("published release {} at {}", release.tag, release.url);

        self.forge
            .create_comment(CreateCommentRequest {
                pr_number: event.number,
                body: format!(
                    "{} {}",
                    constants.release_comment_prefix, release.url
                ),
            })
            .await?;

        Ok(Outcome::Released {
            tag,
            url: release.url,
        })
    }
}

fn skip(reason: String) -> Outcome {
    info!("{reason}: nothing to do");
    Outcome::Skipped(reason)
}
