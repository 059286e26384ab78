//! Webhook payload decoding.
//!
//! The same workflow can be triggered by `pull_request` and `issue_comment`
//! deliveries, so a payload is tried against both shapes and the outcome is
//! reported as a single [`WebhookEvent`].
use log::*;
use serde::Deserialize;

use crate::{ReleaseBotError, Result};

/// Pull request action that abandons a pending release.
pub const PR_CLOSED_ACTION: &str = "closed";
/// Issue comment action that may request a release.
pub const COMMENT_CREATED_ACTION: &str = "created";

#[derive(Debug, Clone, Deserialize)]
struct LabelPayload {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PullRequestPayload {
    number: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    labels: Vec<LabelPayload>,
}

#[derive(Debug, Clone, Deserialize)]
struct PullRequestEventPayload {
    action: String,
    pull_request: PullRequestPayload,
}

#[derive(Debug, Clone, Deserialize)]
struct IssuePayload {
    number: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    labels: Vec<LabelPayload>,
}

#[derive(Debug, Clone, Deserialize)]
struct CommentPayload {
    #[serde(default)]
    body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct IssueCommentEventPayload {
    action: String,
    issue: IssuePayload,
    comment: CommentPayload,
}

/// A pull request lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    pub action: String,
    pub number: u64,
    pub title: String,
    pub labels: Vec<String>,
}

/// A comment left on an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCommentEvent {
    pub action: String,
    pub number: u64,
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Which event family to decode a payload as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
    PullRequest,
    IssueComment,
}

/// Result of routing a webhook payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEvent {
    PullRequest(PullRequestEvent),
    IssueComment(IssueCommentEvent),
    /// Well-formed JSON that matches neither supported shape.
    Unrecognized,
}

impl From<PullRequestEventPayload> for PullRequestEvent {
    fn from(payload: PullRequestEventPayload) -> Self {
        Self {
            action: payload.action,
            number: payload.pull_request.number,
            title: payload.pull_request.title,
            labels: payload
                .pull_request
                .labels
                .into_iter()
                .map(|l| l.name)
                .collect(),
        }
    }
}

impl From<IssueCommentEventPayload> for IssueCommentEvent {
    fn from(payload: IssueCommentEventPayload) -> Self {
        Self {
            action: payload.action,
            number: payload.issue.number,
            title: payload.issue.title,
            body: payload.comment.body.unwrap_or_default(),
            labels: payload.issue.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

fn parse_payload(payload: &str) -> Result<serde_json::Value> {
    if payload.trim().is_empty() {
        return Err(ReleaseBotError::decode("no event payload provided"));
    }

    serde_json::from_str(payload).map_err(|e| {
        ReleaseBotError::decode(format!("payload is not valid JSON: {e}"))
    })
}

fn decode_value(
    value: serde_json::Value,
    shape: EventShape,
) -> Result<WebhookEvent> {
    let decoded = match shape {
        EventShape::PullRequest => {
            serde_json::from_value::<PullRequestEventPayload>(value)
                .map(|p| WebhookEvent::PullRequest(p.into()))
        }
        EventShape::IssueComment => {
            serde_json::from_value::<IssueCommentEventPayload>(value)
                .map(|p| WebhookEvent::IssueComment(p.into()))
        }
    };

    decoded.map_err(|e| {
        ReleaseBotError::decode(format!("not a {shape:?} event: {e}"))
    })
}

/// Decode `payload` as exactly one event shape.
pub fn decode(payload: &str, shape: EventShape) -> Result<WebhookEvent> {
    decode_value(parse_payload(payload)?, shape)
}

/// Decode `payload` against both supported shapes.
///
/// Both decodes are attempted. A pull request decode takes precedence if,
/// unusually, the payload satisfies both.
pub fn route(payload: &str) -> Result<WebhookEvent> {
    let value = parse_payload(payload)?;

    let pull_request = decode_value(value.clone(), EventShape::PullRequest);
    let issue_comment = decode_value(value, EventShape::IssueComment);

    match (pull_request, issue_comment) {
        (Ok(event), _) => Ok(event),
        (Err(_), Ok(event)) => Ok(event),
        (Err(pr_err), Err(comment_err)) => {
            debug!("payload matched no event shape: {pr_err}; {comment_err}");
            Ok(WebhookEvent::Unrecognized)
        }
    }
}
