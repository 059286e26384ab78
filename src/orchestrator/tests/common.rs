//! Common test utilities for orchestrator tests.

use std::{rc::Rc, time::Duration};
use tokio_util::sync::CancellationToken;

use crate::{
    event::{IssueCommentEvent, PullRequestEvent},
    forge::{manager::ForgeManager, traits::MockForge},
    orchestrator::{
        Orchestrator, OrchestratorParams, config::OrchestratorConfig,
        settle::SettleTimer,
    },
};

pub use crate::forge::config::{MERGED_LABEL, PENDING_LABEL};

pub const TEST_PR_NUMBER: u64 = 17;
pub const TEST_RELEASE_URL: &str =
    "https://github.com/octo/repo/releases/tag/v0.0.1";

/// Creates a test Orchestrator with the provided mock forge and no
/// settling delay.
///
/// # Example
/// ```ignore
/// let mut mock_forge = MockForge::new();
/// mock_forge.expect_remove_label().returning(|_| Ok(()));
/// let orchestrator = create_test_orchestrator(mock_forge);
/// ```
pub fn create_test_orchestrator(mock_forge: MockForge) -> Orchestrator {
    create_test_orchestrator_with_timer(
        mock_forge,
        SettleTimer::new(Duration::ZERO, CancellationToken::new()),
    )
}

/// Creates a test Orchestrator with a custom settling timer.
pub fn create_test_orchestrator_with_timer(
    mock_forge: MockForge,
    settle_timer: SettleTimer,
) -> Orchestrator {
    let config = Rc::new(
        OrchestratorConfig::builder()
            .base_branch("develop")
            .target_branch("main")
            .settle_delay(settle_timer.delay())
            .build()
            .unwrap(),
    );

    let forge = Rc::new(ForgeManager::new(Box::new(mock_forge)));

    Orchestrator::new(OrchestratorParams {
        config,
        forge,
        settle_timer,
    })
}

pub fn pending_labels() -> Vec<String> {
    vec!["enhancement".into(), PENDING_LABEL.into()]
}

pub fn pr_event(action: &str, labels: Vec<String>) -> PullRequestEvent {
    PullRequestEvent {
        action: action.into(),
        number: TEST_PR_NUMBER,
        title: "Release sprint 12".into(),
        labels,
    }
}

pub fn comment_event(body: &str, labels: Vec<String>) -> IssueCommentEvent {
    IssueCommentEvent {
        action: "created".into(),
        number: TEST_PR_NUMBER,
        title: "Release sprint 12".into(),
        body: body.into(),
        labels,
    }
}
