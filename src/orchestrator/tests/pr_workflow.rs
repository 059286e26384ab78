//! Tests for pull request events.
//!
//! Tests for:
//! - Removing the pending label when a pending PR closes
//! - Ignoring PRs without the pending label
//! - Ignoring actions other than `closed`
//! - Surfacing label removal failures

use super::common::*;
use crate::{
    ReleaseBotError, forge::traits::MockForge, orchestrator::Outcome,
};

#[tokio::test]
async fn closed_pending_pr_removes_pending_label_only() {
    let mut mock_forge = MockForge::new();

    mock_forge
        .expect_remove_label()
        .times(1)
        .withf(|req| req.pr_number == TEST_PR_NUMBER && req.label == PENDING_LABEL)
        .returning(|_| Ok(()));

    mock_forge.expect_add_labels().times(0);

    let orchestrator = create_test_orchestrator(mock_forge);

    let outcome = orchestrator
        .handle_pull_request(&pr_event("closed", pending_labels()))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Abandoned {
            pr_number: TEST_PR_NUMBER
        }
    );
}

#[tokio::test]
async fn closed_pr_without_pending_label_is_noop() {
    // No expectations: any forge call panics
    let orchestrator = create_test_orchestrator(MockForge::new());

    for labels in [
        vec![],
        vec!["bug".to_string()],
        vec![MERGED_LABEL.to_string()],
    ] {
        let outcome = orchestrator
            .handle_pull_request(&pr_event("closed", labels))
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Skipped(_)));
    }
}

#[tokio::test]
async fn other_pr_actions_are_noop() {
    let orchestrator = create_test_orchestrator(MockForge::new());

    for action in ["opened", "synchronize", "labeled", "reopened"] {
        let outcome = orchestrator
            .handle_pull_request(&pr_event(action, pending_labels()))
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Skipped(_)));
    }
}

#[tokio::test]
async fn label_removal_failure_is_surfaced() {
    let mut mock_forge = MockForge::new();

    mock_forge
        .expect_remove_label()
        .times(1)
        .returning(|_| Err(ReleaseBotError::forge("403 forbidden")));

    let orchestrator = create_test_orchestrator(mock_forge);

    let err = orchestrator
        .handle_pull_request(&pr_event("closed", pending_labels()))
        .await
        .unwrap_err();

    assert!(matches!(err, ReleaseBotError::CollaboratorError { .. }));
    assert_eq!(err.to_string(), "remove label failed: 403 forbidden");
}
