//! Tests for dispatching raw payloads.

use super::common::*;
use crate::{
    ReleaseBotError, forge::traits::MockForge, orchestrator::Outcome,
};

#[tokio::test]
async fn run_dispatches_closed_pr_payload() {
    let mut mock_forge = MockForge::new();
    mock_forge
        .expect_remove_label()
        .times(1)
        .withf(|req| req.pr_number == 3 && req.label == PENDING_LABEL)
        .returning(|_| Ok(()));

    let orchestrator = create_test_orchestrator(mock_forge);

    let payload = format!(
        r#"{{
            "action": "closed",
            "pull_request": {{
                "number": 3,
                "title": "Release",
                "labels": [{{"name": "{PENDING_LABEL}"}}]
            }}
        }}"#
    );

    let outcome = orchestrator.run(&payload).await.unwrap();
    assert_eq!(outcome, Outcome::Abandoned { pr_number: 3 });
}

#[tokio::test]
async fn run_skips_comment_payload_without_pending_label() {
    let orchestrator = create_test_orchestrator(MockForge::new());

    let payload = r#"{
        "action": "created",
        "issue": {"number": 3, "title": "Release", "labels": []},
        "comment": {"body": "/merge"}
    }"#;

    let outcome = orchestrator.run(payload).await.unwrap();
    assert!(matches!(outcome, Outcome::Skipped(_)));
}

#[tokio::test]
async fn run_rejects_unrecognized_payload() {
    let orchestrator = create_test_orchestrator(MockForge::new());

    let err = orchestrator
        .run(r#"{"action": "completed", "check_run": {}}"#)
        .await
        .unwrap_err();

    assert!(matches!(err, ReleaseBotError::DecodeError(_)));
}

#[tokio::test]
async fn run_rejects_empty_payload() {
    let orchestrator = create_test_orchestrator(MockForge::new());

    let err = orchestrator.run("").await.unwrap_err();

    assert!(matches!(err, ReleaseBotError::DecodeError(_)));
}
