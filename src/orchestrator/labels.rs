//! Label transitions tracking a pull request's release status.
//!
//! ```text
//! (none) --/merge requested--> pending --merged--> merged
//!                                 |
//!                                 +--closed--> (none)
//! ```
use log::*;

use crate::{
    Result,
    forge::{
        manager::ForgeManager,
        request::{PrLabelsRequest, RemoveLabelRequest},
    },
    orchestrator::config::WorkflowConstants,
};

/// An event that may move a pull request between label states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTrigger {
    Closed,
    Merged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelModification {
    Add(String),
    Remove(String),
}

pub struct LabelStateMachine<'a> {
    pending: &'a str,
    merged: &'a str,
}

impl<'a> LabelStateMachine<'a> {
    pub fn new(constants: &'a WorkflowConstants) -> Self {
        Self {
            pending: &constants.pending_label,
            merged: &constants.merged_label,
        }
    }

    pub fn has_pending_label(&self, labels: &[String]) -> bool {
        labels.iter().any(|l| l == self.pending)
    }

    /// Modifications for `trigger`, in the order they must be applied.
    /// Empty when the pull request is not pending.
    pub fn modifications(
        &self,
        labels: &[String],
        trigger: LabelTrigger,
    ) -> Vec<LabelModification> {
        if !self.has_pending_label(labels) {
            return vec![];
        }

        match trigger {
            LabelTrigger::Closed => {
                vec![LabelModification::Remove(self.pending.to_string())]
            }
            LabelTrigger::Merged => vec![
                LabelModification::Remove(self.pending.to_string()),
                LabelModification::Add(self.merged.to_string()),
            ],
        }
    }

    pub async fn transition_to_closed(
        &self,
        forge: &ForgeManager,
        pr_number: u64,
        labels: &[String],
    ) -> Result<()> {
        let mods = self.modifications(labels, LabelTrigger::Closed);
        apply(forge, pr_number, mods).await
    }

    pub async fn transition_to_merged(
        &self,
        forge: &ForgeManager,
        pr_number: u64,
        labels: &[String],
    ) -> Result<()> {
        let mods = self.modifications(labels, LabelTrigger::Merged);
        apply(forge, pr_number, mods).await
    }
}

/// Apply modifications one at a time, stopping at the first failure so a
/// label is never added after the removal preceding it failed.
async fn apply(
    forge: &ForgeManager,
    pr_number: u64,
    modifications: Vec<LabelModification>,
) -> Result<()> {
    for modification in modifications {
        match modification {
            LabelModification::Remove(label) => {
                info!("removing label {label} from #{pr_number}");
                forge
                    .remove_label(RemoveLabelRequest { pr_number, label })
                    .await?;
            }
            LabelModification::Add(label) => {
                info!("adding label {label} to #{pr_number}");
                forge
                    .add_labels(PrLabelsRequest {
                        pr_number,
                        labels: vec![label],
                    })
                    .await?;
            }
        }
    }

    Ok(())
}
