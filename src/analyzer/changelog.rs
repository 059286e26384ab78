//! Changelog rendering and publication.
use chrono::NaiveDate;
use log::*;

use crate::{
    ReleaseBotError, Result,
    analyzer::{
        commit::CategorizedCommits,
        config::{
            CREATE_CHANGELOG_MESSAGE, ChangelogConfig, ChangelogMode,
            UPDATE_CHANGELOG_MESSAGE,
        },
    },
    forge::{
        manager::ForgeManager,
        request::{Commit, GetFileContentRequest, WriteFileRequest},
    },
};

/// Render the changelog section for a release.
///
/// Output depends only on the arguments: categories appear in the order
/// they were first seen and commits keep their order within a category.
pub fn render(
    commits: &CategorizedCommits,
    tag_label: &str,
    date: NaiveDate,
) -> String {
    let mut notes =
        format!("# Changelog {tag_label} ({})\n\n", date.format("%Y-%m-%d"));

    for (group, group_commits) in commits.iter() {
        if group_commits.is_empty() {
            continue;
        }

        notes.push_str(&format!("\n\n## {group}\n\n"));

        for commit in group_commits {
            notes.push_str(&format!("- {}\n", commit.message));
        }
    }

    notes
}

/// Writes rendered notes to the changelog file on a branch, creating the
/// file when it is missing and updating it against its current sha
/// otherwise.
pub struct ChangelogWriter<'a> {
    forge: &'a ForgeManager,
    config: &'a ChangelogConfig,
    branch: &'a str,
}

impl<'a> ChangelogWriter<'a> {
    pub fn new(
        forge: &'a ForgeManager,
        config: &'a ChangelogConfig,
        branch: &'a str,
    ) -> Self {
        Self {
            forge,
            config,
            branch,
        }
    }

    /// Publish `notes` and return the commit the write produced.
    pub async fn write(&self, notes: String) -> Result<Commit> {
        self.write_inner(notes)
            .await
            .map_err(|err| ReleaseBotError::collaborator("write changelog", err))
    }

    async fn write_inner(&self, notes: String) -> Result<Commit> {
        let existing = self
            .forge
            .get_file_content(GetFileContentRequest {
                branch: self.branch.to_string(),
                path: self.config.path.clone(),
            })
            .await?;

        match existing {
            None => {
                info!("creating {} on {}", self.config.path, self.branch);
                self.forge
                    .create_file(WriteFileRequest {
                        branch: self.branch.to_string(),
                        path: self.config.path.clone(),
                        message: CREATE_CHANGELOG_MESSAGE.into(),
                        content: notes,
                        sha: None,
                    })
                    .await
            }
            Some(file) => {
                info!(
                    "updating {} on {} from sha {}",
                    self.config.path, self.branch, file.sha
                );

                let content = match self.config.mode {
                    ChangelogMode::Replace => notes,
                    ChangelogMode::Prepend => {
                        format!("{notes}\n{}", file.content)
                    }
                };

                self.forge
                    .update_file(WriteFileRequest {
                        branch: self.branch.to_string(),
                        path: self.config.path.clone(),
                        message: UPDATE_CHANGELOG_MESSAGE.into(),
                        content,
                        sha: Some(file.sha),
                    })
                    .await
            }
        }
    }
}
