//! Changelog configuration.
use clap::ValueEnum;

/// Default changelog location relative to the repository root.
pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGELOG.md";
/// Commit message used when the changelog does not exist yet.
pub const CREATE_CHANGELOG_MESSAGE: &str = "chore: create CHANGELOG.md file";
/// Commit message used when an existing changelog is rewritten.
pub const UPDATE_CHANGELOG_MESSAGE: &str = "chore: update CHANGELOG.md file";

/// How a newly rendered section is combined with an existing changelog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ChangelogMode {
    /// Overwrite the file with the new section.
    #[default]
    Replace,
    /// Place the new section above the existing content.
    Prepend,
}

#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    pub path: String,
    pub mode: ChangelogMode,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_CHANGELOG_PATH.into(),
            mode: ChangelogMode::default(),
        }
    }
}
