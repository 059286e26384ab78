use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Commit listed on a pull request.
pub struct ForgeCommit {
    pub sha: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Existing file on a branch along with the blob sha needed to update it.
pub struct FileContent {
    pub sha: String,
    pub content: String,
}

#[derive(Debug, Clone)]
/// Request to read a file from a branch.
pub struct GetFileContentRequest {
    pub branch: String,
    pub path: String,
}

#[derive(Debug, Clone)]
/// Request to create a file, or update it when `sha` carries the blob sha
/// of the version being replaced.
pub struct WriteFileRequest {
    pub branch: String,
    pub path: String,
    pub message: String,
    pub content: String,
    pub sha: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
/// Commit produced by a file write.
pub struct Commit {
    pub sha: String,
}

#[derive(Debug, Clone)]
/// Identity recorded on annotated tags.
pub struct Tagger {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
/// Request to create an annotated tag object pointing at a commit.
pub struct CreateTagRequest {
    pub tag: String,
    pub message: String,
    pub sha: String,
    pub tagger: Tagger,
}

#[derive(Debug, Clone)]
/// Request to publish a release for an existing tag.
pub struct CreateReleaseRequest {
    pub tag: String,
    pub name: String,
    pub target_commitish: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Published release.
pub struct Release {
    pub tag: String,
    pub url: String,
}

#[derive(Debug, Clone)]
/// Request to merge a pull request.
pub struct MergePrRequest {
    pub pr_number: u64,
    pub message: String,
}

#[derive(Debug, Clone)]
/// Request to add labels to an issue or pull request.
pub struct PrLabelsRequest {
    pub pr_number: u64,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone)]
/// Request to remove a single label from an issue or pull request.
pub struct RemoveLabelRequest {
    pub pr_number: u64,
    pub label: String,
}

#[derive(Debug, Clone)]
/// Request to comment on an issue or pull request.
pub struct CreateCommentRequest {
    pub pr_number: u64,
    pub body: String,
}
