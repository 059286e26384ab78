//! Traits related to the remote hosting platform
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    Result,
    forge::request::{
        Commit, CreateCommentRequest, CreateReleaseRequest, CreateTagRequest,
        FileContent, ForgeCommit, GetFileContentRequest, MergePrRequest,
        PrLabelsRequest, Release, RemoveLabelRequest, WriteFileRequest,
    },
};

/// Operations the release workflow needs from the hosting platform.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    fn repo_name(&self) -> String;
    async fn add_labels(&self, req: PrLabelsRequest) -> Result<()>;
    async fn remove_label(&self, req: RemoveLabelRequest) -> Result<()>;
    /// Tag names of existing releases, newest first.
    async fn list_release_tags(&self) -> Result<Vec<String>>;
    /// Creates an annotated tag object and the ref pointing at it.
    async fn create_tag(&self, req: CreateTagRequest) -> Result<String>;
    async fn create_release(&self, req: CreateReleaseRequest)
    -> Result<Release>;
    async fn create_comment(&self, req: CreateCommentRequest) -> Result<()>;
    async fn merge_pr(&self, req: MergePrRequest) -> Result<()>;
    async fn get_pr_commits(&self, pr_number: u64) -> Result<Vec<ForgeCommit>>;
    /// Returns `None` when the file does not exist on the branch.
    async fn get_file_content(
        &self,
        req: GetFileContentRequest,
    ) -> Result<Option<FileContent>>;
    async fn create_file(&self, req: WriteFileRequest) -> Result<Commit>;
    async fn update_file(&self, req: WriteFileRequest) -> Result<Commit>;
}
