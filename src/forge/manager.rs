//! Manager that wraps forge implementations
use log::*;

use crate::{
    ReleaseBotError, Result,
    forge::{
        request::{
            Commit, CreateCommentRequest, CreateReleaseRequest,
            CreateTagRequest, FileContent, ForgeCommit, GetFileContentRequest,
            MergePrRequest, PrLabelsRequest, Release, RemoveLabelRequest,
            WriteFileRequest,
        },
        traits::Forge,
    },
};

/// Thin layer over a [`Forge`] that logs every call and prefixes failures
/// with the name of the operation that failed.
pub struct ForgeManager {
    forge: Box<dyn Forge>,
}

fn op_err(
    operation: &'static str,
) -> impl FnOnce(ReleaseBotError) -> ReleaseBotError {
    move |err| {
        debug!("{operation} failed: {err}");
        ReleaseBotError::collaborator(operation, err)
    }
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>) -> Self {
        Self { forge }
    }

    pub fn repo_name(&self) -> String {
        self.forge.repo_name()
    }

    pub async fn add_labels(&self, req: PrLabelsRequest) -> Result<()> {
        debug!("adding labels {:?} to #{}", req.labels, req.pr_number);
        self.forge
            .add_labels(req)
            .await
            .map_err(op_err("add labels"))
    }

    pub async fn remove_label(&self, req: RemoveLabelRequest) -> Result<()> {
        debug!("removing label {} from #{}", req.label, req.pr_number);
        self.forge
            .remove_label(req)
            .await
            .map_err(op_err("remove label"))
    }

    pub async fn list_release_tags(&self) -> Result<Vec<String>> {
        debug!("listing release tags");
        self.forge
            .list_release_tags()
            .await
            .map_err(op_err("list releases"))
    }

    pub async fn create_tag(&self, req: CreateTagRequest) -> Result<String> {
        debug!("creating tag {} at {}", req.tag, req.sha);
        self.forge
            .create_tag(req)
            .await
            .map_err(op_err("create tag"))
    }

    pub async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<Release> {
        debug!("creating release {} for tag {}", req.name, req.tag);
        self.forge
            .create_release(req)
            .await
            .map_err(op_err("create release"))
    }

    pub async fn create_comment(&self, req: CreateCommentRequest) -> Result<()> {
        debug!("commenting on #{}", req.pr_number);
        self.forge
            .create_comment(req)
            .await
            .map_err(op_err("create comment"))
    }

    pub async fn merge_pr(&self, req: MergePrRequest) -> Result<()> {
        debug!("merging pull request #{}", req.pr_number);
        self.forge
            .merge_pr(req)
            .await
            .map_err(op_err("merge pull request"))
    }

    pub async fn get_pr_commits(
        &self,
        pr_number: u64,
    ) -> Result<Vec<ForgeCommit>> {
        debug!("listing commits for pull request #{pr_number}");
        self.forge
            .get_pr_commits(pr_number)
            .await
            .map_err(op_err("list pull request commits"))
    }

    pub async fn get_file_content(
        &self,
        req: GetFileContentRequest,
    ) -> Result<Option<FileContent>> {
        debug!("reading {} on branch {}", req.path, req.branch);
        self.forge
            .get_file_content(req)
            .await
            .map_err(op_err("get file content"))
    }

    pub async fn create_file(&self, req: WriteFileRequest) -> Result<Commit> {
        debug!("creating {} on branch {}", req.path, req.branch);
        self.forge
            .create_file(req)
            .await
            .map_err(op_err("create file"))
    }

    pub async fn update_file(&self, req: WriteFileRequest) -> Result<Commit> {
        debug!("updating {} on branch {}", req.path, req.branch);
        self.forge
            .update_file(req)
            .await
            .map_err(op_err("update file"))
    }
}
