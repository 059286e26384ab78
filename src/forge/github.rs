//! Implements the Forge trait for Github
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use color_eyre::eyre::eyre;
use log::*;
use octocrab::{Octocrab, params::repos::Reference};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        request::{
            Commit, CreateCommentRequest, CreateReleaseRequest,
            CreateTagRequest, FileContent, ForgeCommit, GetFileContentRequest,
            MergePrRequest, PrLabelsRequest, Release, RemoveLabelRequest,
            WriteFileRequest,
        },
        traits::Forge,
    },
};

#[derive(Debug, Serialize)]
struct GithubTagger {
    pub name: String,
    pub email: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
struct GithubTag {
    pub tag: String,
    pub message: String,
    pub object: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tagger: GithubTagger,
}

#[derive(Debug, Deserialize)]
struct TagObject {
    pub tag: String,
    pub sha: String,
}

#[derive(Debug, Deserialize)]
struct PrCommitDetail {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct PrCommit {
    pub sha: String,
    pub commit: PrCommitDetail,
}

#[derive(Debug, Serialize)]
struct GithubFileWrite {
    pub message: String,
    pub content: String,
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileWriteResult {
    pub commit: Commit,
}

pub const TAG_OBJECT_TYPE: &str = "commit";

/// GitHub forge implementation using Octocrab for API interactions with
/// labels, pull requests, repository contents, tags and releases.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.api_url.trim_end_matches('/').to_string();
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }

    fn repo_endpoint(&self, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.base_uri, self.config.owner, self.config.repo, suffix
        )
    }

    async fn write_file(&self, req: WriteFileRequest) -> Result<Commit> {
        let endpoint = self.repo_endpoint(&format!("contents/{}", req.path));

        let body = serde_json::json!(GithubFileWrite {
            message: req.message,
            content: STANDARD.encode(req.content),
            branch: req.branch,
            sha: req.sha,
        });

        let result: FileWriteResult =
            self.instance.put(endpoint, Some(&body)).await?;

        info!("wrote {} in commit {}", req.path, result.commit.sha);

        Ok(result.commit)
    }
}

#[async_trait]
impl Forge for Github {
    fn repo_name(&self) -> String {
        self.config.repo.clone()
    }

    async fn add_labels(&self, req: PrLabelsRequest) -> Result<()> {
        self.instance
            .issues(&self.config.owner, &self.config.repo)
            .add_labels(req.pr_number, &req.labels)
            .await?;

        Ok(())
    }

    async fn remove_label(&self, req: RemoveLabelRequest) -> Result<()> {
        self.instance
            .issues(&self.config.owner, &self.config.repo)
            .remove_label(req.pr_number, &req.label)
            .await?;

        Ok(())
    }

    async fn list_release_tags(&self) -> Result<Vec<String>> {
        let page = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .list()
            .per_page(DEFAULT_PAGE_SIZE)
            .send()
            .await?;

        Ok(page.items.into_iter().map(|r| r.tag_name).collect())
    }

    async fn create_tag(&self, req: CreateTagRequest) -> Result<String> {
        let endpoint = self.repo_endpoint("git/tags");

        let body = serde_json::json!(GithubTag {
            tag: req.tag.clone(),
            message: req.message,
            object: req.sha.clone(),
            kind: TAG_OBJECT_TYPE.into(),
            tagger: GithubTagger {
                name: req.tagger.name,
                email: req.tagger.email,
                date: req.tagger.date.to_rfc3339(),
            },
        });

        info!("creating tag object {} for commit {}", req.tag, req.sha);

        let tag: TagObject = self.instance.post(endpoint, Some(&body)).await?;

        self.instance
            .repos(&self.config.owner, &self.config.repo)
            .create_ref(&Reference::Tag(tag.tag.clone()), tag.sha)
            .await?;

        Ok(tag.tag)
    }

    async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<Release> {
        let release = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .create(&req.tag)
            .name(&req.name)
            .target_commitish(&req.target_commitish)
            .draft(false)
            .prerelease(false)
            .send()
            .await?;

        Ok(Release {
            tag: release.tag_name,
            url: release.html_url.to_string(),
        })
    }

    async fn create_comment(&self, req: CreateCommentRequest) -> Result<()> {
        self.instance
            .issues(&self.config.owner, &self.config.repo)
            .create_comment(req.pr_number, req.body)
            .await?;

        Ok(())
    }

    async fn merge_pr(&self, req: MergePrRequest) -> Result<()> {
        self.instance
            .pulls(&self.config.owner, &self.config.repo)
            .merge(req.pr_number)
            .message(req.message)
            .send()
            .await?;

        Ok(())
    }

    async fn get_pr_commits(&self, pr_number: u64) -> Result<Vec<ForgeCommit>> {
        let mut commits: Vec<ForgeCommit> = vec![];
        let mut page = 1;

        loop {
            let endpoint = self.repo_endpoint(&format!(
                "pulls/{pr_number}/commits?per_page={DEFAULT_PAGE_SIZE}&page={page}"
            ));

            let batch: Vec<PrCommit> =
                self.instance.get(endpoint, None::<&()>).await?;

            let count = batch.len();

            commits.extend(batch.into_iter().map(|c| ForgeCommit {
                sha: c.sha,
                message: c.commit.message,
            }));

            if count < DEFAULT_PAGE_SIZE as usize {
                break;
            }

            page += 1;
        }

        Ok(commits)
    }

    async fn get_file_content(
        &self,
        req: GetFileContentRequest,
    ) -> Result<Option<FileContent>> {
        let path = req.path;

        let result = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .get_content()
            .path(&path)
            .r#ref(&req.branch)
            .send()
            .await;

        match result {
            Err(octocrab::Error::GitHub { source, .. }) => {
                if source.status_code == StatusCode::NOT_FOUND {
                    info!("no file found for path: {path}");
                    Ok(None)
                } else {
                    let msg = format!(
                        "error getting contents for path: {path}, status: {}",
                        source.status_code
                    );
                    debug!("{msg}");
                    Err(eyre!(msg).into())
                }
            }
            Err(err) => {
                let msg = format!(
                    "encountered error getting file contents for path: {path}: {err}"
                );
                debug!("{msg}");
                Err(eyre!(msg).into())
            }
            Ok(mut data) => {
                let items = data.take_items();

                if items.is_empty() {
                    info!("no file found for path: {path}");
                    return Ok(None);
                }

                let sha = items[0].sha.clone();

                if let Some(content) = items[0].decoded_content() {
                    Ok(Some(FileContent { sha, content }))
                } else {
                    Err(eyre!("failed to decode file content for path: {path}")
                        .into())
                }
            }
        }
    }

    async fn create_file(&self, req: WriteFileRequest) -> Result<Commit> {
        self.write_file(WriteFileRequest { sha: None, ..req }).await
    }

    async fn update_file(&self, req: WriteFileRequest) -> Result<Commit> {
        if req.sha.is_none() {
            return Err(eyre!(
                "cannot update {} without the sha of the current file",
                req.path
            )
            .into());
        }

        self.write_file(req).await
    }
}
