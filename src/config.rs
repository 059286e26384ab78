//! Run configuration resolved once at startup.
use derive_builder::Builder;
use secrecy::{ExposeSecret, SecretString};

use crate::{ReleaseBotError, Result, forge::config::RemoteConfig};

/// Everything a run needs from its environment.
#[derive(Debug, Clone, Builder)]
#[builder(
    setter(into),
    build_fn(private, name = "_build", validate = "Self::validate")
)]
pub struct ReleaseConfig {
    pub repo_owner: String,
    pub repo_name: String,
    /// Branch the changelog is committed to.
    pub base_branch: String,
    /// Branch releases are created from.
    pub target_branch: String,
    pub token: SecretString,
    /// Raw webhook payload that triggered the run.
    pub event: String,
}

impl ReleaseConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        let required = [
            ("repo owner", self.repo_owner.as_deref()),
            ("repo name", self.repo_name.as_deref()),
            ("base branch", self.base_branch.as_deref()),
            ("target branch", self.target_branch.as_deref()),
        ];

        for (name, value) in required {
            if value.is_none_or(|v| v.trim().is_empty()) {
                return Err(format!("missing {name}"));
            }
        }

        if self
            .token
            .as_ref()
            .is_none_or(|t| t.expose_secret().trim().is_empty())
        {
            return Err("missing github token".into());
        }

        if self.event.as_deref().is_none_or(|e| e.trim().is_empty()) {
            return Err("missing github event".into());
        }

        Ok(())
    }

    pub fn build(&self) -> Result<ReleaseConfig> {
        self._build()
            .map_err(|e| ReleaseBotError::invalid_config(e.to_string()))
    }
}

impl ReleaseConfig {
    pub fn builder() -> ReleaseConfigBuilder {
        ReleaseConfigBuilder::default()
    }

    /// Connection settings for the hosting platform.
    pub fn remote_config(&self, api_url: &str) -> RemoteConfig {
        RemoteConfig {
            api_url: api_url.to_string(),
            owner: self.repo_owner.clone(),
            repo: self.repo_name.clone(),
            token: self.token.clone(),
        }
    }
}
