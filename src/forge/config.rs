//! Configuration for the GitHub connection.
use secrecy::SecretString;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default page size for paginated queries
pub const DEFAULT_PAGE_SIZE: u8 = 100;
/// Label marking a pull request whose release is awaiting `/merge`.
pub const PENDING_LABEL: &str = "createrelease:pending";
/// Label applied once the release workflow has merged the pull request.
pub const MERGED_LABEL: &str = "createrelease:merged";

/// Remote repository connection configuration for authenticating and
/// interacting with the hosting platform.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// REST API base URL (e.g., "https://api.github.com").
    pub api_url: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
        }
    }
}
