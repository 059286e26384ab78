//! Interface to the hosting platform (GitHub).
//!
//! Provides token-based authentication, label, comment, pull request,
//! repository content, tag and release operations through a common trait.

/// Configuration and authentication for the hosting platform.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Logging and error-context wrapper around forge implementations.
pub mod manager;

/// Request and response types for forge operations.
pub mod request;

/// Common trait for forge platform abstraction.
pub mod traits;
