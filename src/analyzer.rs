//! Commit classification, changelog generation and version numbering.

/// Changelog rendering and publication to the repository.
pub mod changelog;
/// Classified commits and their first-seen grouping.
pub mod commit;
/// Changelog location and update mode.
pub mod config;
/// Conventional commit categories.
pub mod group;
/// Next-version computation and tag creation.
pub mod version;
