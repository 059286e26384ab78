//! Release version numbering.
use chrono::Utc;
use log::*;
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

use crate::{
    ReleaseBotError, Result,
    forge::{
        manager::ForgeManager,
        request::{CreateTagRequest, Tagger},
    },
};

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v(?<major>\d+)\.(?<minor>\d+)\.(?<patch>\d+)$").unwrap()
});

/// Version used when the repository has no releases yet.
pub const FIRST_VERSION: Version = Version::new(0, 0, 1);

/// Format a version the way release tags are named.
pub fn tag_name(version: &Version) -> String {
    format!("v{}.{}.{}", version.major, version.minor, version.patch)
}

/// Parse a `vMAJOR.MINOR.PATCH` release tag.
pub fn parse_tag(tag: &str) -> Result<Version> {
    let caps = TAG_REGEX.captures(tag).ok_or_else(|| {
        ReleaseBotError::tag_parse(
            tag,
            "expected v<major>.<minor>.<patch> with integer components",
        )
    })?;

    let component = |name: &str| -> Result<u64> {
        caps[name].parse::<u64>().map_err(|e| {
            ReleaseBotError::tag_parse(tag, format!("{name} component: {e}"))
        })
    };

    Ok(Version::new(
        component("major")?,
        component("minor")?,
        component("patch")?,
    ))
}

/// Compute the version that follows `current`.
///
/// Patch digits roll into minor at 9, and a resulting `x.9.9` rolls into
/// the next major. The major rollover is checked after the patch rollover,
/// so `v1.9.9` becomes `v1.10.0` rather than `v2.0.0`. A component that
/// cannot grow any further is a tag error.
pub fn increment(current: &Version) -> Result<Version> {
    let overflow =
        || ReleaseBotError::tag_parse(tag_name(current), "component overflow");

    let mut major = current.major;
    let mut minor = current.minor;
    let mut patch = current.patch;

    if patch == 9 {
        minor = minor.checked_add(1).ok_or_else(overflow)?;
        patch = 0;
    } else {
        patch = patch.checked_add(1).ok_or_else(overflow)?;
    }

    if minor == 9 && patch == 9 {
        major = major.checked_add(1).ok_or_else(overflow)?;
        minor = 0;
        patch = 0;
    }

    Ok(Version::new(major, minor, patch))
}

/// Next release tag given existing release tags ordered newest first.
pub fn next_tag(existing_tags: &[String]) -> Result<String> {
    let Some(latest) = existing_tags.first() else {
        let first = tag_name(&FIRST_VERSION);
        info!("no previous releases found: starting at {first}");
        return Ok(first);
    };

    let current = parse_tag(latest)?;
    let next = increment(&current)?;

    info!("latest release tag {latest}: next tag {}", tag_name(&next));

    Ok(tag_name(&next))
}

/// Computes and creates the next release tag.
pub struct VersionIncrementer<'a> {
    forge: &'a ForgeManager,
    tagger_name: &'a str,
    tagger_email: &'a str,
}

impl<'a> VersionIncrementer<'a> {
    pub fn new(
        forge: &'a ForgeManager,
        tagger_name: &'a str,
        tagger_email: &'a str,
    ) -> Self {
        Self {
            forge,
            tagger_name,
            tagger_email,
        }
    }

    /// Create the tag following the newest release, pointing at `sha`.
    pub async fn tag_next_release(&self, sha: &str) -> Result<String> {
        let existing = self.forge.list_release_tags().await?;
        let tag = next_tag(&existing)?;

        self.forge
            .create_tag(CreateTagRequest {
                tag: tag.clone(),
                message: tag,
                sha: sha.to_string(),
                tagger: Tagger {
                    name: self.tagger_name.to_string(),
                    email: self.tagger_email.to_string(),
                    date: Utc::now(),
                },
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::traits::MockForge;

    fn next(tag: &str) -> String {
        next_tag(&[tag.to_string()]).unwrap()
    }

    #[test]
    fn test_first_release() {
        assert_eq!(next_tag(&[]).unwrap(), "v0.0.1");
    }

    #[test]
    fn test_patch_increment() {
        assert_eq!(next("v1.2.3"), "v1.2.4");
        assert_eq!(next("v0.0.1"), "v0.0.2");
        assert_eq!(next("v3.4.10"), "v3.4.11");
    }

    #[test]
    fn test_patch_rolls_into_minor() {
        assert_eq!(next("v1.2.9"), "v1.3.0");
    }

    #[test]
    fn test_minor_rolls_into_major() {
        assert_eq!(next("v1.9.8"), "v2.0.0");
    }

    #[test]
    fn test_nine_nine_rolls_into_minor_not_major() {
        assert_eq!(next("v1.9.9"), "v1.10.0");
        assert_eq!(next("v0.8.9"), "v0.9.0");
    }

    #[test]
    fn test_only_newest_tag_is_considered() {
        let tags = vec!["v2.0.0".to_string(), "not-a-version".to_string()];
        assert_eq!(next_tag(&tags).unwrap(), "v2.0.1");
    }

    #[test]
    fn test_increment_never_decreases() {
        let mut version = Version::new(0, 0, 0);
        for _ in 0..500 {
            let following = increment(&version).unwrap();
            assert!(following > version, "{following} <= {version}");
            version = following;
        }
    }

    #[test]
    fn test_exhausted_component_is_tag_error() {
        let max = u64::MAX;
        for tag in [
            format!("v1.2.{max}"),
            format!("v1.{max}.9"),
            format!("v{max}.9.8"),
        ] {
            let err = next_tag(&[tag.clone()]).unwrap_err();
            assert!(
                matches!(
                    &err,
                    ReleaseBotError::TagParseError { reason, .. }
                        if reason == "component overflow"
                ),
                "expected overflow error for {tag}, got {err}"
            );
        }
    }

    #[test]
    fn test_invalid_tags_are_rejected() {
        for tag in [
            "1.2.3",
            "v1.2",
            "v1.2.3.4",
            "v1.2.x",
            "v1.2.3-rc.1",
            "release-1",
            "",
            "v99999999999999999999.0.0",
        ] {
            let err = next_tag(&[tag.to_string()]).unwrap_err();
            assert!(
                matches!(err, ReleaseBotError::TagParseError { .. }),
                "expected tag parse error for {tag:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_tag_next_release_points_tag_at_sha() {
        let mut mock = MockForge::new();
        mock.expect_list_release_tags()
            .times(1)
            .returning(|| Ok(vec!["v1.2.3".into(), "v1.2.2".into()]));
        mock.expect_create_tag()
            .times(1)
            .withf(|req| {
                req.tag == "v1.2.4"
                    && req.message == "v1.2.4"
                    && req.sha == "changelog-sha"
                    && req.tagger.name == "Bot"
                    && req.tagger.email == "bot@example.com"
            })
            .returning(|req| Ok(req.tag));

        let forge = ForgeManager::new(Box::new(mock));
        let incrementer = VersionIncrementer::new(&forge, "Bot", "bot@example.com");

        let tag = incrementer.tag_next_release("changelog-sha").await.unwrap();
        assert_eq!(tag, "v1.2.4");
    }

    #[tokio::test]
    async fn test_tag_next_release_does_not_tag_on_parse_error() {
        let mut mock = MockForge::new();
        mock.expect_list_release_tags()
            .returning(|| Ok(vec!["latest".into()]));
        mock.expect_create_tag().times(0);

        let forge = ForgeManager::new(Box::new(mock));
        let incrementer = VersionIncrementer::new(&forge, "Bot", "bot@example.com");

        let err = incrementer.tag_next_release("sha").await.unwrap_err();
        assert!(matches!(err, ReleaseBotError::TagParseError { .. }));
    }
}
