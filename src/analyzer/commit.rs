use crate::{
    analyzer::group::{Group, GroupParser},
    forge::request::ForgeCommit,
};

/// Commit with the changelog category it was classified into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub sha: String,
    pub group: Group,
    /// Full commit message, body included.
    pub message: String,
}

impl Commit {
    pub fn parse_forge_commit(
        group_parser: &GroupParser,
        forge_commit: &ForgeCommit,
    ) -> Self {
        Self {
            sha: forge_commit.sha.clone(),
            group: group_parser.parse(&forge_commit.message),
            message: forge_commit.message.clone(),
        }
    }
}

/// Commits grouped by category.
///
/// Both the categories and the commits within each category keep the order
/// in which they were first seen, which keeps rendered output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedCommits {
    groups: Vec<(Group, Vec<Commit>)>,
}

impl CategorizedCommits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify each forge commit and group it.
    pub fn from_forge_commits(commits: &[ForgeCommit]) -> Self {
        let parser = GroupParser::new();
        let mut categorized = Self::new();

        for forge_commit in commits {
            categorized.push(Commit::parse_forge_commit(&parser, forge_commit));
        }

        categorized
    }

    pub fn push(&mut self, commit: Commit) {
        match self.groups.iter_mut().find(|(g, _)| *g == commit.group) {
            Some((_, commits)) => commits.push(commit),
            None => self.groups.push((commit.group, vec![commit])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Group, &[Commit])> {
        self.groups.iter().map(|(g, c)| (*g, c.as_slice()))
    }

    pub fn groups(&self) -> Vec<Group> {
        self.groups.iter().map(|(g, _)| *g).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forge_commit(sha: &str, message: &str) -> ForgeCommit {
        ForgeCommit {
            sha: sha.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_parse_forge_commit_keeps_full_message() {
        let parser = GroupParser::new();
        let commit = Commit::parse_forge_commit(
            &parser,
            &forge_commit("abc123", "feat(auth): add login\n\nwith oauth"),
        );

        assert_eq!(commit.sha, "abc123");
        assert_eq!(commit.group, Group::Feat);
        assert_eq!(commit.message, "feat(auth): add login\n\nwith oauth");
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let categorized = CategorizedCommits::from_forge_commits(&[
            forge_commit("1", "fix: typo"),
            forge_commit("2", "random message"),
            forge_commit("3", "feat: add login"),
            forge_commit("4", "fix(parser): off by one"),
        ]);

        assert_eq!(
            categorized.groups(),
            vec![Group::Fix, Group::Others, Group::Feat]
        );

        let (group, fixes) = categorized.iter().next().unwrap();
        assert_eq!(group, Group::Fix);
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].sha, "1");
        assert_eq!(fixes[1].sha, "4");
    }

    #[test]
    fn test_every_commit_is_classified() {
        let commits = vec![
            forge_commit("1", "feat: a"),
            forge_commit("2", "whatever"),
            forge_commit("3", ""),
        ];
        let categorized = CategorizedCommits::from_forge_commits(&commits);
        let total: usize = categorized.iter().map(|(_, c)| c.len()).sum();
        assert_eq!(total, commits.len());
    }

    #[test]
    fn test_empty_input() {
        let categorized = CategorizedCommits::from_forge_commits(&[]);
        assert!(categorized.is_empty());
        assert_eq!(categorized.iter().count(), 0);
    }
}
