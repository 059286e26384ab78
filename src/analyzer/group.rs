use std::fmt::Display;

/// Changelog categories derived from conventional commit type prefixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Group {
    Feat,
    Fix,
    Perf,
    Refactor,
    Docs,
    Test,
    Chore,
    Style,
    Ci,
    Build,
    #[default]
    Others,
}

/// Categories in matching priority order. The first one whose name appears
/// anywhere in a commit's type token wins, so `ci` before `fix` would
/// change how `ci-fix: ...` is grouped.
pub const MATCH_ORDER: [Group; 10] = [
    Group::Feat,
    Group::Fix,
    Group::Perf,
    Group::Refactor,
    Group::Docs,
    Group::Test,
    Group::Chore,
    Group::Style,
    Group::Ci,
    Group::Build,
];

impl Group {
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Feat => "feat",
            Group::Fix => "fix",
            Group::Perf => "perf",
            Group::Refactor => "refactor",
            Group::Docs => "docs",
            Group::Test => "test",
            Group::Chore => "chore",
            Group::Style => "style",
            Group::Ci => "ci",
            Group::Build => "build",
            Group::Others => "others",
        }
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Default)]
/// Determines which changelog category a commit message belongs to.
pub struct GroupParser {}

impl GroupParser {
    pub fn new() -> Self {
        Self {}
    }

    /// Classify a commit message by the text preceding its first `:`.
    ///
    /// Matching is by substring rather than equality so scoped types like
    /// `fix(parser)` land in `fix`. Messages with no recognised type fall
    /// into [`Group::Others`].
    pub fn parse(&self, message: &str) -> Group {
        let subject = message.lines().next().unwrap_or_default();

        let type_token = subject
            .split_once(':')
            .map(|(token, _)| token)
            .unwrap_or(subject);

        MATCH_ORDER
            .into_iter()
            .find(|group| type_token.contains(group.as_str()))
            .unwrap_or_default()
    }
}
