use crate::error::ChangelogError;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// A commit as returned by the commit-listing host, before classification.
///
/// `message` is the full newline-delimited message: subject line first,
/// body lines after.
#[derive(Debug, Clone)]
pub struct RawCommit {
    pub sha: String,
    pub message: String,
}

impl RawCommit {
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
        }
    }
}

/// A structured commit entry whose subject matched the commit pattern.
///
/// Instances only exist for conforming commits; non-conforming raw
/// commits are dropped during classification rather than carried with
/// empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash, unique within a release run
    pub hash: String,
    /// Subject line with the type/category prefix stripped
    pub subject: String,
    /// Message lines after the first, rejoined with newlines; may be empty
    pub body: String,
    /// Lowercased type token, e.g. `feat` or `fix`
    pub commit_type: String,
    /// Optional scope from parentheses, casing preserved; an empty
    /// capture is the same as no capture
    pub category: Option<String>,
}
