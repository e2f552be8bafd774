use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry from `GET /repos/{owner}/{repo}/tags`
#[derive(Debug, Clone, Deserialize)]
pub struct TagInfo {
    pub name: String,
    pub commit: TagCommit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagCommit {
    pub sha: String,
}

/// A commit as listed by the GitHub commits API: full sha, full message
/// (subject and body newline-delimited) and the author date.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
    pub author_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitListItem {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitDetail {
    pub message: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitAuthor {
    pub date: DateTime<Utc>,
}

impl From<CommitListItem> for CommitRecord {
    fn from(item: CommitListItem) -> Self {
        Self {
            sha: item.sha,
            message: item.commit.message,
            author_date: item.commit.author.date,
        }
    }
}

/// Response from `POST /repos/{owner}/{repo}/releases`
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub html_url: String,
    pub tag_name: String,
}
