use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{GitHubError, Result};
use crate::types::{CommitListItem, CommitRecord, Release, TagInfo};

/// Base URL for github.com; Enterprise hosts use `https://<host>/api/v3`
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("shipit/", env!("CARGO_PKG_VERSION"));
const TAG_POLL_ATTEMPTS: u32 = 5;
const TAG_POLL_BACKOFF: Duration = Duration::from_secs(1);

/// GitHub REST client scoped to one token and one API host
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client against the given API base URL.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// The most recent tag of the repository.
    ///
    /// # Errors
    /// Returns `NoTagsFound` when the repository has no tags.
    pub async fn latest_tag(&self, owner: &str, repo: &str) -> Result<TagInfo> {
        let url = format!("{}/repos/{owner}/{repo}/tags", self.base_url);
        let mut tags: Vec<TagInfo> = self.get_json(&url, &[]).await?;

        if tags.is_empty() {
            return Err(GitHubError::NoTagsFound);
        }
        Ok(tags.remove(0))
    }

    /// Author date of a single commit
    pub async fn commit_date(&self, owner: &str, repo: &str, sha: &str) -> Result<DateTime<Utc>> {
        let url = format!("{}/repos/{owner}/{repo}/commits/{sha}", self.base_url);
        let item: CommitListItem = self.get_json(&url, &[]).await?;
        Ok(item.commit.author.date)
    }

    /// Commits authored since the given instant, newest first. The
    /// earliest element corresponds to the commit at `since` itself;
    /// when `since` is a tag's commit date, that is the boundary commit
    /// of the release.
    pub async fn commits_since(
        &self,
        owner: &str,
        repo: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<CommitRecord>> {
        let url = format!("{}/repos/{owner}/{repo}/commits", self.base_url);
        let items: Vec<CommitListItem> = self
            .get_json(&url, &[("since", since.to_rfc3339())])
            .await?;

        Ok(items.into_iter().map(CommitRecord::from).collect())
    }

    /// Polls the tag list until `tag_name` shows up, with a bounded
    /// number of attempts and a short backoff between them.
    ///
    /// # Errors
    /// Returns `TagNotFound` when the tag never appears.
    pub async fn wait_for_tag(&self, owner: &str, repo: &str, tag_name: &str) -> Result<()> {
        for attempt in 1..=TAG_POLL_ATTEMPTS {
            let url = format!("{}/repos/{owner}/{repo}/tags", self.base_url);
            let tags: Vec<TagInfo> = self.get_json(&url, &[]).await?;

            if tags.iter().any(|tag| tag.name == tag_name) {
                return Ok(());
            }
            if attempt < TAG_POLL_ATTEMPTS {
                tokio::time::sleep(TAG_POLL_BACKOFF).await;
            }
        }

        Err(GitHubError::TagNotFound(tag_name.to_string()))
    }

    /// Creates a release for an existing tag, with the rendered notes as
    /// its body. Release name and tag name are the same.
    pub async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        tag_name: &str,
        body: &str,
    ) -> Result<Release> {
        let url = format!("{}/repos/{owner}/{repo}/releases", self.base_url);
        let payload = json!({
            "tag_name": tag_name,
            "name": tag_name,
            "body": body,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("token {}", self.token))
            .json(&payload)
            .send()
            .await?;

        Self::deserialize_response(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("token {}", self.token))
            .query(query)
            .send()
            .await?;

        Self::deserialize_response(response).await
    }

    async fn deserialize_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(Into::into)
    }
}
