use thiserror::Error;

/// Errors from talking to the GitHub API
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("GitHub API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("Repository has no tags")]
    NoTagsFound,

    #[error("Tag '{0}' did not appear on GitHub")]
    TagNotFound(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<GitHubError>),
}

impl GitHubError {
    /// Add context to an error
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::RequestError(e) => format!("GitHub request failed: {e}"),
            Self::ApiStatus { status, .. } if *status == 401 => {
                "GitHub rejected the token (401). Check GITHUB_API_TOKEN.".to_string()
            }
            Self::ApiStatus { status, body } => {
                format!("GitHub API returned status {status}: {body}")
            }
            Self::NoTagsFound => {
                "Repository has no tags yet. Create an initial release tag first.".to_string()
            }
            Self::TagNotFound(tag) => {
                format!("Tag '{tag}' did not appear on GitHub after the push")
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;
