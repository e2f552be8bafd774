use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Changelog error: {0}")]
    Changelog(#[from] changelog::ChangelogError),

    #[error("Git error: {0}")]
    Git(#[from] git::GitError),

    #[error("GitHub error: {0}")]
    GitHub(#[from] github::GitHubError),

    #[error("Package not found at path: {0}")]
    PackageNotFound(PathBuf),

    #[error("Failed to parse package.json: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Semver parse error: {0}")]
    SemverError(#[from] semver::Error),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Changelog(err) => err.user_message(),
            Self::Git(err) => err.user_message(),
            Self::GitHub(err) => err.user_message(),
            Self::PackageNotFound(path) => format!("Package not found at: {}", path.display()),
            Self::JsonParseError(err) => format!("Failed to parse JSON: {err}"),
            Self::RegexError(err) => format!("Invalid regular expression: {err}"),
            Self::SemverError(err) => format!("Invalid semantic version: {err}"),
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::HttpError(err) => format!("HTTP request failed: {err}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
