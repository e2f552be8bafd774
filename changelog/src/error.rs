use thiserror::Error;

/// Errors that can occur while extracting release notes
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("No commits found since last tag.")]
    NoCommitsSinceLastTag,

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoCommitsSinceLastTag => {
                "No commits found since last tag. Nothing to release.".to_string()
            }
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
