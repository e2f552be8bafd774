use std::process::Command;

use git2::{IndexAddOption, Repository as GitRepository, StatusOptions};

use crate::error::{GitError, Result};

/// Local repository operations the release pipeline depends on.
pub trait Repository {
    fn open() -> Result<Self>
    where
        Self: Sized;
    /// Returns true when the working tree has no pending changes,
    /// untracked files included.
    fn validate_status(&self) -> Result<bool>;
    fn current_branch(&self) -> Result<String>;
    /// Stages every pending change and commits it with the given message.
    fn commit_all(&self, message: &str) -> Result<()>;
    /// Creates a lightweight tag pointing at HEAD.
    fn tag(&self, name: &str) -> Result<()>;
    fn push(&self, branch: &str) -> Result<()>;
    fn push_tags(&self) -> Result<()>;
}

pub struct RealGitRepository {
    repo: GitRepository,
}

impl RealGitRepository {
    fn run_git(args: &[&str], action: &str) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .output()
            .map_err(|e| GitError::IoError(e).with_context(format!("Failed to {action}")))?;

        if !output.status.success() {
            return Err(GitError::CommandError(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }

        Ok(())
    }
}

impl Repository for RealGitRepository {
    fn open() -> Result<Self> {
        let repo = GitRepository::discover(".").map_err(|e| {
            GitError::RepositoryError(format!("Failed to discover git repository: {}", e))
        })?;
        Ok(Self { repo })
    }

    fn validate_status(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(true);

        let statuses = self.repo.statuses(Some(&mut options)).map_err(|e| {
            GitError::RepositoryError(format!("Failed to get repository status: {}", e))
        })?;

        Ok(statuses.is_empty())
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(GitError::RepositoryError(
                "HEAD is not a branch".to_string(),
            ));
        }

        let branch_name = head
            .shorthand()
            .ok_or_else(|| GitError::RepositoryError("Invalid branch name".to_string()))?
            .to_string();

        Ok(branch_name)
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        let repo = &self.repo;

        let mut index = repo
            .index()
            .map_err(|e| GitError::RepositoryError(format!("Failed to open index: {}", e)))?;
        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .map_err(|e| GitError::RepositoryError(format!("Failed to stage changes: {}", e)))?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let signature = repo.signature().map_err(|e| {
            GitError::RepositoryError(format!(
                "Failed to read author from git config (set user.name and user.email): {}",
                e
            ))
        })?;

        let parent = repo
            .head()?
            .peel_to_commit()
            .map_err(|e| GitError::RepositoryError(format!("Failed to resolve HEAD: {}", e)))?;

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )
        .map_err(|e| GitError::RepositoryError(format!("Failed to create commit: {}", e)))?;

        Ok(())
    }

    fn tag(&self, name: &str) -> Result<()> {
        let head = self
            .repo
            .head()?
            .peel(git2::ObjectType::Commit)
            .map_err(|e| GitError::RepositoryError(format!("Failed to resolve HEAD: {}", e)))?;

        self.repo
            .tag_lightweight(name, &head, false)
            .map_err(|e| {
                GitError::RepositoryError(format!("Failed to create tag '{}': {}", name, e))
            })?;

        Ok(())
    }

    fn push(&self, branch: &str) -> Result<()> {
        // Network operations go through the git binary, which already
        // knows the user's credentials and remote configuration.
        Self::run_git(
            &["push", "origin", branch],
            &format!("push branch '{branch}' to origin"),
        )
    }

    fn push_tags(&self) -> Result<()> {
        Self::run_git(&["push", "--tags"], "push tags to origin")
    }
}
