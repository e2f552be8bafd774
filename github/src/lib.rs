//! Minimal GitHub REST v3 client for the release pipeline.
//!
//! Covers exactly the calls a release needs: tag listing, commit lookup,
//! commits-since listing and release creation. The base URL is
//! injectable so GitHub Enterprise hosts work the same as github.com.

mod client;
mod error;
mod types;

pub use client::{GitHubClient, DEFAULT_API_URL};
pub use error::{GitHubError, Result};
pub use types::{CommitRecord, Release, TagCommit, TagInfo};
