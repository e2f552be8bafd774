//! Release-notes extraction and changelog rendering.
//!
//! Raw commits fetched since the previous release tag are classified into
//! structured entries ([`classify`]), rendered into a dated markdown
//! section and merged into the existing changelog document ([`render`],
//! [`merge`]). Both steps are pure transformations over in-memory data;
//! fetching commits and persisting the document belong to the callers.

mod classifier;
mod error;
mod types;
mod utils;
mod writer;

pub use classifier::classify;
pub use error::ChangelogError;
pub use types::{Commit, RawCommit, Result};
pub use writer::{merge, render, CommitType, DOCUMENT_DESCRIPTION, DOCUMENT_TITLE};
