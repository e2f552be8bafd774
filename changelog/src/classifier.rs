use crate::error::ChangelogError;
use crate::types::{Commit, RawCommit, Result};
use crate::utils::COMMIT_SUBJECT_PATTERN;

/// Classifies raw commits into structured entries.
///
/// The input is ordered newest-first and its final element is the commit
/// the previous release tag points at; that boundary entry is removed
/// before any parsing happens. Commits whose subject line does not match
/// `type(category): description` are dropped silently; the survivors keep
/// their relative order.
///
/// # Errors
///
/// Returns [`ChangelogError::NoCommitsSinceLastTag`] when nothing remains
/// once the boundary commit is excluded.
pub fn classify(mut raw: Vec<RawCommit>) -> Result<Vec<Commit>> {
    // The host lists the boundary commit last; it belongs to the
    // previous release.
    raw.pop();

    if raw.is_empty() {
        return Err(ChangelogError::NoCommitsSinceLastTag);
    }

    Ok(raw.iter().filter_map(parse).collect())
}

fn parse(raw: &RawCommit) -> Option<Commit> {
    let mut lines = raw.message.split('\n');
    let subject_line = lines.next().unwrap_or_default();
    let body = lines.collect::<Vec<_>>().join("\n");

    let captures = COMMIT_SUBJECT_PATTERN.captures(subject_line)?;

    let commit_type = captures.get(1)?.as_str().to_lowercase();
    let category = captures
        .get(2)
        .map(|m| m.as_str().to_string())
        .filter(|category| !category.is_empty());
    let subject = captures.get(3)?.as_str().to_string();

    Some(Commit {
        hash: raw.sha.clone(),
        subject,
        body,
        commit_type,
        category,
    })
}
