use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `type(category): description` subject lines. The category
/// group is optional and may capture empty; type and description must be
/// non-empty for the line to match.
pub static COMMIT_SUBJECT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\w+)(?:\(([\w$.\-* ]*)\))?: (.+)$")
        .expect("Failed to compile commit subject regex")
});
