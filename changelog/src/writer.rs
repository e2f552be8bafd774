use std::collections::BTreeMap;

use chrono::Local;

use crate::types::Commit;

/// First line of every merged changelog document
pub const DOCUMENT_TITLE: &str = "## Change Log";

/// Second line of every merged changelog document
pub const DOCUMENT_DESCRIPTION: &str =
    "All notable changes to this project will be documented in this file.";

/// The closed set of commit types with a section of their own.
///
/// Variants are declared in ascending token order; the derived `Ord` is
/// the section ordering policy (sort by token, not by display label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CommitType {
    Break,
    Chore,
    Docs,
    Feat,
    Fix,
    Other,
    Refactor,
    Style,
    Test,
}

impl CommitType {
    /// Maps a lowercased type token to its section; tokens outside the
    /// vocabulary land in [`CommitType::Other`].
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "break" => Self::Break,
            "chore" => Self::Chore,
            "docs" => Self::Docs,
            "feat" => Self::Feat,
            "fix" => Self::Fix,
            "refactor" => Self::Refactor,
            "style" => Self::Style,
            "test" => Self::Test,
            _ => Self::Other,
        }
    }

    /// Human-readable section heading
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Break => "Breaking Changes",
            Self::Chore => "Chores",
            Self::Docs => "Documentation Changes",
            Self::Feat => "New Features",
            Self::Fix => "Bug Fixes",
            Self::Other => "Other Changes",
            Self::Refactor => "Refactors",
            Self::Style => "Code Style Changes",
            Self::Test => "Tests",
        }
    }
}

/// Renders a dated changelog section for one release.
///
/// Commits are grouped by type, then by category in first-insertion
/// order. Category groups with a single commit render as one inline
/// bullet; larger groups render a bold category line followed by
/// indented bullets. When `repo_url` is given, short hashes become links
/// to `<repo_url>/commit/<hash>`.
#[must_use]
pub fn render(version: &str, commits: &[Commit], repo_url: Option<&str>) -> String {
    let date = Local::now().format("%Y-%-m-%-d");
    let mut lines: Vec<String> = Vec::with_capacity(commits.len() + 8);

    lines.push(format!("### {version} ({date})"));
    lines.push(String::new());

    for (commit_type, categories) in group_commits(commits) {
        lines.push(format!("#### {}", commit_type.label()));
        lines.push(String::new());

        for (category, entries) in categories {
            let category_heading = format!("* **{category}:**");

            if entries.len() > 1 {
                lines.push(category_heading);
                for commit in entries {
                    lines.push(format!("  * {}", bullet_text(commit, repo_url)));
                }
            } else {
                lines.push(format!(
                    "{category_heading} {}",
                    bullet_text(entries[0], repo_url)
                ));
            }
        }

        lines.push(String::new());
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Merges a freshly rendered section into the previous changelog text.
///
/// The previous document loses its two preamble lines and keeps
/// everything else, appended after the new section under a fresh
/// preamble. `None` (or a document shorter than the preamble) is treated
/// as no prior history.
#[must_use]
pub fn merge(old_document: Option<&str>, section: &str) -> String {
    let mut lines: Vec<&str> = vec![DOCUMENT_TITLE, DOCUMENT_DESCRIPTION, ""];
    lines.extend(section.split('\n'));

    if let Some(old_document) = old_document {
        lines.extend(old_document.split('\n').skip(2));
    }

    lines.join("\n")
}

type CategoryGroups<'a> = Vec<(String, Vec<&'a Commit>)>;

fn group_commits(commits: &[Commit]) -> BTreeMap<CommitType, CategoryGroups<'_>> {
    let mut groups: BTreeMap<CommitType, CategoryGroups> = BTreeMap::new();

    for commit in commits {
        let commit_type = CommitType::from_token(&commit.commit_type);
        let category = commit.category.clone().unwrap_or_default();

        let categories = groups.entry(commit_type).or_default();
        match categories.iter_mut().find(|(name, _)| *name == category) {
            Some((_, entries)) => entries.push(commit),
            None => categories.push((category, vec![commit])),
        }
    }

    groups
}

fn bullet_text(commit: &Commit, repo_url: Option<&str>) -> String {
    let short_hash = &commit.hash[..commit.hash.len().min(8)];

    match repo_url {
        Some(repo_url) => format!(
            "{} ([{short_hash}]({repo_url}/commit/{}))",
            commit.subject, commit.hash
        ),
        None => format!("{} ({short_hash})", commit.subject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(commit_type: &str, category: Option<&str>, subject: &str, hash: &str) -> Commit {
        Commit {
            hash: hash.to_string(),
            subject: subject.to_string(),
            body: String::new(),
            commit_type: commit_type.to_string(),
            category: category.map(String::from),
        }
    }

    fn today() -> String {
        Local::now().format("%Y-%-m-%-d").to_string()
    }

    #[test]
    fn heading_carries_version_and_local_date() {
        let section = render("v1.2.0", &[], None);
        assert!(section.starts_with(&format!("### v1.2.0 ({})\n", today())));
    }

    #[test]
    fn single_commit_category_renders_inline() {
        let commits = vec![commit("fix", Some("core"), "handle null", "abcdef1234")];
        let section = render("v1.2.0", &commits, None);

        assert!(section.contains("#### Bug Fixes"));
        assert!(section.contains("* **core:** handle null (abcdef12)"));
    }

    #[test]
    fn multi_commit_category_renders_nested_bullets() {
        let commits = vec![
            commit("feat", Some("ui"), "add button", "aaaa111122"),
            commit("feat", Some("ui"), "add toolbar", "bbbb333344"),
        ];
        let section = render("v1.2.0", &commits, None);

        let lines: Vec<&str> = section.lines().collect();
        let heading_idx = lines
            .iter()
            .position(|&line| line == "* **ui:**")
            .expect("category heading line");
        assert_eq!(lines[heading_idx + 1], "  * add button (aaaa1111)");
        assert_eq!(lines[heading_idx + 2], "  * add toolbar (bbbb3333)");
    }

    #[test]
    fn type_sections_follow_token_order_not_label_order() {
        let commits = vec![
            commit("fix", None, "null check", "aaaa111122"),
            commit("feat", Some("ui"), "add button", "bbbb333344"),
            commit("chore", None, "bump", "cccc555566"),
        ];
        let section = render("v1.2.0", &commits, None);

        let chores = section.find("#### Chores").expect("chores section");
        let features = section.find("#### New Features").expect("features section");
        let fixes = section.find("#### Bug Fixes").expect("fixes section");
        assert!(chores < features, "chore sorts before feat");
        assert!(features < fixes, "feat sorts before fix");
    }

    #[test]
    fn unknown_types_collapse_into_other_changes() {
        let commits = vec![commit("perf", None, "tighten loop", "aaaa111122")];
        let section = render("v1.2.0", &commits, None);

        assert!(section.contains("#### Other Changes"));
        assert!(!section.contains("#### perf"));
    }

    #[test]
    fn missing_category_renders_empty_bold_label() {
        let commits = vec![commit("fix", None, "null check", "aaaa111122")];
        let section = render("v1.2.0", &commits, None);

        assert!(section.contains("* **:** null check (aaaa1111)"));
    }

    #[test]
    fn categories_keep_first_insertion_order() {
        let commits = vec![
            commit("fix", Some("parser"), "first", "aaaa111122"),
            commit("fix", Some("writer"), "second", "bbbb333344"),
            commit("fix", Some("parser"), "third", "cccc555566"),
        ];
        let section = render("v1.2.0", &commits, None);

        let parser = section.find("* **parser:**").expect("parser group");
        let writer = section.find("* **writer:**").expect("writer group");
        assert!(parser < writer);

        let lines: Vec<&str> = section.lines().collect();
        let parser_idx = lines
            .iter()
            .position(|&line| line == "* **parser:**")
            .expect("parser heading");
        assert_eq!(lines[parser_idx + 1], "  * first (aaaa1111)");
        assert_eq!(lines[parser_idx + 2], "  * third (cccc5555)");
    }

    #[test]
    fn repo_url_turns_hashes_into_commit_links() {
        let commits = vec![commit("fix", Some("core"), "handle null", "abcdef1234")];
        let section = render("v1.2.0", &commits, Some("https://github.example.com/acme/widgets"));

        assert!(section.contains(
            "* **core:** handle null \
             ([abcdef12](https://github.example.com/acme/widgets/commit/abcdef1234))"
        ));
    }

    #[test]
    fn section_ends_with_one_trailing_blank_line() {
        let commits = vec![commit("fix", Some("core"), "handle null", "abcdef1234")];
        let section = render("v1.2.0", &commits, None);

        assert!(section.ends_with("(abcdef12)\n\n"));
    }

    #[test]
    fn merge_prepends_preamble_and_keeps_old_tail() {
        let old = "## Change Log\nAll notable changes to this project will be documented in this file.\n\n### v1.0.0 (2024-1-9)\n\n#### Chores\n\n* **:** bump (dddd7777)\n\n";
        let section = "### v1.1.0 (2024-2-1)\n\n#### Bug Fixes\n\n* **core:** handle null (abcdef12)\n\n";

        let merged = merge(Some(old), section);

        assert!(merged.starts_with(&format!(
            "{DOCUMENT_TITLE}\n{DOCUMENT_DESCRIPTION}\n\n### v1.1.0"
        )));
        let new_pos = merged.find("### v1.1.0").expect("new section");
        let old_pos = merged.find("### v1.0.0").expect("old section");
        assert!(new_pos < old_pos);
        assert!(merged.contains("* **:** bump (dddd7777)"));
    }

    #[test]
    fn merge_without_prior_document_is_preamble_plus_section() {
        let section = "### v1.0.0 (2024-1-9)\n\n";
        let merged = merge(None, section);

        assert_eq!(
            merged,
            format!("{DOCUMENT_TITLE}\n{DOCUMENT_DESCRIPTION}\n\n{section}")
        );
    }

    #[test]
    fn merge_tolerates_prior_documents_shorter_than_the_preamble() {
        let section = "### v1.0.0 (2024-1-9)\n\n";

        let merged_empty = merge(Some(""), section);
        let merged_one_line = merge(Some("## Change Log"), section);

        assert!(merged_empty.ends_with(section));
        assert!(merged_one_line.ends_with(section));
        assert_eq!(merged_empty, merged_one_line);
    }

    #[test]
    fn rendering_identical_input_twice_is_stable() {
        let commits = vec![
            commit("feat", Some("ui"), "add button", "aaaa111122"),
            commit("fix", None, "null check", "bbbb333344"),
        ];

        assert_eq!(
            render("v1.2.0", &commits, None),
            render("v1.2.0", &commits, None)
        );
    }
}
