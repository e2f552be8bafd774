use std::path::Path;

use changelog::RawCommit;
use github::GitHubClient;
use tokio::runtime::Runtime;

use crate::cli::VersionType;
use crate::error::{CliError, Result};
use crate::interactive;
use crate::package;

pub fn execute(version: Option<String>, verbose: bool) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;
    rt.block_on(execute_async(version, verbose))
}

async fn execute_async(version: Option<String>, verbose: bool) -> Result<()> {
    let package = package::read_package(Path::new("."))?;
    let (owner, repo) = package::parse_owner_repo(&package.repository_url)?;
    let web_url = package::web_url(&package.repository_url, &owner, &repo)?;

    let version_label = version.unwrap_or_else(|| {
        format!(
            "v{}",
            package::increment(&package.version, VersionType::Patch)
        )
    });

    let token = interactive::resolve_token("GITHUB_API_TOKEN", "GitHub personal access token")?;
    let client = GitHubClient::new(api_url(), token)?;

    let section =
        extract_release_notes(&client, &owner, &repo, &version_label, &web_url, verbose).await?;
    println!("{section}");

    Ok(())
}

/// Fetches the commits since the last tag and renders the release-notes
/// section for them. Shared by the release pipeline and the dry run.
pub async fn extract_release_notes(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    version_label: &str,
    web_url: &str,
    verbose: bool,
) -> Result<String> {
    let boundary_tag = client.latest_tag(owner, repo).await?;
    if verbose {
        println!(
            "Last release tag: {} ({})",
            boundary_tag.name, boundary_tag.commit.sha
        );
    }

    let since = client
        .commit_date(owner, repo, &boundary_tag.commit.sha)
        .await?;
    let records = client.commits_since(owner, repo, since).await?;
    if verbose {
        println!("Fetched {} commits since {}", records.len(), since);
    }

    let raw: Vec<RawCommit> = records
        .into_iter()
        .map(|record| RawCommit::new(record.sha, record.message))
        .collect();
    let fetched = raw.len();

    let commits = changelog::classify(raw)?;
    if verbose {
        let skipped = fetched.saturating_sub(1).saturating_sub(commits.len());
        if skipped > 0 {
            println!("{skipped} commits did not match the commit convention and were skipped");
        }
    }

    Ok(changelog::render(version_label, &commits, Some(web_url)))
}

/// GitHub API base URL, overridable for Enterprise hosts
pub fn api_url() -> String {
    std::env::var("GITHUB_API_URL").unwrap_or_else(|_| github::DEFAULT_API_URL.to_string())
}
