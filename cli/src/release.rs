use std::fs;
use std::path::Path;
use std::time::Duration;

use git::repository::{RealGitRepository, Repository};
use github::GitHubClient;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::runtime::Runtime;

use crate::cli::VersionType;
use crate::error::{CliError, Result};
use crate::interactive;
use crate::notes;
use crate::package;
use crate::progress::ProgressTracker;
use crate::publish;
use crate::ui;
use crate::webex;

const CHANGELOG_PATH: &str = "CHANGELOG.md";

/// Execute the release pipeline
pub fn execute(version_type: Option<VersionType>, force: bool, verbose: bool) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;
    rt.block_on(execute_async(version_type, force, verbose))
}

async fn execute_async(version_type: Option<VersionType>, force: bool, verbose: bool) -> Result<()> {
    ui::section_header("Preflight");

    let package = package::read_package(Path::new("."))?;
    let (owner, repo_name) = package::parse_owner_repo(&package.repository_url)?;
    let web_url = package::web_url(&package.repository_url, &owner, &repo_name)?;
    if verbose {
        println!("Package: {} {}", package.name, package.version);
        println!("Repository: {owner}/{repo_name}");
    }

    let repo = RealGitRepository::open()?;
    if force {
        ui::warning_message("Force flag enabled. Skipping clean repository check");
    } else if repo.validate_status()? {
        ui::success_message("Repository is clean");
    } else {
        return Err(CliError::Other(
            "Git working directory not clean. You must commit changes in working directory first."
                .to_string(),
        ));
    }

    let branch = repo.current_branch()?;
    ui::info_message(&format!("Using {branch} branch for release"));

    let new_version = match version_type {
        Some(version_type) => package::increment(&package.version, version_type),
        None => interactive::prompt_version(&package.version)?,
    };
    let tag_name = format!("v{new_version}");

    let github_token =
        interactive::resolve_token("GITHUB_API_TOKEN", "GitHub personal access token")?;
    let webex_token = interactive::resolve_token("WEBEX_ACCESS_TOKEN", "Webex access token")?;
    let room_id = interactive::resolve_setting("WEBEX_ROOM_ID", "Webex room id")?;

    let client = GitHubClient::new(notes::api_url(), github_token)?;

    let mut progress = ProgressTracker::new(&format!("Release {tag_name}")).with_steps(vec![
        "Updating package version".to_string(),
        "Extracting release notes".to_string(),
        "Updating CHANGELOG.md".to_string(),
        "Committing and tagging".to_string(),
        "Pushing to origin".to_string(),
        "Waiting for tag on GitHub".to_string(),
        "Creating GitHub release".to_string(),
        "Publishing package".to_string(),
        "Announcing release".to_string(),
    ]);

    progress.start_step();
    package::write_version(Path::new("."), &new_version)?;
    progress.complete_step();

    progress.start_step();
    let release_notes =
        notes::extract_release_notes(&client, &owner, &repo_name, &tag_name, &web_url, verbose)
            .await?;
    progress.complete_step();

    progress.start_step();
    let old_changelog = match fs::read_to_string(CHANGELOG_PATH) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(CliError::Io(e).with_context("Failed to read CHANGELOG.md")),
    };
    let merged = changelog::merge(old_changelog.as_deref(), &release_notes);
    fs::write(CHANGELOG_PATH, merged)
        .map_err(|e| CliError::Io(e).with_context("Failed to write CHANGELOG.md"))?;
    progress.complete_step();

    progress.start_step();
    repo.commit_all(&format!("chore(release): {tag_name}"))?;
    repo.tag(&tag_name)?;
    progress.complete_step();

    progress.start_step();
    repo.push(&branch)?;
    repo.push_tags()?;
    progress.complete_step();

    progress.start_step();
    wait_for_tag_with_spinner(&client, &owner, &repo_name, &tag_name).await?;
    progress.complete_step();

    progress.start_step();
    let release = client
        .create_release(&owner, &repo_name, &tag_name, &release_notes)
        .await?;
    progress.complete_step();
    ui::success_message(&format!(
        "{tag_name} released to GitHub - {}",
        release.html_url
    ));

    progress.start_step();
    publish::npm_publish()?;
    progress.complete_step();
    ui::success_message(&format!(
        "Version {tag_name} of {} published to npm",
        package.name
    ));

    progress.start_step();
    let webex_url =
        std::env::var("WEBEX_API_URL").unwrap_or_else(|_| webex::DEFAULT_API_URL.to_string());
    webex::announce(
        &webex_url,
        &webex_token,
        &room_id,
        &package.name,
        &release_notes,
    )
    .await?;
    progress.complete_step();
    ui::success_message("Release notes posted to the team room");

    progress.complete();

    Ok(())
}

async fn wait_for_tag_with_spinner(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    tag_name: &str,
) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .map_err(|e| CliError::Other(format!("Invalid spinner template: {e}")))?,
    );
    spinner.set_message(format!("Checking for tag {tag_name} in GitHub"));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = client.wait_for_tag(owner, repo, tag_name).await;
    spinner.finish_and_clear();

    result.map_err(Into::into)
}
