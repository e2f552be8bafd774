use std::fs;
use std::path::Path;

use regex::Regex;
use semver::{BuildMetadata, Prerelease, Version as SemverVersion};
use serde_json::Value;

use crate::cli::VersionType;
use crate::error::{CliError, Result};

/// The package metadata a release needs from package.json
#[derive(Debug, Clone)]
pub struct PackageInfo {
    pub name: String,
    pub version: SemverVersion,
    pub repository_url: String,
}

/// Reads name, version and repository URL from `<dir>/package.json`.
///
/// A missing repository URL is a hard error: without it there is no way
/// to address the GitHub repository or to link commit hashes.
pub fn read_package(dir: &Path) -> Result<PackageInfo> {
    let path = dir.join("package.json");
    if !path.exists() {
        return Err(CliError::PackageNotFound(path));
    }

    let json: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;

    let name = json
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| CliError::Other("package.json is missing \"name\"".to_string()))?
        .to_string();

    let version = json
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| CliError::Other("package.json is missing \"version\"".to_string()))?;
    let version = SemverVersion::parse(version)?;

    let repository_url = json
        .pointer("/repository/url")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            CliError::Other(
                "{ \"repository\": { \"url\" } } is missing in package.json.\n\
                 [Reference: https://docs.npmjs.com/files/package.json#repository]"
                    .to_string(),
            )
        })?
        .to_string();

    Ok(PackageInfo {
        name,
        version,
        repository_url,
    })
}

/// Writes a new version into `<dir>/package.json`, leaving every other
/// field as serde re-emits it.
pub fn write_version(dir: &Path, version: &SemverVersion) -> Result<()> {
    let path = dir.join("package.json");
    let mut json: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;

    match json.get_mut("version") {
        Some(slot) => *slot = Value::String(version.to_string()),
        None => return Err(CliError::Other("package.json is missing \"version\"".to_string())),
    }

    let mut content = serde_json::to_string_pretty(&json)?;
    content.push('\n');
    fs::write(&path, content)?;

    Ok(())
}

/// Computes the next version for an increment type. Pre-release and
/// build metadata are cleared: a published release is always a plain
/// version.
#[must_use]
pub fn increment(version: &SemverVersion, version_type: VersionType) -> SemverVersion {
    let (major, minor, patch) = match version_type {
        VersionType::Major => (version.major + 1, 0, 0),
        VersionType::Minor => (version.major, version.minor + 1, 0),
        VersionType::Patch => (version.major, version.minor, version.patch + 1),
    };

    SemverVersion {
        major,
        minor,
        patch,
        pre: Prerelease::EMPTY,
        build: BuildMetadata::EMPTY,
    }
}

/// Extracts `(owner, repo)` from a repository URL such as
/// `https://github.example.com/acme/widgets.git`.
pub fn parse_owner_repo(url: &str) -> Result<(String, String)> {
    let url = url.strip_prefix("git+").unwrap_or(url);

    let owner_pattern = Regex::new(r"^https?://[^/]+/([A-Za-z0-9_-]+)")?;
    let owner = owner_pattern
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            CliError::Other(format!("Could not parse repository owner from URL '{url}'"))
        })?;

    let repo = url
        .split('/')
        .next_back()
        .unwrap_or_default()
        .trim_end_matches(".git")
        .to_string();
    if repo.is_empty() {
        return Err(CliError::Other(format!(
            "Could not parse repository name from URL '{url}'"
        )));
    }

    Ok((owner, repo))
}

/// Builds the browsable repository URL commit links point at.
pub fn web_url(repository_url: &str, owner: &str, repo: &str) -> Result<String> {
    let repository_url = repository_url.strip_prefix("git+").unwrap_or(repository_url);

    let host_pattern = Regex::new(r"^(https?://[^/]+)")?;
    let host = host_pattern
        .captures(repository_url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            CliError::Other(format!(
                "Could not parse repository host from URL '{repository_url}'"
            ))
        })?;

    Ok(format!("{host}/{owner}/{repo}"))
}
