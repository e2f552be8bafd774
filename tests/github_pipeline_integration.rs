//! Walks the commit-retrieval path the release pipeline takes (tag
//! lookup, boundary commit date, commits-since) against a mock GitHub
//! API, then classifies and renders the result.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use changelog::{classify, render, RawCommit};
use github::GitHubClient;

async fn mount_release_history(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "v1.1.0", "commit": { "sha": "boundary0000" } },
            { "name": "v1.0.0", "commit": { "sha": "older0000000" } },
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/commits/boundary0000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "boundary0000",
            "commit": {
                "message": "chore(release): v1.1.0",
                "author": { "date": "2026-03-01T12:00:00Z" }
            }
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/commits"))
        .and(query_param("since", "2026-03-01T12:00:00+00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "sha": "feat0001cafe",
                "commit": {
                    "message": "feat(ui): add button",
                    "author": { "date": "2026-03-03T10:00:00Z" }
                }
            },
            {
                "sha": "junk0002cafe",
                "commit": {
                    "message": "Merge pull request #7",
                    "author": { "date": "2026-03-02T10:00:00Z" }
                }
            },
            {
                "sha": "boundary0000",
                "commit": {
                    "message": "chore(release): v1.1.0",
                    "author": { "date": "2026-03-01T12:00:00Z" }
                }
            },
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn retrieved_commits_classify_and_render_into_release_notes() {
    let server = MockServer::start().await;
    mount_release_history(&server).await;

    let client = GitHubClient::new(server.uri(), "test-token").expect("client should build");

    let boundary_tag = client.latest_tag("acme", "widgets").await.unwrap();
    assert_eq!(boundary_tag.name, "v1.1.0");

    let since = client
        .commit_date("acme", "widgets", &boundary_tag.commit.sha)
        .await
        .unwrap();
    let records = client.commits_since("acme", "widgets", since).await.unwrap();
    assert_eq!(records.len(), 3);

    let raw: Vec<RawCommit> = records
        .into_iter()
        .map(|record| RawCommit::new(record.sha, record.message))
        .collect();
    let commits = classify(raw).expect("commits since the tag exist");

    // The boundary commit and the merge commit both drop out.
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].hash, "feat0001cafe");

    let section = render(
        "v1.2.0",
        &commits,
        Some("https://github.example.com/acme/widgets"),
    );
    assert!(section.contains("#### New Features"));
    assert!(section.contains(
        "* **ui:** add button \
         ([feat0001](https://github.example.com/acme/widgets/commit/feat0001cafe))"
    ));
}

#[tokio::test]
async fn a_release_run_with_only_the_boundary_commit_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "sha": "boundary0000",
                "commit": {
                    "message": "chore(release): v1.1.0",
                    "author": { "date": "2026-03-01T12:00:00Z" }
                }
            },
        ])))
        .mount(&server)
        .await;

    let client = GitHubClient::new(server.uri(), "test-token").expect("client should build");
    let since = chrono::Utc::now();
    let records = client.commits_since("acme", "widgets", since).await.unwrap();

    let raw: Vec<RawCommit> = records
        .into_iter()
        .map(|record| RawCommit::new(record.sha, record.message))
        .collect();

    assert!(matches!(
        classify(raw),
        Err(changelog::ChangelogError::NoCommitsSinceLastTag)
    ));
}
