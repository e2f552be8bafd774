use std::time::Duration;

use serde_json::json;

use crate::error::{CliError, Result};

/// Base URL of the Webex messages API
pub const DEFAULT_API_URL: &str = "https://webexapis.com/v1";

/// Posts the rendered release notes to a Webex room as markdown, under a
/// heading carrying the package name.
pub async fn announce(
    api_url: &str,
    token: &str,
    room_id: &str,
    package_name: &str,
    notes: &str,
) -> Result<()> {
    let message = format!("## {package_name}\n {notes}");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = client
        .post(format!("{}/messages", api_url.trim_end_matches('/')))
        .bearer_auth(token)
        .json(&json!({
            "roomId": room_id,
            "markdown": message,
        }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CliError::Other(format!(
            "Webex API returned status {}: {body}",
            status.as_u16()
        )));
    }

    Ok(())
}
