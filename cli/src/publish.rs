use std::process::Command;

use crate::error::{CliError, Result};

/// Publishes the package through the npm CLI, which already carries the
/// registry configuration and credentials for the project.
pub fn npm_publish() -> Result<()> {
    let output = Command::new("npm")
        .arg("publish")
        .output()
        .map_err(|e| CliError::Io(e).with_context("Failed to execute npm publish"))?;

    if !output.status.success() {
        return Err(CliError::Other(format!(
            "npm publish failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    Ok(())
}
