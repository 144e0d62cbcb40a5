use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::process::Command;

/// Handle on the locally installed Azure CLI. Relies on an existing `az login`.
#[derive(Debug, Clone, Default)]
pub struct AzCli;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub id: String,
    pub name: String,
    pub tenant_id: String,
    pub user: AccountUser,
}

#[derive(Debug, Deserialize)]
pub struct AccountUser {
    pub name: String,
}

impl AzCli {
    pub fn new() -> Self {
        Self
    }

    /// Runs `az <args>` and returns trimmed stdout. A non-zero exit becomes an
    /// error carrying stderr.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(command = %display_args(args), "invoking az");

        let output = Command::new("az")
            .args(args)
            .arg("--only-show-errors")
            .output()
            .map_err(|e| anyhow!("Failed to execute az (is the Azure CLI installed?): {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("az {} failed: {}", subcommand(args), stderr.trim()));
        }

        let stdout = String::from_utf8(output.stdout)?.trim().to_string();
        tracing::debug!(bytes = stdout.len(), "az returned");
        Ok(stdout)
    }

    pub fn run_json<T: DeserializeOwned>(&self, args: &[&str]) -> Result<T> {
        let mut full = args.to_vec();
        full.extend_from_slice(&["--output", "json"]);
        let stdout = self.run(&full)?;
        serde_json::from_str(&stdout).map_err(|e| {
            anyhow!(
                "JSON Parse Error from az {}: {}. Output: '{}'",
                subcommand(args),
                e,
                stdout
            )
        })
    }

    pub fn run_tsv(&self, args: &[&str]) -> Result<String> {
        let mut full = args.to_vec();
        full.extend_from_slice(&["--output", "tsv"]);
        self.run(&full)
    }

    pub fn account_show(&self) -> Result<AccountInfo> {
        self.run_json(&["account", "show"])
    }
}

fn subcommand(args: &[&str]) -> String {
    args.iter()
        .take_while(|a| !a.starts_with('-'))
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders an invocation for logs with secret values masked.
fn display_args(args: &[&str]) -> String {
    let secret_call = args.contains(&"secret");
    let mut rendered = Vec::with_capacity(args.len());
    let mut mask_next = false;
    for arg in args {
        if mask_next {
            rendered.push("<REDACTED>".to_string());
            mask_next = false;
            continue;
        }
        mask_next = secret_call && *arg == "--value";
        rendered.push(arg.to_string());
    }
    rendered.join(" ")
}
