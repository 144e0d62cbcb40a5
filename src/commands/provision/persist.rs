use anyhow::{anyhow, Result};
use colored::*;

use crate::az_cli::ControlPlane;
use crate::models::{DiscoveredResources, PendingWrites};

/// Flushes the values queued by one registration phase.
///
/// In production the store and vault are network-locked, so public access
/// is opened for the duration of the writes and closed again afterwards,
/// including when a write fails. A failed re-lock is reported as an error
/// even if every write succeeded.
pub fn persist<C: ControlPlane>(
    az: &C,
    resources: &DiscoveredResources,
    writes: &PendingWrites,
) -> Result<()> {
    if writes.is_empty() {
        println!("  Nothing to persist; the registration was reused.");
        return Ok(());
    }

    if resources.is_production {
        println!(
            "  Opening public network access on {} and {}...",
            resources.app_config, resources.key_vault
        );
        if let Err(e) = open_public_access(az, resources) {
            report_relock_failures(&relock(az, resources));
            return Err(e);
        }
    }

    let written = write_all(az, resources, writes);

    if resources.is_production {
        println!(
            "  Closing public network access on {} and {}...",
            resources.app_config, resources.key_vault
        );
        let failures = relock(az, resources);
        report_relock_failures(&failures);
        if written.is_ok() && !failures.is_empty() {
            return Err(anyhow!(
                "Configuration was written but public network access could not be \
                 disabled again on {} resource(s)",
                failures.len()
            ));
        }
    }

    written
}

/// Production-only: the database must not stay reachable from the internet.
pub fn lock_down_sql<C: ControlPlane>(az: &C, resources: &DiscoveredResources) -> Result<()> {
    if !resources.is_production {
        return Ok(());
    }
    if let Some(server) = &resources.sql_server {
        println!("  Disabling public network access on SQL server {}...", server);
        az.disable_sql_public_access(&resources.resource_group, server)?;
        println!("  {} SQL server locked down.", "✔".green());
    }
    Ok(())
}

fn write_all<C: ControlPlane>(
    az: &C,
    resources: &DiscoveredResources,
    writes: &PendingWrites,
) -> Result<()> {
    for entry in &writes.config {
        az.set_config_value(&resources.app_config, &entry.key, &entry.value).map_err(|e| {
            anyhow!("Failed to write '{}' to {}: {}", entry.key, resources.app_config, e)
        })?;
        println!("  {} {} = {}", "✔".green(), entry.key, entry.value);
    }
    for secret in &writes.secrets {
        az.set_secret(&resources.key_vault, &secret.name, &secret.value).map_err(|e| {
            anyhow!(
                "Failed to store secret '{}' in {}: {}",
                secret.name,
                resources.key_vault,
                e
            )
        })?;
        println!("  {} Secret {} stored in {}", "✔".green(), secret.name, resources.key_vault);
    }
    Ok(())
}

fn open_public_access<C: ControlPlane>(az: &C, resources: &DiscoveredResources) -> Result<()> {
    az.set_app_config_public_access(&resources.resource_group, &resources.app_config, true)?;
    az.set_key_vault_public_access(&resources.resource_group, &resources.key_vault, true)?;
    Ok(())
}

/// Attempts both re-locks regardless of individual failures.
fn relock<C: ControlPlane>(az: &C, resources: &DiscoveredResources) -> Vec<anyhow::Error> {
    let mut failures = Vec::new();
    let group = &resources.resource_group;
    if let Err(e) = az.set_app_config_public_access(group, &resources.app_config, false) {
        failures.push(anyhow!("{}: {}", resources.app_config, e));
    }
    if let Err(e) = az.set_key_vault_public_access(group, &resources.key_vault, false) {
        failures.push(anyhow!("{}: {}", resources.key_vault, e));
    }
    failures
}

fn report_relock_failures(failures: &[anyhow::Error]) {
    for failure in failures {
        eprintln!(
            "  {} Public network access is still enabled on {}. Disable it manually.",
            "⚠".yellow().bold(),
            failure
        );
    }
}
