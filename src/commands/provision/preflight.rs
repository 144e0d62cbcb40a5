use anyhow::Result;
use colored::*;

use crate::az_cli::ControlPlane;
use crate::error::ProvisionError;
use crate::logic::naming::validate_resource_group_name;

/// Rejects malformed names locally, then confirms the group exists. Read-only.
pub fn check_resource_group<C: ControlPlane>(az: &C, resource_group: &str) -> Result<()> {
    validate_resource_group_name(resource_group).map_err(|reason| {
        ProvisionError::InvalidResourceGroupName {
            name: resource_group.to_string(),
            reason,
        }
    })?;

    if !az.group_exists(resource_group)? {
        return Err(ProvisionError::ResourceGroupNotFound(resource_group.to_string()).into());
    }

    println!("  {} Resource group '{}' exists.", "✔".green(), resource_group);
    Ok(())
}
