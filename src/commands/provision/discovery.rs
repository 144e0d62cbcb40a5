use anyhow::{anyhow, Result};
use colored::*;

use crate::az_cli::ControlPlane;
use crate::error::ProvisionError;
use crate::models::{DiscoveredResources, Topology};

pub const SQL_SERVER_TYPE: &str = "Microsoft.Sql/servers";

pub fn discover<C: ControlPlane>(
    az: &C,
    resource_group: &str,
    topology: &Topology,
) -> Result<DiscoveredResources> {
    let key_vault = az
        .find_key_vault(resource_group, &topology.key_vault_prefix)?
        .ok_or_else(|| ProvisionError::KeyVaultNotFound(resource_group.to_string()))?;
    println!("  {} Key vault: {}", "✔".green(), key_vault);

    let app_config = az.find_app_config(resource_group)?.ok_or_else(|| {
        anyhow!("No App Configuration store found in resource group '{}'", resource_group)
    })?;
    println!("  {} App Configuration: {}", "✔".green(), app_config);

    let front_end_web_app =
        find_service(az, resource_group, topology, &topology.front_end_service)?;
    println!("  {} Front-end web app: {}", "✔".green(), front_end_web_app);

    let api_web_app = find_service(az, resource_group, topology, &topology.api_service)?;
    println!("  {} API web app: {}", "✔".green(), api_web_app);

    let sql_server = az.find_resource_by_type(resource_group, SQL_SERVER_TYPE)?;
    match &sql_server {
        Some(name) => println!("  {} SQL server: {}", "✔".green(), name),
        None => println!(
            "  {} No SQL server found; database lockdown will be skipped.",
            "⚠".yellow()
        ),
    }

    let tenant_id = az.tenant_id()?;

    let is_production = match az.is_production() {
        Ok(flag) => flag,
        Err(e) => {
            println!(
                "  {} Could not read the azd environment ({}). Assuming non-production.",
                "⚠".yellow(),
                e
            );
            false
        }
    };
    println!("  {} Production environment: {}", "✔".green(), is_production);

    Ok(DiscoveredResources {
        resource_group: resource_group.to_string(),
        key_vault,
        app_config,
        front_end_web_app,
        api_web_app,
        sql_server,
        tenant_id,
        is_production,
    })
}

fn find_service<C: ControlPlane>(
    az: &C,
    resource_group: &str,
    topology: &Topology,
    service: &str,
) -> Result<String> {
    az.find_resource_by_tag(resource_group, &topology.service_tag, service)?
        .ok_or_else(|| {
            anyhow!(
                "No resource tagged {}={} in resource group '{}'",
                topology.service_tag,
                service,
                resource_group
            )
        })
}
