use anyhow::{anyhow, Result};

use super::session::AzCli;
use super::ControlPlane;
use crate::infra::azd;
use crate::logic::parsing::first_line;

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

impl ControlPlane for AzCli {
    fn group_exists(&self, resource_group: &str) -> Result<bool> {
        let out = self.run(&["group", "exists", "--name", resource_group])?;
        match out.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(anyhow!("Unexpected output from az group exists: '{}'", other)),
        }
    }

    fn find_key_vault(&self, resource_group: &str, prefix: &str) -> Result<Option<String>> {
        let query = format!("[?starts_with(name, '{}')].name", prefix);
        let out = self.run_tsv(&[
            "keyvault",
            "list",
            "--resource-group",
            resource_group,
            "--query",
            &query,
        ])?;
        Ok(first_line(&out))
    }

    fn find_app_config(&self, resource_group: &str) -> Result<Option<String>> {
        let out = self.run_tsv(&[
            "appconfig",
            "list",
            "--resource-group",
            resource_group,
            "--query",
            "[].name",
        ])?;
        Ok(first_line(&out))
    }

    fn find_resource_by_tag(
        &self,
        resource_group: &str,
        tag: &str,
        value: &str,
    ) -> Result<Option<String>> {
        let query = format!("[?tags.\"{}\" == '{}'].name", tag, value);
        let out = self.run_tsv(&[
            "resource",
            "list",
            "--resource-group",
            resource_group,
            "--query",
            &query,
        ])?;
        Ok(first_line(&out))
    }

    fn find_resource_by_type(
        &self,
        resource_group: &str,
        resource_type: &str,
    ) -> Result<Option<String>> {
        let out = self.run_tsv(&[
            "resource",
            "list",
            "--resource-group",
            resource_group,
            "--resource-type",
            resource_type,
            "--query",
            "[].name",
        ])?;
        Ok(first_line(&out))
    }

    fn tenant_id(&self) -> Result<String> {
        let out = self.run_tsv(&["account", "show", "--query", "tenantId"])?;
        first_line(&out)
            .ok_or_else(|| anyhow!("az account show returned no tenant id. Run 'az login' first."))
    }

    fn is_production(&self) -> Result<bool> {
        azd::is_production()
    }

    fn set_key_vault_public_access(
        &self,
        resource_group: &str,
        vault: &str,
        enabled: bool,
    ) -> Result<()> {
        let access = if enabled { "Enabled" } else { "Disabled" };
        self.run(&[
            "keyvault",
            "update",
            "--name",
            vault,
            "--resource-group",
            resource_group,
            "--public-network-access",
            access,
        ])?;
        Ok(())
    }

    fn set_app_config_public_access(
        &self,
        resource_group: &str,
        store: &str,
        enabled: bool,
    ) -> Result<()> {
        self.run(&[
            "appconfig",
            "update",
            "--name",
            store,
            "--resource-group",
            resource_group,
            "--enable-public-network",
            on_off(enabled),
        ])?;
        Ok(())
    }

    fn disable_sql_public_access(&self, resource_group: &str, server: &str) -> Result<()> {
        self.run(&[
            "sql",
            "server",
            "update",
            "--name",
            server,
            "--resource-group",
            resource_group,
            "--enable-public-network",
            "false",
        ])?;
        Ok(())
    }

    fn set_config_value(&self, store: &str, key: &str, value: &str) -> Result<()> {
        self.run(&[
            "appconfig",
            "kv",
            "set",
            "--name",
            store,
            "--key",
            key,
            "--value",
            value,
            "--yes",
        ])?;
        Ok(())
    }

    fn set_secret(&self, vault: &str, name: &str, value: &str) -> Result<()> {
        self.run(&[
            "keyvault",
            "secret",
            "set",
            "--vault-name",
            vault,
            "--name",
            name,
            "--value",
            value,
        ])?;
        Ok(())
    }
}
