use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Naming and lookup conventions for the Relecloud deployment.
///
/// Every field has a default, so a topology file only needs the values that
/// differ from a stock `azd up` environment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Topology {
    pub key_vault_prefix: String,
    pub service_tag: String,
    pub front_end_service: String,
    pub api_service: String,
    pub host_suffix: String,
    pub front_end_local_origin: String,
    pub api_local_origin: String,
    pub scope: ScopeDefinition,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeDefinition {
    pub value: String,
    pub id: String,
    pub display_name: String,
    pub description: String,
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            key_vault_prefix: "rc-".to_string(),
            service_tag: "azd-service-name".to_string(),
            front_end_service: "web".to_string(),
            api_service: "api".to_string(),
            host_suffix: "azurewebsites.net".to_string(),
            front_end_local_origin: "https://localhost:7227".to_string(),
            api_local_origin: "https://localhost:7242".to_string(),
            scope: ScopeDefinition::default(),
        }
    }
}

impl Default for ScopeDefinition {
    fn default() -> Self {
        Self {
            value: "relecloud.api".to_string(),
            id: "a4e9a2b1-7f3c-4c1e-9a6b-2f1d5d3c8e70".to_string(),
            display_name: "Relecloud API access".to_string(),
            description: "Allows the front-end to call the Relecloud API on behalf of the \
                          signed-in attendee"
                .to_string(),
        }
    }
}

impl Topology {
    /// Loads a topology file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(anyhow!("Topology file {:?} not found.", path));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read topology file {:?}: {}", path, e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse topology file {:?}: {}", path, e))
    }
}
