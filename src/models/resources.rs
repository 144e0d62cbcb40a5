use std::fmt;

/// Names and flags discovered in the target resource group.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredResources {
    pub resource_group: String,
    pub key_vault: String,
    pub app_config: String,
    pub front_end_web_app: String,
    pub api_web_app: String,
    pub sql_server: Option<String>,
    pub tenant_id: String,
    pub is_production: bool,
}

/// Result of a create-or-reuse step.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationOutcome {
    pub display_name: String,
    pub client_id: String,
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: &str, value: impl Into<String>) -> Self {
        Self { key: key.to_string(), value: value.into() }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct SecretEntry {
    pub name: String,
    pub value: String,
}

impl fmt::Debug for SecretEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretEntry")
            .field("name", &self.name)
            .field("value", &"<REDACTED>")
            .finish()
    }
}

/// Writes queued by the registration phases, flushed in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingWrites {
    pub config: Vec<ConfigEntry>,
    pub secrets: Vec<SecretEntry>,
}

impl PendingWrites {
    pub fn is_empty(&self) -> bool {
        self.config.is_empty() && self.secrets.is_empty()
    }

    pub fn extend(&mut self, other: PendingWrites) {
        self.config.extend(other.config);
        self.secrets.extend(other.secrets);
    }
}
