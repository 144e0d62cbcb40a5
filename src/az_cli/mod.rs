//! Wrappers around the `az` CLI.
//!
//! The provisioning workflow only talks to Azure through the two traits
//! below, so it can be driven against an in-memory fake in tests.

pub mod session;
pub mod resources;
pub mod graph;

pub use session::AzCli;

use anyhow::Result;
use crate::models::{Application, ApplicationPatch, NewApplication};

/// Azure Resource Manager operations (resource groups, vaults, stores).
pub trait ControlPlane {
    fn group_exists(&self, resource_group: &str) -> Result<bool>;
    fn find_key_vault(&self, resource_group: &str, prefix: &str) -> Result<Option<String>>;
    fn find_app_config(&self, resource_group: &str) -> Result<Option<String>>;
    fn find_resource_by_tag(
        &self,
        resource_group: &str,
        tag: &str,
        value: &str,
    ) -> Result<Option<String>>;
    fn find_resource_by_type(
        &self,
        resource_group: &str,
        resource_type: &str,
    ) -> Result<Option<String>>;
    fn tenant_id(&self) -> Result<String>;
    /// Reads the production flag from the persisted `azd` environment.
    fn is_production(&self) -> Result<bool>;

    fn set_key_vault_public_access(
        &self,
        resource_group: &str,
        vault: &str,
        enabled: bool,
    ) -> Result<()>;
    fn set_app_config_public_access(
        &self,
        resource_group: &str,
        store: &str,
        enabled: bool,
    ) -> Result<()>;
    fn disable_sql_public_access(&self, resource_group: &str, server: &str) -> Result<()>;
    fn set_config_value(&self, store: &str, key: &str, value: &str) -> Result<()>;
    fn set_secret(&self, vault: &str, name: &str, value: &str) -> Result<()>;
}

/// Microsoft Graph application operations.
pub trait IdentityProvider {
    /// Registrations whose display name matches exactly.
    fn find_applications(&self, display_name: &str) -> Result<Vec<Application>>;
    fn create_application(&self, app: &NewApplication) -> Result<Application>;
    /// Issues a new client secret and returns the password, which may be
    /// empty while the application propagates.
    fn reset_client_secret(&self, client_id: &str) -> Result<String>;
    fn get_application(&self, client_id: &str) -> Result<Application>;
    fn patch_application(&self, object_id: &str, patch: &ApplicationPatch) -> Result<()>;
}
