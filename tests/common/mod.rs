#![allow(dead_code)]

use anyhow::{anyhow, Result};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::time::Duration;

use appreg::az_cli::{ControlPlane, IdentityProvider};
use appreg::commands::provision::ProvisionSettings;
use appreg::logic::retry::RetryPolicy;
use appreg::models::{ApiApplication, Application, ApplicationPatch, NewApplication};

pub const RESOURCE_GROUP: &str = "rg-relecloud-dev";
pub const TENANT_ID: &str = "11111111-2222-3333-4444-555555555555";
pub const FRONT_END_APP: &str = "rc-web-abc123";
pub const API_APP: &str = "rc-api-abc123";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GroupExists(String),
    FindKeyVault,
    FindAppConfig,
    FindByTag(String),
    FindByType(String),
    TenantId,
    IsProduction,
    KeyVaultAccess(bool),
    AppConfigAccess(bool),
    SqlLockdown(String),
    SetConfig(String),
    SetSecret(String),
    FindApps(String),
    CreateApp(String),
    ResetSecret(String),
    GetApp(String),
    Patch(String),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Call::KeyVaultAccess(_)
                | Call::AppConfigAccess(_)
                | Call::SqlLockdown(_)
                | Call::SetConfig(_)
                | Call::SetSecret(_)
                | Call::CreateApp(_)
                | Call::ResetSecret(_)
                | Call::Patch(_)
        )
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Call::SetConfig(_) | Call::SetSecret(_))
    }
}

/// In-memory stand-in for `az`: a tiny directory plus a config store and vault.
pub struct FakeAzure {
    pub calls: RefCell<Vec<Call>>,
    pub group_exists: bool,
    pub key_vault: Option<String>,
    pub is_production: bool,
    pub apps: RefCell<Vec<Application>>,
    /// Empty secrets returned before a real one. `u32::MAX` never succeeds.
    pub secret_misses: Cell<u32>,
    pub create_returns_empty_id: bool,
    /// Every `get_application` call fails as if the app had not replicated.
    pub fail_get_application: bool,
    pub ignore_patches: bool,
    /// Scopes are stored with an empty id.
    pub empty_scope_ids: bool,
    /// Pre-authorization patches are dropped; scope patches still apply.
    pub ignore_pre_authorize: bool,
    pub fail_config_writes: bool,
    pub config: RefCell<BTreeMap<String, String>>,
    pub secrets: RefCell<BTreeMap<String, String>>,
    pub next_id: Cell<u32>,
}

impl Default for FakeAzure {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            group_exists: true,
            key_vault: Some("rc-kv-abc123".to_string()),
            is_production: false,
            apps: RefCell::new(Vec::new()),
            secret_misses: Cell::new(0),
            create_returns_empty_id: false,
            fail_get_application: false,
            ignore_patches: false,
            empty_scope_ids: false,
            ignore_pre_authorize: false,
            fail_config_writes: false,
            config: RefCell::new(BTreeMap::new()),
            secrets: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
        }
    }
}

impl FakeAzure {
    pub fn with_existing(names: &[&str]) -> Self {
        let fake = Self::default();
        for name in names {
            fake.insert_app(name);
        }
        fake
    }

    pub fn insert_app(&self, display_name: &str) -> Application {
        let n = self.next_id.get();
        self.next_id.set(n + 1);
        let app = Application {
            id: format!("object-{}", n),
            app_id: format!("client-{}", n),
            display_name: display_name.to_string(),
            identifier_uris: Vec::new(),
            api: None,
        };
        self.apps.borrow_mut().push(app.clone());
        app
    }

    pub fn app_named(&self, display_name: &str) -> Option<Application> {
        self.apps.borrow().iter().find(|a| a.display_name == display_name).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl ControlPlane for FakeAzure {
    fn group_exists(&self, resource_group: &str) -> Result<bool> {
        self.record(Call::GroupExists(resource_group.to_string()));
        Ok(self.group_exists)
    }

    fn find_key_vault(&self, _resource_group: &str, _prefix: &str) -> Result<Option<String>> {
        self.record(Call::FindKeyVault);
        Ok(self.key_vault.clone())
    }

    fn find_app_config(&self, _resource_group: &str) -> Result<Option<String>> {
        self.record(Call::FindAppConfig);
        Ok(Some("rc-appconfig-abc123".to_string()))
    }

    fn find_resource_by_tag(
        &self,
        _resource_group: &str,
        _tag: &str,
        value: &str,
    ) -> Result<Option<String>> {
        self.record(Call::FindByTag(value.to_string()));
        Ok(match value {
            "web" => Some(FRONT_END_APP.to_string()),
            "api" => Some(API_APP.to_string()),
            _ => None,
        })
    }

    fn find_resource_by_type(
        &self,
        _resource_group: &str,
        resource_type: &str,
    ) -> Result<Option<String>> {
        self.record(Call::FindByType(resource_type.to_string()));
        Ok(Some("rc-sql-abc123".to_string()))
    }

    fn tenant_id(&self) -> Result<String> {
        self.record(Call::TenantId);
        Ok(TENANT_ID.to_string())
    }

    fn is_production(&self) -> Result<bool> {
        self.record(Call::IsProduction);
        Ok(self.is_production)
    }

    fn set_key_vault_public_access(
        &self,
        _resource_group: &str,
        _vault: &str,
        enabled: bool,
    ) -> Result<()> {
        self.record(Call::KeyVaultAccess(enabled));
        Ok(())
    }

    fn set_app_config_public_access(
        &self,
        _resource_group: &str,
        _store: &str,
        enabled: bool,
    ) -> Result<()> {
        self.record(Call::AppConfigAccess(enabled));
        Ok(())
    }

    fn disable_sql_public_access(&self, _resource_group: &str, server: &str) -> Result<()> {
        self.record(Call::SqlLockdown(server.to_string()));
        Ok(())
    }

    fn set_config_value(&self, _store: &str, key: &str, value: &str) -> Result<()> {
        self.record(Call::SetConfig(key.to_string()));
        if self.fail_config_writes {
            return Err(anyhow!("Forbidden: public network access is disabled"));
        }
        self.config.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_secret(&self, _vault: &str, name: &str, value: &str) -> Result<()> {
        self.record(Call::SetSecret(name.to_string()));
        self.secrets.borrow_mut().insert(name.to_string(), value.to_string());
        Ok(())
    }
}

impl IdentityProvider for FakeAzure {
    fn find_applications(&self, display_name: &str) -> Result<Vec<Application>> {
        self.record(Call::FindApps(display_name.to_string()));
        Ok(self
            .apps
            .borrow()
            .iter()
            .filter(|a| a.display_name == display_name)
            .cloned()
            .collect())
    }

    fn create_application(&self, app: &NewApplication) -> Result<Application> {
        self.record(Call::CreateApp(app.display_name.clone()));
        if self.create_returns_empty_id {
            return Ok(Application::default());
        }
        Ok(self.insert_app(&app.display_name))
    }

    fn reset_client_secret(&self, client_id: &str) -> Result<String> {
        self.record(Call::ResetSecret(client_id.to_string()));
        let misses = self.secret_misses.get();
        if misses > 0 {
            if misses != u32::MAX {
                self.secret_misses.set(misses - 1);
            }
            return Ok(String::new());
        }
        Ok(format!("secret-for-{}", client_id))
    }

    fn get_application(&self, client_id: &str) -> Result<Application> {
        self.record(Call::GetApp(client_id.to_string()));
        if self.fail_get_application {
            return Err(anyhow!("Resource '{}' does not exist", client_id));
        }
        self.apps
            .borrow()
            .iter()
            .find(|a| a.app_id == client_id)
            .cloned()
            .ok_or_else(|| anyhow!("Resource '{}' does not exist", client_id))
    }

    fn patch_application(&self, object_id: &str, patch: &ApplicationPatch) -> Result<()> {
        self.record(Call::Patch(object_id.to_string()));
        if self.ignore_patches {
            return Ok(());
        }
        let mut apps = self.apps.borrow_mut();
        let app = apps
            .iter_mut()
            .find(|a| a.id == object_id)
            .ok_or_else(|| anyhow!("Resource '{}' does not exist", object_id))?;

        if let Some(uris) = &patch.identifier_uris {
            app.identifier_uris = uris.clone();
        }
        if let Some(api_patch) = &patch.api {
            let api = app.api.get_or_insert_with(ApiApplication::default);
            if let Some(scopes) = &api_patch.oauth2_permission_scopes {
                api.oauth2_permission_scopes = scopes.clone();
                if self.empty_scope_ids {
                    for scope in &mut api.oauth2_permission_scopes {
                        scope.id.clear();
                    }
                }
            }
            if let Some(pre) = &api_patch.pre_authorized_applications {
                if !self.ignore_pre_authorize {
                    api.pre_authorized_applications = pre.clone();
                }
            }
        }
        Ok(())
    }
}

pub fn settings() -> ProvisionSettings {
    let mut settings = ProvisionSettings::new(RESOURCE_GROUP);
    settings.retry = RetryPolicy {
        max_attempts: 5,
        interval: Duration::ZERO,
    };
    settings
}
