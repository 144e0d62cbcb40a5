use crate::models::{AppRole, NewApplication, PermissionScope, ScopeDefinition};

pub const SIGN_IN_AUDIENCE: &str = "AzureADMyOrg";
pub const ADMIN_ROLE_ID: &str = "7d4e1c5b-3f0a-4b8e-9c2d-6a1f8e3b5d90";

/// Checks a resource group name against Azure's naming rules.
/// Returns the reason on failure.
pub fn validate_resource_group_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name is empty".to_string());
    }
    if name.chars().count() > 90 {
        return Err("name is longer than 90 characters".to_string());
    }
    if name.ends_with('.') {
        return Err("name cannot end with a period".to_string());
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '(' | ')')))
    {
        return Err(format!("character '{}' is not allowed", c));
    }
    Ok(())
}

pub fn web_app_host(web_app: &str, host_suffix: &str) -> String {
    format!("https://{}.{}", web_app, host_suffix)
}

pub fn redirect_uris(host: &str, local_origin: &str) -> Vec<String> {
    vec![
        format!("{}/signin-oidc", host.trim_end_matches('/')),
        format!("{}/signin-oidc", local_origin.trim_end_matches('/')),
    ]
}

pub fn identifier_uri(client_id: &str) -> String {
    format!("api://{}", client_id)
}

/// Full scope string the front-end requests, e.g. `api://<client>/relecloud.api`.
pub fn scope_uri(client_id: &str, scope_value: &str) -> String {
    format!("{}/{}", identifier_uri(client_id), scope_value)
}

pub fn administrator_role() -> AppRole {
    AppRole {
        allowed_member_types: vec!["User".to_string()],
        description: "Relecloud Administrator".to_string(),
        display_name: "Relecloud Administrator".to_string(),
        id: ADMIN_ROLE_ID.to_string(),
        is_enabled: true,
        value: "Administrator".to_string(),
    }
}

pub fn new_registration(display_name: &str, host: &str, local_origin: &str) -> NewApplication {
    NewApplication {
        display_name: display_name.to_string(),
        sign_in_audience: SIGN_IN_AUDIENCE.to_string(),
        app_roles: vec![administrator_role()],
        web_redirect_uris: redirect_uris(host, local_origin),
        enable_id_token_issuance: true,
    }
}

pub fn permission_scope(def: &ScopeDefinition) -> PermissionScope {
    PermissionScope {
        id: def.id.clone(),
        value: def.value.clone(),
        kind: "Admin".to_string(),
        is_enabled: true,
        admin_consent_display_name: Some(def.display_name.clone()),
        admin_consent_description: Some(def.description.clone()),
    }
}
