use anyhow::Result;
use colored::*;

use super::registration::create_or_get;
use super::types::ProvisionSettings;
use crate::az_cli::IdentityProvider;
use crate::error::ProvisionError;
use crate::logic::naming::{
    identifier_uri, new_registration, permission_scope, scope_uri, web_app_host,
};
use crate::logic::retry::poll_until;
use crate::models::{
    keys, ApplicationPatch, ConfigEntry, DiscoveredResources, PendingWrites, RegistrationOutcome,
};

/// Creates or reuses the API registration. A new registration gets the
/// attendee scope and pre-authorizes the front-end client for it.
pub async fn provision_api<I: IdentityProvider>(
    az: &I,
    resources: &DiscoveredResources,
    settings: &ProvisionSettings,
    front_end: &RegistrationOutcome,
) -> Result<(RegistrationOutcome, PendingWrites)> {
    let topology = &settings.topology;
    let retry = &settings.retry;
    let scope_value = topology.scope.value.as_str();
    let display_name = resources.api_web_app.clone();
    let host = web_app_host(&resources.api_web_app, &topology.host_suffix);
    let request = new_registration(&display_name, &host, &topology.api_local_origin);

    let (app, created) = create_or_get(az, &request)?;
    let client_id = app.app_id.clone();
    let outcome = RegistrationOutcome {
        display_name: display_name.clone(),
        client_id: client_id.clone(),
        created,
    };
    if !created {
        if front_end.created {
            println!(
                "    {} The front-end registration is new but the API registration was \
                 reused; its pre-authorized clients were not updated.",
                "⚠".yellow()
            );
        }
        return Ok((outcome, PendingWrites::default()));
    }

    // Object id is only readable once the new application has replicated.
    let object_id = poll_until(
        retry,
        "Object id",
        |_| az.get_application(&client_id),
        |a| !a.id.is_empty(),
    )
    .await
    .map(|a| a.id)
    .ok_or_else(|| ProvisionError::ObjectIdExhausted {
        display_name: display_name.clone(),
        attempts: retry.max_attempts,
    })?;
    tracing::debug!(%object_id, "api object id resolved");

    println!("    Exposing scope '{}'...", scope_value);
    let expose = ApplicationPatch::expose_scope(
        identifier_uri(&client_id),
        permission_scope(&topology.scope),
    );
    poll_until(
        retry,
        "Scope exposure",
        |_| {
            az.patch_application(&object_id, &expose)?;
            az.get_application(&client_id)
        },
        |a| a.scope(scope_value).is_some(),
    )
    .await
    .ok_or_else(|| ProvisionError::ScopeExposureExhausted {
        display_name: display_name.clone(),
        scope: scope_value.to_string(),
        attempts: retry.max_attempts,
    })?;
    println!("    {} Scope '{}' exposed.", "✔".green(), scope_value);

    let permission_id = poll_until(
        retry,
        "Permission id",
        |_| {
            az.get_application(&client_id)
                .map(|a| a.scope(scope_value).map(|s| s.id.clone()).unwrap_or_default())
        },
        |id| !id.is_empty(),
    )
    .await
    .ok_or_else(|| ProvisionError::PermissionIdExhausted {
        scope: scope_value.to_string(),
        attempts: retry.max_attempts,
    })?;
    tracing::debug!(%permission_id, "scope permission id resolved");

    println!("    Pre-authorizing front-end client {}...", front_end.client_id);
    let pre_authorize = ApplicationPatch::pre_authorize(&front_end.client_id, &permission_id);
    poll_until(
        retry,
        "Pre-authorization",
        |_| {
            az.patch_application(&object_id, &pre_authorize)?;
            az.get_application(&client_id)
        },
        |a| !a.pre_authorized().is_empty(),
    )
    .await
    .ok_or_else(|| ProvisionError::PreAuthorizationExhausted {
        client_id: front_end.client_id.clone(),
        attempts: retry.max_attempts,
    })?;
    println!("    {} Front-end pre-authorized.", "✔".green());

    let writes = PendingWrites {
        config: vec![
            ConfigEntry::new(keys::ATTENDEE_SCOPE, scope_uri(&client_id, scope_value)),
            ConfigEntry::new(keys::API_CLIENT_ID, client_id.clone()),
            ConfigEntry::new(keys::API_TENANT_ID, resources.tenant_id.clone()),
        ],
        secrets: Vec::new(),
    };
    Ok((outcome, writes))
}
