use anyhow::Result;

use super::registration::create_or_get;
use super::types::ProvisionSettings;
use crate::az_cli::IdentityProvider;
use crate::error::ProvisionError;
use crate::logic::naming::{new_registration, web_app_host};
use crate::logic::retry::poll_until;
use crate::models::{
    keys, ConfigEntry, DiscoveredResources, PendingWrites, RegistrationOutcome, SecretEntry,
};

/// Creates or reuses the front-end registration. A new registration gets a
/// client secret; the returned writes must be persisted before moving on,
/// since the secret cannot be read back later.
pub async fn provision_front_end<I: IdentityProvider>(
    az: &I,
    resources: &DiscoveredResources,
    settings: &ProvisionSettings,
) -> Result<(RegistrationOutcome, PendingWrites)> {
    let topology = &settings.topology;
    let display_name = resources.front_end_web_app.clone();
    let host = web_app_host(&resources.front_end_web_app, &topology.host_suffix);
    let request = new_registration(&display_name, &host, &topology.front_end_local_origin);

    let (app, created) = create_or_get(az, &request)?;
    let outcome = RegistrationOutcome {
        display_name: display_name.clone(),
        client_id: app.app_id.clone(),
        created,
    };
    if !created {
        return Ok((outcome, PendingWrites::default()));
    }

    println!("    Issuing client secret...");
    let secret = poll_until(
        &settings.retry,
        "Client secret",
        |_| az.reset_client_secret(&app.app_id),
        |s| !s.trim().is_empty(),
    )
    .await
    .ok_or_else(|| ProvisionError::ClientSecretExhausted {
        display_name: display_name.clone(),
        attempts: settings.retry.max_attempts,
    })?;

    let writes = PendingWrites {
        config: vec![
            ConfigEntry::new(keys::FRONT_END_TENANT_ID, resources.tenant_id.clone()),
            ConfigEntry::new(keys::FRONT_END_CLIENT_ID, app.app_id.clone()),
        ],
        secrets: vec![SecretEntry {
            name: keys::FRONT_END_CLIENT_SECRET.to_string(),
            value: secret.trim().to_string(),
        }],
    };
    Ok((outcome, writes))
}
