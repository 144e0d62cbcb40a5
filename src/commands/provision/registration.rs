use anyhow::Result;
use colored::*;

use crate::az_cli::IdentityProvider;
use crate::error::ProvisionError;
use crate::models::{Application, NewApplication};

/// Reuses a registration with the same display name, or creates one.
/// Returns the application and whether it was created by this call.
pub fn create_or_get<I: IdentityProvider>(
    az: &I,
    request: &NewApplication,
) -> Result<(Application, bool)> {
    let mut existing = az.find_applications(&request.display_name)?;

    if !existing.is_empty() {
        if existing.len() > 1 {
            println!(
                "    {} {} registrations are named '{}'; using the first one.",
                "⚠".yellow(),
                existing.len(),
                request.display_name
            );
        }
        let app = existing.swap_remove(0);
        println!(
            "    {} App registration '{}' already exists (client id {}).",
            "✔".green(),
            request.display_name,
            app.app_id
        );
        println!(
            "    {} No new secret will be issued. Delete the registration manually to reset it.",
            "ℹ".blue()
        );
        return Ok((app, false));
    }

    println!("    Creating app registration '{}'...", request.display_name);
    let app = az.create_application(request)?;
    if app.app_id.trim().is_empty() {
        return Err(ProvisionError::RegistrationCreateFailed(request.display_name.clone()).into());
    }

    println!(
        "    {} Created '{}' (client id {}).",
        "✔".green(),
        request.display_name,
        app.app_id
    );
    Ok((app, true))
}
