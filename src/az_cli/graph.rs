use anyhow::Result;

use super::session::AzCli;
use super::IdentityProvider;
use crate::models::{Application, ApplicationPatch, NewApplication};

pub const GRAPH_APPLICATIONS_URL: &str = "https://graph.microsoft.com/v1.0/applications";

/// `az ad app list --display-name` is a prefix match; keep exact hits only.
pub fn exact_matches(apps: Vec<Application>, display_name: &str) -> Vec<Application> {
    apps.into_iter().filter(|a| a.display_name == display_name).collect()
}

impl IdentityProvider for AzCli {
    fn find_applications(&self, display_name: &str) -> Result<Vec<Application>> {
        let apps: Vec<Application> =
            self.run_json(&["ad", "app", "list", "--display-name", display_name])?;
        Ok(exact_matches(apps, display_name))
    }

    fn create_application(&self, app: &NewApplication) -> Result<Application> {
        let roles = serde_json::to_string(&app.app_roles)?;
        let id_tokens = if app.enable_id_token_issuance { "true" } else { "false" };

        let mut args = vec![
            "ad",
            "app",
            "create",
            "--display-name",
            app.display_name.as_str(),
            "--sign-in-audience",
            app.sign_in_audience.as_str(),
            "--app-roles",
            roles.as_str(),
            "--enable-id-token-issuance",
            id_tokens,
            "--web-redirect-uris",
        ];
        args.extend(app.web_redirect_uris.iter().map(String::as_str));

        self.run_json(&args)
    }

    fn reset_client_secret(&self, client_id: &str) -> Result<String> {
        self.run_tsv(&[
            "ad",
            "app",
            "credential",
            "reset",
            "--id",
            client_id,
            "--query",
            "password",
        ])
    }

    fn get_application(&self, client_id: &str) -> Result<Application> {
        self.run_json(&["ad", "app", "show", "--id", client_id])
    }

    fn patch_application(&self, object_id: &str, patch: &ApplicationPatch) -> Result<()> {
        let uri = format!("{}/{}", GRAPH_APPLICATIONS_URL, object_id);
        let body = serde_json::to_string(patch)?;
        self.run(&[
            "rest",
            "--method",
            "PATCH",
            "--uri",
            &uri,
            "--headers",
            "Content-Type=application/json",
            "--body",
            &body,
        ])?;
        Ok(())
    }
}
