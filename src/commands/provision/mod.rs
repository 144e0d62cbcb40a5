use anyhow::Result;
use colored::*;

pub mod types;
pub use types::*;
pub mod preflight;
pub mod discovery;
pub mod registration;
pub mod front_end;
pub mod api;
pub mod persist;

use crate::az_cli::{AzCli, ControlPlane, IdentityProvider};
use crate::models::PendingWrites;

pub async fn run(args: ProvisionArgs) -> Result<()> {
    crate::telemetry::init(args.debug);

    let settings = ProvisionSettings::from_args(&args)?;
    let az = AzCli::new();

    let report = provision(&az, &settings).await?;
    print_summary(&report);
    Ok(())
}

/// Runs the whole workflow against `az`. Each phase gates the next.
///
/// Each registration phase persists its own values before the next phase
/// starts, so a new client secret is stored even if the API phase fails.
pub async fn provision<A: ControlPlane + IdentityProvider>(
    az: &A,
    settings: &ProvisionSettings,
) -> Result<ProvisionReport> {
    println!("{}", "1. Preflight".bold());
    preflight::check_resource_group(az, &settings.resource_group)?;

    println!("\n{}", "2. Resource Discovery".bold());
    let resources = discovery::discover(az, &settings.resource_group, &settings.topology)?;

    if settings.debug {
        println!("\n{}", "Debug: discovered values".dimmed());
        println!("  tenantId:        {}", resources.tenant_id);
        println!("  keyVault:        {}", resources.key_vault);
        println!("  appConfig:       {}", resources.app_config);
        println!("  frontEndWebApp:  {}", resources.front_end_web_app);
        println!("  apiWebApp:       {}", resources.api_web_app);
        println!("  sqlServer:       {}", resources.sql_server.as_deref().unwrap_or("-"));
        println!("  isProd:          {}", resources.is_production);
    }
    if settings.pause {
        crate::infra::tools::pause("\nPress Enter to continue with app registration...")?;
    }

    let mut written = PendingWrites::default();

    println!("\n{}", "3. Front-end App Registration".bold());
    let (front_end, front_end_writes) =
        front_end::provision_front_end(az, &resources, settings).await?;
    persist::persist(az, &resources, &front_end_writes)?;
    written.extend(front_end_writes);

    println!("\n{}", "4. API App Registration".bold());
    let (api, api_writes) = api::provision_api(az, &resources, settings, &front_end).await?;
    persist::persist(az, &resources, &api_writes)?;
    written.extend(api_writes);

    println!("\n{}", "5. Production Lockdown".bold());
    persist::lock_down_sql(az, &resources)?;

    Ok(ProvisionReport { resources, front_end, api, written })
}

fn print_summary(report: &ProvisionReport) {
    let status = |created: bool| if created { "created".green() } else { "reused".yellow() };

    println!("\n{}", "Summary".bold());
    println!(
        "  Front-end: {} ({}) {}",
        report.front_end.display_name,
        report.front_end.client_id,
        status(report.front_end.created)
    );
    println!(
        "  API:       {} ({}) {}",
        report.api.display_name,
        report.api.client_id,
        status(report.api.created)
    );
    println!("  Config entries written: {}", report.written.config.len());
    println!("  Secrets written:        {}", report.written.secrets.len());
    println!("{}", "App registrations are ready.".green().bold());
}
