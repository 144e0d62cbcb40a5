use anyhow::{anyhow, Result};
use clap::Args;
use colored::*;

use crate::az_cli::AzCli;
use crate::infra::{azd, tools::command_exists};

#[derive(Args)]
pub struct CheckArgs {
    #[arg(long, help = "Enable verbose debug logging")]
    pub debug: bool,
}

pub async fn run(args: CheckArgs) -> Result<()> {
    crate::telemetry::init(args.debug);
    println!("{}", "Running Pre-flight Checks...".bold().blue());

    let mut all_passed = true;

    // 1. Dependencies
    println!("\n{}", "1. Dependencies".bold());
    let az_found = command_exists("az");
    if az_found {
        println!("  {} az found.", "✔".green());
    } else {
        println!("  {} az NOT found in PATH.", "✘".red());
        all_passed = false;
    }

    let azd_found = command_exists("azd");
    if azd_found {
        println!("  {} azd found.", "✔".green());
    } else {
        println!(
            "  {} azd NOT found in PATH (production detection will assume non-production).",
            "⚠".yellow()
        );
    }

    // 2. Azure login
    println!("\n{}", "2. Azure Login".bold());
    if az_found {
        match AzCli::new().account_show() {
            Ok(account) => println!(
                "  {} Logged in as '{}' (subscription '{}', tenant {}).",
                "✔".green(),
                account.user.name,
                account.name,
                account.tenant_id
            ),
            Err(e) => {
                println!("  {} Not logged in: {}. Run 'az login'.", "✘".red(), e);
                all_passed = false;
            }
        }
    } else {
        println!("  {} Skipped (az missing).", "⚠".yellow());
    }

    // 3. azd environment
    println!("\n{}", "3. azd Environment".bold());
    if azd_found {
        match azd::get_env_values() {
            Ok(values) => {
                let env_name = values
                    .get("AZURE_ENV_NAME")
                    .map(String::as_str)
                    .unwrap_or("<unnamed>");
                println!(
                    "  {} Environment '{}' (production: {}).",
                    "✔".green(),
                    env_name,
                    azd::production_flag(&values)
                );
            }
            Err(e) => println!("  {} Could not read azd environment: {}", "⚠".yellow(), e),
        }
    } else {
        println!("  {} Skipped (azd missing).", "⚠".yellow());
    }

    println!("\n{}", "Summary".bold());
    if all_passed {
        println!("{}", "All checks passed! Ready to provision.".green().bold());
        Ok(())
    } else {
        println!("{}", "Some checks failed. Please review above.".red().bold());
        Err(anyhow!("Pre-flight check failed."))
    }
}
