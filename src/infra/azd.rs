use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::process::Command;

use crate::logic::parsing::{is_truthy, parse_env_values};

pub const PRODUCTION_FLAG: &str = "IS_PROD";

/// Reads the values persisted for the current `azd` environment.
pub fn get_env_values() -> Result<HashMap<String, String>> {
    let output = Command::new("azd")
        .args(["env", "get-values"])
        .output()
        .map_err(|e| anyhow!("Failed to execute azd: {}", e))?;

    if !output.status.success() {
        return Err(anyhow!(
            "azd env get-values failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    Ok(parse_env_values(&String::from_utf8_lossy(&output.stdout)))
}

/// `IS_PROD` from the azd environment. A missing flag means non-production.
pub fn is_production() -> Result<bool> {
    let values = get_env_values()?;
    Ok(production_flag(&values))
}

pub fn production_flag(values: &HashMap<String, String>) -> bool {
    values.get(PRODUCTION_FLAG).map(|v| is_truthy(v)).unwrap_or(false)
}
