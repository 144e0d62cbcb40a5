use thiserror::Error;

/// Fatal conditions that map to a stable process exit code.
///
/// Anything not listed here (a missing `az` binary, unparseable CLI output,
/// a failed write) surfaces as a plain `anyhow::Error` and exits with 1.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Resource group '{0}' does not exist in the current subscription")]
    ResourceGroupNotFound(String),

    #[error("'{name}' is not a valid resource group name: {reason}")]
    InvalidResourceGroupName { name: String, reason: String },

    #[error(
        "No key vault found in resource group '{0}'. The environment was not provisioned correctly"
    )]
    KeyVaultNotFound(String),

    #[error("Creating app registration '{0}' returned an empty client id")]
    RegistrationCreateFailed(String),

    #[error("Client secret for '{display_name}' was not issued after {attempts} attempts")]
    ClientSecretExhausted { display_name: String, attempts: u32 },

    #[error("Object id for '{display_name}' was not readable after {attempts} attempts")]
    ObjectIdExhausted { display_name: String, attempts: u32 },

    #[error("Scope '{scope}' was not exposed on '{display_name}' after {attempts} attempts")]
    ScopeExposureExhausted { display_name: String, scope: String, attempts: u32 },

    #[error("Permission id for scope '{scope}' was not readable after {attempts} attempts")]
    PermissionIdExhausted { scope: String, attempts: u32 },

    #[error("Pre-authorization of client '{client_id}' was not visible after {attempts} attempts")]
    PreAuthorizationExhausted { client_id: String, attempts: u32 },
}

impl ProvisionError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ProvisionError::ResourceGroupNotFound(_) => 5,
            ProvisionError::InvalidResourceGroupName { .. } => 6,
            ProvisionError::KeyVaultNotFound(_) => 7,
            ProvisionError::RegistrationCreateFailed(_) => 8,
            ProvisionError::ClientSecretExhausted { .. } => 14,
            ProvisionError::ObjectIdExhausted { .. } => 15,
            ProvisionError::ScopeExposureExhausted { .. } => 16,
            ProvisionError::PermissionIdExhausted { .. } => 17,
            ProvisionError::PreAuthorizationExhausted { .. } => 18,
        }
    }
}

/// Exit code for any error bubbling out of a command. Unclassified errors exit with 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ProvisionError>()
        .map(ProvisionError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = vec![
            ProvisionError::ResourceGroupNotFound("rg".into()),
            ProvisionError::InvalidResourceGroupName {
                name: "".into(),
                reason: "empty".into(),
            },
            ProvisionError::KeyVaultNotFound("rg".into()),
            ProvisionError::RegistrationCreateFailed("app".into()),
            ProvisionError::ClientSecretExhausted {
                display_name: "app".into(),
                attempts: 20,
            },
            ProvisionError::ObjectIdExhausted {
                display_name: "app".into(),
                attempts: 20,
            },
            ProvisionError::ScopeExposureExhausted {
                display_name: "app".into(),
                scope: "s".into(),
                attempts: 20,
            },
            ProvisionError::PermissionIdExhausted { scope: "s".into(), attempts: 20 },
            ProvisionError::PreAuthorizationExhausted {
                client_id: "c".into(),
                attempts: 20,
            },
        ];
        let mut codes: Vec<u8> = errors.iter().map(|e| e.exit_code()).collect();
        assert_eq!(codes, vec![5, 6, 7, 8, 14, 15, 16, 17, 18]);
        codes.dedup();
        assert_eq!(codes.len(), 9);
    }

    #[test]
    fn test_exit_code_from_anyhow() {
        let err: anyhow::Error = ProvisionError::KeyVaultNotFound("rg".into()).into();
        assert_eq!(exit_code(&err), 7);

        let wrapped = err.context("discovery failed");
        assert_eq!(exit_code(&wrapped), 7);

        let plain = anyhow::anyhow!("az not found");
        assert_eq!(exit_code(&plain), 1);
    }
}
