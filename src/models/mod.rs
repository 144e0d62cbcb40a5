pub mod graph;
pub mod resources;
pub mod topology;

pub use graph::*;
pub use resources::*;
pub use topology::*;

/// App Configuration keys read by the web and API projects.
pub mod keys {
    pub const FRONT_END_TENANT_ID: &str = "AzureAd:TenantId";
    pub const FRONT_END_CLIENT_ID: &str = "AzureAd:ClientId";
    pub const FRONT_END_CLIENT_SECRET: &str = "AzureAd--ClientSecret";
    pub const ATTENDEE_SCOPE: &str = "App:RelecloudApi:AttendeeScope";
    pub const API_CLIENT_ID: &str = "Api:AzureAd:ClientId";
    pub const API_TENANT_ID: &str = "Api:AzureAd:TenantId";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_topology_partial_yaml_keeps_defaults() {
        let yaml = r#"
keyVaultPrefix: kv-
frontEndService: frontend
scope:
  value: tickets.read
"#;
        let topology: Topology = serde_yaml::from_str(yaml).expect("Failed to parse YAML");
        assert_eq!(topology.key_vault_prefix, "kv-");
        assert_eq!(topology.front_end_service, "frontend");
        assert_eq!(topology.api_service, "api");
        assert_eq!(topology.scope.value, "tickets.read");
        assert_eq!(topology.scope.id, ScopeDefinition::default().id);
    }

    #[test]
    fn test_topology_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apiLocalOrigin: https://localhost:9000").unwrap();

        let topology = Topology::load(Some(file.path())).expect("Failed to load topology");
        assert_eq!(topology.api_local_origin, "https://localhost:9000");
        assert_eq!(topology.front_end_local_origin, "https://localhost:7227");
    }

    #[test]
    fn test_topology_load_missing_file() {
        let path = std::path::Path::new("/nonexistent/topology.yaml");
        let err = Topology::load(Some(path)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_topology_load_none_is_default() {
        assert_eq!(Topology::load(None).unwrap(), Topology::default());
    }

    #[test]
    fn test_secret_entry_debug_is_redacted() {
        let entry = SecretEntry {
            name: "AzureAd--ClientSecret".into(),
            value: "hunter2".into(),
        };
        let printed = format!("{:?}", entry);
        assert!(printed.contains("AzureAd--ClientSecret"));
        assert!(!printed.contains("hunter2"));
    }
}
