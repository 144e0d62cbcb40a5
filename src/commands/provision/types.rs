use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

use crate::logic::retry::{RetryPolicy, DEFAULT_MAX_ATTEMPTS};
use crate::models::{DiscoveredResources, PendingWrites, RegistrationOutcome, Topology};

#[derive(Args, Clone, Debug)]
pub struct ProvisionArgs {
    #[arg(
        short = 'g',
        long,
        env = "AZURE_RESOURCE_GROUP",
        help = "Resource group created by azd provision"
    )]
    pub resource_group: String,

    #[arg(long, help = "Verbose diagnostics and a pause after resource discovery")]
    pub debug: bool,

    #[arg(
        long,
        env = "APPREG_CONFIG",
        help = "YAML file overriding naming and lookup conventions"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "APPREG_RETRY_ATTEMPTS",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        help = "Attempts per eventually-consistent step"
    )]
    pub retry_attempts: u32,

    #[arg(
        long,
        env = "APPREG_RETRY_INTERVAL_SECS",
        default_value_t = 3,
        help = "Seconds between attempts"
    )]
    pub retry_interval_secs: u64,
}

/// Resolved inputs for one provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionSettings {
    pub resource_group: String,
    pub topology: Topology,
    pub retry: RetryPolicy,
    pub debug: bool,
    pub pause: bool,
}

impl ProvisionSettings {
    pub fn new(resource_group: &str) -> Self {
        Self {
            resource_group: resource_group.to_string(),
            topology: Topology::default(),
            retry: RetryPolicy::default(),
            debug: false,
            pause: false,
        }
    }

    pub fn from_args(args: &ProvisionArgs) -> Result<Self> {
        Ok(Self {
            resource_group: args.resource_group.trim().to_string(),
            topology: Topology::load(args.config.as_deref())?,
            retry: RetryPolicy {
                max_attempts: args.retry_attempts.max(1),
                interval: Duration::from_secs(args.retry_interval_secs),
            },
            debug: args.debug,
            pause: args.debug,
        })
    }
}

/// What a run did, for the closing summary.
#[derive(Debug, Clone)]
pub struct ProvisionReport {
    pub resources: DiscoveredResources,
    pub front_end: RegistrationOutcome,
    pub api: RegistrationOutcome,
    pub written: PendingWrites,
}
