pub mod scheduler;
pub mod session;
pub mod workload;

pub use scheduler::SchedulerConfig;
pub use session::SessionConfig;
pub use workload::WorkloadConfig;

use crate::error::{BridgeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration that aggregates all sub-configs
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    pub scheduler: SchedulerConfig,
    pub workload: WorkloadConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            BridgeError::Configuration(format!("{}: {}", path.as_ref().display(), e))
        })?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| BridgeError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter combinations the bridge cannot run with.
    /// Called before any socket is bound, so failures surface as clean
    /// start-up errors.
    pub fn validate(&self) -> Result<()> {
        self.workload.validate()?;
        if self.session.bind.is_empty() {
            return Err(BridgeError::Configuration(
                "session.bind must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get a default configuration for testing
    #[cfg(test)]
    pub fn test_default() -> Self {
        Config {
            session: SessionConfig::default(),
            scheduler: SchedulerConfig {
                policy: "fcfs".to_string(),
                seed: Some(42),
            },
            workload: WorkloadConfig {
                workload_name: "dyn".to_string(),
                profile_name: "delay_15s".to_string(),
                profile_delay: 15.0,
                num_jobs: 3,
                min_walltime: 10.0,
                max_walltime: 15.0,
                res_per_job: 1,
                seed: 42,
            },
        }
    }
}
