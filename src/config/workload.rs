use crate::error::{BridgeError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WorkloadConfig {
    /// Workload name; job ids are "{workload_name}!jobN"
    pub workload_name: String,

    /// Name of the single delay profile every job references
    pub profile_name: String,

    /// Simulated compute seconds for the delay profile
    pub profile_delay: f64,

    /// Number of jobs to generate
    pub num_jobs: usize,

    /// Lower bound on job walltime (seconds)
    pub min_walltime: f64,

    /// Upper bound on job walltime (seconds)
    pub max_walltime: f64,

    /// Resources required by each job
    #[serde(default = "default_res_per_job")]
    pub res_per_job: u32,

    /// Random seed for walltime sampling
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_res_per_job() -> u32 {
    1
}

fn default_seed() -> u64 {
    42
}

impl WorkloadConfig {
    pub fn validate(&self) -> Result<()> {
        if self.workload_name.is_empty() || self.profile_name.is_empty() {
            return Err(BridgeError::Configuration(
                "workload_name and profile_name must not be empty".to_string(),
            ));
        }
        if self.num_jobs == 0 {
            return Err(BridgeError::Configuration(
                "num_jobs must be at least 1".to_string(),
            ));
        }
        if self.min_walltime <= 0.0 || self.min_walltime > self.max_walltime {
            return Err(BridgeError::Configuration(format!(
                "invalid walltime range [{}, {}]",
                self.min_walltime, self.max_walltime
            )));
        }
        if self.res_per_job == 0 {
            return Err(BridgeError::Configuration(
                "res_per_job must be at least 1".to_string(),
            ));
        }
        if self.profile_delay <= 0.0 {
            return Err(BridgeError::Configuration(
                "profile_delay must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
