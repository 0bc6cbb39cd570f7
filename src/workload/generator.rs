use super::{Job, Profile, Workload};
use crate::config::WorkloadConfig;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generates the synthetic job list based on workload configuration
pub struct WorkloadGenerator {
    workload: WorkloadConfig,
    rng: StdRng,
}

impl WorkloadGenerator {
    pub fn new(workload: WorkloadConfig) -> Self {
        let rng = StdRng::seed_from_u64(workload.seed);
        Self { workload, rng }
    }

    /// Build the full workload: walltimes sampled uniformly from the
    /// configured range, submit times staggered one simulated second apart.
    pub fn generate(&mut self) -> Workload {
        let mut jobs = Vec::with_capacity(self.workload.num_jobs);
        for i in 0..self.workload.num_jobs {
            let walltime = if self.workload.min_walltime < self.workload.max_walltime {
                self.rng
                    .gen_range(self.workload.min_walltime..self.workload.max_walltime)
            } else {
                self.workload.min_walltime
            };
            jobs.push(Job::new(
                format!("{}!job{}", self.workload.workload_name, i + 1),
                self.workload.profile_name.clone(),
                self.workload.res_per_job,
                walltime,
                i as f64,
            ));
        }

        Workload {
            name: self.workload.workload_name.clone(),
            profile_name: self.workload.profile_name.clone(),
            profile: Profile::Delay {
                delay: self.workload.profile_delay,
            },
            jobs,
        }
    }
}
