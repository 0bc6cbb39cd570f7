pub mod generator;
pub mod job;
pub mod profile;

pub use generator::WorkloadGenerator;
pub use job::Job;
pub use profile::Profile;

/// A complete workload: the job list plus the single execution profile
/// every job references. Built once at start-up and handed to the session.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Workload name, the prefix of every job id
    pub name: String,

    /// Name under which the profile is registered with the simulator
    pub profile_name: String,

    /// The profile body itself
    pub profile: Profile,

    /// Jobs in creation order
    pub jobs: Vec<Job>,
}
