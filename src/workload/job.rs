use serde::Serialize;

/// Job represents a single unit of work registered with the simulator.
/// Immutable once created; field names match the wire schema.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    /// Unique job id, "{workload}!jobN"
    pub id: String,

    /// Name of the profile this job executes
    pub profile: String,

    /// Resources required
    pub res: u32,

    /// Maximum run length (simulated seconds)
    pub walltime: f64,

    /// Simulated time at which the job becomes eligible to start
    pub subtime: f64,
}

impl Job {
    pub fn new(id: String, profile: String, res: u32, walltime: f64, subtime: f64) -> Self {
        Self {
            id,
            profile,
            res,
            walltime,
            subtime,
        }
    }

    /// Check whether the job's submit time has arrived
    pub fn is_submitted_by(&self, now: f64) -> bool {
        self.subtime <= now
    }
}
