use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Scheduling policy: "fcfs", "sjf", "random", "easy_bf", "filler"
    pub policy: String,

    /// Seed for the random policy's permutation.
    /// When absent the shuffle order differs run to run.
    #[serde(default)]
    pub seed: Option<u64>,
}
