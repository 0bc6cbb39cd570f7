use crate::error::{BridgeError, Result};

/// Scheduling policy for job start ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingPolicy {
    /// First-Come-First-Served: candidates in submit-time order
    Fcfs,
    /// Shortest Job First: candidates in walltime order
    Sjf,
    /// Uniformly shuffled candidate order
    Random,
    /// Simplified EASY backfill: admit only jobs no longer than the head job
    EasyBackfill,
    /// Shortest-and-thinnest first: candidates ordered by (walltime, res)
    Filler,
}

impl SchedulingPolicy {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fcfs" => Ok(SchedulingPolicy::Fcfs),
            "sjf" => Ok(SchedulingPolicy::Sjf),
            "random" => Ok(SchedulingPolicy::Random),
            "easy_bf" => Ok(SchedulingPolicy::EasyBackfill),
            "filler" => Ok(SchedulingPolicy::Filler),
            _ => Err(BridgeError::Configuration(format!(
                "unknown scheduling policy: {}",
                s
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SchedulingPolicy::Fcfs => "fcfs",
            SchedulingPolicy::Sjf => "sjf",
            SchedulingPolicy::Random => "random",
            SchedulingPolicy::EasyBackfill => "easy_bf",
            SchedulingPolicy::Filler => "filler",
        }
    }
}
