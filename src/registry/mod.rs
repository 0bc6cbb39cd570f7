use crate::workload::Job;
use std::collections::HashSet;

/// In-memory table of jobs-to-schedule with per-job lifecycle flags.
///
/// Two monotonically-growing sets over job ids: `registered` (the simulator
/// has been told about the job) and `executed` (a start instruction has been
/// sent). `executed` is always a subset of `registered`. Pure bookkeeping;
/// one instance per session, never shared.
#[derive(Debug)]
pub struct JobRegistry {
    jobs: Vec<Job>,
    registered: HashSet<String>,
    executed: HashSet<String>,
}

impl JobRegistry {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            registered: HashSet::new(),
            executed: HashSet::new(),
        }
    }

    /// All jobs in stable creation order
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registered.contains(id)
    }

    /// Mark a job as registered. Returns true only on the first call for
    /// this id, so duplicate attempts are silent no-ops.
    pub fn mark_registered(&mut self, id: &str) -> bool {
        self.registered.insert(id.to_string())
    }

    pub fn is_executed(&self, id: &str) -> bool {
        self.executed.contains(id)
    }

    /// Mark a job as executed. Returns true only on the first call for
    /// this id.
    pub fn mark_executed(&mut self, id: &str) -> bool {
        self.executed.insert(id.to_string())
    }

    /// True iff every known job has been registered
    pub fn all_registered(&self) -> bool {
        self.registered.len() == self.jobs.len()
    }

    /// Ids with a start instruction already sent
    pub fn executed(&self) -> &HashSet<String> {
        &self.executed
    }

    pub fn num_jobs(&self) -> usize {
        self.jobs.len()
    }
}
