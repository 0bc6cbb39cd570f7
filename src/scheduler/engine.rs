use super::policy::SchedulingPolicy;
use crate::workload::Job;
use ordered_float::OrderedFloat;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::HashSet;

/// Maps (candidate jobs, executed set, current time) to an ordered list of
/// jobs to start now. Never mutates jobs; the only state is the rng backing
/// the random policy, which is seeded explicitly so tests can pin a
/// permutation.
pub struct PolicyEngine {
    policy: SchedulingPolicy,
    rng: StdRng,
}

impl PolicyEngine {
    pub fn new(policy: SchedulingPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { policy, rng }
    }

    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    /// Select jobs to start at `now`, in start order.
    ///
    /// A candidate is any job whose submit time has arrived and whose id is
    /// not in `executed`. Returned jobs may still be skipped by the caller
    /// if they are unregistered or already executed; that double-check is
    /// the session's responsibility.
    pub fn select<'a>(
        &mut self,
        jobs: &'a [Job],
        executed: &HashSet<String>,
        now: f64,
    ) -> Vec<&'a Job> {
        let candidates: Vec<&Job> = jobs
            .iter()
            .filter(|job| job.is_submitted_by(now) && !executed.contains(&job.id))
            .collect();

        match self.policy {
            SchedulingPolicy::Fcfs => {
                let mut selected = candidates;
                selected.sort_by_key(|job| OrderedFloat(job.subtime));
                selected
            }
            SchedulingPolicy::Sjf => {
                let mut selected = candidates;
                selected.sort_by_key(|job| OrderedFloat(job.walltime));
                selected
            }
            SchedulingPolicy::Random => {
                let mut selected = candidates;
                selected.shuffle(&mut self.rng);
                selected
            }
            SchedulingPolicy::EasyBackfill => Self::easy_backfill(candidates),
            SchedulingPolicy::Filler => {
                let mut selected = candidates;
                selected.sort_by_key(|job| (OrderedFloat(job.walltime), job.res));
                selected
            }
        }
    }

    /// Admission filter around the priority job: the head (earliest-submitted
    /// candidate) starts, and only candidates that would not outlast it are
    /// let through behind it. No reservation table, no resource shapes.
    fn easy_backfill(candidates: Vec<&Job>) -> Vec<&Job> {
        let Some(head) = candidates
            .iter()
            .copied()
            .min_by_key(|job| OrderedFloat(job.subtime))
        else {
            return Vec::new();
        };

        let mut selected = vec![head];
        for job in candidates {
            if job.id != head.id && job.walltime <= head.walltime {
                selected.push(job);
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, walltime: f64, subtime: f64) -> Job {
        Job::new(id.to_string(), "delay_15s".to_string(), 1, walltime, subtime)
    }

    fn job_res(id: &str, walltime: f64, subtime: f64, res: u32) -> Job {
        Job::new(id.to_string(), "delay_15s".to_string(), res, walltime, subtime)
    }

    fn ids(selected: &[&Job]) -> Vec<String> {
        selected.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn test_fcfs_orders_by_subtime() {
        let jobs = vec![job("a", 10.0, 3.0), job("b", 10.0, 1.0), job("c", 10.0, 2.0)];
        let mut engine = PolicyEngine::new(SchedulingPolicy::Fcfs, None);

        let selected = engine.select(&jobs, &HashSet::new(), 10.0);
        assert_eq!(ids(&selected), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_fcfs_tie_break_is_stable() {
        let jobs = vec![job("a", 10.0, 1.0), job("b", 10.0, 1.0), job("c", 10.0, 0.0)];
        let mut engine = PolicyEngine::new(SchedulingPolicy::Fcfs, None);

        let selected = engine.select(&jobs, &HashSet::new(), 10.0);
        assert_eq!(ids(&selected), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sjf_orders_by_walltime() {
        let jobs = vec![job("a", 40.0, 0.0), job("b", 10.0, 0.0), job("c", 25.0, 0.0)];
        let mut engine = PolicyEngine::new(SchedulingPolicy::Sjf, None);

        let selected = engine.select(&jobs, &HashSet::new(), 0.0);
        assert_eq!(ids(&selected), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_candidates_respect_subtime() {
        let jobs = vec![job("a", 10.0, 0.0), job("b", 10.0, 5.0), job("c", 10.0, 2.0)];
        let mut engine = PolicyEngine::new(SchedulingPolicy::Fcfs, None);

        let selected = engine.select(&jobs, &HashSet::new(), 2.0);
        assert_eq!(ids(&selected), vec!["a", "c"]);
    }

    #[test]
    fn test_candidates_exclude_executed() {
        let jobs = vec![job("a", 10.0, 0.0), job("b", 10.0, 0.0)];
        let executed: HashSet<String> = ["a".to_string()].into_iter().collect();
        let mut engine = PolicyEngine::new(SchedulingPolicy::Fcfs, None);

        let selected = engine.select(&jobs, &executed, 0.0);
        assert_eq!(ids(&selected), vec!["b"]);
    }

    #[test]
    fn test_easy_backfill_admission() {
        // Head submitted first with walltime 50; the 80 job must be excluded.
        let jobs = vec![
            job("head", 50.0, 0.0),
            job("a", 80.0, 1.0),
            job("b", 30.0, 2.0),
            job("c", 50.0, 3.0),
            job("d", 10.0, 4.0),
        ];
        let mut engine = PolicyEngine::new(SchedulingPolicy::EasyBackfill, None);

        let selected = engine.select(&jobs, &HashSet::new(), 10.0);
        assert_eq!(ids(&selected), vec!["head", "b", "c", "d"]);
    }

    #[test]
    fn test_easy_backfill_head_by_subtime_not_list_order() {
        let jobs = vec![job("late", 5.0, 3.0), job("early", 20.0, 1.0)];
        let mut engine = PolicyEngine::new(SchedulingPolicy::EasyBackfill, None);

        let selected = engine.select(&jobs, &HashSet::new(), 10.0);
        assert_eq!(ids(&selected), vec!["early", "late"]);
    }

    #[test]
    fn test_easy_backfill_empty_candidates() {
        let jobs = vec![job("a", 10.0, 5.0)];
        let mut engine = PolicyEngine::new(SchedulingPolicy::EasyBackfill, None);

        let selected = engine.select(&jobs, &HashSet::new(), 0.0);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_filler_orders_by_walltime_then_res() {
        let jobs = vec![
            job_res("a", 20.0, 0.0, 4),
            job_res("b", 20.0, 0.0, 2),
            job_res("c", 10.0, 0.0, 8),
        ];
        let mut engine = PolicyEngine::new(SchedulingPolicy::Filler, None);

        let selected = engine.select(&jobs, &HashSet::new(), 0.0);
        assert_eq!(ids(&selected), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_random_is_a_permutation() {
        let jobs: Vec<Job> = (0..8).map(|i| job(&format!("j{}", i), 10.0, 0.0)).collect();
        let mut engine = PolicyEngine::new(SchedulingPolicy::Random, Some(42));

        let selected = engine.select(&jobs, &HashSet::new(), 0.0);
        assert_eq!(selected.len(), 8);

        let mut seen: Vec<String> = ids(&selected);
        seen.sort();
        let mut expected: Vec<String> = jobs.iter().map(|j| j.id.clone()).collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_random_deterministic_for_fixed_seed() {
        let jobs: Vec<Job> = (0..8).map(|i| job(&format!("j{}", i), 10.0, 0.0)).collect();

        let mut first = PolicyEngine::new(SchedulingPolicy::Random, Some(7));
        let mut second = PolicyEngine::new(SchedulingPolicy::Random, Some(7));

        let a = ids(&first.select(&jobs, &HashSet::new(), 0.0));
        let b = ids(&second.select(&jobs, &HashSet::new(), 0.0));
        assert_eq!(a, b);
    }
}
