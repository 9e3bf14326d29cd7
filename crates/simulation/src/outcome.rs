//! Per-run output: completed records plus engine bookkeeping.

use schedsim_types::{ProcessId, ProcessRecord};

/// Statistics collected during one simulation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimulationStats {
    /// Total clock advances, idle or busy. Equals the final clock value.
    pub ticks: u64,
    /// Ticks where no process was eligible.
    pub idle_ticks: u64,
    /// Ticks where a process executed.
    pub busy_ticks: u64,
    /// Ticks where the dispatched process changed while the previously
    /// dispatched one was still runnable.
    pub preemptions: u64,
    /// Processes driven to completion.
    pub completed: usize,
}

impl SimulationStats {
    /// Fraction of the clock span spent executing (busy / total).
    pub fn cpu_utilization(&self) -> f64 {
        if self.ticks == 0 {
            1.0
        } else {
            self.busy_ticks as f64 / self.ticks as f64
        }
    }
}

/// Result of one scheduling run: the mutated record set and run statistics.
///
/// Records carry populated `waiting_time` / `turnaround_time`. Their order is
/// discipline-specific (FCFS returns dispatch order; the preemptive engine
/// keeps input order) — callers needing a particular order should look
/// records up by id.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Completed process records.
    pub records: Vec<ProcessRecord>,
    /// Engine bookkeeping for this run.
    pub stats: SimulationStats,
}

impl ScheduleOutcome {
    /// Look up a record by process id.
    pub fn record(&self, id: ProcessId) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Latest completion tick across all records.
    pub fn makespan(&self) -> u64 {
        self.records
            .iter()
            .map(|r| r.completion_time())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_utilization() {
        let stats = SimulationStats {
            ticks: 10,
            idle_ticks: 2,
            busy_ticks: 8,
            preemptions: 0,
            completed: 3,
        };
        assert!((stats.cpu_utilization() - 0.8).abs() < f64::EPSILON);

        // An empty run never divides by zero.
        assert_eq!(SimulationStats::default().cpu_utilization(), 1.0);
    }
}
