//! Discipline selection and the run facade.

use clap::ValueEnum;
use schedsim_metrics::{MetricsError, ScheduleMetrics};
use schedsim_simulation::{
    run_fcfs, run_preemptive, LowestPriorityValue, ScheduleOutcome, ShortestRemainingTime,
};
use schedsim_types::ProcessSpec;
use std::fmt;
use tracing::info;

/// The scheduling disciplines the simulator can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Discipline {
    /// First-Come-First-Served (non-preemptive).
    Fcfs,
    /// Shortest-Remaining-Time-First (preemptive SJF).
    Srtf,
    /// Preemptive priority scheduling (lower value = more urgent).
    Priority,
}

impl Discipline {
    /// All disciplines, in report order.
    pub const ALL: [Discipline; 3] = [Discipline::Fcfs, Discipline::Srtf, Discipline::Priority];
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Srtf => "SRTF",
            Discipline::Priority => "Priority",
        };
        write!(f, "{name}")
    }
}

/// One discipline's completed run: schedule outcome plus aggregate metrics.
#[derive(Debug, Clone)]
pub struct DisciplineRun {
    /// Which discipline produced this run.
    pub discipline: Discipline,
    /// Completed records and engine bookkeeping.
    pub outcome: ScheduleOutcome,
    /// Aggregate figures over the completed records.
    pub metrics: ScheduleMetrics,
}

impl DisciplineRun {
    /// Print the per-discipline report block.
    pub fn print_summary(&self) {
        println!("--- {} ---", self.discipline);
        println!(
            "{:>4} {:>8} {:>6} {:>9} {:>8} {:>11}",
            "id", "arrival", "burst", "priority", "waiting", "turnaround"
        );
        for record in &self.outcome.records {
            println!(
                "{:>4} {:>8} {:>6} {:>9} {:>8} {:>11}",
                record.id,
                record.arrival_time,
                record.burst_duration,
                record.priority,
                record.waiting_time,
                record.turnaround_time
            );
        }
        self.metrics.print_summary();
    }
}

/// Runs scheduling disciplines over one validated process list.
///
/// Each run hands an independent copy of the input to the engine, so the
/// disciplines can execute back-to-back (or repeatedly) without observing
/// each other's counters.
pub struct Simulator {
    specs: Vec<ProcessSpec>,
}

impl Simulator {
    /// Create a simulator over a validated process list.
    pub fn new(specs: Vec<ProcessSpec>) -> Self {
        Self { specs }
    }

    /// The process list this simulator runs.
    pub fn specs(&self) -> &[ProcessSpec] {
        &self.specs
    }

    /// Run one discipline and aggregate its metrics.
    pub fn run(&self, discipline: Discipline) -> Result<DisciplineRun, MetricsError> {
        let outcome: ScheduleOutcome = match discipline {
            Discipline::Fcfs => run_fcfs(&self.specs),
            Discipline::Srtf => run_preemptive(&self.specs, &ShortestRemainingTime),
            Discipline::Priority => run_preemptive(&self.specs, &LowestPriorityValue),
        };
        let metrics = ScheduleMetrics::from_records(&outcome.records)?;

        info!(
            discipline = %discipline,
            processes = outcome.records.len(),
            makespan = outcome.makespan(),
            "discipline run complete"
        );

        Ok(DisciplineRun {
            discipline,
            outcome,
            metrics,
        })
    }

    /// Run every discipline in report order.
    pub fn run_all(&self) -> Result<Vec<DisciplineRun>, MetricsError> {
        Discipline::ALL.iter().map(|&d| self.run(d)).collect()
    }
}
