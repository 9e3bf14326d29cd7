//! Process input and simulation records.

use crate::ProcessId;

/// Immutable description of a process, as supplied by the input collaborator.
///
/// A spec never changes once parsed. Every simulation run derives its own
/// mutable [`ProcessRecord`]s from the same spec list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Unique identifier, used only for reporting.
    pub id: ProcessId,

    /// Tick at which the process becomes eligible to run.
    pub arrival_time: u64,

    /// Total CPU time the process requires. Must be positive.
    pub burst_duration: u64,

    /// Scheduling priority; lower value = more urgent. Only the Priority
    /// discipline reads it.
    pub priority: u32,
}

impl ProcessSpec {
    /// Validate the spec against the core's preconditions.
    ///
    /// A zero burst duration would stall the preemptive tick loop forever,
    /// so it is rejected here, before any engine sees the record.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.burst_duration == 0 {
            return Err(SpecError::ZeroBurst { id: self.id });
        }
        Ok(())
    }
}

/// Errors raised by process spec validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    /// Burst duration was zero.
    #[error("process {id} has zero burst duration")]
    ZeroBurst {
        /// Offending process.
        id: ProcessId,
    },
}

/// Per-run mutable state of one process.
///
/// Created fresh from a [`ProcessSpec`] at the start of each run; the
/// counters are meaningless until the run completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessRecord {
    /// Unique identifier, copied from the spec.
    pub id: ProcessId,

    /// Arrival tick, copied from the spec.
    pub arrival_time: u64,

    /// Total CPU requirement, copied from the spec.
    pub burst_duration: u64,

    /// Priority value, copied from the spec.
    pub priority: u32,

    /// CPU time still owed. Starts at `burst_duration`, reaches 0 at
    /// completion. Monotonically non-increasing during a run.
    pub remaining_time: u64,

    /// Ticks spent eligible but not running.
    pub waiting_time: u64,

    /// Ticks from arrival to completion (waiting + execution).
    pub turnaround_time: u64,
}

impl ProcessRecord {
    /// Build a fresh record for one run.
    pub fn new(spec: &ProcessSpec) -> Self {
        Self {
            id: spec.id,
            arrival_time: spec.arrival_time,
            burst_duration: spec.burst_duration,
            priority: spec.priority,
            remaining_time: spec.burst_duration,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Whether the process has consumed its full burst.
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Completion tick, defined once the run has finished this process.
    pub fn completion_time(&self) -> u64 {
        self.arrival_time + self.turnaround_time
    }
}

/// Build an independent record set for one simulation run.
///
/// Each discipline gets its own copy; runs never alias state.
pub fn fresh_records(specs: &[ProcessSpec]) -> Vec<ProcessRecord> {
    specs.iter().map(ProcessRecord::new).collect()
}
