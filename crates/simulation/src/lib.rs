//! Deterministic scheduling engines.
//!
//! This crate simulates CPU scheduling over a fixed set of processes. Given
//! the same input it produces identical results every run — there is no
//! randomness, no wall-clock, and no shared state between runs.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     &[ProcessSpec]                       │
//! │            (immutable, validated input list)             │
//! └────────────┬────────────────────────────┬────────────────┘
//!              │                            │
//!              ▼                            ▼
//! ┌────────────────────────┐  ┌────────────────────────────────┐
//! │      fcfs::run         │  │        preemptive::run         │
//! │  sort by arrival, one  │  │  tick loop, one time unit per  │
//! │  pass of arithmetic    │  │  step, SelectionPolicy picks   │
//! │  (non-preemptive)      │  │  the eligible record to run    │
//! └────────────┬───────────┘  └────────────────┬───────────────┘
//!              │                               │
//!              ▼                               ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │   ScheduleOutcome { records, stats }  (fresh per run)    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Both preemptive disciplines (shortest-remaining-time and priority) are
//! instances of the same tick loop, differing only in the selection key.

mod fcfs;
mod outcome;
mod preemptive;

pub use fcfs::run_fcfs;
pub use outcome::{ScheduleOutcome, SimulationStats};
pub use preemptive::{
    run_preemptive, LowestPriorityValue, SelectionPolicy, ShortestRemainingTime,
};
