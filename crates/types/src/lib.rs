//! Core types for the schedsim scheduling simulator.
//!
//! This crate provides the foundational types used throughout the simulator:
//!
//! - **Identifiers**: [`ProcessId`]
//! - **Input records**: [`ProcessSpec`], validated before entering any engine
//! - **Simulation records**: [`ProcessRecord`], the per-run mutable state
//!
//! # Design Philosophy
//!
//! This crate is self-contained with minimal dependencies. It does not depend
//! on any other workspace crates, making it the foundation layer.
//!
//! Simulation runs never share records: each scheduling discipline receives
//! its own fresh set of [`ProcessRecord`]s built from the immutable
//! [`ProcessSpec`] list (see [`fresh_records`]), so no run can observe stale
//! counters from a previous run.

mod identifiers;
mod process;

pub use identifiers::ProcessId;
pub use process::{fresh_records, ProcessRecord, ProcessSpec, SpecError};
