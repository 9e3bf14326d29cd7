//! Schedsim simulator shell.
//!
//! The collaborator layer around the simulation engines: loads a process
//! list from disk, runs each scheduling discipline against an independent
//! copy of it, and renders the per-discipline reports. The engines
//! themselves live in `schedsim-simulation`; nothing in this crate makes a
//! scheduling decision.
//!
//! # Example
//!
//! ```ignore
//! use schedsim_simulator::{parse_process_file, Simulator};
//!
//! let specs = parse_process_file("processes.txt")?;
//! let simulator = Simulator::new(specs);
//! for run in simulator.run_all()? {
//!     run.print_summary();
//! }
//! ```

mod input;
mod runner;

pub use input::{parse_process_file, InputError};
pub use runner::{Discipline, DisciplineRun, Simulator};
