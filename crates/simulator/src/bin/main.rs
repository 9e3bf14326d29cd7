//! Schedsim CLI
//!
//! Runs classic scheduling disciplines over a process list and reports
//! aggregate metrics for each.
//!
//! # Example
//!
//! ```bash
//! # Run all three disciplines over a process file
//! schedsim processes.txt
//!
//! # Run only the preemptive ones
//! schedsim processes.txt -s srtf -s priority
//! ```

use clap::Parser;
use schedsim_simulator::{parse_process_file, Discipline, Simulator};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Schedsim
///
/// Deterministic CPU-scheduling simulator. Reads one
/// `id,arrival,burst,priority` record per line; blank lines are ignored and
/// malformed lines are skipped.
#[derive(Parser, Debug)]
#[command(name = "schedsim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Process list input file
    input: PathBuf,

    /// Discipline to run; repeatable. Defaults to all three.
    #[arg(short = 's', long = "schedule", value_enum)]
    schedules: Vec<Discipline>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,schedsim_simulator=info")),
        )
        .init();

    let args = Args::parse();

    let specs = match parse_process_file(&args.input) {
        Ok(specs) => specs,
        Err(err) => {
            error!(input = %args.input.display(), %err, "failed to load processes");
            return ExitCode::FAILURE;
        }
    };

    let schedules = if args.schedules.is_empty() {
        Discipline::ALL.to_vec()
    } else {
        args.schedules
    };

    info!(
        processes = specs.len(),
        disciplines = schedules.len(),
        "starting simulation"
    );

    let simulator = Simulator::new(specs);
    for (index, discipline) in schedules.iter().enumerate() {
        match simulator.run(*discipline) {
            Ok(run) => {
                if index > 0 {
                    println!();
                }
                run.print_summary();
            }
            Err(err) => {
                error!(discipline = %discipline, %err, "discipline run failed");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
