//! First-Come-First-Served: non-preemptive, arrival-order dispatch.

use crate::{ScheduleOutcome, SimulationStats};
use schedsim_types::{fresh_records, ProcessSpec};
use tracing::debug;

/// Run the FCFS discipline over an independent copy of the input.
///
/// Records are dispatched in arrival order. The sort is stable, so processes
/// with equal arrival times keep their original input order — this is the
/// deterministic tie-break callers may rely on. No time-stepping is needed:
/// each record's start is `max(previous completion, own arrival)` and the
/// waiting/turnaround arithmetic follows directly.
///
/// The returned records are in dispatch (sorted) order, not input order.
pub fn run_fcfs(specs: &[ProcessSpec]) -> ScheduleOutcome {
    let mut records = fresh_records(specs);
    records.sort_by_key(|r| r.arrival_time);

    let mut previous_completion = 0u64;
    for (index, record) in records.iter_mut().enumerate() {
        let start = if index == 0 {
            record.arrival_time
        } else {
            previous_completion.max(record.arrival_time)
        };
        record.waiting_time = start - record.arrival_time;
        record.turnaround_time = record.waiting_time + record.burst_duration;
        record.remaining_time = 0;
        previous_completion = record.completion_time();
    }

    let busy_ticks: u64 = records.iter().map(|r| r.burst_duration).sum();
    let ticks = previous_completion;
    let stats = SimulationStats {
        ticks,
        idle_ticks: ticks - busy_ticks,
        busy_ticks,
        preemptions: 0,
        completed: records.len(),
    };

    debug!(
        processes = records.len(),
        makespan = ticks,
        "FCFS run complete"
    );

    ScheduleOutcome { records, stats }
}
