//! Shared preemptive engine: a discrete tick loop parameterized by a
//! selection policy.
//!
//! Both preemptive disciplines are the same state machine. At every tick the
//! engine scans the record set, dispatches the eligible record with the
//! minimum selection key for exactly one time unit, and charges one tick of
//! waiting time to every other eligible record. The policies differ only in
//! the key they expose.

use crate::{ScheduleOutcome, SimulationStats};
use schedsim_types::{fresh_records, ProcessRecord, ProcessSpec};
use tracing::{debug, trace};

/// Selection rule for the preemptive engine.
///
/// The engine dispatches the eligible record with the minimum key. Keys are
/// only ever read from records with `remaining_time > 0`; a policy never has
/// to encode "already finished" in its key space.
pub trait SelectionPolicy {
    /// Selection key for an eligible record. Lower runs first.
    fn key(&self, record: &ProcessRecord) -> u64;

    /// Policy name, for logging and reports.
    fn name(&self) -> &'static str;
}

/// Shortest-Remaining-Time-First (preemptive SJF).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

impl SelectionPolicy for ShortestRemainingTime {
    fn key(&self, record: &ProcessRecord) -> u64 {
        record.remaining_time
    }

    fn name(&self) -> &'static str {
        "shortest-remaining-time"
    }
}

/// Preemptive priority scheduling; lower priority value = more urgent.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestPriorityValue;

impl SelectionPolicy for LowestPriorityValue {
    fn key(&self, record: &ProcessRecord) -> u64 {
        u64::from(record.priority)
    }

    fn name(&self) -> &'static str {
        "priority"
    }
}

/// Run a preemptive discipline over an independent copy of the input.
///
/// State machine, per tick:
///
/// 1. Scan records in input order. A record is eligible iff it has arrived
///    (`arrival_time <= now`) and still owes CPU time. The eligible record
///    with the minimum key is dispatched; on exact key ties the first record
///    encountered in scan order wins. The tie-break is load-bearing: it
///    decides which of two equal-key processes accumulates waiting time.
/// 2. No eligible record: idle tick. Advance the clock, no bookkeeping.
/// 3. Otherwise the dispatched record executes for one time unit and every
///    other eligible record is charged one tick of waiting time — including
///    records that have never been dispatched.
/// 4. A record reaching `remaining_time == 0` completes: its turnaround is
///    `(now + 1) - arrival` and its waiting time is rewritten with the
///    closed form `turnaround - burst`, which must agree with the
///    incrementally accumulated count.
///
/// Terminates when every record has completed. Callers must have validated
/// the specs ([`ProcessSpec::validate`]): a zero burst would never complete.
pub fn run_preemptive<P: SelectionPolicy>(specs: &[ProcessSpec], policy: &P) -> ScheduleOutcome {
    let mut records = fresh_records(specs);
    let total = records.len();

    let mut stats = SimulationStats::default();
    let mut now = 0u64;
    let mut completed = 0usize;
    let mut last_dispatched: Option<usize> = None;

    debug!(
        policy = policy.name(),
        processes = total,
        "starting preemptive run"
    );

    while completed < total {
        // Minimum-key scan; strict `<` keeps the earliest index on ties.
        let mut selected: Option<(usize, u64)> = None;
        for (index, record) in records.iter().enumerate() {
            if record.arrival_time <= now && record.remaining_time > 0 {
                let key = policy.key(record);
                match selected {
                    Some((_, best)) if key >= best => {}
                    _ => selected = Some((index, key)),
                }
            }
        }

        let Some((index, _)) = selected else {
            // Nothing has arrived yet: idle tick.
            now += 1;
            stats.ticks += 1;
            stats.idle_ticks += 1;
            continue;
        };

        if let Some(previous) = last_dispatched {
            if previous != index && records[previous].remaining_time > 0 {
                stats.preemptions += 1;
            }
        }
        last_dispatched = Some(index);

        records[index].remaining_time -= 1;

        for (other, record) in records.iter_mut().enumerate() {
            if other != index && record.arrival_time <= now && record.remaining_time > 0 {
                record.waiting_time += 1;
            }
        }

        if records[index].remaining_time == 0 {
            completed += 1;
            let record = &mut records[index];
            record.turnaround_time = (now + 1) - record.arrival_time;
            let closed_form = record.turnaround_time - record.burst_duration;
            debug_assert_eq!(
                record.waiting_time, closed_form,
                "accumulated waiting time must agree with turnaround - burst"
            );
            record.waiting_time = closed_form;

            trace!(
                policy = policy.name(),
                id = %record.id,
                finish = now + 1,
                turnaround = record.turnaround_time,
                "process complete"
            );
        }

        now += 1;
        stats.ticks += 1;
        stats.busy_ticks += 1;
    }

    stats.completed = completed;

    debug!(
        policy = policy.name(),
        ticks = stats.ticks,
        idle_ticks = stats.idle_ticks,
        preemptions = stats.preemptions,
        "preemptive run complete"
    );

    ScheduleOutcome { records, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedsim_types::ProcessId;

    fn spec(id: u32, arrival: u64, burst: u64, priority: u32) -> ProcessSpec {
        ProcessSpec {
            id: ProcessId(id),
            arrival_time: arrival,
            burst_duration: burst,
            priority,
        }
    }

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        // Process 1 runs alone until process 2 arrives with a shorter burst.
        let specs = vec![spec(1, 0, 8, 0), spec(2, 1, 4, 0)];
        let outcome = run_preemptive(&specs, &ShortestRemainingTime);

        let short = outcome.record(ProcessId(2)).unwrap();
        assert_eq!(short.waiting_time, 0);
        assert_eq!(short.completion_time(), 5);

        let long = outcome.record(ProcessId(1)).unwrap();
        assert_eq!(long.waiting_time, 4);
        assert_eq!(long.completion_time(), 12);

        assert_eq!(outcome.stats.preemptions, 1);
    }

    #[test]
    fn test_key_tie_goes_to_scan_order() {
        // Equal remaining time at every tick boundary where both are
        // runnable: the earlier index must win, so process 1 finishes first.
        let specs = vec![spec(1, 0, 3, 0), spec(2, 0, 3, 0)];
        let outcome = run_preemptive(&specs, &ShortestRemainingTime);

        // Tick 0 dispatches process 1 (tie at key 3); from then on process 1
        // always holds the strictly smaller remaining time until it
        // completes at tick 3.
        assert_eq!(outcome.record(ProcessId(1)).unwrap().completion_time(), 3);
        assert_eq!(outcome.record(ProcessId(2)).unwrap().completion_time(), 6);
    }

    #[test]
    fn test_priority_runs_to_completion_before_lower() {
        let specs = vec![spec(1, 0, 4, 2), spec(2, 0, 4, 1)];
        let outcome = run_preemptive(&specs, &LowestPriorityValue);

        // Priority 1 (process 2) must finish before priority 2 gets any CPU.
        let urgent = outcome.record(ProcessId(2)).unwrap();
        assert_eq!(urgent.waiting_time, 0);
        assert_eq!(urgent.completion_time(), 4);

        let relaxed = outcome.record(ProcessId(1)).unwrap();
        assert_eq!(relaxed.waiting_time, 4);
        assert_eq!(relaxed.completion_time(), 8);
    }

    #[test]
    fn test_idle_ticks_before_first_arrival() {
        let specs = vec![spec(1, 3, 2, 0)];
        let outcome = run_preemptive(&specs, &ShortestRemainingTime);

        assert_eq!(outcome.stats.idle_ticks, 3);
        assert_eq!(outcome.stats.busy_ticks, 2);
        assert_eq!(outcome.stats.ticks, 5);

        let record = outcome.record(ProcessId(1)).unwrap();
        assert_eq!(record.waiting_time, 0);
        assert_eq!(record.turnaround_time, 2);
    }

    #[test]
    fn test_waiting_accrues_before_first_dispatch() {
        // Process 2 is never dispatched until process 1 completes, yet it
        // accrues waiting time from its arrival onward.
        let specs = vec![spec(1, 0, 5, 1), spec(2, 0, 3, 2)];
        let outcome = run_preemptive(&specs, &LowestPriorityValue);

        assert_eq!(outcome.record(ProcessId(2)).unwrap().waiting_time, 5);
    }

    #[test]
    fn test_work_conservation() {
        let specs = vec![spec(1, 0, 5, 2), spec(2, 2, 3, 1), spec(3, 9, 4, 0)];
        for outcome in [
            run_preemptive(&specs, &ShortestRemainingTime),
            run_preemptive(&specs, &LowestPriorityValue),
        ] {
            let burst_total: u64 = specs.iter().map(|s| s.burst_duration).sum();
            assert_eq!(outcome.stats.busy_ticks, burst_total);
            assert!(outcome.records.iter().all(|r| r.is_complete()));
        }
    }

    #[test]
    fn test_turnaround_invariants() {
        let specs = vec![spec(1, 0, 5, 2), spec(2, 1, 2, 3), spec(3, 1, 7, 1)];
        for outcome in [
            run_preemptive(&specs, &ShortestRemainingTime),
            run_preemptive(&specs, &LowestPriorityValue),
        ] {
            for record in &outcome.records {
                assert_eq!(
                    record.turnaround_time,
                    record.waiting_time + record.burst_duration
                );
                assert!(record.turnaround_time >= record.burst_duration);
            }
        }
    }
}
