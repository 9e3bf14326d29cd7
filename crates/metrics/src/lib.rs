//! Aggregate performance metrics over a completed schedule.
//!
//! Consumes a record set whose waiting and turnaround times have been
//! populated by a scheduling run and reduces it to three scalars: average
//! waiting time, average turnaround time, and throughput.

use schedsim_types::ProcessRecord;

/// Error raised when metrics are requested for an empty record set.
///
/// Averages over zero records are undefined; the caller is expected to
/// reject empty input before running any schedule, so hitting this is a
/// contract violation upstream, not a recoverable condition here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// No records to aggregate.
    #[error("cannot compute metrics over an empty record set")]
    EmptyRecordSet,
}

/// The three aggregate figures reported per scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleMetrics {
    /// Mean of all records' waiting times.
    pub average_waiting_time: f64,
    /// Mean of all records' turnaround times.
    pub average_turnaround_time: f64,
    /// Completed processes per unit of simulated time, where the time span
    /// is the latest `arrival + turnaround` over all records.
    pub throughput: f64,
}

impl ScheduleMetrics {
    /// Aggregate a completed record set.
    pub fn from_records(records: &[ProcessRecord]) -> Result<Self, MetricsError> {
        if records.is_empty() {
            return Err(MetricsError::EmptyRecordSet);
        }

        let count = records.len() as f64;
        let mut turnaround_total = 0u64;
        let mut waiting_total = 0u64;
        let mut span = 0u64;
        for record in records {
            turnaround_total += record.turnaround_time;
            waiting_total += record.waiting_time;
            span = span.max(record.completion_time());
        }

        Ok(Self {
            average_waiting_time: waiting_total as f64 / count,
            average_turnaround_time: turnaround_total as f64 / count,
            throughput: count / span as f64,
        })
    }

    /// Print the human-readable metrics block.
    pub fn print_summary(&self) {
        println!("Average Turnaround Time: {:.3}", self.average_turnaround_time);
        println!("Average Waiting Time: {:.3}", self.average_waiting_time);
        println!("Throughput: {:.3}", self.throughput);
    }
}
