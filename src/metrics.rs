use crate::market::ClearingReport;

pub const CLEARING_RUNS: &str = "clearing_runs_total";
pub const TICKETS_SOLD: &str = "tickets_sold_total";
pub const CONSUMERS_UNSERVED: &str = "consumers_unserved_total";

/// No-op unless the embedding binary installs a recorder.
pub fn record_clearing(report: &ClearingReport) {
    ::metrics::counter!(CLEARING_RUNS).increment(1);
    ::metrics::counter!(TICKETS_SOLD).increment(report.tickets_sold());
    ::metrics::counter!(CONSUMERS_UNSERVED).increment(report.unserved() as u64);
}
