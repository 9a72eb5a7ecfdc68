//! Progress reporting for the enrichment loop
//!
//! Each enriched record costs several API calls, so callers can follow a
//! search record by record. The CLI drives an `indicatif` bar from these
//! events; the web front-end registers nothing.

/// Upper bound on the records a search reports progress for.
pub const PROGRESS_CEILING: usize = 1000;

/// Progress events emitted while a search runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The search started; at most `total` records will be enriched.
    Started { total: u64 },

    /// One record was enriched and added to the results.
    RecordEnriched { full_name: String },

    /// The search finished with `records` results.
    Finished { records: usize },
}

/// Callback type for receiving progress events.
pub type ProgressCallback = Box<dyn Fn(ProgressEvent) + Send + Sync>;

/// Expected record count of a search capped at `cap`.
#[must_use]
pub fn expected_total(cap: usize) -> u64 {
    cap.min(PROGRESS_CEILING) as u64
}
