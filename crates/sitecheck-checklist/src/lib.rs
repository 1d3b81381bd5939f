//! Sitecheck Checklist: the pure aggregator
//!
//! Deterministic, side-effect-free functions over a report's selected
//! activities and recorded responses: expected totals, answered counts,
//! completion ratios, NC status classification, and per-category stats.
//! Safe to re-run on every render or filter pass.

pub mod stats;
pub mod status;
pub mod totals;

pub use stats::ReportStats;
pub use status::NcStatus;
pub use totals::{answered_count, total_expected, Completion};
