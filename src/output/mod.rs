//! Output Generation
//!
//! JSON run reports: the final matrix, the cohort, and the centrality table.

pub mod report;

pub use report::{write_report, CentralityRecord, ReportError, RunReport};
