//! Run Reports
//!
//! Serializes a completed run (cohort, relationship matrix, centrality table)
//! to a pretty-printed JSON file for downstream analysis.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::components::{RelationshipMatrix, Student};
use crate::network::CentralityMetrics;

/// File name of the report inside the report directory.
pub const REPORT_FILE_NAME: &str = "run_report.json";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Per-student centrality row, keyed by student id.
#[derive(Debug, Clone, Serialize)]
pub struct CentralityRecord {
    pub student_id: u32,
    pub degree: f64,
    pub betweenness: f64,
    pub closeness: f64,
    pub eigenvector: f64,
}

/// Everything a run produces, in one document.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub variant: String,
    pub seed: u64,
    pub days: u32,
    pub edge_threshold: f64,
    pub students: Vec<Student>,
    pub relationship_matrix: Vec<Vec<f64>>,
    pub centrality: Vec<CentralityRecord>,
}

impl RunReport {
    pub fn new(
        variant: &str,
        seed: u64,
        days: u32,
        edge_threshold: f64,
        students: &[Student],
        matrix: &RelationshipMatrix,
        metrics: &CentralityMetrics,
    ) -> Self {
        let centrality = students
            .iter()
            .enumerate()
            .map(|(idx, student)| CentralityRecord {
                student_id: student.id,
                degree: metrics.degree[idx],
                betweenness: metrics.betweenness[idx],
                closeness: metrics.closeness[idx],
                eigenvector: metrics.eigenvector[idx],
            })
            .collect();

        Self {
            variant: variant.to_string(),
            seed,
            days,
            edge_threshold,
            students: students.to_vec(),
            relationship_matrix: matrix.to_rows(),
            centrality,
        }
    }
}

/// Write the report under `dir`, creating the directory if needed.
/// Returns the path of the written file.
pub fn write_report(report: &RunReport, dir: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(REPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json)?;
    info!(path = %path.display(), "wrote run report");
    Ok(path)
}
