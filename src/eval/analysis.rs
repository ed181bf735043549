//! Loads one domain's simulation file and scores every simulation in it

use crate::eval::summary::{summarize, DatasetSummary};
use crate::scoring::{calculate_metrics, FailureAnalysis, SimulationMetrics};
use crate::simulation::SimulationFile;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that abort the analysis of a single domain
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Scored simulations and summary for one domain
#[derive(Debug, Clone)]
pub struct DomainAnalysis {
    /// Domain label, e.g. "Retail"
    pub domain: String,
    /// File the simulations were read from
    pub source: PathBuf,
    /// Per-simulation metrics in input order
    pub metrics: Vec<SimulationMetrics>,
    /// `None` when the file held no simulations
    pub summary: Option<DatasetSummary>,
    pub total_simulations: usize,
}

impl DomainAnalysis {
    /// Score an already parsed simulation file
    pub fn from_file(domain: &str, source: &Path, file: &SimulationFile) -> Self {
        let metrics: Vec<SimulationMetrics> =
            file.simulations.iter().map(calculate_metrics).collect();

        for (index, m) in metrics.iter().enumerate() {
            if let FailureAnalysis::Failure {
                failure_type,
                termination_reason,
                message_count,
                duration,
            } = &m.failure_analysis
            {
                debug!(
                    "[{}] simulation #{} failed: {} - {} (termination={}, {} messages, {:.1}s)",
                    domain,
                    index,
                    failure_type,
                    m.failure_analysis.failure_reason(),
                    termination_reason,
                    message_count,
                    duration
                );
            }
        }

        let summary = summarize(&metrics);

        Self {
            domain: domain.to_string(),
            source: source.to_path_buf(),
            total_simulations: file.simulations.len(),
            metrics,
            summary,
        }
    }
}

/// Read, parse and score a simulation file.
///
/// Any malformed record fails the whole file.
pub fn analyze_simulation_file(
    domain: &str,
    path: &Path,
) -> Result<DomainAnalysis, AnalysisError> {
    info!("Analyzing {} simulations from {:?}", domain, path);

    let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let file: SimulationFile =
        serde_json::from_str(&content).map_err(|source| AnalysisError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let analysis = DomainAnalysis::from_file(domain, path, &file);

    info!(
        "Scored {} simulations for {}",
        analysis.total_simulations, domain
    );

    Ok(analysis)
}
