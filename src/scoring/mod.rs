//! Heuristic scoring of recorded simulations
//!
//! Message-level signals feed three sub-score assessors; those and the raw
//! reward combine into a weighted composite per simulation.

mod assessors;
mod classifier;
mod failure;
mod metrics;

pub use failure::FailureAnalysis;
pub use metrics::{calculate_metrics, SimulationMetrics};
