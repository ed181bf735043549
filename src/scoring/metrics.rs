use super::assessors::{assess_communication, assess_efficiency, assess_technical_accuracy};
use super::failure::{analyze_failure, FailureAnalysis};
use crate::simulation::{Message, Simulation};
use tracing::debug;

/// All derived scores for one simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationMetrics {
    /// Raw reward, passed through unnormalized
    pub execution_score: f64,
    /// Agent communication quality (0-1)
    pub communication_score: f64,
    /// Technical language and tool usage (0.6-1)
    pub technical_score: f64,
    /// Length-versus-outcome efficiency (fixed step values)
    pub efficiency_score: f64,
    /// Weighted composite of the four scores above
    pub overall_score: f64,
    pub failure_analysis: FailureAnalysis,
    pub message_count: usize,
    pub agent_message_count: usize,
}

impl SimulationMetrics {
    /// Combine the four sub-scores into the composite score
    pub fn calculate_weighted(
        execution: f64,
        communication: f64,
        technical: f64,
        efficiency: f64,
    ) -> f64 {
        // Weights sum to 1.0
        const EXECUTION_WEIGHT: f64 = 0.35;
        const COMMUNICATION_WEIGHT: f64 = 0.25;
        const TECHNICAL_WEIGHT: f64 = 0.25;
        const EFFICIENCY_WEIGHT: f64 = 0.15;

        (execution * EXECUTION_WEIGHT)
            + (communication * COMMUNICATION_WEIGHT)
            + (technical * TECHNICAL_WEIGHT)
            + (efficiency * EFFICIENCY_WEIGHT)
    }
}

/// Score a single simulation
pub fn calculate_metrics(simulation: &Simulation) -> SimulationMetrics {
    let reward = simulation.reward();
    let messages = &simulation.messages;
    let agent_messages: Vec<&Message> = messages.iter().filter(|m| m.is_agent()).collect();

    let execution_score = reward;
    let communication_score = assess_communication(&agent_messages);
    let technical_score = assess_technical_accuracy(messages);
    let efficiency_score = assess_efficiency(messages.len(), reward);
    let overall_score = SimulationMetrics::calculate_weighted(
        execution_score,
        communication_score,
        technical_score,
        efficiency_score,
    );

    debug!(
        "Scored simulation: reward={} communication={:.3} technical={:.3} efficiency={:.1} overall={:.3}",
        reward, communication_score, technical_score, efficiency_score, overall_score
    );

    SimulationMetrics {
        execution_score,
        communication_score,
        technical_score,
        efficiency_score,
        overall_score,
        failure_analysis: analyze_failure(simulation, reward),
        message_count: messages.len(),
        agent_message_count: agent_messages.len(),
    }
}
