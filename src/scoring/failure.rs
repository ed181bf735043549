use crate::simulation::Simulation;
use std::fmt;

/// Conversations shorter than this that the user stopped count as premature
const PREMATURE_MESSAGE_LIMIT: usize = 5;
/// Conversations longer than this that the user stopped count as extended
const EXTENDED_MESSAGE_LIMIT: usize = 30;

/// Category of an unsuccessful simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// User stopped a very short conversation
    PrematureTermination,
    /// User stopped after a long conversation without resolution
    ExtendedFailure,
    /// User stopped a mid-length conversation
    ExecutionTiming,
    /// Conversation hit the turn limit
    TimeoutFailure,
    /// Any other termination reason
    UnknownFailure { termination_reason: String },
}

impl FailureType {
    /// Stable label used for histograms and reports
    pub fn label(&self) -> &'static str {
        match self {
            FailureType::PrematureTermination => "premature_termination",
            FailureType::ExtendedFailure => "extended_failure",
            FailureType::ExecutionTiming => "execution_timing",
            FailureType::TimeoutFailure => "timeout_failure",
            FailureType::UnknownFailure { .. } => "unknown_failure",
        }
    }

    /// Human-readable explanation
    pub fn reason(&self) -> String {
        match self {
            FailureType::PrematureTermination => "Conversation ended too early".to_string(),
            FailureType::ExtendedFailure => "Long conversation without resolution".to_string(),
            FailureType::ExecutionTiming => {
                "User stopped despite ongoing conversation".to_string()
            }
            FailureType::TimeoutFailure => "Reached maximum conversation length".to_string(),
            FailureType::UnknownFailure { termination_reason } => {
                format!("Terminated due to: {}", termination_reason)
            }
        }
    }
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome classification for one simulation
#[derive(Debug, Clone, PartialEq)]
pub enum FailureAnalysis {
    Success,
    Failure {
        failure_type: FailureType,
        termination_reason: String,
        message_count: usize,
        duration: f64,
    },
}

impl FailureAnalysis {
    /// `None` exactly when the simulation succeeded
    pub fn failure_type(&self) -> Option<&FailureType> {
        match self {
            FailureAnalysis::Success => None,
            FailureAnalysis::Failure { failure_type, .. } => Some(failure_type),
        }
    }

    pub fn failure_reason(&self) -> String {
        match self {
            FailureAnalysis::Success => "Success".to_string(),
            FailureAnalysis::Failure { failure_type, .. } => failure_type.reason(),
        }
    }
}

/// Classify why a simulation failed, or report success when the reward is positive
pub fn analyze_failure(simulation: &Simulation, reward: f64) -> FailureAnalysis {
    if reward > 0.0 {
        return FailureAnalysis::Success;
    }

    let message_count = simulation.messages.len();
    let termination_reason = simulation.termination_reason.clone();

    let failure_type = match termination_reason.as_str() {
        "user_stop" if message_count < PREMATURE_MESSAGE_LIMIT => {
            FailureType::PrematureTermination
        }
        "user_stop" if message_count > EXTENDED_MESSAGE_LIMIT => FailureType::ExtendedFailure,
        "user_stop" => FailureType::ExecutionTiming,
        "max_turns" => FailureType::TimeoutFailure,
        other => FailureType::UnknownFailure {
            termination_reason: other.to_string(),
        },
    };

    FailureAnalysis::Failure {
        failure_type,
        termination_reason,
        message_count,
        duration: simulation.duration,
    }
}
