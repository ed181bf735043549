//! Per-message signal detection used by the sub-score assessors

/// Phrases that mark a polite, engaged response
const ENGAGEMENT_PHRASES: [&str; 4] = ["please", "let me help", "i understand", "can you"];

/// Phrases that mark a structured, procedural response
const STRUCTURE_PHRASES: [&str; 4] = ["step by step", "first", "next", "verify"];

/// Terms that mark technical troubleshooting content
const TECHNICAL_TERMS: [&str; 8] = [
    "check", "verify", "enable", "disable", "toggle", "settings", "network", "data",
];

/// Minimum length (in characters) for a response to count as substantive
const SUBSTANTIVE_LENGTH: usize = 50;

/// Communication tier a single agent message falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunicationSignal {
    Engaged,
    Structured,
    Substantive,
    Minimal,
}

impl CommunicationSignal {
    /// Classify already lower-cased content. The first matching tier wins.
    pub fn classify(content: &str) -> Self {
        if contains_any(content, &ENGAGEMENT_PHRASES) {
            CommunicationSignal::Engaged
        } else if contains_any(content, &STRUCTURE_PHRASES) {
            CommunicationSignal::Structured
        } else if content.chars().count() > SUBSTANTIVE_LENGTH {
            CommunicationSignal::Substantive
        } else {
            CommunicationSignal::Minimal
        }
    }

    /// Points this tier contributes to the communication score
    pub fn points(&self) -> f64 {
        match self {
            CommunicationSignal::Engaged => 1.0,
            CommunicationSignal::Structured => 0.8,
            CommunicationSignal::Substantive => 0.5,
            CommunicationSignal::Minimal => 0.3,
        }
    }
}

/// Whether already lower-cased content mentions any technical term
pub fn has_technical_content(content: &str) -> bool {
    contains_any(content, &TECHNICAL_TERMS)
}

fn contains_any(content: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| content.contains(needle))
}
