use super::classifier::{has_technical_content, CommunicationSignal};
use crate::simulation::Message;

/// Floor for the technical score, representing baseline competency
const TECHNICAL_FLOOR: f64 = 0.6;
const TECHNICAL_CONTENT_WEIGHT: f64 = 0.1;
const TOOL_CALL_WEIGHT: f64 = 0.2;

/// Average per-message communication points over agent messages, capped at 1.0.
///
/// Callers pass only agent-authored messages. An empty slice scores 0.0.
pub fn assess_communication(agent_messages: &[&Message]) -> f64 {
    if agent_messages.is_empty() {
        return 0.0;
    }

    let total: f64 = agent_messages
        .iter()
        .map(|message| CommunicationSignal::classify(&message.content.to_lowercase()).points())
        .sum();

    (total / agent_messages.len() as f64).min(1.0)
}

/// Score technical language and tool usage across the whole conversation.
///
/// Each message counts at most once per signal, no matter how many
/// terms it contains. The result always lies in [0.6, 1.0].
pub fn assess_technical_accuracy(messages: &[Message]) -> f64 {
    let mut technical_content = 0u32;
    let mut tool_calls = 0u32;

    for message in messages {
        if has_technical_content(&message.content.to_lowercase()) {
            technical_content += 1;
        }
        if message.has_tool_call() {
            tool_calls += 1;
        }
    }

    let raw = technical_content as f64 * TECHNICAL_CONTENT_WEIGHT
        + tool_calls as f64 * TOOL_CALL_WEIGHT;

    raw.min(1.0).max(TECHNICAL_FLOOR)
}

/// Step-function efficiency score from conversation length and outcome
pub fn assess_efficiency(message_count: usize, reward: f64) -> f64 {
    if reward > 0.0 {
        match message_count {
            0..=10 => 1.0,
            11..=20 => 0.8,
            21..=30 => 0.6,
            _ => 0.4,
        }
    } else {
        // Very short failures look like premature termination
        match message_count {
            0..=5 => 0.3,
            6..=15 => 0.5,
            _ => 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn agent(content: &str) -> Message {
        Message::new("assistant", content)
    }

    fn communication(messages: &[Message]) -> f64 {
        let refs: Vec<&Message> = messages.iter().collect();
        assess_communication(&refs)
    }

    #[test]
    fn test_communication_empty_is_zero() {
        assert_eq!(assess_communication(&[]), 0.0);
    }

    #[test]
    fn test_communication_averages_tiers() {
        let messages = vec![
            agent("Please hold on"),   // 1.0
            agent("Next, restart it"), // 0.8
            agent("ok"),               // 0.3
            agent(&"z".repeat(60)),    // 0.5
        ];
        let score = communication(&messages);
        assert!((score - 2.6 / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_communication_is_case_insensitive() {
        assert_eq!(communication(&[agent("I UNDERSTAND")]), 1.0);
    }

    #[test]
    fn test_communication_never_exceeds_one() {
        let messages: Vec<Message> = (0..10).map(|_| agent("please")).collect();
        assert_eq!(communication(&messages), 1.0);
    }

    #[test]
    fn test_technical_floor_without_signals() {
        assert_eq!(assess_technical_accuracy(&[]), 0.6);
        assert_eq!(
            assess_technical_accuracy(&[Message::new("user", "hello")]),
            0.6
        );
    }

    #[test]
    fn test_technical_counts_once_per_message() {
        // Eight terms in one message still count as a single hit
        let loaded = Message::new(
            "assistant",
            "check verify enable disable toggle settings network data",
        );
        let messages: Vec<Message> = (0..7).map(|_| loaded.clone()).collect();
        // 7 * 0.1 = 0.7
        assert!((assess_technical_accuracy(&messages) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_technical_tool_calls_and_cap() {
        let call = Message::new("assistant", "")
            .with_tool_calls(json!([{"name": "a"}, {"name": "b"}]));
        // One increment per message regardless of how many calls it holds
        assert_eq!(assess_technical_accuracy(&[call.clone()]), 0.6);

        let messages: Vec<Message> = (0..4).map(|_| call.clone()).collect();
        assert!((assess_technical_accuracy(&messages) - 0.8).abs() < 1e-9);

        let messages: Vec<Message> = (0..10).map(|_| call.clone()).collect();
        assert_eq!(assess_technical_accuracy(&messages), 1.0);
    }

    #[test]
    fn test_technical_term_and_tool_call_in_same_message() {
        let call = Message::new("assistant", "Let me check your network")
            .with_tool_calls(json!([{"name": "get_line"}]));
        let messages: Vec<Message> = (0..3).map(|_| call.clone()).collect();
        // Each message adds 0.1 + 0.2
        assert!((assess_technical_accuracy(&messages) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_success_table() {
        assert_eq!(assess_efficiency(0, 1.0), 1.0);
        assert_eq!(assess_efficiency(10, 1.0), 1.0);
        assert_eq!(assess_efficiency(11, 1.0), 0.8);
        assert_eq!(assess_efficiency(20, 1.0), 0.8);
        assert_eq!(assess_efficiency(21, 1.0), 0.6);
        assert_eq!(assess_efficiency(30, 1.0), 0.6);
        assert_eq!(assess_efficiency(31, 1.0), 0.4);
    }

    #[test]
    fn test_efficiency_failure_table() {
        assert_eq!(assess_efficiency(0, 0.0), 0.3);
        assert_eq!(assess_efficiency(5, -1.0), 0.3);
        assert_eq!(assess_efficiency(6, 0.0), 0.5);
        assert_eq!(assess_efficiency(15, 0.0), 0.5);
        assert_eq!(assess_efficiency(16, 0.0), 0.2);
    }

    #[test]
    fn test_efficiency_only_fixed_values() {
        let allowed = [1.0, 0.8, 0.6, 0.4, 0.3, 0.5, 0.2];
        for count in 0..50 {
            for reward in [-2.0, 0.0, 0.5, 3.0] {
                assert!(allowed.contains(&assess_efficiency(count, reward)));
            }
        }
    }
}
