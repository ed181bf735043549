use crate::scoring::SimulationMetrics;

/// Performance bucket for a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl PerformanceTier {
    pub const ALL: [PerformanceTier; 4] = [
        PerformanceTier::Excellent,
        PerformanceTier::Good,
        PerformanceTier::Acceptable,
        PerformanceTier::Poor,
    ];

    /// Lower bounds are inclusive; anything below 0.4 is poor
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            PerformanceTier::Excellent
        } else if score >= 0.6 {
            PerformanceTier::Good
        } else if score >= 0.4 {
            PerformanceTier::Acceptable
        } else {
            PerformanceTier::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::Good => "Good",
            PerformanceTier::Acceptable => "Acceptable",
            PerformanceTier::Poor => "Poor",
        }
    }
}

/// Count of simulations in each performance tier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceDistribution {
    pub excellent: usize,
    pub good: usize,
    pub acceptable: usize,
    pub poor: usize,
}

impl PerformanceDistribution {
    pub fn record(&mut self, tier: PerformanceTier) {
        match tier {
            PerformanceTier::Excellent => self.excellent += 1,
            PerformanceTier::Good => self.good += 1,
            PerformanceTier::Acceptable => self.acceptable += 1,
            PerformanceTier::Poor => self.poor += 1,
        }
    }

    pub fn count(&self, tier: PerformanceTier) -> usize {
        match tier {
            PerformanceTier::Excellent => self.excellent,
            PerformanceTier::Good => self.good,
            PerformanceTier::Acceptable => self.acceptable,
            PerformanceTier::Poor => self.poor,
        }
    }
}

/// Message-count statistics across a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationStats {
    pub average_message_count: f64,
    pub min_message_count: usize,
    pub max_message_count: usize,
}

/// Aggregate statistics over all simulations of one domain
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub total_simulations: usize,
    pub average_execution_score: f64,
    pub average_communication_score: f64,
    pub average_technical_score: f64,
    pub average_efficiency_score: f64,
    pub average_overall_score: f64,
    pub performance_distribution: PerformanceDistribution,
    /// (failure label, count) in order of first appearance. Successes are not included.
    pub failure_type_distribution: Vec<(&'static str, usize)>,
    pub conversation_stats: ConversationStats,
    /// Fraction of simulations with a positive reward
    pub success_rate: f64,
}

/// Summarize per-simulation metrics. Returns `None` for an empty dataset.
pub fn summarize(metrics: &[SimulationMetrics]) -> Option<DatasetSummary> {
    let first = metrics.first()?;
    let total = metrics.len();
    let mean = |field: fn(&SimulationMetrics) -> f64| -> f64 {
        metrics.iter().map(field).sum::<f64>() / total as f64
    };

    let mut performance_distribution = PerformanceDistribution::default();
    let mut failure_type_distribution: Vec<(&'static str, usize)> = Vec::new();
    let mut min_message_count = first.message_count;
    let mut max_message_count = first.message_count;
    let mut message_total = 0usize;
    let mut successes = 0usize;

    for m in metrics {
        performance_distribution.record(PerformanceTier::from_score(m.overall_score));

        if let Some(failure_type) = m.failure_analysis.failure_type() {
            let label = failure_type.label();
            match failure_type_distribution.iter_mut().find(|(l, _)| *l == label) {
                Some((_, count)) => *count += 1,
                None => failure_type_distribution.push((label, 1)),
            }
        }

        min_message_count = min_message_count.min(m.message_count);
        max_message_count = max_message_count.max(m.message_count);
        message_total += m.message_count;

        if m.execution_score > 0.0 {
            successes += 1;
        }
    }

    Some(DatasetSummary {
        total_simulations: total,
        average_execution_score: mean(|m| m.execution_score),
        average_communication_score: mean(|m| m.communication_score),
        average_technical_score: mean(|m| m.technical_score),
        average_efficiency_score: mean(|m| m.efficiency_score),
        average_overall_score: mean(|m| m.overall_score),
        performance_distribution,
        failure_type_distribution,
        conversation_stats: ConversationStats {
            average_message_count: message_total as f64 / total as f64,
            min_message_count,
            max_message_count,
        },
        success_rate: successes as f64 / total as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{calculate_metrics, FailureAnalysis};
    use crate::simulation::{Message, Simulation};

    fn metrics_for(reward: f64, message_count: usize, reason: &str) -> SimulationMetrics {
        let messages = (0..message_count)
            .map(|i| {
                if i % 2 == 0 {
                    Message::new("user", "hello")
                } else {
                    Message::new("assistant", "Please check your network settings")
                }
            })
            .collect();
        calculate_metrics(&Simulation::new(reward, messages).with_termination(reason))
    }

    #[test]
    fn test_empty_dataset_has_no_summary() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_success_rate() {
        let metrics = vec![
            metrics_for(1.0, 4, "user_stop"),
            metrics_for(-1.0, 4, "user_stop"),
            metrics_for(0.0, 4, "user_stop"),
        ];
        let summary = summarize(&metrics).unwrap();
        assert!((summary.success_rate - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.total_simulations, 3);
    }

    #[test]
    fn test_identical_records() {
        let record = metrics_for(1.0, 7, "user_stop");
        let metrics = vec![record.clone(); 5];
        let summary = summarize(&metrics).unwrap();

        assert!((summary.average_execution_score - record.execution_score).abs() < 1e-12);
        assert!((summary.average_communication_score - record.communication_score).abs() < 1e-12);
        assert!((summary.average_technical_score - record.technical_score).abs() < 1e-12);
        assert!((summary.average_efficiency_score - record.efficiency_score).abs() < 1e-12);
        assert!((summary.average_overall_score - record.overall_score).abs() < 1e-12);
        assert_eq!(summary.conversation_stats.min_message_count, 7);
        assert_eq!(summary.conversation_stats.max_message_count, 7);
        assert_eq!(summary.conversation_stats.average_message_count, 7.0);

        let tier = PerformanceTier::from_score(record.overall_score);
        for other in PerformanceTier::ALL {
            let expected = if other == tier { 5 } else { 0 };
            assert_eq!(summary.performance_distribution.count(other), expected);
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(PerformanceTier::from_score(0.8), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_score(2.5), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_score(0.7999), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_score(0.6), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_score(0.5999), PerformanceTier::Acceptable);
        assert_eq!(PerformanceTier::from_score(0.4), PerformanceTier::Acceptable);
        assert_eq!(PerformanceTier::from_score(0.3999), PerformanceTier::Poor);
        assert_eq!(PerformanceTier::from_score(-4.0), PerformanceTier::Poor);
    }

    #[test]
    fn test_failure_histogram_excludes_successes() {
        let metrics = vec![
            metrics_for(1.0, 4, "user_stop"),
            metrics_for(0.0, 2, "user_stop"),
            metrics_for(0.0, 3, "user_stop"),
            metrics_for(0.0, 12, "max_turns"),
            metrics_for(0.0, 12, "crashed"),
        ];
        let summary = summarize(&metrics).unwrap();

        assert_eq!(
            summary.failure_type_distribution,
            vec![
                ("premature_termination", 2),
                ("timeout_failure", 1),
                ("unknown_failure", 1)
            ]
        );
        assert_eq!(summary.conversation_stats.min_message_count, 2);
        assert_eq!(summary.conversation_stats.max_message_count, 12);
    }

    #[test]
    fn test_failure_histogram_keeps_first_seen_order() {
        let metrics = vec![
            metrics_for(0.0, 12, "max_turns"),
            metrics_for(0.0, 40, "user_stop"),
            metrics_for(0.0, 2, "user_stop"),
            metrics_for(0.0, 12, "max_turns"),
        ];
        let summary = summarize(&metrics).unwrap();
        let labels: Vec<&str> = summary
            .failure_type_distribution
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(
            labels,
            vec!["timeout_failure", "extended_failure", "premature_termination"]
        );
        assert_eq!(summary.failure_type_distribution[0], ("timeout_failure", 2));
    }

    #[test]
    fn test_all_successes_have_empty_histogram() {
        let metrics = vec![metrics_for(1.0, 4, "user_stop"); 3];
        let summary = summarize(&metrics).unwrap();
        assert!(summary.failure_type_distribution.is_empty());
        assert_eq!(metrics[0].failure_analysis, FailureAnalysis::Success);
        assert_eq!(summary.success_rate, 1.0);
    }
}
