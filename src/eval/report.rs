//! Plain-text rendering of domain analyses and the cross-domain comparison

use crate::eval::analysis::DomainAnalysis;
use crate::eval::summary::{DatasetSummary, PerformanceTier};
use chrono::{DateTime, Utc};

fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Report banner
pub fn render_header(title: &str, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!(
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push('\n');
    out
}

/// Opening line of a domain section
pub fn render_domain_title(domain: &str) -> String {
    format!("--- {} DOMAIN ANALYSIS ---\n", domain.to_uppercase())
}

/// Body of a domain section for a successful analysis
pub fn render_domain(analysis: &DomainAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("Source: {}\n", analysis.source.display()));

    let Some(summary) = &analysis.summary else {
        out.push_str(&format!("No simulations found for {}\n", analysis.domain));
        out.push('\n');
        return out;
    };

    out.push_str(&format!("Total simulations: {}\n", summary.total_simulations));
    out.push_str(&format!("Success rate: {}\n", percent(summary.success_rate)));
    out.push_str(&format!("Average overall score: {:.3}\n", summary.average_overall_score));
    out.push('\n');

    out.push_str("Component Scores:\n");
    out.push_str(&format!("  Execution: {:.3}\n", summary.average_execution_score));
    out.push_str(&format!("  Communication: {:.3}\n", summary.average_communication_score));
    out.push_str(&format!("  Technical: {:.3}\n", summary.average_technical_score));
    out.push_str(&format!("  Efficiency: {:.3}\n", summary.average_efficiency_score));
    out.push('\n');

    render_distribution(&mut out, summary);

    let agent_messages: usize = analysis.metrics.iter().map(|m| m.agent_message_count).sum();
    let stats = &summary.conversation_stats;
    out.push_str("Conversation Statistics:\n");
    out.push_str(&format!("  Average messages: {:.1}\n", stats.average_message_count));
    out.push_str(&format!(
        "  Average agent messages: {:.1}\n",
        agent_messages as f64 / summary.total_simulations as f64
    ));
    out.push_str(&format!(
        "  Range: {} - {}\n",
        stats.min_message_count, stats.max_message_count
    ));
    out.push('\n');

    if !summary.failure_type_distribution.is_empty() {
        out.push_str("Failure Types:\n");
        for (failure_type, count) in &summary.failure_type_distribution {
            out.push_str(&format!("  {}: {}\n", failure_type, count));
        }
        out.push('\n');
    }

    out
}

fn render_distribution(out: &mut String, summary: &DatasetSummary) {
    out.push_str("Performance Distribution:\n");
    for tier in PerformanceTier::ALL {
        let count = summary.performance_distribution.count(tier);
        out.push_str(&format!(
            "  {}: {} ({})\n",
            tier.label(),
            count,
            percent(count as f64 / summary.total_simulations as f64)
        ));
    }
    out.push('\n');
}

/// Replacement for a domain section whose analysis failed
pub fn render_domain_error(domain: &str, error: &dyn std::fmt::Display) -> String {
    format!("Error analyzing {}: {}\n\n", domain, error)
}

/// Separator printed after every domain section
pub fn render_separator() -> String {
    format!("{}\n\n", "-".repeat(50))
}

/// Rank domains by a summary field, highest first. Ties keep input order.
fn ranked<'a>(
    summaries: &[(&'a str, &'a DatasetSummary)],
    field: fn(&DatasetSummary) -> f64,
) -> Vec<(&'a str, f64)> {
    let mut scores: Vec<(&str, f64)> = summaries.iter().map(|(d, s)| (*d, field(s))).collect();
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));
    scores
}

/// Cross-domain comparison over every domain that produced a summary.
///
/// Rankings need at least two domains; with fewer only the heading is printed.
pub fn render_comparison(analyses: &[DomainAnalysis]) -> String {
    let mut out = String::new();
    out.push_str("CROSS-DOMAIN COMPARISON\n");
    out.push_str(&format!("{}\n", "=".repeat(30)));

    let summaries: Vec<(&str, &DatasetSummary)> = analyses
        .iter()
        .filter_map(|a| a.summary.as_ref().map(|s| (a.domain.as_str(), s)))
        .collect();

    if summaries.len() < 2 {
        return out;
    }

    out.push_str("Overall Scores:\n");
    for (domain, summary) in &summaries {
        out.push_str(&format!("  {}: {:.3}\n", domain, summary.average_overall_score));
    }
    out.push('\n');

    out.push_str("Key Insights:\n");
    let overall = ranked(&summaries, |s| s.average_overall_score);
    let efficiency = ranked(&summaries, |s| s.average_efficiency_score);

    if let (Some(best), Some(worst)) = (overall.first(), overall.last()) {
        out.push_str(&format!("• Best performing domain: {} ({:.3})\n", best.0, best.1));
        out.push_str(&format!("• Most challenging domain: {} ({:.3})\n", worst.0, worst.1));
    }
    if let (Some(best), Some(worst)) = (efficiency.first(), efficiency.last()) {
        out.push_str(&format!("• Most efficient domain: {} ({:.3})\n", best.0, best.1));
        out.push_str(&format!("• Least efficient domain: {} ({:.3})\n", worst.0, worst.1));
    }

    out
}
