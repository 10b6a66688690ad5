//! Human-readable rendering of analysis reports.
//!
//! Pure string builders so rendering stays testable; the CLI owns stdout.

use std::fmt::Write;

use crate::algo::analyze::AnalysisReport;
use crate::algo::quality::QualityIssues;

/// Output format for the analyze command.
#[derive(Debug, Clone, Copy)]
pub enum Format {
    Summary,
    Detailed,
    Json,
}

impl Format {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "summary" => Some(Self::Summary),
            "detailed" => Some(Self::Detailed),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn all_names() -> &'static [&'static str] {
        &["summary", "detailed", "json"]
    }
}

/// Short overview: corpus counts, distribution digest, issue tallies, top
/// tags, recommendations.
pub fn summary(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let stats = &report.basic_stats;

    let _ = writeln!(out, "Tag Analysis Summary");
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(out, "Total items: {}", stats.total_items);
    let _ = writeln!(out, "Total tags assigned: {}", stats.total_tags);
    let _ = writeln!(out, "Unique tags: {}", stats.unique_tags);
    let _ = writeln!(
        out,
        "Average tags per item: {:.1}",
        stats.avg_tags_per_item
    );
    let _ = writeln!(
        out,
        "Uncategorized items: {} ({:.1}%)",
        stats.uncategorized_items, stats.uncategorized_percentage
    );

    if let Some(dist) = &report.distribution_analysis {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Singleton tags: {} ({:.1}%)",
            dist.singleton_count, dist.singleton_percentage
        );
        let _ = writeln!(
            out,
            "Top 10 tag concentration: {:.1}%",
            dist.top_10_concentration
        );
    }

    let issue_tallies = tallies(&report.quality_issues);
    if issue_tallies.iter().any(|&(_, n)| n > 0) {
        let _ = writeln!(out);
        let _ = writeln!(out, "Potential issues:");
        for (name, n) in issue_tallies {
            if n > 0 {
                let _ = writeln!(out, "  - {name}: {n} instances");
            }
        }
    }

    if let Some(dist) = &report.distribution_analysis {
        if !dist.most_common_tags.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Top 10 tags:");
            for (i, share) in dist.most_common_tags.iter().take(10).enumerate() {
                let _ = writeln!(
                    out,
                    "  {}. {} ({} items, {:.1}%)",
                    i + 1,
                    share.tag,
                    share.count,
                    share.percentage
                );
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations:");
    for rec in &report.recommendations {
        let _ = writeln!(out, "  - {rec}");
    }

    out
}

/// Summary plus per-category examples and the relationship sections.
pub fn detailed(report: &AnalysisReport) -> String {
    let mut out = summary(report);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "=".repeat(60));

    let quality = &report.quality_issues;
    let sections: [(&str, Vec<(&str, usize)>); 5] = [
        (
            "Long tags",
            quality
                .long_tags
                .iter()
                .map(|t| (t.tag.as_str(), t.count))
                .collect(),
        ),
        (
            "Multi-word tags",
            quality
                .multi_word_tags
                .iter()
                .map(|t| (t.tag.as_str(), t.count))
                .collect(),
        ),
        (
            "Special characters",
            quality
                .special_characters
                .iter()
                .map(|t| (t.tag.as_str(), t.count))
                .collect(),
        ),
        (
            "Potential proper nouns",
            quality
                .potential_proper_nouns
                .iter()
                .map(|t| (t.tag.as_str(), t.count))
                .collect(),
        ),
        (
            "Very specific tags",
            quality
                .very_specific_tags
                .iter()
                .map(|t| (t.tag.as_str(), t.count))
                .collect(),
        ),
    ];

    for (name, examples) in sections {
        if examples.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{name}:");
        for (tag, count) in examples.iter().take(10) {
            let _ = writeln!(out, "  - '{tag}' (appears {count} times)");
        }
    }

    let semantic = &report.semantic_analysis;

    if !semantic.similar_tag_groups.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Similar tag pairs:");
        for pair in semantic.similar_tag_groups.iter().take(5) {
            let _ = writeln!(
                out,
                "  - {} / {} (counts: {} / {}, similarity: {:.2})",
                pair.tags[0], pair.tags[1], pair.counts[0], pair.counts[1], pair.similarity
            );
        }
    }

    if !semantic.high_cooccurrence_pairs.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Frequently co-occurring tags:");
        for pair in semantic.high_cooccurrence_pairs.iter().take(5) {
            let _ = writeln!(
                out,
                "  - {} + {} (co-occur {} times, {:.1}% rate)",
                pair.tags[0],
                pair.tags[1],
                pair.cooccurrence_count,
                pair.cooccurrence_rate * 100.0
            );
        }
    }

    if !semantic.potential_hierarchies.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Potential hierarchies:");
        for hier in semantic.potential_hierarchies.iter().take(5) {
            let specifics: Vec<&str> = hier
                .specific_tags
                .iter()
                .map(|s| s.tag.as_str())
                .collect();
            let _ = writeln!(
                out,
                "  - {} ({} items) > {}",
                hier.general_tag,
                hier.general_count,
                specifics.join(", ")
            );
        }
    }

    out
}

fn tallies(quality: &QualityIssues) -> [(&'static str, usize); 5] {
    [
        ("Long tags", quality.long_tags.len()),
        ("Multi-word tags", quality.multi_word_tags.len()),
        ("Special characters", quality.special_characters.len()),
        ("Potential proper nouns", quality.potential_proper_nouns.len()),
        ("Very specific tags", quality.very_specific_tags.len()),
    ]
}
