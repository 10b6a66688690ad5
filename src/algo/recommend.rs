use super::quality::QualityIssues;
use super::stats::{BasicStats, DistributionStats};

/// Uncategorized share above which rule coverage is questioned.
const MAX_UNCATEGORIZED_PCT: f64 = 15.0;
/// Singleton share (of unique tags) above which one-off filtering is suggested.
const MAX_SINGLETON_PCT: f64 = 40.0;
/// Top-10 concentration bounds for the diversify/consolidate advice.
const CONCENTRATED_PCT: f64 = 80.0;
const DISPERSED_PCT: f64 = 25.0;
/// Healthy range for average tags per item.
const MIN_AVG_TAGS: f64 = 1.5;
const MAX_AVG_TAGS: f64 = 4.0;

/// Rule-based advice, evaluated in a fixed order; every matching rule fires
/// independently. The thresholds are constants of the design, not knobs.
///
/// Distribution-derived rules (singleton share, concentration) are skipped
/// when the distribution section is absent, and the tag-shape rules count the
/// capped example lists the report actually shows.
pub fn recommendations(
    basic: &BasicStats,
    distribution: Option<&DistributionStats>,
    quality: &QualityIssues,
) -> Vec<String> {
    let mut out = Vec::new();

    if basic.uncategorized_percentage > MAX_UNCATEGORIZED_PCT {
        out.push(format!(
            "High uncategorized rate ({:.1}%): Review and expand categorization rules",
            basic.uncategorized_percentage
        ));
    }

    if let Some(dist) = distribution {
        if dist.singleton_percentage > MAX_SINGLETON_PCT {
            out.push(format!(
                "High singleton rate ({:.1}%): Consider filtering tags that appear only once",
                dist.singleton_percentage
            ));
        }

        if dist.top_10_concentration > CONCENTRATED_PCT {
            out.push(
                "Very concentrated tag distribution: Consider expanding categorization diversity"
                    .to_string(),
            );
        } else if dist.top_10_concentration < DISPERSED_PCT {
            out.push(
                "Very dispersed tag distribution: Consider consolidating related tags".to_string(),
            );
        }
    }

    if !quality.long_tags.is_empty() {
        out.push(format!(
            "{} very long tags found: Consider aliases for normalization",
            quality.long_tags.len()
        ));
    }
    if !quality.multi_word_tags.is_empty() {
        out.push(format!(
            "{} complex multi-word tags found: Consider hyphenation or aliases",
            quality.multi_word_tags.len()
        ));
    }
    if !quality.potential_proper_nouns.is_empty() {
        out.push(format!(
            "{} potential proper noun tags found: Consider broader category aliases",
            quality.potential_proper_nouns.len()
        ));
    }

    if basic.total_items > 0 {
        if basic.avg_tags_per_item < MIN_AVG_TAGS {
            out.push(
                "Low average tags per item: Consider expanding categorization rules".to_string(),
            );
        } else if basic.avg_tags_per_item > MAX_AVG_TAGS {
            out.push("High average tags per item: Consider consolidating or filtering".to_string());
        }
    }

    if out.is_empty() {
        out.push("Tag distribution appears healthy - no major issues detected".to_string());
    }

    out
}
