use serde::{Deserialize, Serialize};

use super::corpus::TagCorpus;

/// How many top tags the distribution section lists.
const TOP_TAGS: usize = 20;
/// How many of those feed the concentration figure.
const CONCENTRATION_TOP: usize = 10;
/// Cap on reported singleton examples.
const SINGLETON_EXAMPLES: usize = 20;

/// Corpus-level counts and averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicStats {
    pub total_items: usize,
    pub total_tags: usize,
    pub unique_tags: usize,
    pub avg_tags_per_item: f64,
    pub uncategorized_items: usize,
    pub uncategorized_percentage: f64,
}

/// One entry of the most-common-tags ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagShare {
    pub tag: String,
    pub count: usize,
    /// Share of all tag assignments held by this tag.
    pub percentage: f64,
}

/// Shape of the per-tag frequency distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionStats {
    pub median_frequency: f64,
    pub mean_frequency: f64,
    /// Sample standard deviation; 0 with fewer than two distinct tags.
    pub std_frequency: f64,
    pub singleton_count: usize,
    /// Singletons as a share of unique tags.
    pub singleton_percentage: f64,
    pub rare_tag_count: usize,
    /// Share of all assignments held by the ten most frequent tags.
    pub top_10_concentration: f64,
    pub most_common_tags: Vec<TagShare>,
    pub singleton_examples: Vec<String>,
}

pub fn basic_stats(corpus: &TagCorpus) -> BasicStats {
    let total_items = corpus.total_items();
    let (avg_tags_per_item, uncategorized_percentage) = if total_items > 0 {
        (
            corpus.total_tags() as f64 / total_items as f64,
            corpus.uncategorized() as f64 / total_items as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    BasicStats {
        total_items,
        total_tags: corpus.total_tags(),
        unique_tags: corpus.unique_tags(),
        avg_tags_per_item,
        uncategorized_items: corpus.uncategorized(),
        uncategorized_percentage,
    }
}

/// Frequency-distribution statistics, or `None` when no tag exists.
pub fn distribution_stats(corpus: &TagCorpus) -> Option<DistributionStats> {
    if corpus.unique_tags() == 0 {
        return None;
    }

    let frequencies: Vec<usize> = corpus.counted_tags().map(|(_, c)| c).collect();
    let mean = mean(&frequencies);
    let std = stdev(&frequencies, mean);

    let singletons: Vec<&str> = corpus
        .counted_tags()
        .filter(|&(_, c)| c == 1)
        .map(|(t, _)| t)
        .collect();

    // One-sided outlier threshold on the low end; the floor keeps singletons
    // rare even when the deviation term swamps the mean.
    let rare_cutoff = (mean - 2.0 * std).max(1.0);
    let rare_tag_count = frequencies
        .iter()
        .filter(|&&c| c as f64 <= rare_cutoff)
        .count();

    // Stable sort over first-seen order: equal counts rank by first appearance.
    let mut ranked: Vec<(&str, usize)> = corpus.counted_tags().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_TAGS);

    let total = corpus.total_tags() as f64;
    let top_10_concentration = ranked
        .iter()
        .take(CONCENTRATION_TOP)
        .map(|&(_, c)| c)
        .sum::<usize>() as f64
        / total
        * 100.0;

    let most_common_tags = ranked
        .iter()
        .map(|&(tag, count)| TagShare {
            tag: tag.to_string(),
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect();

    Some(DistributionStats {
        median_frequency: median(&frequencies),
        mean_frequency: mean,
        std_frequency: std,
        singleton_count: singletons.len(),
        singleton_percentage: singletons.len() as f64 / corpus.unique_tags() as f64 * 100.0,
        rare_tag_count,
        top_10_concentration,
        most_common_tags,
        singleton_examples: singletons
            .iter()
            .take(SINGLETON_EXAMPLES)
            .map(|t| t.to_string())
            .collect(),
    })
}

fn mean(values: &[usize]) -> f64 {
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

fn median(values: &[usize]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0
    }
}

/// Sample standard deviation (n − 1 denominator); 0 with fewer than two values.
fn stdev(values: &[usize], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}
