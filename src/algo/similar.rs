use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::corpus::TagCorpus;

/// Pairs scoring above this are reported as likely duplicates.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;
/// Score assigned when one tag contains the other.
const CONTAINMENT_SCORE: f64 = 0.9;
/// Cap on reported pairs.
const MAX_PAIRS: usize = 10;

/// Two tags judged near-duplicates, with their corpus counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarPair {
    pub tags: [String; 2],
    pub counts: [usize; 2],
    pub similarity: f64,
}

/// Score two tags: substring containment in either direction wins outright,
/// otherwise the Jaccard index of the lowercased, hyphen-split word sets
/// (0 when either set is empty).
pub fn pair_score(a: &str, b: &str) -> f64 {
    if a.contains(b) || b.contains(a) {
        return CONTAINMENT_SCORE;
    }

    let words_a = word_set(a);
    let words_b = word_set(b);
    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();
    intersection as f64 / union as f64
}

fn word_set(tag: &str) -> HashSet<String> {
    tag.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// All-pairs scan over the distinct-tag vocabulary.
///
/// Quadratic by design: the vocabulary is expected to stay in the low
/// thousands, and anything cleverer would change which pairs are found. The
/// scan shards across rayon workers; pair generation order (first-seen index
/// order) is preserved, so equal scores rank by first encounter.
pub fn find_similar(corpus: &TagCorpus) -> Vec<SimilarPair> {
    let tags = corpus.tags();

    let mut pairs: Vec<SimilarPair> = (0..tags.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..tags.len()).filter_map(move |j| {
                let score = pair_score(&tags[i], &tags[j]);
                (score > SIMILARITY_THRESHOLD).then(|| SimilarPair {
                    tags: [tags[i].clone(), tags[j].clone()],
                    counts: [corpus.count(&tags[i]), corpus.count(&tags[j])],
                    similarity: score,
                })
            })
        })
        .collect();

    pairs.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pairs.truncate(MAX_PAIRS);
    pairs
}
