use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::corpus::{ItemRecord, TagCorpus};

/// Minimum shared items before a pair is reported.
const MIN_COOCCURRENCE: usize = 3;
/// Cap on reported pairs.
const MAX_PAIRS: usize = 15;

/// Two tags that repeatedly appear on the same items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooccurrencePair {
    /// The pair in lexicographic order (in-item order is irrelevant).
    pub tags: [String; 2],
    pub cooccurrence_count: usize,
    pub tag_totals: [usize; 2],
    /// Fraction of the rarer tag's occurrences that came paired with the
    /// other tag.
    pub cooccurrence_rate: f64,
}

/// Count unordered tag pairs per item, keep those seen on at least three
/// items, rank by rate. Equal rates keep first-encountered pair order.
pub fn find_cooccurrences(items: &[ItemRecord], corpus: &TagCorpus) -> Vec<CooccurrencePair> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut accum: Vec<((String, String), usize)> = Vec::new();

    for item in items {
        if item.tags.len() < 2 {
            continue;
        }
        for i in 0..item.tags.len() {
            for j in (i + 1)..item.tags.len() {
                let a = &item.tags[i];
                let b = &item.tags[j];
                let key = if a <= b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                };
                match index.get(&key) {
                    Some(&slot) => accum[slot].1 += 1,
                    None => {
                        index.insert(key.clone(), accum.len());
                        accum.push((key, 1));
                    }
                }
            }
        }
    }

    let mut pairs: Vec<CooccurrencePair> = accum
        .into_iter()
        .filter(|&(_, count)| count >= MIN_COOCCURRENCE)
        .map(|((a, b), count)| {
            let tag_totals = [corpus.count(&a), corpus.count(&b)];
            let rarer = tag_totals[0].min(tag_totals[1]);
            CooccurrencePair {
                tags: [a, b],
                cooccurrence_count: count,
                tag_totals,
                cooccurrence_rate: count as f64 / rarer as f64,
            }
        })
        .collect();

    pairs.sort_by(|a, b| {
        b.cooccurrence_rate
            .partial_cmp(&a.cooccurrence_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pairs.truncate(MAX_PAIRS);
    pairs
}
