use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Graphemes of the description kept in a context snippet.
const SNIPPET_DESCRIPTION_LEN: usize = 100;

/// A single categorized content item.
///
/// Records reach the analysis fully defaulted: the ingestion boundary maps
/// missing or mistyped fields to empty strings and an empty tag list, so the
/// heuristics never deal with partial shapes. An empty tag list means the
/// item is uncategorized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Per-tag indexes derived from an item collection.
///
/// Built in one pass at construction and read-only afterwards. Tags are
/// opaque, case-sensitive labels; identity is exact string equality, no
/// normalization happens here.
#[derive(Debug, Clone)]
pub struct TagCorpus {
    total_items: usize,
    total_tags: usize,
    uncategorized: usize,
    /// Distinct tags in first-seen order. Every ranking that needs a stable
    /// tie-break iterates in this order.
    order: Vec<String>,
    counts: HashMap<String, usize>,
    contexts: HashMap<String, Vec<String>>,
}

impl TagCorpus {
    pub fn from_items(items: &[ItemRecord]) -> Self {
        let mut corpus = Self {
            total_items: items.len(),
            total_tags: 0,
            uncategorized: 0,
            order: Vec::new(),
            counts: HashMap::new(),
            contexts: HashMap::new(),
        };

        for item in items {
            if item.tags.is_empty() {
                corpus.uncategorized += 1;
                continue;
            }
            let context = context_snippet(&item.title, &item.description);
            for tag in &item.tags {
                let count = corpus.counts.entry(tag.clone()).or_insert(0);
                if *count == 0 {
                    corpus.order.push(tag.clone());
                }
                *count += 1;
                corpus
                    .contexts
                    .entry(tag.clone())
                    .or_default()
                    .push(context.clone());
                corpus.total_tags += 1;
            }
        }

        corpus
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Sum of per-item tag counts across the corpus.
    pub fn total_tags(&self) -> usize {
        self.total_tags
    }

    /// Items that carried no tags at all.
    pub fn uncategorized(&self) -> usize {
        self.uncategorized
    }

    pub fn unique_tags(&self) -> usize {
        self.order.len()
    }

    /// Distinct tags in first-seen order.
    pub fn tags(&self) -> &[String] {
        &self.order
    }

    /// Number of items carrying `tag`; zero for tags never seen.
    pub fn count(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Context snippets for `tag`, in item order. Evidence for human review,
    /// never an input to scoring.
    pub fn contexts(&self, tag: &str) -> &[String] {
        self.contexts.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(tag, count)` pairs in first-seen order.
    pub fn counted_tags(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order.iter().map(move |t| (t.as_str(), self.counts[t]))
    }
}

/// Title plus a bounded description prefix, the human-readable evidence
/// attached to each tag occurrence. Truncation is grapheme-aware so combined
/// characters never split mid-sequence.
pub fn context_snippet(title: &str, description: &str) -> String {
    let prefix: String = description
        .graphemes(true)
        .take(SNIPPET_DESCRIPTION_LEN)
        .collect();
    format!("{title} {prefix}")
}
