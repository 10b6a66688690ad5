use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::corpus::TagCorpus;

/// A specific tag must be strictly rarer than this fraction of its general
/// tag's count.
const SPECIFIC_COUNT_RATIO: f64 = 0.5;
/// Cap on specifics reported per general tag.
const MAX_SPECIFIC: usize = 5;
/// Cap on reported hierarchies.
const MAX_HIERARCHIES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecificTag {
    pub tag: String,
    pub count: usize,
}

/// A general tag with the rarer tags inferred to specialize it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagHierarchy {
    pub general_tag: String,
    pub general_count: usize,
    pub specific_tags: Vec<SpecificTag>,
}

/// Infer broader/narrower relationships from substring containment plus
/// relative frequency.
///
/// A tag specializes a general tag when the general's lowercase form (or any
/// of its whitespace-split words) appears inside the specific's lowercase
/// form, and the specific is strictly rarer than half the general's count.
/// Quadratic over distinct tags, sharded across rayon workers; general-tag
/// order (first-seen) is preserved ahead of the final ranking.
pub fn detect_hierarchies(corpus: &TagCorpus) -> Vec<TagHierarchy> {
    let tags = corpus.tags();
    let lowered: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();

    let mut hierarchies: Vec<TagHierarchy> = (0..tags.len())
        .into_par_iter()
        .filter_map(|g| {
            let general_count = corpus.count(&tags[g]);
            let cutoff = general_count as f64 * SPECIFIC_COUNT_RATIO;
            let general_words: Vec<&str> = lowered[g].split_whitespace().collect();

            let mut specific_tags: Vec<SpecificTag> = Vec::new();
            for s in 0..tags.len() {
                if s == g {
                    continue;
                }
                let count = corpus.count(&tags[s]);
                if (count as f64) < cutoff
                    && (lowered[s].contains(&lowered[g])
                        || general_words.iter().any(|w| lowered[s].contains(w)))
                {
                    specific_tags.push(SpecificTag {
                        tag: tags[s].clone(),
                        count,
                    });
                }
            }

            if specific_tags.is_empty() {
                return None;
            }
            specific_tags.sort_by(|a, b| b.count.cmp(&a.count));
            specific_tags.truncate(MAX_SPECIFIC);
            Some(TagHierarchy {
                general_tag: tags[g].clone(),
                general_count,
                specific_tags,
            })
        })
        .collect();

    hierarchies.sort_by(|a, b| b.specific_tags.len().cmp(&a.specific_tags.len()));
    hierarchies.truncate(MAX_HIERARCHIES);
    hierarchies
}
