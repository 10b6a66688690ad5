use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::corpus::TagCorpus;

/// Cap on reported examples per issue category.
const EXAMPLES_PER_ISSUE: usize = 15;
/// Tags longer than this are flagged as over-specific labels.
const LONG_TAG_LEN: usize = 25;
/// Length above which a near-unique tag counts as very specific.
const VERY_SPECIFIC_LEN: usize = 15;
/// Occurrence ceiling for the very-specific heuristic.
const VERY_SPECIFIC_MAX_COUNT: usize = 2;

/// Anything outside word characters, whitespace, and hyphen.
static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\-]").expect("special-character pattern"));

/// One or more space-separated capitalized words, e.g. "New York".
static CAPITALIZED_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+(?:\s[A-Z][a-z]+)*$").expect("capitalized-words pattern"));

/// Lowercased linking particles that mark person or place names inside
/// hyphenated tags.
const NAME_PARTICLES: &[&str] = &["-van-", "-de-", "-von-", "-el-", "-la-", "-du-"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LongTag {
    pub tag: String,
    pub count: usize,
    pub length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiWordTag {
    pub tag: String,
    pub count: usize,
    pub words: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedTag {
    pub tag: String,
    pub count: usize,
}

/// Per-category findings; one tag may land in several categories.
///
/// Each list is sorted by descending count (first-seen order on ties) and
/// truncated to the highest-count examples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityIssues {
    pub long_tags: Vec<LongTag>,
    pub multi_word_tags: Vec<MultiWordTag>,
    pub special_characters: Vec<FlaggedTag>,
    pub potential_proper_nouns: Vec<FlaggedTag>,
    pub very_specific_tags: Vec<FlaggedTag>,
}

/// Evaluate the five independent per-tag heuristics over the whole vocabulary.
pub fn quality_issues(corpus: &TagCorpus) -> QualityIssues {
    let mut issues = QualityIssues::default();

    for (tag, count) in corpus.counted_tags() {
        let length = tag.chars().count();

        if length > LONG_TAG_LEN {
            issues.long_tags.push(LongTag {
                tag: tag.into(),
                count,
                length,
            });
        }

        if tag.contains(' ') {
            let words = tag.split_whitespace().count();
            if words > 2 {
                issues.multi_word_tags.push(MultiWordTag {
                    tag: tag.into(),
                    count,
                    words,
                });
            }
        }

        if SPECIAL_CHARS.is_match(tag) {
            issues.special_characters.push(FlaggedTag {
                tag: tag.into(),
                count,
            });
        }

        if is_likely_proper_noun(tag) {
            issues.potential_proper_nouns.push(FlaggedTag {
                tag: tag.into(),
                count,
            });
        }

        if count <= VERY_SPECIFIC_MAX_COUNT && (length > VERY_SPECIFIC_LEN || tag.contains(' ')) {
            issues.very_specific_tags.push(FlaggedTag {
                tag: tag.into(),
                count,
            });
        }
    }

    rank(&mut issues.long_tags, |t| t.count);
    rank(&mut issues.multi_word_tags, |t| t.count);
    rank(&mut issues.special_characters, |t| t.count);
    rank(&mut issues.potential_proper_nouns, |t| t.count);
    rank(&mut issues.very_specific_tags, |t| t.count);

    issues
}

/// Mixed-case tags of more than three characters shaped like capitalized words
/// ("New York") or carrying a lowercase name particle ("Ludwig-van-Beethoven").
/// Short tags are skipped as likely acronyms.
pub fn is_likely_proper_noun(tag: &str) -> bool {
    if tag.chars().count() <= 3 {
        return false;
    }

    let has_upper = tag.chars().any(|c| c.is_uppercase());
    let has_lower = tag.chars().any(|c| c.is_lowercase());
    if !(has_upper && has_lower) {
        return false;
    }

    if CAPITALIZED_WORDS.is_match(tag) {
        return true;
    }

    let lower = tag.to_lowercase();
    NAME_PARTICLES.iter().any(|p| lower.contains(p))
}

/// Stable sort by descending count, then cap the example list.
fn rank<T>(list: &mut Vec<T>, count: impl Fn(&T) -> usize) {
    list.sort_by(|a, b| count(b).cmp(&count(a)));
    list.truncate(EXAMPLES_PER_ISSUE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::corpus::ItemRecord;

    fn corpus_of(tag_lists: &[&[&str]]) -> TagCorpus {
        let items: Vec<ItemRecord> = tag_lists
            .iter()
            .map(|tags| ItemRecord {
                title: String::new(),
                description: String::new(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        TagCorpus::from_items(&items)
    }

    #[test]
    fn long_tags_flagged_with_length() {
        let tag = "a-very-long-and-winding-tag-name";
        let corpus = corpus_of(&[&[tag, "short"]]);
        let issues = quality_issues(&corpus);
        assert_eq!(issues.long_tags.len(), 1);
        assert_eq!(issues.long_tags[0].tag, tag);
        assert_eq!(issues.long_tags[0].length, tag.len());
    }

    #[test]
    fn multi_word_needs_more_than_two_words() {
        let corpus = corpus_of(&[&["large language models", "two words", "single"]]);
        let issues = quality_issues(&corpus);
        assert_eq!(issues.multi_word_tags.len(), 1);
        assert_eq!(issues.multi_word_tags[0].tag, "large language models");
        assert_eq!(issues.multi_word_tags[0].words, 3);
    }

    #[test]
    fn special_characters_exclude_hyphen_and_space() {
        let corpus = corpus_of(&[&["c++", "rust-lang", "plain tag", "under_score"]]);
        let issues = quality_issues(&corpus);
        let flagged: Vec<&str> = issues
            .special_characters
            .iter()
            .map(|f| f.tag.as_str())
            .collect();
        assert_eq!(flagged, vec!["c++"]);
    }

    #[test]
    fn proper_noun_capitalized_words() {
        assert!(is_likely_proper_noun("New York"));
        assert!(is_likely_proper_noun("Claude"));
        assert!(!is_likely_proper_noun("rust"));
        assert!(!is_likely_proper_noun("AI")); // too short, likely acronym
        assert!(!is_likely_proper_noun("NASA")); // no lowercase
    }

    #[test]
    fn proper_noun_name_particles() {
        assert!(is_likely_proper_noun("Ludwig-van-Beethoven"));
        assert!(is_likely_proper_noun("Vincent-VAN-Gogh"));
        // All-lowercase never qualifies, particle or not.
        assert!(!is_likely_proper_noun("ludwig-van-beethoven"));
    }

    #[test]
    fn very_specific_requires_rarity_and_shape() {
        let items: &[&[&str]] = &[
            &["hyper-specific-topic-tag", "niche phrase"],
            &["popular-long-tag-name-here"],
            &["popular-long-tag-name-here"],
            &["popular-long-tag-name-here"],
        ];
        let corpus = corpus_of(items);
        let issues = quality_issues(&corpus);
        let flagged: Vec<&str> = issues
            .very_specific_tags
            .iter()
            .map(|f| f.tag.as_str())
            .collect();
        // The popular one appears 3 times and is exempt despite its length.
        assert_eq!(flagged, vec!["hyper-specific-topic-tag", "niche phrase"]);
    }

    #[test]
    fn examples_sorted_by_count_and_capped() {
        let names: Vec<String> = (0..20)
            .map(|i| format!("an-overly-long-tag-name-number-{i:02}"))
            .collect();
        let mut lists: Vec<Vec<&str>> = names.iter().map(|n| vec![n.as_str()]).collect();
        // Boost the last one so it must rank first.
        lists.push(vec![names[19].as_str()]);
        let refs: Vec<&[&str]> = lists.iter().map(|l| l.as_slice()).collect();
        let corpus = corpus_of(&refs);

        let issues = quality_issues(&corpus);
        assert_eq!(issues.long_tags.len(), EXAMPLES_PER_ISSUE);
        assert_eq!(issues.long_tags[0].tag, names[19]);
        assert_eq!(issues.long_tags[0].count, 2);
    }

    #[test]
    fn one_tag_can_hit_several_categories() {
        let corpus = corpus_of(&[&["Specifically About New York City"]]);
        let issues = quality_issues(&corpus);
        assert_eq!(issues.long_tags.len(), 1);
        assert_eq!(issues.multi_word_tags.len(), 1);
        assert_eq!(issues.potential_proper_nouns.len(), 1);
        assert_eq!(issues.very_specific_tags.len(), 1);
        assert!(issues.special_characters.is_empty());
    }
}
