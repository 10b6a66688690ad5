use serde::{Deserialize, Serialize};

use super::cooccur::{self, CooccurrencePair};
use super::corpus::{ItemRecord, TagCorpus};
use super::hierarchy::{self, TagHierarchy};
use super::quality::{self, QualityIssues};
use super::recommend;
use super::similar::{self, SimilarPair};
use super::stats::{self, BasicStats, DistributionStats};

/// Inferred relationships between tags: near-duplicates, frequent companions,
/// and broader/narrower candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticAnalysis {
    pub similar_tag_groups: Vec<SimilarPair>,
    pub high_cooccurrence_pairs: Vec<CooccurrencePair>,
    pub potential_hierarchies: Vec<TagHierarchy>,
}

/// The full five-section analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub basic_stats: BasicStats,
    /// Absent when the corpus has no tags at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_analysis: Option<DistributionStats>,
    pub quality_issues: QualityIssues,
    pub semantic_analysis: SemanticAnalysis,
    pub recommendations: Vec<String>,
}

/// Owns the item list and the corpus indexes, and runs the full pipeline:
/// statistics, quality heuristics, relationship detection, recommendations.
///
/// A pure function of its input: construct once from a fixed item list and
/// identical output follows however often `analyze` runs.
pub struct TagCorpusAnalyzer {
    items: Vec<ItemRecord>,
    corpus: TagCorpus,
}

impl TagCorpusAnalyzer {
    pub fn new(items: Vec<ItemRecord>) -> Self {
        let corpus = TagCorpus::from_items(&items);
        Self { items, corpus }
    }

    pub fn corpus(&self) -> &TagCorpus {
        &self.corpus
    }

    pub fn analyze(&self) -> AnalysisReport {
        let basic_stats = stats::basic_stats(&self.corpus);
        let distribution_analysis = stats::distribution_stats(&self.corpus);
        let quality_issues = quality::quality_issues(&self.corpus);
        let semantic_analysis = SemanticAnalysis {
            similar_tag_groups: similar::find_similar(&self.corpus),
            high_cooccurrence_pairs: cooccur::find_cooccurrences(&self.items, &self.corpus),
            potential_hierarchies: hierarchy::detect_hierarchies(&self.corpus),
        };
        let recommendations = recommend::recommendations(
            &basic_stats,
            distribution_analysis.as_ref(),
            &quality_issues,
        );

        AnalysisReport {
            basic_stats,
            distribution_analysis,
            quality_issues,
            semantic_analysis,
            recommendations,
        }
    }
}

/// One-shot convenience over [`TagCorpusAnalyzer`].
pub fn analyze(items: Vec<ItemRecord>) -> AnalysisReport {
    TagCorpusAnalyzer::new(items).analyze()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tags: &[&str]) -> ItemRecord {
        ItemRecord {
            title: "t".into(),
            description: "d".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn empty_corpus_yields_empty_sections() {
        let report = analyze(Vec::new());
        assert_eq!(report.basic_stats.total_items, 0);
        assert!(report.distribution_analysis.is_none());
        assert!(report.quality_issues.long_tags.is_empty());
        assert!(report.semantic_analysis.similar_tag_groups.is_empty());
        assert!(report.semantic_analysis.high_cooccurrence_pairs.is_empty());
        assert!(report.semantic_analysis.potential_hierarchies.is_empty());
        assert_eq!(report.recommendations.len(), 1);
    }

    #[test]
    fn sections_populate_together() {
        let items = vec![
            item(&["rust", "rust-async"]),
            item(&["rust", "cli"]),
            item(&["rust"]),
            item(&[]),
        ];
        let report = analyze(items);
        assert_eq!(report.basic_stats.total_items, 4);
        assert_eq!(report.basic_stats.uncategorized_items, 1);
        let dist = report.distribution_analysis.unwrap();
        assert_eq!(dist.singleton_count, 2);
        assert!(!report.recommendations.is_empty());
    }

    #[test]
    fn analysis_is_idempotent() {
        let items = vec![
            item(&["ai", "ai-tools", "ml"]),
            item(&["ai", "ml"]),
            item(&["ai", "ml"]),
            item(&["data science and more", "One Off"]),
            item(&[]),
        ];
        let analyzer = TagCorpusAnalyzer::new(items);
        let a = serde_json::to_value(analyzer.analyze()).unwrap();
        let b = serde_json::to_value(analyzer.analyze()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn report_serialization_round_trips() {
        let report = analyze(vec![item(&["rust", "cli"]), item(&["rust"])]);
        let json = serde_json::to_string(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.basic_stats.total_items, 2);
        assert!(back.distribution_analysis.is_some());
    }

    #[test]
    fn corpus_accessor_matches_input() {
        let analyzer = TagCorpusAnalyzer::new(vec![item(&["a"]), item(&["a", "b"])]);
        assert_eq!(analyzer.corpus().count("a"), 2);
        assert_eq!(analyzer.corpus().count("b"), 1);
    }
}
