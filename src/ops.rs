//! Shared operation wrappers for the CLI.
//!
//! Each `op_*` function is a pure, synchronous wrapper around the `algo`
//! modules. Input and output are `serde_json::Value`, with no dependency on
//! clap and no I/O. Row decoding is tolerant: missing or mistyped fields
//! default instead of erroring, so one malformed record never sinks a run.

use serde_json::Value;

use crate::algo::analyze::TagCorpusAnalyzer;
use crate::algo::corpus::{ItemRecord, TagCorpus};
use crate::algo::similar;
use crate::algo::stats;

/// Field names used to pull record parts out of input rows.
#[derive(Debug, Clone)]
pub struct ItemFields {
    pub title: String,
    pub description: String,
    pub tags: String,
}

impl Default for ItemFields {
    fn default() -> Self {
        Self {
            title: "title".into(),
            description: "safe_description".into(),
            tags: "tags".into(),
        }
    }
}

/// Extract a text field from a JSON object, returning "" if missing.
pub fn get_text(row: &Value, field: &str) -> String {
    row.get(field)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Decode rows into item records. A missing or non-array `tags` value reads
/// as "no tags" (uncategorized); non-string entries inside the array are
/// skipped.
pub fn parse_items(rows: &[Value], fields: &ItemFields) -> Vec<ItemRecord> {
    rows.iter()
        .map(|row| {
            let tags = row
                .get(&fields.tags)
                .and_then(|v| v.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|t| t.as_str())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            ItemRecord {
                title: get_text(row, &fields.title),
                description: get_text(row, &fields.description),
                tags,
            }
        })
        .collect()
}

/// Run the full analysis and return the five-section report as JSON.
pub fn op_analyze(rows: &[Value], fields: &ItemFields) -> Value {
    let items = parse_items(rows, fields);
    let report = TagCorpusAnalyzer::new(items).analyze();
    serde_json::to_value(report).expect("analysis report serializes to JSON")
}

/// Basic and distribution statistics only; the cheap single pass.
pub fn op_stats(rows: &[Value], fields: &ItemFields) -> Value {
    let items = parse_items(rows, fields);
    let corpus = TagCorpus::from_items(&items);
    serde_json::json!({
        "basic_stats": stats::basic_stats(&corpus),
        "distribution_analysis": stats::distribution_stats(&corpus),
    })
}

/// Evidence snippets for one tag (exact, case-sensitive match).
pub fn op_contexts(
    rows: &[Value],
    fields: &ItemFields,
    tag: &str,
    limit: usize,
) -> Result<Value, String> {
    let items = parse_items(rows, fields);
    let corpus = TagCorpus::from_items(&items);
    let count = corpus.count(tag);
    if count == 0 {
        return Err(format!("Tag '{tag}' does not appear in the corpus"));
    }
    let contexts: Vec<&String> = corpus.contexts(tag).iter().take(limit).collect();
    Ok(serde_json::json!({
        "tag": tag,
        "count": count,
        "contexts": contexts,
    }))
}

/// Score a tag pair with the duplicate-detection measure. With `all`, adds
/// reference string metrics for side-by-side comparison; those never feed the
/// analysis itself.
pub fn op_similarity(a: &str, b: &str, all: bool) -> Value {
    let score = similar::pair_score(a, b);
    let mut results = serde_json::Map::new();
    results.insert("a".into(), Value::String(a.into()));
    results.insert("b".into(), Value::String(b.into()));
    results.insert("similarity".into(), serde_json::json!(score));
    results.insert(
        "retained".into(),
        serde_json::json!(score > similar::SIMILARITY_THRESHOLD),
    );
    if all {
        results.insert(
            "levenshtein".into(),
            serde_json::json!(strsim::normalized_levenshtein(a, b)),
        );
        results.insert(
            "jaro_winkler".into(),
            serde_json::json!(strsim::jaro_winkler(a, b)),
        );
    }
    Value::Object(results)
}
