//! Per-field scoring of a query against candidate values.
//!
//! The query side of every comparison is normalized exactly once, then
//! reused across all candidates; candidate values are normalized as they
//! are scored.

use screenx_core::{normalize, similarity, FieldScore, Query, ReferenceRecord};
use serde::{Deserialize, Serialize};

/// What to do when a reference record lacks a queried field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingFieldPolicy {
    /// Exclude the record from results entirely (default).
    #[default]
    Exclude,
    /// Keep the record, scoring the missing field 0.0.
    ScoreZero,
}

/// Score one query value against a sequence of candidate values.
///
/// The query value is normalized once; each candidate is normalized
/// independently. Output is index-aligned with the input candidates.
pub fn score_field(query_value: &str, candidates: &[&str]) -> Vec<(usize, f64)> {
    let query_norm = normalize(query_value);
    candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| (i, similarity(&query_norm, &normalize(candidate))))
        .collect()
}

/// One queried field with its value pre-normalized.
#[derive(Debug, Clone)]
struct QueryField {
    name: String,
    normalized: String,
}

/// Scores whole reference records against a prepared query.
///
/// Built once per match request; query values are normalized at
/// construction and shared read-only across all batch workers.
#[derive(Debug, Clone)]
pub struct FieldScorer {
    fields: Vec<QueryField>,
    policy: MissingFieldPolicy,
}

impl FieldScorer {
    /// Prepare a scorer for the given query.
    ///
    /// Fields are scored in sorted name order so output is deterministic
    /// regardless of the query map's iteration order.
    pub fn new(query: &Query, policy: MissingFieldPolicy) -> Self {
        let fields = query
            .sorted_field_names()
            .into_iter()
            .map(|name| QueryField {
                name: name.to_string(),
                normalized: normalize(query.get(name).unwrap_or_default()),
            })
            .collect();
        Self { fields, policy }
    }

    /// Names of the queried fields, in scoring order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Score every queried field against one reference record.
    ///
    /// Returns `None` when the record lacks a queried field and the policy
    /// is [`MissingFieldPolicy::Exclude`]; such records are dropped from
    /// the match, not scored as zero.
    pub fn score_record(&self, record: &ReferenceRecord) -> Option<Vec<FieldScore>> {
        let mut scores = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            match record.get(&field.name) {
                Some(raw) => {
                    let normalized = normalize(raw);
                    let score = similarity(&field.normalized, &normalized);
                    scores.push(FieldScore {
                        field: field.name.clone(),
                        raw: raw.to_string(),
                        normalized,
                        score,
                    });
                }
                None => match self.policy {
                    MissingFieldPolicy::Exclude => return None,
                    MissingFieldPolicy::ScoreZero => scores.push(FieldScore {
                        field: field.name.clone(),
                        raw: String::new(),
                        normalized: String::new(),
                        score: 0.0,
                    }),
                },
            }
        }
        Some(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(index: usize, pairs: &[(&str, &str)]) -> ReferenceRecord {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        ReferenceRecord::new(index, fields)
    }

    #[test]
    fn test_score_field_index_aligned() {
        let results = score_field("Jon Smith", &["John Smith", "Jane Doe", "JON SMITH"]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, 0);
        assert_eq!(results[1].0, 1);
        assert_eq!(results[2].0, 2);
        assert!(results[0].1 > 0.9);
        assert!(results[1].1 < 0.7);
        assert_eq!(results[2].1, 1.0);
    }

    #[test]
    fn test_score_field_empty_candidates() {
        assert!(score_field("anything", &[]).is_empty());
    }

    #[test]
    fn test_score_record_all_fields() {
        let query = Query::new()
            .with_field("name", "Acme Corp")
            .with_field("address", "123 Main St");
        let scorer = FieldScorer::new(&query, MissingFieldPolicy::Exclude);

        let scores = scorer
            .score_record(&record(0, &[("name", "ACME CORP."), ("address", "123 Main Street")]))
            .unwrap();

        // Sorted field order: address first, then name
        assert_eq!(scores[0].field, "address");
        assert_eq!(scores[1].field, "name");
        assert_eq!(scores[1].score, 1.0);
        assert_eq!(scores[1].normalized, "acme corp");
        assert!(scores[0].score > 0.9);
    }

    #[test]
    fn test_missing_field_excluded() {
        let query = Query::new()
            .with_field("name", "Acme Corp")
            .with_field("address", "123 Main St");
        let scorer = FieldScorer::new(&query, MissingFieldPolicy::Exclude);

        assert!(scorer.score_record(&record(0, &[("name", "Acme Corp")])).is_none());
    }

    #[test]
    fn test_missing_field_score_zero() {
        let query = Query::new()
            .with_field("name", "Acme Corp")
            .with_field("address", "123 Main St");
        let scorer = FieldScorer::new(&query, MissingFieldPolicy::ScoreZero);

        let scores = scorer.score_record(&record(0, &[("name", "Acme Corp")])).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].field, "address");
        assert_eq!(scores[0].score, 0.0);
        assert_eq!(scores[1].score, 1.0);
    }

    #[test]
    fn test_extra_record_fields_ignored() {
        let query = Query::new().with_field("name", "Jane Doe");
        let scorer = FieldScorer::new(&query, MissingFieldPolicy::Exclude);

        let scores = scorer
            .score_record(&record(0, &[("name", "Jane Doe"), ("country", "DK")]))
            .unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].field, "name");
    }
}
