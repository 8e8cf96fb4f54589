//! Score combination, threshold filtering, and deterministic ranking.

use ordered_float::OrderedFloat;
use screenx_core::{FieldScore, ScoredRecord};
use std::cmp::Reverse;

/// Composite score for one record: the arithmetic mean of its per-field
/// similarity scores. A single-field query yields a composite equal to
/// that field's score, undiluted by fields that were never requested.
pub fn combine(field_scores: &[FieldScore]) -> f64 {
    if field_scores.is_empty() {
        return 0.0;
    }
    let sum: f64 = field_scores.iter().map(|fs| fs.score).sum();
    sum / field_scores.len() as f64
}

/// Filter, sort, and truncate scored rows into the final result.
///
/// Retention is strict: a composite score exactly equal to `threshold` is
/// excluded. Results are ordered by composite score descending with ties
/// broken by ascending row index, so the output is identical across runs
/// whatever the worker scheduling was. Top-K truncation is applied last,
/// after filtering and sorting.
pub fn rank(
    rows: Vec<(usize, Vec<FieldScore>)>,
    threshold: f64,
    top_k: Option<usize>,
) -> Vec<ScoredRecord> {
    let mut results: Vec<ScoredRecord> = rows
        .into_iter()
        .map(|(index, field_scores)| {
            let composite = combine(&field_scores);
            ScoredRecord { index, field_scores, composite }
        })
        .filter(|record| record.composite > threshold)
        .collect();

    results.sort_by_key(|record| (Reverse(OrderedFloat(record.composite)), record.index));

    if let Some(k) = top_k {
        results.truncate(k);
    }
    results
}
