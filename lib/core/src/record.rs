use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the reference dataset.
///
/// An immutable mapping from field name ("name", "address", ...) to raw
/// text, plus the stable row index assigned at load time. The index is
/// used for result correlation and as the deterministic tie-break when
/// two rows score identically. The engine only reads records; it never
/// mutates the reference dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceRecord {
    pub index: usize,
    pub fields: HashMap<String, String>,
}

impl ReferenceRecord {
    #[inline]
    #[must_use]
    pub fn new(index: usize, fields: HashMap<String, String>) -> Self {
        Self { index, fields }
    }

    #[inline]
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get the raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Check whether every named field is present on this record.
    pub fn has_fields<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> bool {
        names.into_iter().all(|n| self.fields.contains_key(n))
    }
}

/// The text being screened: one or more named field values.
///
/// Immutable for the duration of one match operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Query {
    pub fields: HashMap<String, String>,
}

impl Query {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Queried field names in a deterministic (sorted) order.
    pub fn sorted_field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Similarity of one query field against one reference record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldScore {
    /// Field name ("name", "address", ...).
    pub field: String,
    /// Raw candidate value from the reference record.
    pub raw: String,
    /// Candidate value after normalization.
    pub normalized: String,
    /// Jaro-Winkler similarity in [0.0, 1.0].
    pub score: f64,
}

/// One reference row with its per-field scores and composite score.
///
/// The composite score is the arithmetic mean of the per-field similarity
/// scores for the fields actually queried, so it stays in [0.0, 1.0].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredRecord {
    /// Original row index of the reference record.
    pub index: usize,
    /// Per-field scores, in sorted field-name order.
    pub field_scores: Vec<FieldScore>,
    /// Mean of the per-field scores, in [0.0, 1.0].
    pub composite: f64,
}

impl ScoredRecord {
    /// Look up the similarity score for a single field.
    pub fn field_score(&self, field: &str) -> Option<f64> {
        self.field_scores.iter().find(|fs| fs.field == field).map(|fs| fs.score)
    }
}
