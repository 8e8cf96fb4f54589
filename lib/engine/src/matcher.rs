//! The top-level match operation.
//!
//! Ties the pipeline together: validate inputs, fan scoring out over the
//! batch engine, combine per-field scores, filter by threshold, rank.
//! The engine holds no cross-request state; every match scores the full
//! reference dataset fresh.

use crate::batch::{BatchEngine, CancelToken};
use crate::rank::rank;
use crate::scorer::{FieldScorer, MissingFieldPolicy};
use screenx_core::{Error, Query, ReferenceRecord, Result, ScoredRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default threshold for name-only screening.
pub const NAME_ONLY_THRESHOLD: f64 = 0.85;
/// Default threshold when both name and address are screened.
pub const NAME_ADDRESS_THRESHOLD: f64 = 0.75;

/// Configuration for a match operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Retention cutoff in [0.0, 1.0]; records must score strictly above it.
    pub threshold: f64,
    /// Keep only the best K results (applied after filtering and sorting).
    pub top_k: Option<usize>,
    /// Worker pool bound; defaults to the number of processing units.
    pub worker_count: Option<usize>,
    /// How to treat reference rows lacking a queried field.
    #[serde(default)]
    pub missing_fields: MissingFieldPolicy,
    /// Treat an empty reference dataset as an empty result instead of an error.
    #[serde(default)]
    pub allow_empty_reference: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: NAME_ONLY_THRESHOLD,
            top_k: None,
            worker_count: None,
            missing_fields: MissingFieldPolicy::Exclude,
            allow_empty_reference: false,
        }
    }
}

/// Screens queries against a reference dataset.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    /// Create a matcher, validating the configuration.
    pub fn new(config: MatchConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.threshold) || config.threshold.is_nan() {
            return Err(Error::InvalidThreshold(config.threshold));
        }
        if config.worker_count == Some(0) {
            return Err(Error::InvalidWorkerCount);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score `query` against every reference row and return the records
    /// above the threshold, ranked by composite score.
    ///
    /// See [`Matcher::run_with_cancel`] for the full contract.
    pub fn run(&self, query: &Query, reference: &[ReferenceRecord]) -> Result<Vec<ScoredRecord>> {
        self.run_with_cancel(query, reference, &CancelToken::new())
    }

    /// [`Matcher::run`] with a caller-supplied cancellation token.
    ///
    /// Results are ordered by composite score descending, ties broken by
    /// ascending row index. An empty result is a success ("no matches
    /// above threshold"), distinct from the error cases: an empty query,
    /// an empty reference dataset (unless permitted by configuration), or
    /// cancellation. On cancellation all partial scores are discarded.
    pub fn run_with_cancel(
        &self,
        query: &Query,
        reference: &[ReferenceRecord],
        cancel: &CancelToken,
    ) -> Result<Vec<ScoredRecord>> {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }
        if reference.is_empty() {
            if self.config.allow_empty_reference {
                return Ok(Vec::new());
            }
            return Err(Error::EmptyReference);
        }

        let scorer = FieldScorer::new(query, self.config.missing_fields);
        let engine = BatchEngine::new(
            self.config
                .worker_count
                .unwrap_or_else(BatchEngine::default_worker_count),
        );

        let row_scores = engine.score(&scorer, reference, cancel)?;

        let scoreable: Vec<(usize, _)> = row_scores
            .into_iter()
            .zip(reference)
            .filter_map(|(scores, record)| scores.map(|s| (record.index, s)))
            .collect();
        let scoreable_rows = scoreable.len();

        let results = rank(scoreable, self.config.threshold, self.config.top_k);
        debug!(
            rows = reference.len(),
            scoreable_rows,
            retained = results.len(),
            threshold = self.config.threshold,
            "match complete"
        );
        Ok(results)
    }
}
