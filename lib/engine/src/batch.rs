//! Parallel batch scoring over a bounded worker pool.
//!
//! One query is scored against N reference rows by partitioning the rows
//! into contiguous chunks and handing each chunk to its own scoped worker
//! thread. The pool is bounded by the configured worker count (never one
//! thread per row), the reference data is shared read-only, and results
//! are reassembled in original row order before being handed to the
//! ranker, so callers never observe completion order.

use crate::scorer::FieldScorer;
use screenx_core::{Error, FieldScore, ReferenceRecord, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::debug;

/// Cooperative cancellation handle for a running batch.
///
/// Cloning shares the same flag; cancelling from any clone aborts the
/// batch. Workers check the flag between rows, so cancellation takes
/// effect at row granularity. A cancelled batch discards all partial
/// scores and surfaces [`Error::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the batch using this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Partitions a reference dataset and fans field scoring out across
/// worker threads.
#[derive(Debug, Clone, Copy)]
pub struct BatchEngine {
    worker_count: usize,
}

/// Per-row scores in original row order. `None` marks a row excluded
/// because it lacked a queried field.
pub type RowScores = Vec<Option<Vec<FieldScore>>>;

impl BatchEngine {
    /// Create an engine with a fixed worker bound. Callers validate that
    /// `worker_count` is at least 1.
    #[must_use]
    pub fn new(worker_count: usize) -> Self {
        Self { worker_count }
    }

    /// Number of available processing units, the default pool bound.
    pub fn default_worker_count() -> usize {
        thread::available_parallelism().map(usize::from).unwrap_or(1)
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Score every reference row against the prepared query.
    ///
    /// The output is index-aligned with `reference`: entry `i` holds the
    /// field scores for row `i` (or `None` for an excluded row),
    /// regardless of which worker finished first or how many workers ran.
    /// An empty dataset returns an empty result without spawning workers.
    pub fn score(
        &self,
        scorer: &FieldScorer,
        reference: &[ReferenceRecord],
        cancel: &CancelToken,
    ) -> Result<RowScores> {
        if reference.is_empty() {
            return Ok(Vec::new());
        }
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let workers = self.worker_count.min(reference.len()).max(1);
        let chunk_size = reference.len().div_ceil(workers);
        debug!(
            rows = reference.len(),
            workers,
            chunk_size,
            "scoring batch"
        );

        // Fan out: one scoped thread per contiguous chunk. Each worker
        // returns (chunk start offset, scores) so the fan-in below can
        // reassemble rows in original order.
        let chunk_results = thread::scope(|s| {
            let handles: Vec<_> = reference
                .chunks(chunk_size)
                .enumerate()
                .map(|(chunk_idx, chunk)| {
                    let start = chunk_idx * chunk_size;
                    s.spawn(move || -> Result<(usize, RowScores)> {
                        let mut rows = Vec::with_capacity(chunk.len());
                        for record in chunk {
                            if cancel.is_cancelled() {
                                return Err(Error::Cancelled);
                            }
                            rows.push(scorer.score_record(record));
                        }
                        Ok((start, rows))
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect::<Result<Vec<_>>>()
        });

        // Fan in: restore original row order before handing off.
        let mut chunk_results = chunk_results?;
        chunk_results.sort_by_key(|(start, _)| *start);

        let mut rows = Vec::with_capacity(reference.len());
        for (_, chunk_rows) in chunk_results {
            rows.extend(chunk_rows);
        }
        Ok(rows)
    }
}

impl Default for BatchEngine {
    fn default() -> Self {
        Self::new(Self::default_worker_count())
    }
}
