//! # screenX
//!
//! A fast fuzzy name and address screening engine for sanctions and
//! watchlist matching.
//!
//! screenX answers one question repeatedly: does a given name (optionally
//! with an address) fuzzy-match any entry in a reference list closely
//! enough to be flagged? Text is canonicalized, compared with a
//! Jaro-Winkler metric, scored in parallel across a bounded worker pool,
//! and returned as a deterministic, threshold-filtered ranking.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install screenx
//! screenx watchlist.csv --name "Jon Smith" --threshold 0.85
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use screenx::prelude::*;
//! use std::collections::HashMap;
//!
//! let reference = vec![
//!     ReferenceRecord::new(0, HashMap::new())
//!         .with_field("name", "ACME CORP.")
//!         .with_field("address", "123 Main Street"),
//! ];
//! let query = Query::new()
//!     .with_field("name", "Acme Corp")
//!     .with_field("address", "123 Main St");
//!
//! let matcher = Matcher::new(MatchConfig {
//!     threshold: NAME_ADDRESS_THRESHOLD,
//!     ..Default::default()
//! })?;
//! for record in matcher.run(&query, &reference)? {
//!     println!("row {} scored {:.3}", record.index, record.composite);
//! }
//! # Ok::<(), screenx::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - [`screenx-core`](https://docs.rs/screenx-core) - Normalization, Jaro-Winkler metric, record types
//! - [`screenx-engine`](https://docs.rs/screenx-engine) - Batch scoring, combination, ranking
//! - [`ingest`] - CSV reference list loading (this crate)

pub mod ingest;

// Re-export core types
pub use screenx_core::{
    jaro_similarity, jaro_winkler_similarity, normalize, similarity,
    Error, FieldScore, Query, ReferenceRecord, Result, ScoredRecord,
};

// Re-export the engine
pub use screenx_engine::{
    score_field, BatchEngine, CancelToken, MatchConfig, Matcher, MissingFieldPolicy,
    RowScores, NAME_ADDRESS_THRESHOLD, NAME_ONLY_THRESHOLD,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ingest::{load_reference_csv, require_columns};
    pub use crate::{
        normalize, similarity,
        CancelToken, Error, FieldScore, MatchConfig, Matcher, MissingFieldPolicy,
        Query, ReferenceRecord, Result, ScoredRecord,
        NAME_ADDRESS_THRESHOLD, NAME_ONLY_THRESHOLD,
    };
}
