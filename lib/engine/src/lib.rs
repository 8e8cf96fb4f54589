//! # screenX Engine
//!
//! Screening pipeline for screenX: scores one query against an entire
//! reference dataset across a bounded worker pool and returns the records
//! above a similarity threshold, ranked by composite score.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────┐
//! │  Query  │────>│ FieldScorer │────>│ BatchEngine │────>│  rank()  │
//! │ (fields)│     │ (normalize  │     │ (bounded    │     │ (filter, │
//! └─────────┘     │  + metric)  │     │  fan-out)   │     │  sort,   │
//!                 └─────────────┘     └─────────────┘     │  top-K)  │
//!                                                         └──────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use screenx_engine::{MatchConfig, Matcher};
//! use screenx_core::{Query, ReferenceRecord};
//! use std::collections::HashMap;
//!
//! let reference = vec![
//!     ReferenceRecord::new(0, HashMap::new()).with_field("name", "John Smith"),
//!     ReferenceRecord::new(1, HashMap::new()).with_field("name", "Jane Doe"),
//! ];
//! let query = Query::new().with_field("name", "Jon Smith");
//!
//! let matcher = Matcher::new(MatchConfig { threshold: 0.85, ..Default::default() }).unwrap();
//! let results = matcher.run(&query, &reference).unwrap();
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].index, 0);
//! ```

pub mod batch;
pub mod matcher;
pub mod rank;
pub mod scorer;

pub use batch::{BatchEngine, CancelToken, RowScores};
pub use matcher::{MatchConfig, Matcher, NAME_ADDRESS_THRESHOLD, NAME_ONLY_THRESHOLD};
pub use rank::{combine, rank};
pub use scorer::{score_field, FieldScorer, MissingFieldPolicy};
