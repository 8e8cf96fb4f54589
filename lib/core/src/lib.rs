//! # screenX Core
//!
//! Core library for the screenX screening engine.
//!
//! This crate provides the leaf types and pure functions:
//!
//! - [`normalize`] - Deterministic text canonicalization
//! - [`jaro`] - Jaro-Winkler string similarity in [0.0, 1.0]
//! - [`ReferenceRecord`] / [`Query`] - One watchlist row and the text being screened
//! - [`FieldScore`] / [`ScoredRecord`] - Per-field and composite match scores
//!
//! ## Example
//!
//! ```rust
//! use screenx_core::{normalize, similarity};
//!
//! let a = normalize("Jon Smith");
//! let b = normalize("JOHN SMITH.");
//! assert!(similarity(&a, &b) > 0.9);
//! ```

pub mod error;
pub mod jaro;
pub mod normalize;
pub mod record;

pub use error::{Error, Result};
pub use jaro::{jaro_similarity, jaro_winkler_similarity, similarity};
pub use normalize::normalize;
pub use record::{FieldScore, Query, ReferenceRecord, ScoredRecord};
