use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Threshold must be within [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    #[error("Query has no fields")]
    EmptyQuery,

    #[error("Reference dataset has no rows")]
    EmptyReference,

    #[error("Worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("Match cancelled by caller")]
    Cancelled,

    #[error("Required column missing from reference data: {0}")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(String),
}
