use thiserror::Error;

/// Failure modes of predicate evaluation.
///
/// Predicates return an error together with a meaningless boolean; callers
/// must check the error before trusting the result. Evaluation is pure, so
/// retrying the same inputs reproduces the same error.
#[derive(Error, Debug)]
pub enum Error {
    /// A ring or line does not carry enough data to describe the geometry
    /// it claims to be.
    #[error("malformed geometry: {0}")]
    Geometry(String),
    /// No algorithm is defined for this combination of shape kinds.
    #[error("{predicate} is not supported between {query} and {other}")]
    UnsupportedPredicate {
        predicate: &'static str,
        query: &'static str,
        other: &'static str,
    },
    /// A distance literal such as `"100km"` could not be parsed.
    #[error("invalid distance literal: {0:?}")]
    InvalidDistance(String),
    /// A shape document could not be decoded.
    #[error("invalid shape document: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
