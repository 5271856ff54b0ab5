//! Errors for query translation.

use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unsupported query shape: {0}.")]
    UnsupportedQueryShape(String),
    #[error("Clause object did not produce any filter.")]
    EmptyClauseSet,
    #[error("Clause '{0}' expects a list of sub-queries.")]
    InvalidArgumentShape(String),
    #[error("Clause '{0}' expects an object of fields.")]
    InvalidOptionsShape(String),
    #[error("Unsupported operator: {0}.")]
    UnsupportedOperator(String),
}
