use thiserror::Error;

/// Convenience result type for fallible pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type returned by fallible pipeline steps and terminals.
///
/// A single error enum shared by the lazy [`crate::pipeline::Pipeline`], the eager
/// [`crate::processing`] functions, the [`crate::numeric`] helpers and the
/// [`crate::execution::ExecutionEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Integer division or remainder with a zero divisor.
    #[error("division by zero in {operation}")]
    DivisionByZero { operation: String },

    /// A fixed-width integer result did not fit its type.
    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: String },

    /// A value that must be present was absent.
    #[error("missing value: {what}")]
    MissingValue { what: String },

    /// Engine options were rejected (zero chunk size, zero threads, ...).
    #[error("invalid execution options: {message}")]
    InvalidOptions { message: String },
}

impl PipelineError {
    pub(crate) fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    pub(crate) fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Build a [`PipelineError::MissingValue`] describing what was absent.
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingValue { what: what.into() }
    }
}

/// Turn an absent value into a typed [`PipelineError::MissingValue`].
///
/// This is the pipeline's equivalent of dereferencing a value that may not be there: instead of
/// failing later, the absence is reported to the caller right away.
pub fn require<T>(value: Option<T>, what: &str) -> PipelineResult<T> {
    value.ok_or_else(|| PipelineError::missing(what))
}
