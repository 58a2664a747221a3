/// Convenience result type used across the crate.
pub type VaryingResult<T> = Result<T, VaryingError>;

/// Error taxonomy for IR construction, lowering, algebra, and sampling.
#[derive(thiserror::Error, Debug)]
pub enum VaryingError {
    /// A construction-order bug, e.g. a `Lerp` node reaching polynomial conversion.
    #[error("invariant violation: {0}")]
    Invariant(String),

    /// The polynomial algebra was asked to combine a shape pair it does not define.
    #[error("unsupported combination: {0}")]
    Unsupported(String),

    /// Invalid caller-provided input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Text front-end failure at a byte offset of the source.
    #[error("parse error at byte {offset}: {message}")]
    Parse {
        /// Byte offset into the trimmed source.
        offset: usize,
        /// Human-readable description.
        message: String,
    },

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VaryingError {
    /// Build a [`VaryingError::Invariant`] value.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    /// Build a [`VaryingError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`VaryingError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VaryingError::Parse`] value.
    pub fn parse(offset: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            message: msg.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
