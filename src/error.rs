//! Error types for description, clustering and caching.

use thiserror::Error;

/// Errors that can occur while describing structures or building representations.
#[derive(Debug, Error)]
pub enum Error {
    /// No lattice metadata is tabulated for this element.
    #[error("unknown element: {element} has no tabulated lattice")]
    UnknownElement {
        /// Chemical symbol that was requested
        element: String,
    },

    /// A descriptor matrix was required but never computed for this structure.
    #[error("missing descriptor: no {kind} matrix cached for structure {aid}, describe the collection first")]
    MissingDescriptor {
        /// Store kind that was looked up
        kind: String,
        /// Structure whose matrix is absent
        aid: String,
    },

    /// A normalization would divide by zero.
    #[error("degenerate normalization: {what}")]
    DegenerateNormalization {
        /// What was being normalized
        what: String,
    },

    /// Vectors of incompatible length were combined.
    #[error("dimension mismatch: expected {expected}, actual {actual}")]
    DimensionMismatch {
        /// Expected vector length
        expected: usize,
        /// Actual vector length
        actual: usize,
    },

    /// Invalid parameter provided.
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// Description of what's wrong with the parameter
        message: String,
    },

    /// Store I/O failed.
    #[error("store i/o: {0}")]
    Io(#[from] std::io::Error),

    /// Store encoding or decoding failed.
    #[error("store codec: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn unknown_element(element: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
        }
    }

    pub fn missing_descriptor(kind: impl Into<String>, aid: impl ToString) -> Self {
        Self::MissingDescriptor {
            kind: kind.into(),
            aid: aid.to_string(),
        }
    }

    pub fn degenerate(what: impl Into<String>) -> Self {
        Self::DegenerateNormalization { what: what.into() }
    }

    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_descriptor_names_structure() {
        let err = Error::missing_descriptor("soap", "grain-7");
        let msg = err.to_string();
        assert!(msg.contains("grain-7"));
        assert!(msg.contains("soap"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(_)));
    }
}
