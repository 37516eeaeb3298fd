//! Roster and persistence error types.
//!
//! Every failure here is recoverable: validation and lookup problems are
//! reported as [`RosterError`], file and format problems as [`CodecError`].
//! Front ends decide how to surface them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::codec::Format;

/// Errors from roster mutations and lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// The student has an empty id or an empty name.
    #[error("student must have a non-empty id and name")]
    InvalidStudent,

    /// Another student already uses this id.
    #[error("student id already exists: {0}")]
    DuplicateId(String),

    /// No student has this id.
    #[error("no student found with id: {0}")]
    NotFound(String),

    /// A grade outside the 0-100 range was supplied.
    #[error("grade {0} is outside the range 0-100")]
    GradeOutOfRange(f64),

    /// A grade index does not exist for this student.
    #[error("grade index {index} out of bounds ({len} grades)")]
    GradeIndexOutOfBounds { index: usize, len: usize },
}

/// Errors from reading or writing roster files.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The file could not be read, written, or created.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document could not be parsed at all.
    #[error("malformed {format} data: {message}")]
    Malformed { format: Format, message: String },

    /// An import finished without adding a single student.
    #[error("no students could be imported from {}", path.display())]
    NothingImported { path: PathBuf },
}

impl CodecError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CodecError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(format: Format, message: impl Into<String>) -> Self {
        CodecError::Malformed {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if the error means the file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CodecError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_detection() {
        let missing = CodecError::io(
            "nope.json",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(missing.is_not_found());

        let denied = CodecError::io(
            "locked.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!denied.is_not_found());
        assert!(!CodecError::malformed(Format::Json, "bad").is_not_found());
    }

    #[test]
    fn messages_name_the_problem() {
        let err = RosterError::GradeIndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "grade index 4 out of bounds (2 grades)");

        let err = CodecError::NothingImported {
            path: PathBuf::from("in.csv"),
        };
        assert!(err.to_string().contains("in.csv"));
    }
}
