//! Error types for parameter validation and batch loading

use thiserror::Error;

/// Errors raised at the calculator boundary
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// A goal-mode target that no capital amount can reach
    #[error("target unreachable: {0}")]
    Unreachable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {record}: {source}")]
    InvalidRow {
        record: usize,
        #[source]
        source: Box<ProjectionError>,
    },
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is a validation failure
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ProjectionError::InvalidParameter { field, .. } => Some(*field),
            ProjectionError::InvalidRow { source, .. } => source.field(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
