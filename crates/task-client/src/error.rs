//! Store Errors
//!
//! Every store failure collapses into one `FetchError` carrying the
//! operation it came from and a human-readable message.

use std::fmt;

use thiserror::Error;

/// Remote operation a `FetchError` originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Generic message shown for a non-success HTTP status
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::List => "Error fetching tasks",
            Operation::Create | Operation::Update => "Error saving task",
            Operation::Delete => "Error deleting task",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single error type surfaced by every store operation.
///
/// Transport failures, non-success statuses and decode failures are not
/// distinguished by callers: only the message reaches the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    operation: Operation,
    message: String,
}

impl FetchError {
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }

    /// Non-success status; the status code is not part of the message
    pub fn status(operation: Operation) -> Self {
        Self::new(operation, operation.failure_message())
    }

    /// Transport or decode failure, keeping the underlying message
    pub fn transport(operation: Operation, err: impl fmt::Display) -> Self {
        Self::new(operation, err.to_string())
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Common result type for store operations
pub type FetchResult<T> = Result<T, FetchError>;
