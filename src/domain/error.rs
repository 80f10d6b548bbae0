//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::NodeKind;

/// Domain errors represent violations of the text tree contract and
/// malformed embedded expressions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported operation on {kind} node: {operation}")]
    UnsupportedOperation {
        kind: NodeKind,
        operation: &'static str,
    },

    #[error("index {index} out of range for node with {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("not a word character: {0:?}")]
    InvalidLetter(char),

    #[error("expression syntax error: {0}")]
    ExpressionSyntax(String),

    #[error("unknown operator: {0}")]
    UnknownOperator(String),
}

impl DomainError {
    /// True for errors raised by the tree contract itself.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            DomainError::UnsupportedOperation { .. }
                | DomainError::IndexOutOfRange { .. }
                | DomainError::InvalidLetter(_)
        )
    }

    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        DomainError::ExpressionSyntax(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
