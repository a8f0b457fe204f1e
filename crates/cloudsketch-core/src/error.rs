//! Errors raised while describing a diagram.

use thiserror::Error;

use crate::identifier::Id;

/// Errors produced by diagram construction and validation.
#[derive(Debug, Error, PartialEq)]
pub enum DiagramError {
    #[error("node `{id}` is declared more than once in diagram `{diagram}`")]
    DuplicateNode { diagram: String, id: Id },

    #[error("edge in diagram `{diagram}` references undeclared node `{id}`")]
    UnknownNode { diagram: String, id: Id },

    #[error("invalid color `{value}`: {reason}")]
    InvalidColor { value: String, reason: String },
}
