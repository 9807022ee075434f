//! Error types and result definitions

use json_event_parser::{JsonParseError, JsonSyntaxError};
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for JSON to RDF conversion
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed JSON in an in-memory document
    #[error("JSON syntax error: {0}")]
    Syntax(#[from] JsonSyntaxError),

    /// Malformed JSON or read failure in a streamed document
    #[error("JSON parse error: {0}")]
    Json(#[from] JsonParseError),

    /// The base IRI given to the converter is not an absolute IRI
    #[error("Invalid base IRI '{iri}': {message}")]
    InvalidBaseIri { iri: String, message: String },

    /// A predicate IRI could not be resolved against the base
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// A number token that is neither a 32-bit integer nor a float
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// A triple was sent to a sink that has already been finished
    #[error("Sink already closed")]
    SinkClosed,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error comes from the tokenizer rejecting its input.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Error::Syntax(_) | Error::Json(JsonParseError::Syntax(_)))
    }
}
