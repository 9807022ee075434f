//! # json2rdf
//!
//! Streaming conversion of arbitrary JSON into RDF triples.
//!
//! JSON objects become blank nodes, object keys become predicates resolved
//! as fragments of a base IRI (`base#key`), and scalars become typed literals
//! attached to the enclosing object. Neither the JSON document nor the
//! resulting graph is ever held in memory: tokens are pulled one at a time and
//! triples are pushed to a sink as soon as they are known.
//!
//! ## Example
//!
//! ```rust
//! use json2rdf::{convert_slice, VecSink};
//!
//! fn example() -> json2rdf::Result<()> {
//!     let mut sink = VecSink::new();
//!     convert_slice(br#"{"key": "val", "n": 42}"#, "http://localhost/", &mut sink)?;
//!     for triple in &sink.triples {
//!         println!("{}", triple);
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]

/// Conversion settings and output formats
pub mod config;

/// The JSON to RDF state machine and its driver
pub mod converter;

pub mod error;

/// Predicate IRI construction
pub mod iri;

/// Literal typing of JSON scalars
pub mod literal;

/// Triple sinks
pub mod sink;

/// JSON tokens and token sources
pub mod token;

// Re-export commonly used types
pub use config::{ConverterConfig, OutputFormat};
pub use converter::{convert, convert_reader, convert_slice, ConversionStats, JsonStreamRdfConverter};
pub use error::{Error, Result};
pub use iri::PredicateBuilder;
pub use sink::{GraphSink, TripleSink, VecSink, WriterSink};
pub use token::{JsonTokenizer, Token, TokenSource};
