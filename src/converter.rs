//! Streaming JSON to RDF conversion.
//!
//! Every JSON object becomes a blank node. Keys become predicates under the
//! base IRI, scalars become literals attached to the innermost open object,
//! and nested objects are linked to their parent through the key they appear
//! under. Arrays are flattened: each element attaches to the enclosing object
//! with the predicate of the key that owns the array, however deeply arrays
//! are nested inside each other.
//!
//! # Example
//!
//! ```
//! use json2rdf::converter::convert_slice;
//! use json2rdf::sink::VecSink;
//!
//! let mut sink = VecSink::new();
//! let stats = convert_slice(br#"{"name": "Ada", "tags": ["a", "b"]}"#, "http://localhost/", &mut sink)?;
//! assert_eq!(stats.triples, 3);
//! assert_eq!(sink.triples[0].predicate.as_str(), "http://localhost/#name");
//! # Ok::<(), json2rdf::Error>(())
//! ```

use crate::error::Result;
use crate::iri::PredicateBuilder;
use crate::literal;
use crate::sink::TripleSink;
use crate::token::{JsonTokenizer, Token, TokenSource};
use oxigraph::model::{BlankNode, Literal, NamedNode, Term, Triple};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;

/// Counters for one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub tokens: u64,
    /// Blank nodes created, one per JSON object
    pub resources: u64,
    pub triples: u64,
    pub max_depth: usize,
    /// Nulls, plus scalars that had no subject or predicate to attach to
    pub dropped_values: u64,
}

/// The conversion state machine.
///
/// State is the stack of open objects, the active predicate, and for every
/// object that owns an open array, the predicate that was active when the
/// array started. All three are bounded by the nesting depth of the document.
pub struct JsonStreamRdfConverter {
    predicates: PredicateBuilder,
    subjects: Vec<BlankNode>,
    array_predicates: HashMap<BlankNode, NamedNode>,
    predicate: Option<NamedNode>,
    stats: ConversionStats,
}

impl JsonStreamRdfConverter {
    /// Fails with [`crate::Error::InvalidBaseIri`] before any input is read.
    pub fn new(base_iri: &str) -> Result<Self> {
        Ok(Self::from_builder(PredicateBuilder::new(base_iri)?))
    }

    pub fn from_builder(predicates: PredicateBuilder) -> Self {
        Self {
            predicates,
            subjects: Vec::new(),
            array_predicates: HashMap::new(),
            predicate: None,
            stats: ConversionStats::default(),
        }
    }

    pub fn base_iri(&self) -> &str {
        self.predicates.base()
    }

    /// Number of currently open objects.
    pub fn depth(&self) -> usize {
        self.subjects.len()
    }

    pub fn active_predicate(&self) -> Option<&NamedNode> {
        self.predicate.as_ref()
    }

    /// True when no object or owned array is open.
    pub fn is_idle(&self) -> bool {
        self.subjects.is_empty() && self.array_predicates.is_empty()
    }

    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }

    /// Forget all state from a previous (possibly failed) run.
    pub fn reset(&mut self) {
        self.subjects.clear();
        self.array_predicates.clear();
        self.predicate = None;
        self.stats = ConversionStats::default();
    }

    /// Pull every token from `source`, bracketed by `begin()`/`end()` on the sink.
    ///
    /// A tokenizer or sink failure is returned immediately and `end()` is not called.
    pub fn convert<T, S>(&mut self, mut source: T, mut sink: S) -> Result<ConversionStats>
    where
        T: TokenSource,
        S: TripleSink,
    {
        self.reset();
        tracing::debug!(base = %self.predicates.base(), "starting JSON to RDF conversion");

        sink.begin()?;
        while let Some(token) = source.next_token()? {
            self.process(token, &mut sink)?;
        }
        sink.end()?;

        if !self.is_idle() {
            tracing::warn!(depth = self.depth(), "token source ended inside an open object");
        }
        tracing::debug!(
            tokens = self.stats.tokens,
            resources = self.stats.resources,
            triples = self.stats.triples,
            max_depth = self.stats.max_depth,
            dropped = self.stats.dropped_values,
            "conversion finished"
        );
        Ok(self.stats.clone())
    }

    /// Apply a single token, emitting zero or more triples.
    pub fn process<S: TripleSink>(&mut self, token: Token<'_>, sink: &mut S) -> Result<()> {
        self.stats.tokens += 1;
        match token {
            Token::ArrayStart => {
                if let (Some(subject), Some(predicate)) = (self.subjects.last(), &self.predicate) {
                    self.array_predicates.insert(subject.clone(), predicate.clone());
                }
            }
            Token::ArrayEnd => {
                if let Some(subject) = self.subjects.last() {
                    self.array_predicates.remove(subject);
                }
            }
            Token::ObjectStart => {
                let resource = BlankNode::default();
                self.stats.resources += 1;
                if let (Some(parent), Some(predicate)) = (self.subjects.last(), &self.predicate) {
                    let triple = Triple::new(parent.clone(), predicate.clone(), resource.clone());
                    self.stats.triples += 1;
                    sink.triple(triple)?;
                }
                self.subjects.push(resource);
                self.stats.max_depth = self.stats.max_depth.max(self.subjects.len());
            }
            Token::ObjectEnd => {
                self.subjects.pop();
                // back in an array owned by the parent: its key applies again
                if let Some(restored) =
                    self.subjects.last().and_then(|parent| self.array_predicates.get(parent))
                {
                    self.predicate = Some(restored.clone());
                }
            }
            Token::Key(key) => {
                self.predicate = Some(self.predicates.build_predicate(&key)?);
            }
            Token::True => self.emit_literal(literal::boolean_literal(true), sink)?,
            Token::False => self.emit_literal(literal::boolean_literal(false), sink)?,
            Token::String(value) => self.emit_literal(literal::string_literal(&value), sink)?,
            Token::Number(text) => {
                if self.can_attach() {
                    self.emit_literal(literal::number_literal(&text)?, sink)?;
                } else {
                    self.drop_value("number");
                }
            }
            Token::Null => {
                self.stats.dropped_values += 1;
            }
        }
        Ok(())
    }

    fn can_attach(&self) -> bool {
        !self.subjects.is_empty() && self.predicate.is_some()
    }

    fn emit_literal<S: TripleSink>(&mut self, literal: Literal, sink: &mut S) -> Result<()> {
        if !self.can_attach() {
            self.drop_value("literal");
            return Ok(());
        }
        if let (Some(subject), Some(predicate)) = (self.subjects.last(), &self.predicate) {
            let triple = Triple::new(subject.clone(), predicate.clone(), Term::from(literal));
            self.stats.triples += 1;
            sink.triple(triple)?;
        }
        Ok(())
    }

    fn drop_value(&mut self, kind: &str) {
        tracing::trace!(kind, depth = self.subjects.len(), "value has no subject or predicate, dropped");
        self.stats.dropped_values += 1;
    }
}

/// Convert a token stream to triples against `base_iri`.
pub fn convert<T, S>(source: T, base_iri: &str, sink: S) -> Result<ConversionStats>
where
    T: TokenSource,
    S: TripleSink,
{
    JsonStreamRdfConverter::new(base_iri)?.convert(source, sink)
}

/// Convert an in-memory JSON document.
pub fn convert_slice<S: TripleSink>(json: &[u8], base_iri: &str, sink: S) -> Result<ConversionStats> {
    let mut converter = JsonStreamRdfConverter::new(base_iri)?;
    converter.convert(JsonTokenizer::from_slice(json), sink)
}

/// Convert a JSON document read from `reader`.
pub fn convert_reader<R: Read, S: TripleSink>(reader: R, base_iri: &str, sink: S) -> Result<ConversionStats> {
    let mut converter = JsonStreamRdfConverter::new(base_iri)?;
    converter.convert(JsonTokenizer::from_reader(reader), sink)
}
