//! Triple sinks.
//!
//! A sink receives `begin()`, then the triples in emission order, then `end()`.
//! `end()` is never called when the conversion fails.

use crate::config::OutputFormat;
use crate::error::{Error, Result};
use oxigraph::io::{RdfSerializer, WriterQuadSerializer};
use oxigraph::model::{Graph, Triple};
use std::io::Write;

pub trait TripleSink {
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn triple(&mut self, triple: Triple) -> Result<()>;

    fn end(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: TripleSink + ?Sized> TripleSink for &mut S {
    fn begin(&mut self) -> Result<()> {
        (**self).begin()
    }

    fn triple(&mut self, triple: Triple) -> Result<()> {
        (**self).triple(triple)
    }

    fn end(&mut self) -> Result<()> {
        (**self).end()
    }
}

/// Collects triples in memory, in emission order.
#[derive(Debug, Default)]
pub struct VecSink {
    pub triples: Vec<Triple>,
    pub begun: bool,
    pub ended: bool,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }
}

impl TripleSink for VecSink {
    fn begin(&mut self) -> Result<()> {
        self.begun = true;
        Ok(())
    }

    fn triple(&mut self, triple: Triple) -> Result<()> {
        self.triples.push(triple);
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.ended = true;
        Ok(())
    }
}

/// Inserts triples into an in-memory oxigraph [`Graph`].
///
/// Identical triples collapse, as graphs are sets.
#[derive(Debug, Default)]
pub struct GraphSink {
    graph: Graph,
}

impl GraphSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

impl TripleSink for GraphSink {
    fn triple(&mut self, triple: Triple) -> Result<()> {
        self.graph.insert(&triple);
        Ok(())
    }
}

/// Streams triples to a writer through oxigraph's RDF serializers.
pub struct WriterSink<W: Write> {
    serializer: Option<WriterQuadSerializer<W>>,
    written: u64,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        let serializer = RdfSerializer::from_format(format.rdf_format()).for_writer(writer);
        Self { serializer: Some(serializer), written: 0 }
    }

    /// Number of triples serialized so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl<W: Write> TripleSink for WriterSink<W> {
    fn triple(&mut self, triple: Triple) -> Result<()> {
        let serializer = self.serializer.as_mut().ok_or(Error::SinkClosed)?;
        serializer.serialize_triple(&triple)?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        let serializer = self.serializer.take().ok_or(Error::SinkClosed)?;
        let mut writer = serializer.finish()?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::model::{BlankNode, Literal, NamedNode};

    fn sample() -> Triple {
        Triple::new(
            BlankNode::new_unchecked("b0"),
            NamedNode::new_unchecked("http://localhost/#key"),
            Literal::new_simple_literal("val"),
        )
    }

    #[test]
    fn test_vec_sink_lifecycle() {
        let mut sink = VecSink::new();
        sink.begin().unwrap();
        sink.triple(sample()).unwrap();
        sink.end().unwrap();
        assert!(sink.begun && sink.ended);
        assert_eq!(sink.into_triples(), vec![sample()]);
    }

    #[test]
    fn test_graph_sink_is_a_set() {
        let mut sink = GraphSink::new();
        sink.triple(sample()).unwrap();
        sink.triple(sample()).unwrap();
        assert_eq!(sink.graph().len(), 1);
    }

    #[test]
    fn test_writer_sink_ntriples() {
        let mut buffer = Vec::new();
        let mut sink = WriterSink::new(&mut buffer, OutputFormat::NTriples);
        sink.begin().unwrap();
        sink.triple(sample()).unwrap();
        assert_eq!(sink.written(), 1);
        sink.end().unwrap();
        drop(sink);
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.trim(), r#"_:b0 <http://localhost/#key> "val" ."#);
    }

    #[test]
    fn test_writer_sink_rejects_triples_after_end() {
        let mut sink = WriterSink::new(Vec::new(), OutputFormat::Turtle);
        sink.end().unwrap();
        assert!(matches!(sink.triple(sample()), Err(Error::SinkClosed)));
    }
}
