//! Conversion configuration.

use oxigraph::io::RdfFormat;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_IRI: &str = "http://localhost/";

/// RDF serialization used when writing triples out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    NTriples,
    Turtle,
    NQuads,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Option<OutputFormat> {
        match format.to_lowercase().as_str() {
            "ntriples" | "n-triples" | "nt" => Some(OutputFormat::NTriples),
            "turtle" | "ttl" => Some(OutputFormat::Turtle),
            "nquads" | "n-quads" | "nq" => Some(OutputFormat::NQuads),
            _ => None,
        }
    }

    pub fn rdf_format(&self) -> RdfFormat {
        match self {
            OutputFormat::NTriples => RdfFormat::NTriples,
            OutputFormat::Turtle => RdfFormat::Turtle,
            OutputFormat::NQuads => RdfFormat::NQuads,
        }
    }

    pub fn media_type(&self) -> &'static str {
        self.rdf_format().media_type()
    }

    pub fn file_extension(&self) -> &'static str {
        self.rdf_format().file_extension()
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::from_string(s)
            .ok_or_else(|| format!("unknown format '{}' (expected ntriples, turtle or nquads)", s))
    }
}

/// Settings for one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Base IRI that JSON keys are resolved against as fragments
    #[serde(default = "default_base_iri")]
    pub base_iri: String,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_base_iri() -> String {
    DEFAULT_BASE_IRI.to_string()
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self { base_iri: default_base_iri(), format: OutputFormat::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(OutputFormat::from_string("ttl"), Some(OutputFormat::Turtle));
        assert_eq!(OutputFormat::from_string("N-Triples"), Some(OutputFormat::NTriples));
        assert_eq!(OutputFormat::from_string("nq"), Some(OutputFormat::NQuads));
        assert_eq!(OutputFormat::from_string("rdfxml"), None);
        assert!("jsonld".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_media_type() {
        assert_eq!(OutputFormat::NTriples.media_type(), "application/n-triples");
        assert_eq!(OutputFormat::Turtle.media_type(), "text/turtle");
        assert_eq!(OutputFormat::Turtle.file_extension(), "ttl");
    }

    #[test]
    fn test_config_default() {
        let config = ConverterConfig::default();
        assert_eq!(config.base_iri, "http://localhost/");
        assert_eq!(config.format, OutputFormat::NTriples);
    }

    #[test]
    fn test_config_from_json() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{"base_iri": "http://example.org/", "format": "turtle"}"#).unwrap();
        assert_eq!(config.base_iri, "http://example.org/");
        assert_eq!(config.format, OutputFormat::Turtle);

        let config: ConverterConfig = serde_json::from_str(r#"{"base_iri": "urn:x:"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::NTriples);

        let config: ConverterConfig = serde_json::from_str(r#"{"format": "nquads"}"#).unwrap();
        assert_eq!(config.base_iri, DEFAULT_BASE_IRI);
        assert_eq!(config.format, OutputFormat::NQuads);
    }
}
