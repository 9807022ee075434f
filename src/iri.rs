//! Predicate IRI construction from JSON keys.

use crate::error::{Error, Result};
use oxigraph::model::NamedNode;
use oxiri::Iri;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// ASCII escaped in a key: controls, reserved delimiters and the characters
/// IRIs forbid. Letters, digits and `-_.~` stay as they are.
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Builds predicate IRIs as fragments of a base IRI.
///
/// A key `k` becomes `base#` followed by `k` with reserved ASCII percent-encoded,
/// so the same key text always maps to the same predicate. Non-ASCII
/// characters that IRIs allow are kept unescaped.
#[derive(Debug, Clone)]
pub struct PredicateBuilder {
    base: Iri<String>,
}

impl PredicateBuilder {
    /// Parse the base IRI. Fails if it is not an absolute IRI.
    pub fn new(base_iri: &str) -> Result<Self> {
        let base = Iri::parse(base_iri.to_string()).map_err(|e| Error::InvalidBaseIri {
            iri: base_iri.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { base })
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// The `base#` prefix every predicate starts with.
    pub fn namespace(&self) -> Result<String> {
        Ok(self.resolve("#")?.into_inner())
    }

    /// Resolve a JSON key to its predicate IRI.
    pub fn build_predicate(&self, key: &str) -> Result<NamedNode> {
        let fragment = format!("#{}", encode_component(key));
        let iri = self.resolve(&fragment)?;
        Ok(NamedNode::new_unchecked(iri.into_inner()))
    }

    fn resolve(&self, reference: &str) -> Result<Iri<String>> {
        self.base.resolve(reference).map_err(|e| Error::InvalidIri(format!("{}: {}", reference, e)))
    }
}

fn encode_component(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    let mut buf = [0u8; 4];
    for c in key.chars() {
        if c.is_ascii() || !is_ucschar(c) {
            // non-ASCII bytes are always escaped by utf8_percent_encode
            encoded.extend(utf8_percent_encode(c.encode_utf8(&mut buf), COMPONENT));
        } else {
            encoded.push(c);
        }
    }
    encoded
}

/// `ucschar` from RFC 3987: the non-ASCII characters allowed in an IRI fragment.
fn is_ucschar(c: char) -> bool {
    let cp = u32::from(c);
    matches!(cp, 0xA0..=0xD7FF | 0xF900..=0xFDCF | 0xFDF0..=0xFFEF)
        || ((0x1_0000..=0xE_FFFF).contains(&cp) && (cp & 0xFFFF) <= 0xFFFD)
}
