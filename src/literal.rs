//! Typing of JSON scalars as RDF literals.
//!
//! Numbers are narrowed: a value that fits a 32-bit signed integer becomes an
//! `xsd:int`, anything else is read as a 32-bit float and becomes an
//! `xsd:float`. Large integers and high-precision decimals lose precision.
//!
//! Float lexical forms are the shortest text that reads back as the same
//! `f32`: `1.0` is written `"1"` and `1e10` is written `"10000000000"`, where
//! Java-based tools write `"1.0"` and `"1.0E10"`. The values are equal, so
//! compare float literals by value rather than by lexical form.

use crate::error::{Error, Result};
use oxigraph::model::vocab::xsd;
use oxigraph::model::Literal;

pub fn boolean_literal(value: bool) -> Literal {
    Literal::new_typed_literal(if value { "true" } else { "false" }, xsd::BOOLEAN)
}

/// Plain string literal, value kept verbatim.
pub fn string_literal(value: &str) -> Literal {
    Literal::new_simple_literal(value)
}

/// Type a JSON number token, int32 first, then float32.
pub fn number_literal(text: &str) -> Result<Literal> {
    if let Ok(value) = text.parse::<i32>() {
        return Ok(Literal::new_typed_literal(value.to_string(), xsd::INT));
    }
    let value = text.parse::<f32>().map_err(|_| Error::InvalidNumber(text.to_string()))?;
    Ok(Literal::new_typed_literal(float_lexical(value), xsd::FLOAT))
}

fn float_lexical(value: f32) -> String {
    if value == f32::INFINITY {
        "INF".to_string()
    } else if value == f32::NEG_INFINITY {
        "-INF".to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booleans() {
        let t = boolean_literal(true);
        assert_eq!(t.value(), "true");
        assert_eq!(t.datatype(), xsd::BOOLEAN);
        assert_eq!(boolean_literal(false).value(), "false");
    }

    #[test]
    fn test_string_is_plain() {
        let lit = string_literal("  spaced\tvalue ");
        assert_eq!(lit.value(), "  spaced\tvalue ");
        assert_eq!(lit.datatype(), xsd::STRING);
        assert!(lit.language().is_none());
    }

    #[test]
    fn test_int_tier() {
        let lit = number_literal("42").unwrap();
        assert_eq!(lit.value(), "42");
        assert_eq!(lit.datatype(), xsd::INT);

        assert_eq!(number_literal("-2147483648").unwrap().datatype(), xsd::INT);
        assert_eq!(number_literal("-0").unwrap().value(), "0");
    }

    #[test]
    fn test_float_tier() {
        let lit = number_literal("66.6").unwrap();
        assert_eq!(lit.value(), "66.6");
        assert_eq!(lit.datatype(), xsd::FLOAT);

        assert_eq!(number_literal("1e3").unwrap().datatype(), xsd::FLOAT);
    }

    #[test]
    fn test_float_lexical_is_shortest_form() {
        let lit = number_literal("1.0").unwrap();
        assert_eq!(lit.value(), "1");
        assert_eq!(lit.datatype(), xsd::FLOAT);
        assert_eq!(number_literal("1e10").unwrap().value(), "10000000000");
    }

    #[test]
    fn test_int_overflow_narrows_to_float() {
        let lit = number_literal("2147483648").unwrap();
        assert_eq!(lit.datatype(), xsd::FLOAT);
        assert_eq!(lit.value().parse::<f32>().unwrap(), 2_147_483_648f32);
    }

    #[test]
    fn test_float_overflow_is_infinite() {
        assert_eq!(number_literal("1e39").unwrap().value(), "INF");
        assert_eq!(number_literal("-1e39").unwrap().value(), "-INF");
    }

    #[test]
    fn test_not_a_number() {
        assert!(matches!(number_literal("12abc"), Err(Error::InvalidNumber(_))));
    }
}
