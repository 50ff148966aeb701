//! Normalization of caller-supplied values into RDF terms.
//!
//! Everything here is pure: no clock, no environment, no graph access. `None`
//! simply stays absent — callers map options rather than passing them in.

use chrono::{DateTime, SecondsFormat, Utc};
use oxigraph::model::vocab::xsd;
use oxigraph::model::{Literal, NamedNode};

use crate::error::{ProvWorkflowError, Result};

/// Parse an absolute IRI supplied by a caller.
///
/// Relative references and malformed IRIs are rejected with
/// [`ProvWorkflowError::Conversion`] carrying the offending input.
pub fn named_node(iri: impl AsRef<str>) -> Result<NamedNode> {
    let iri = iri.as_ref();
    NamedNode::new(iri).map_err(|source| ProvWorkflowError::Conversion {
        value: iri.to_string(),
        source,
    })
}

/// Map an opaque JSON value onto a typed literal.
///
/// Strings become plain literals; booleans and numbers keep their XSD
/// datatype; arrays and objects are carried as their compact JSON text.
pub fn json_literal(value: &serde_json::Value) -> Literal {
    match value {
        serde_json::Value::String(s) => Literal::new_simple_literal(s),
        serde_json::Value::Bool(b) => Literal::from(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Literal::from(i)
            } else {
                Literal::from(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::Null => Literal::new_simple_literal(""),
        other => Literal::new_simple_literal(other.to_string()),
    }
}

/// Render a UTC instant as an `xsd:dateTimeStamp` literal (RFC 3339, `Z`).
pub fn datetime_literal(at: &DateTime<Utc>) -> Literal {
    Literal::new_typed_literal(
        at.to_rfc3339_opts(SecondsFormat::Secs, true),
        xsd::DATE_TIME_STAMP,
    )
}

/// Render an IRI as an `xsd:anyURI` literal (soft typing, e.g. version IRIs).
pub fn iri_literal(iri: &NamedNode) -> Literal {
    Literal::new_typed_literal(iri.as_str(), xsd::ANY_URI)
}

// --- tests -------------------------------------------------------------------
