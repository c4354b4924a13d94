//! RDF serialization formats.
//!
//! One writer per output format behind a single dispatch, so formats can
//! be added without touching query logic:
//! - Turtle (human-readable, also the storage format we read back)
//! - N-Triples (line-based)
//! - RDF/XML
//! - JSON-LD (expanded form, pretty-printed)

mod jsonld;
mod ntriples;
mod rdfxml;
mod turtle;

pub use jsonld::JsonLd;
pub use ntriples::NTriples;
pub use rdfxml::RdfXml;
pub use turtle::Turtle;

use crate::{Graph, GraphError, Result, Term, Triple};
use rio_api::model as rio;
use std::str::FromStr;

/// A supported serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Turtle,
    JsonLd,
    RdfXml,
    NTriples,
}

impl Format {
    /// Resolves a format name or alias, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(Self::Turtle),
            "jsonld" | "json-ld" => Ok(Self::JsonLd),
            "xml" | "rdf" | "rdfxml" | "rdf-xml" => Ok(Self::RdfXml),
            "nt" | "ntriples" | "n-triples" => Ok(Self::NTriples),
            _ => Err(GraphError::UnsupportedFormat(name.to_string())),
        }
    }

    /// The MIME content type for this format.
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Turtle => "text/turtle",
            Self::JsonLd => "application/ld+json",
            Self::RdfXml => "application/rdf+xml",
            Self::NTriples => "application/n-triples",
        }
    }

    /// Writes the graph in this format.
    pub fn write(&self, graph: &Graph) -> Result<String> {
        match self {
            Self::Turtle => Turtle::to_string(graph),
            Self::JsonLd => JsonLd::to_string(graph),
            Self::RdfXml => RdfXml::to_string(graph),
            Self::NTriples => NTriples::to_string(graph),
        }
    }
}

impl FromStr for Format {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Serializes a graph into the named format.
///
/// Returns the text payload and its MIME content type. An unknown format
/// name is a client-input error carrying the offending string.
pub fn serialize(graph: &Graph, name: &str) -> Result<(String, &'static str)> {
    let format = Format::from_name(name)?;
    Ok((format.write(graph)?, format.media_type()))
}

/// Converts one of our triples into Rio's borrowed model.
///
/// Returns `None` for statements Rio cannot represent (a literal in
/// subject position, which our parsers never produce).
pub(crate) fn to_rio(triple: &Triple) -> Option<rio::Triple<'_>> {
    let subject = match &triple.subject {
        Term::Iri(iri) => rio::Subject::NamedNode(rio::NamedNode { iri }),
        Term::Blank(id) => rio::Subject::BlankNode(rio::BlankNode { id }),
        Term::Literal(_) => return None,
    };

    let predicate = rio::NamedNode {
        iri: &triple.predicate,
    };

    let object = match &triple.object {
        Term::Iri(iri) => rio::Term::NamedNode(rio::NamedNode { iri }),
        Term::Blank(id) => rio::Term::BlankNode(rio::BlankNode { id }),
        Term::Literal(lit) => rio::Term::Literal(match (&lit.language, &lit.datatype) {
            (Some(language), _) => rio::Literal::LanguageTaggedString {
                value: &lit.value,
                language,
            },
            (None, Some(datatype)) => rio::Literal::Typed {
                value: &lit.value,
                datatype: rio::NamedNode { iri: datatype },
            },
            (None, None) => rio::Literal::Simple { value: &lit.value },
        }),
    };

    Some(rio::Triple {
        subject,
        predicate,
        object,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_resolve() {
        for name in ["turtle", "ttl", "TTL", "Turtle"] {
            assert_eq!(Format::from_name(name).unwrap(), Format::Turtle);
        }
        for name in ["jsonld", "json-ld", "JSON-LD"] {
            assert_eq!(Format::from_name(name).unwrap(), Format::JsonLd);
        }
        for name in ["xml", "rdf", "rdfxml", "rdf-xml"] {
            assert_eq!(Format::from_name(name).unwrap(), Format::RdfXml);
        }
        for name in ["nt", "ntriples", "n-triples"] {
            assert_eq!(Format::from_name(name).unwrap(), Format::NTriples);
        }
    }

    #[test]
    fn test_unknown_format_names_offender() {
        let err = Format::from_name("csv").unwrap_err();
        match err {
            GraphError::UnsupportedFormat(name) => assert_eq!(name, "csv"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_media_types() {
        assert_eq!(Format::Turtle.media_type(), "text/turtle");
        assert_eq!(Format::JsonLd.media_type(), "application/ld+json");
        assert_eq!(Format::RdfXml.media_type(), "application/rdf+xml");
        assert_eq!(Format::NTriples.media_type(), "application/n-triples");
    }
}
