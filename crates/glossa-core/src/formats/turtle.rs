//! Turtle format.
//!
//! The storage format of the vocabulary file: we both read and write it.
//!
//! Reference: <https://www.w3.org/TR/turtle/>

use crate::formats::to_rio;
use crate::{Graph, GraphError, Literal, Result, Term, Triple};
use oxiri::Iri;
use rio_api::formatter::TriplesFormatter;
use rio_api::model as rio;
use rio_api::parser::TriplesParser;
use rio_turtle::{TurtleFormatter, TurtleParser};
use std::io::{BufRead, Write};
use tracing::debug;

/// Turtle format handler.
pub struct Turtle;

impl Turtle {
    /// Parses Turtle from a reader.
    ///
    /// A malformed document is a fatal parse error; no partial graph is
    /// returned.
    pub fn read<R: BufRead>(reader: R, base_iri: Option<&str>) -> Result<Graph> {
        let base = match base_iri {
            Some(base) => Some(
                Iri::parse(base.to_string())
                    .map_err(|e| GraphError::BaseIri(e.to_string()))?,
            ),
            None => None,
        };

        let mut parser = TurtleParser::new(reader, base);
        let mut graph = Graph::new();

        let mut on_triple = |triple: rio::Triple<'_>| -> Result<()> {
            graph.insert(convert(&triple)?);
            Ok(())
        };
        parser.parse_all(&mut on_triple)?;

        debug!("parsed {} triples from turtle input", graph.len());
        Ok(graph)
    }

    /// Parses Turtle from a string.
    pub fn from_str(s: &str, base_iri: Option<&str>) -> Result<Graph> {
        Self::read(std::io::Cursor::new(s), base_iri)
    }

    /// Writes the graph as Turtle.
    pub fn write<W: Write>(graph: &Graph, writer: W) -> Result<()> {
        let mut formatter = TurtleFormatter::new(writer);
        for triple in graph.triples() {
            if let Some(rio_triple) = to_rio(triple) {
                formatter.format(&rio_triple)?;
            }
        }
        formatter.finish()?;
        Ok(())
    }

    /// Serializes the graph to a Turtle string.
    pub fn to_string(graph: &Graph) -> Result<String> {
        let mut buf = Vec::new();
        Self::write(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}

/// Converts a Rio triple into our owned model.
pub(crate) fn convert(triple: &rio::Triple<'_>) -> Result<Triple> {
    let subject = match triple.subject {
        rio::Subject::NamedNode(n) => Term::Iri(n.iri.to_string()),
        rio::Subject::BlankNode(n) => Term::Blank(n.id.to_string()),
        rio::Subject::Triple(_) => return Err(GraphError::TripleTerm),
    };

    let predicate = triple.predicate.iri.to_string();

    let object = match triple.object {
        rio::Term::NamedNode(n) => Term::Iri(n.iri.to_string()),
        rio::Term::BlankNode(n) => Term::Blank(n.id.to_string()),
        rio::Term::Literal(rio::Literal::Simple { value }) => {
            Term::Literal(Literal::new(value))
        }
        rio::Term::Literal(rio::Literal::LanguageTaggedString { value, language }) => {
            Term::Literal(Literal::new(value).with_language(language))
        }
        rio::Term::Literal(rio::Literal::Typed { value, datatype }) => {
            Term::Literal(Literal::new(value).with_datatype(datatype.iri))
        }
        rio::Term::Triple(_) => return Err(GraphError::TripleTerm),
    };

    Ok(Triple::new(subject, predicate, object))
}
