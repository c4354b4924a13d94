//! RDF/XML format.
//!
//! Write-only, for the download endpoint.
//!
//! Reference: <https://www.w3.org/TR/rdf-syntax-grammar/>

use crate::formats::to_rio;
use crate::{Graph, Result};
use rio_api::formatter::TriplesFormatter;
use rio_xml::RdfXmlFormatter;
use std::io::Write;

/// RDF/XML format handler.
pub struct RdfXml;

impl RdfXml {
    /// Writes the graph as RDF/XML.
    pub fn write<W: Write>(graph: &Graph, writer: W) -> Result<()> {
        let mut formatter = RdfXmlFormatter::new(writer)?;
        for triple in graph.triples() {
            if let Some(rio_triple) = to_rio(triple) {
                formatter.format(&rio_triple)?;
            }
        }
        formatter.finish()?;
        Ok(())
    }

    /// Serializes the graph to an RDF/XML string.
    pub fn to_string(graph: &Graph) -> Result<String> {
        let mut buf = Vec::new();
        Self::write(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}
