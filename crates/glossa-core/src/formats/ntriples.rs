//! N-Triples format.
//!
//! Line-based, one `<subject> <predicate> <object> .` statement per line.
//! Write-only: the service stores its data as Turtle.
//!
//! Reference: <https://www.w3.org/TR/n-triples/>

use crate::formats::to_rio;
use crate::{Graph, Result};
use rio_api::formatter::TriplesFormatter;
use rio_turtle::NTriplesFormatter;
use std::io::Write;

/// N-Triples format handler.
pub struct NTriples;

impl NTriples {
    /// Writes the graph as N-Triples.
    pub fn write<W: Write>(graph: &Graph, writer: W) -> Result<()> {
        let mut formatter = NTriplesFormatter::new(writer);
        for triple in graph.triples() {
            if let Some(rio_triple) = to_rio(triple) {
                formatter.format(&rio_triple)?;
            }
        }
        formatter.finish()?;
        Ok(())
    }

    /// Serializes the graph to an N-Triples string.
    pub fn to_string(graph: &Graph) -> Result<String> {
        let mut buf = Vec::new();
        Self::write(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}
