//! Glossa Core - RDF graph model and serialization
//!
//! This crate holds the data model shared by the rest of the workspace:
//! RDF terms, triples, and an in-memory graph with indexes for the
//! subject/predicate-bound lookups the query layer needs.
//!
//! # Architecture
//!
//! The graph is an insertion-ordered triple list plus a subject index.
//! It is deliberately not a general triple store: it supports exactly
//! the access patterns used by the vocabulary service:
//! - objects of a (subject, predicate) pair
//! - subjects carrying a (predicate, IRI object) pair
//! - membership test for a full triple
//!
//! # Example
//!
//! ```no_run
//! use glossa_core::{Graph, Literal, Term, Triple, vocab};
//!
//! let mut graph = Graph::new();
//! graph.insert(Triple::new(
//!     Term::iri("http://example.org/apple"),
//!     vocab::skos::PREF_LABEL,
//!     Term::Literal(Literal::new("Apple").with_language("en")),
//! ));
//!
//! let labels: Vec<_> = graph
//!     .objects("http://example.org/apple", vocab::skos::PREF_LABEL)
//!     .collect();
//! ```

mod error;
pub mod formats;
mod graph;
mod term;
mod triple;
pub mod vocab;

pub use error::GraphError;
pub use formats::Format;
pub use graph::Graph;
pub use term::{Literal, Term};
pub use triple::Triple;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;
