//! Core graph data structure.
//!
//! The Graph stores triples in insertion order and adds a subject index
//! for fast lookups. It is built once by a parser or importer and then
//! only read; reloads replace the whole graph rather than mutating it.

use crate::{Term, Triple};
use std::collections::{HashMap, HashSet};

/// An in-memory RDF graph.
///
/// Triples keep their insertion order, which is the "storage order" all
/// enumeration operations yield. The subject index maps a subject key
/// (IRI, or `_:label` for blank nodes) to the positions of its triples.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    /// All triples, in insertion order.
    triples: Vec<Triple>,

    /// Maps subject keys to triple positions.
    subject_index: HashMap<String, Vec<usize>>,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple to the graph.
    pub fn insert(&mut self, triple: Triple) {
        let key = triple.subject.key().into_owned();
        self.subject_index
            .entry(key)
            .or_default()
            .push(self.triples.len());
        self.triples.push(triple);
    }

    /// Objects of all `(subject, predicate, _)` triples, in storage order.
    pub fn objects<'g>(
        &'g self,
        subject: &str,
        predicate: &'g str,
    ) -> impl Iterator<Item = &'g Term> {
        self.subject_index
            .get(subject)
            .map(|positions| positions.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |&pos| {
                let triple = &self.triples[pos];
                (triple.predicate == predicate).then_some(&triple.object)
            })
    }

    /// Subjects of all `(_, predicate, <object_iri>)` triples.
    ///
    /// Subjects come back in storage order with duplicates suppressed
    /// (a subject typed twice is listed once, at its first position).
    pub fn subjects_with(&self, predicate: &str, object_iri: &str) -> Vec<&Term> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .filter(|t| {
                t.predicate == predicate && t.object.as_iri() == Some(object_iri)
            })
            .filter(|t| seen.insert(t.subject.key().into_owned()))
            .map(|t| &t.subject)
            .collect()
    }

    /// Whether the graph holds a `(subject, predicate, object)` triple.
    pub fn contains(&self, subject: &str, predicate: &str, object: &Term) -> bool {
        self.objects(subject, predicate).any(|o| o == object)
    }

    /// Iterates over all triples in storage order.
    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Returns the number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vocab, Literal};

    fn sample() -> Graph {
        let mut g = Graph::new();
        g.insert(Triple::new(
            Term::iri("http://x/a"),
            vocab::rdf::TYPE,
            Term::iri(vocab::skos::CONCEPT),
        ));
        g.insert(Triple::new(
            Term::iri("http://x/a"),
            vocab::skos::PREF_LABEL,
            Term::Literal(Literal::new("Apple").with_language("en")),
        ));
        g.insert(Triple::new(
            Term::iri("http://x/b"),
            vocab::rdf::TYPE,
            Term::iri(vocab::skos::CONCEPT),
        ));
        g.insert(Triple::new(
            Term::iri("http://x/a"),
            vocab::skos::PREF_LABEL,
            Term::Literal(Literal::new("Pomme").with_language("fr")),
        ));
        g
    }

    #[test]
    fn test_objects_in_storage_order() {
        let g = sample();
        let labels: Vec<_> = g
            .objects("http://x/a", vocab::skos::PREF_LABEL)
            .filter_map(Term::as_literal)
            .map(|l| l.value.as_str())
            .collect();
        assert_eq!(labels, vec!["Apple", "Pomme"]);
    }

    #[test]
    fn test_subjects_with_dedups() {
        let mut g = sample();
        // Type http://x/a a second time; it must still list once.
        g.insert(Triple::new(
            Term::iri("http://x/a"),
            vocab::rdf::TYPE,
            Term::iri(vocab::skos::CONCEPT),
        ));
        let subjects: Vec<_> = g
            .subjects_with(vocab::rdf::TYPE, vocab::skos::CONCEPT)
            .iter()
            .map(|t| t.key().into_owned())
            .collect();
        assert_eq!(subjects, vec!["http://x/a", "http://x/b"]);
    }

    #[test]
    fn test_contains() {
        let g = sample();
        assert!(g.contains(
            "http://x/a",
            vocab::rdf::TYPE,
            &Term::iri(vocab::skos::CONCEPT)
        ));
        assert!(!g.contains(
            "http://x/missing",
            vocab::rdf::TYPE,
            &Term::iri(vocab::skos::CONCEPT)
        ));
    }

    #[test]
    fn test_empty() {
        let g = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.subjects_with(vocab::rdf::TYPE, vocab::skos::CONCEPT).len(), 0);
    }
}
