//! Triple type.
//!
//! A triple is a (subject, predicate, object) statement. Subjects are
//! IRIs or blank nodes; predicates are always IRIs; objects may be any
//! term.

use crate::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (subject, predicate, object) statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject term. Never a literal.
    pub subject: Term,

    /// Predicate IRI.
    pub predicate: String,

    /// Object term.
    pub object: Term,
}

impl Triple {
    /// Creates a new triple.
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.subject.key(),
            self.predicate,
            self.object.lexical_form()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_creation() {
        let t = Triple::new(
            Term::iri("http://example.org/apple"),
            "http://example.org/label",
            Term::literal("Apple"),
        );
        assert_eq!(t.subject.key(), "http://example.org/apple");
        assert_eq!(t.predicate, "http://example.org/label");
        assert_eq!(t.object.lexical_form(), "Apple");
    }
}
