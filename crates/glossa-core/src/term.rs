//! RDF terms.
//!
//! A term is a node in the graph: an IRI, a blank node, or a literal.
//! Literals carry an optional language tag and an optional datatype IRI;
//! a literal with no language tag is "language-less".

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A literal value with optional language tag and datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// The lexical value.
    pub value: String,

    /// Language tag, e.g. `en` or `fr`. `None` means language-less.
    pub language: Option<String>,

    /// Datatype IRI for typed literals.
    pub datatype: Option<String>,
}

impl Literal {
    /// Creates a plain literal with no language tag or datatype.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Sets the language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the datatype IRI.
    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// A named node identified by an IRI.
    Iri(String),

    /// A blank node with a document-local label.
    Blank(String),

    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// Creates a plain literal term.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(Literal::new(value))
    }

    /// Returns the literal if this term is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns the IRI if this term is a named node.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The string a term is addressed by when used as a subject.
    ///
    /// IRIs key by their IRI; blank nodes by their `_:label` form.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Self::Iri(iri) => Cow::Borrowed(iri),
            Self::Blank(id) => Cow::Owned(format!("_:{id}")),
            Self::Literal(lit) => Cow::Borrowed(&lit.value),
        }
    }

    /// The lexical form shown to users: literal value, IRI, or blank label.
    pub fn lexical_form(&self) -> Cow<'_, str> {
        match self {
            Self::Literal(lit) => Cow::Borrowed(lit.value.as_str()),
            other => other.key(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexical_form())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_builders() {
        let lit = Literal::new("Apple").with_language("en");
        assert_eq!(lit.value, "Apple");
        assert_eq!(lit.language.as_deref(), Some("en"));
        assert!(lit.datatype.is_none());
    }

    #[test]
    fn test_term_keys() {
        assert_eq!(Term::iri("http://x/a").key(), "http://x/a");
        assert_eq!(Term::Blank("b0".into()).key(), "_:b0");
    }

    #[test]
    fn test_lexical_form() {
        let term = Term::Literal(Literal::new("Pomme").with_language("fr"));
        assert_eq!(term.lexical_form(), "Pomme");
        assert_eq!(Term::iri("http://x/a").lexical_form(), "http://x/a");
    }
}
