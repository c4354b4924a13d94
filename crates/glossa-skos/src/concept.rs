//! Read-only concept projections.
//!
//! Both types are computed fresh per query and owned by the caller; the
//! wire field names match the JSON API.

use serde::Serialize;
use std::collections::BTreeMap;

/// The language key used for language-less literals.
pub(crate) const UND: &str = "und";

/// A one-line view of a concept for listings and search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptSummary {
    pub iri: String,

    #[serde(rename = "prefLabel")]
    pub pref_label: Option<String>,

    pub definition: Option<String>,
}

/// The full view of a concept.
///
/// Label and definition literals are grouped by language tag (`"und"`
/// for language-less ones); relation lists keep storage order without
/// deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptDetail {
    pub iri: String,

    #[serde(rename = "prefLabel")]
    pub pref_label: BTreeMap<String, Vec<String>>,

    #[serde(rename = "altLabel")]
    pub alt_label: BTreeMap<String, Vec<String>>,

    pub definition: BTreeMap<String, Vec<String>>,

    pub broader: Vec<String>,
    pub narrower: Vec<String>,
    pub related: Vec<String>,

    #[serde(rename = "inScheme")]
    pub in_scheme: Vec<String>,

    pub notation: Vec<String>,

    #[serde(rename = "bestPrefLabel")]
    pub best_pref_label: Option<String>,

    #[serde(rename = "bestDefinition")]
    pub best_definition: Option<String>,
}
