//! IRI constants for the vocabularies the service speaks.

/// RDF core vocabulary.
pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// SKOS core vocabulary.
pub mod skos {
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";

    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
    pub const CONCEPT_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#ConceptScheme";

    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";

    pub const BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";
    pub const NARROWER: &str = "http://www.w3.org/2004/02/skos/core#narrower";
    pub const RELATED: &str = "http://www.w3.org/2004/02/skos/core#related";
    pub const IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";
    pub const NOTATION: &str = "http://www.w3.org/2004/02/skos/core#notation";
}

/// Dublin Core terms.
pub mod dcterms {
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
}
