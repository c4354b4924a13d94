use thiserror::Error;

/// Errors produced by graph construction and serialization.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("turtle parse error: {0}")]
    Turtle(#[from] rio_turtle::TurtleError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base IRI: {0}")]
    BaseIri(String),

    #[error("RDF-star triple terms are not supported")]
    TripleTerm,

    #[error("unsupported serialization format: {0}")]
    UnsupportedFormat(String),
}
