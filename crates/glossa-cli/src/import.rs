//! CSV to SKOS import.
//!
//! Reads a delimited file with recognized column name aliases, mints
//! one concept per usable row, links everything to a single concept
//! scheme, and writes the result as Turtle. Rows without a usable
//! label are skipped; a structurally unreadable file is fatal.

use glossa_core::formats::Turtle;
use glossa_core::{vocab, Graph, Literal, Term, Triple};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Column aliases, tried per row in order until one has a value.
const LABEL_COLUMNS: &[&str] = &["prefLabel", "label", "term"];
const DEFINITION_COLUMNS: &[&str] = &["definition", "desc"];
const ALT_LABEL_COLUMNS: &[&str] = &["altLabel", "alt"];
const ID_COLUMNS: &[&str] = &["id"];

/// Characters kept verbatim in slugs: the URI unreserved set.
const SLUG_CHARSET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] glossa_core::GraphError),
}

/// Derives a concept slug from a label: trimmed, lowercased, spaces
/// turned into hyphens, percent-encoded.
pub fn slugify(value: &str) -> String {
    let normalized = value.trim().to_lowercase().replace(' ', "-");
    utf8_percent_encode(&normalized, SLUG_CHARSET).to_string()
}

/// Imports a CSV file and writes the resulting vocabulary as Turtle.
///
/// Returns the number of concepts written. Parent directories of the
/// output path are created as needed.
pub fn import_csv(
    input: &Path,
    output: &Path,
    base_iri: &str,
    language: &str,
    title: &str,
) -> Result<usize, ImportError> {
    let mut reader = csv::Reader::from_path(input)?;
    let headers = reader.headers()?.clone();

    let label_columns = resolve_columns(&headers, LABEL_COLUMNS);
    let definition_columns = resolve_columns(&headers, DEFINITION_COLUMNS);
    let alt_columns = resolve_columns(&headers, ALT_LABEL_COLUMNS);
    let id_columns = resolve_columns(&headers, ID_COLUMNS);

    let base = base_iri.trim_end_matches('/');
    let scheme = format!("{base}/scheme");

    let mut graph = Graph::new();
    graph.insert(Triple::new(
        Term::iri(&scheme),
        vocab::rdf::TYPE,
        Term::iri(vocab::skos::CONCEPT_SCHEME),
    ));
    graph.insert(Triple::new(
        Term::iri(&scheme),
        vocab::dcterms::TITLE,
        Term::Literal(Literal::new(title).with_language(language)),
    ));

    for record in reader.records() {
        // A structurally malformed file aborts the whole import.
        let record = record?;

        let Some(label) = first_value(&record, &label_columns) else {
            // Best-effort import: label-less rows are skipped silently.
            continue;
        };

        let slug = first_value(&record, &id_columns)
            .map(str::to_string)
            .unwrap_or_else(|| slugify(label));
        let iri = format!("{base}/concept/{slug}");

        graph.insert(Triple::new(
            Term::iri(&iri),
            vocab::rdf::TYPE,
            Term::iri(vocab::skos::CONCEPT),
        ));
        graph.insert(Triple::new(
            Term::iri(&iri),
            vocab::skos::IN_SCHEME,
            Term::iri(&scheme),
        ));
        graph.insert(Triple::new(
            Term::iri(&iri),
            vocab::skos::PREF_LABEL,
            Term::Literal(Literal::new(label).with_language(language)),
        ));

        if let Some(definition) = first_value(&record, &definition_columns) {
            graph.insert(Triple::new(
                Term::iri(&iri),
                vocab::skos::DEFINITION,
                Term::Literal(Literal::new(definition).with_language(language)),
            ));
        }

        if let Some(alt) = first_value(&record, &alt_columns) {
            for item in alt.split('|').map(str::trim).filter(|s| !s.is_empty()) {
                graph.insert(Triple::new(
                    Term::iri(&iri),
                    vocab::skos::ALT_LABEL,
                    Term::Literal(Literal::new(item).with_language(language)),
                ));
            }
        }
    }

    let count = graph
        .subjects_with(vocab::rdf::TYPE, vocab::skos::CONCEPT)
        .len();

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output, Turtle::to_string(&graph)?)?;

    debug!(
        "imported {} concepts ({} triples) to {}",
        count,
        graph.len(),
        output.display()
    );
    Ok(count)
}

/// Positions of the headers matching an alias list, in alias order.
fn resolve_columns(headers: &csv::StringRecord, names: &[&str]) -> Vec<usize> {
    names
        .iter()
        .filter_map(|name| headers.iter().position(|header| header == *name))
        .collect()
}

/// First non-empty trimmed value among the given columns.
fn first_value<'r>(record: &'r csv::StringRecord, columns: &[usize]) -> Option<&'r str> {
    columns
        .iter()
        .filter_map(|&index| record.get(index))
        .map(str::trim)
        .find(|value| !value.is_empty())
}
