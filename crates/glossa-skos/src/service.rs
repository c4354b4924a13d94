//! The vocabulary service.
//!
//! Owns the loaded graph and the load/cache state machine, and exposes
//! the query operations consumed by the HTTP layer and the CLI.

use crate::concept::{ConceptDetail, ConceptSummary, UND};
use crate::error::VocabError;
use crate::select::select_literal;
use glossa_core::formats::{self, Turtle};
use glossa_core::{vocab, Graph, Literal, Term};
use std::collections::BTreeMap;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Load state: either nothing yet, or a snapshot plus the modification
/// time recorded at its load.
struct LoadState {
    graph: Option<Arc<Graph>>,
    mtime: Option<SystemTime>,
}

/// The SKOS vocabulary query service.
///
/// Constructed with the data file path and a default language used
/// whenever a caller omits one. Loading is lazy and cached by the
/// file's modification time; the cached snapshot is replaced wholesale,
/// never mutated.
pub struct VocabService {
    data_path: PathBuf,
    default_language: String,
    state: Mutex<LoadState>,
}

impl VocabService {
    /// Creates a service over a Turtle file.
    ///
    /// The file does not need to exist yet: a missing file loads as an
    /// empty vocabulary.
    pub fn new(data_path: impl Into<PathBuf>, default_language: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
            default_language: default_language.into(),
            state: Mutex::new(LoadState {
                graph: None,
                mtime: None,
            }),
        }
    }

    /// The path of the backing data file.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// The language used when a query passes none.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Returns the current graph snapshot, loading or reloading first if
    /// the file changed since the last load.
    ///
    /// The lock covers the whole check-then-parse sequence, so
    /// concurrent callers wait for one parse instead of racing their
    /// own. A parse failure propagates without replacing the previous
    /// snapshot.
    pub async fn ensure_loaded(&self) -> Result<Arc<Graph>, VocabError> {
        let mut state = self.state.lock().await;

        let mtime = file_mtime(&self.data_path);
        if let Some(graph) = &state.graph {
            if state.mtime == mtime {
                return Ok(Arc::clone(graph));
            }
        }

        let graph = Arc::new(self.parse()?);
        info!(
            "loaded {} triples from {}",
            graph.len(),
            self.data_path.display()
        );
        state.graph = Some(Arc::clone(&graph));
        state.mtime = mtime;
        Ok(graph)
    }

    /// Discards the cached snapshot and reparses immediately, ignoring
    /// the timestamp cache.
    pub async fn reload(&self) -> Result<(), VocabError> {
        {
            let mut state = self.state.lock().await;
            state.graph = None;
            state.mtime = None;
        }
        debug!("vocabulary reload forced");
        self.ensure_loaded().await?;
        Ok(())
    }

    fn parse(&self) -> Result<Graph, VocabError> {
        if !self.data_path.exists() {
            debug!(
                "vocabulary file {} does not exist, starting empty",
                self.data_path.display()
            );
            return Ok(Graph::new());
        }

        let file = fs::File::open(&self.data_path)
            .map_err(|e| VocabError::load(&self.data_path, e.into()))?;
        Turtle::read(BufReader::new(file), None)
            .map_err(|e| VocabError::load(&self.data_path, e))
    }

    fn language<'a>(&'a self, language: Option<&'a str>) -> &'a str {
        language.unwrap_or(&self.default_language)
    }

    /// Lists concepts in storage order.
    ///
    /// Returns the `[offset, offset+limit)` page and the total count
    /// before pagination.
    pub async fn list_concepts(
        &self,
        limit: usize,
        offset: usize,
        language: Option<&str>,
    ) -> Result<(Vec<ConceptSummary>, usize), VocabError> {
        let graph = self.ensure_loaded().await?;
        let language = self.language(language);

        let all = graph.subjects_with(vocab::rdf::TYPE, vocab::skos::CONCEPT);
        let total = all.len();

        let page = all
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|subject| summarize(&graph, &subject.key(), language))
            .collect();

        Ok((page, total))
    }

    /// Case-insensitive substring search over pref and alt labels.
    ///
    /// Only labels whose language is unset or equal to the requested
    /// language are candidates; a concept's first matching label wins
    /// and is surfaced as its label. The scan stops entirely once
    /// `limit` results are collected.
    pub async fn search_concepts(
        &self,
        query: &str,
        limit: usize,
        language: Option<&str>,
    ) -> Result<Vec<ConceptSummary>, VocabError> {
        let graph = self.ensure_loaded().await?;
        let language = self.language(language);
        let needle = query.to_lowercase();

        let mut results = Vec::new();
        for subject in graph.subjects_with(vocab::rdf::TYPE, vocab::skos::CONCEPT) {
            if results.len() >= limit {
                break;
            }

            let key = subject.key();
            let mut matched: Option<String> = None;
            let labels = graph
                .objects(&key, vocab::skos::PREF_LABEL)
                .chain(graph.objects(&key, vocab::skos::ALT_LABEL));
            for lit in labels.filter_map(Term::as_literal) {
                let language_ok =
                    lit.language.is_none() || lit.language.as_deref() == Some(language);
                if language_ok && lit.value.to_lowercase().contains(&needle) {
                    matched = Some(lit.value.clone());
                    break;
                }
            }

            if let Some(label) = matched {
                let definition =
                    best_literal(&graph, &key, vocab::skos::DEFINITION, language);
                results.push(ConceptSummary {
                    iri: key.into_owned(),
                    pref_label: Some(label),
                    definition,
                });
            }
        }

        Ok(results)
    }

    /// Full projection of one concept, or `None` when the IRI is not
    /// typed `skos:Concept`.
    pub async fn concept_detail(
        &self,
        iri: &str,
        language: Option<&str>,
    ) -> Result<Option<ConceptDetail>, VocabError> {
        let graph = self.ensure_loaded().await?;
        let language = self.language(language);

        if !graph.contains(iri, vocab::rdf::TYPE, &Term::iri(vocab::skos::CONCEPT)) {
            return Ok(None);
        }

        Ok(Some(ConceptDetail {
            iri: iri.to_string(),
            pref_label: literals_by_language(&graph, iri, vocab::skos::PREF_LABEL),
            alt_label: literals_by_language(&graph, iri, vocab::skos::ALT_LABEL),
            definition: literals_by_language(&graph, iri, vocab::skos::DEFINITION),
            broader: object_values(&graph, iri, vocab::skos::BROADER),
            narrower: object_values(&graph, iri, vocab::skos::NARROWER),
            related: object_values(&graph, iri, vocab::skos::RELATED),
            in_scheme: object_values(&graph, iri, vocab::skos::IN_SCHEME),
            notation: object_values(&graph, iri, vocab::skos::NOTATION),
            best_pref_label: best_literal(&graph, iri, vocab::skos::PREF_LABEL, language),
            best_definition: best_literal(&graph, iri, vocab::skos::DEFINITION, language),
        }))
    }

    /// Serializes the whole dataset into the named format.
    ///
    /// Returns the payload and its MIME content type; an unknown format
    /// name is a client-input error naming the format.
    pub async fn serialize(&self, format: &str) -> Result<(String, &'static str), VocabError> {
        let graph = self.ensure_loaded().await?;
        Ok(formats::serialize(&graph, format)?)
    }
}

fn file_mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

fn summarize(graph: &Graph, subject: &str, language: &str) -> ConceptSummary {
    ConceptSummary {
        iri: subject.to_string(),
        pref_label: best_literal(graph, subject, vocab::skos::PREF_LABEL, language),
        definition: best_literal(graph, subject, vocab::skos::DEFINITION, language),
    }
}

fn best_literal(
    graph: &Graph,
    subject: &str,
    predicate: &str,
    language: &str,
) -> Option<String> {
    let candidates: Vec<&Literal> = graph
        .objects(subject, predicate)
        .filter_map(Term::as_literal)
        .collect();
    select_literal(&candidates, language).map(|lit| lit.value.clone())
}

fn literals_by_language(
    graph: &Graph,
    subject: &str,
    predicate: &str,
) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for lit in graph.objects(subject, predicate).filter_map(Term::as_literal) {
        let tag = lit.language.as_deref().unwrap_or(UND);
        grouped.entry(tag.to_string()).or_default().push(lit.value.clone());
    }
    grouped
}

fn object_values(graph: &Graph, subject: &str, predicate: &str) -> Vec<String> {
    graph
        .objects(subject, predicate)
        .map(|term| term.lexical_form().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Duration;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .

<http://ex.org/apple> a skos:Concept ;
    skos:prefLabel "Apple"@en , "Pomme"@fr ;
    skos:altLabel "Malus fruit"@en ;
    skos:definition "A fruit"@en ;
    skos:broader <http://ex.org/fruit> ;
    skos:notation "A1" .

<http://ex.org/banana> a skos:Concept ;
    skos:prefLabel "Banana"@en ;
    skos:definition "Long yellow fruit" .

<http://ex.org/cherry> a skos:Concept ;
    skos:prefLabel "Cherry"@en .
"#;

    fn service_with(content: &str) -> (TempDir, VocabService) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.ttl");
        fs::write(&path, content).unwrap();
        let service = VocabService::new(path, "en");
        (dir, service)
    }

    /// Pushes the file's mtime into the future so a rewrite is always
    /// seen as a change regardless of filesystem timestamp granularity.
    fn bump_mtime(path: &Path) {
        let file = fs::OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(10))
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_counts_total_before_pagination() {
        let (_dir, service) = service_with(SAMPLE);
        let (page, total) = service.list_concepts(2, 0, None).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].iri, "http://ex.org/apple");
        assert_eq!(page[0].pref_label.as_deref(), Some("Apple"));
    }

    #[tokio::test]
    async fn test_pagination_reconstructs_full_set() {
        let (_dir, service) = service_with(SAMPLE);
        for limit in 1..=3 {
            let mut seen = Vec::new();
            let mut offset = 0;
            loop {
                let (page, total) = service.list_concepts(limit, offset, None).await.unwrap();
                assert_eq!(total, 3);
                if page.is_empty() {
                    break;
                }
                offset += page.len();
                seen.extend(page.into_iter().map(|c| c.iri));
            }
            assert_eq!(seen.len(), 3, "limit {limit} produced duplicates or gaps");
            let unique: HashSet<_> = seen.iter().collect();
            assert_eq!(unique.len(), 3);
        }
    }

    #[tokio::test]
    async fn test_search_substring_and_limit() {
        let (_dir, service) = service_with(SAMPLE);

        let hits = service.search_concepts("an", 50, None).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].iri, "http://ex.org/banana");

        // Empty query matches everything; limit caps the scan.
        let all = service.search_concepts("", 50, None).await.unwrap();
        assert_eq!(all.len(), 3);
        let capped = service.search_concepts("", 2, None).await.unwrap();
        assert_eq!(capped.len(), 2);
        let none = service.search_concepts("", 0, None).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_search_surfaces_matched_label() {
        let (_dir, service) = service_with(SAMPLE);
        let hits = service.search_concepts("malus", 50, None).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].pref_label.as_deref(), Some("Malus fruit"));
        assert_eq!(hits[0].definition.as_deref(), Some("A fruit"));
    }

    #[tokio::test]
    async fn test_search_filters_other_languages() {
        let (_dir, service) = service_with(SAMPLE);

        // "Pomme"@fr is not a candidate under the default "en".
        let hits = service.search_concepts("pomme", 50, None).await.unwrap();
        assert!(hits.is_empty());

        let hits = service.search_concepts("pomme", 50, Some("fr")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].pref_label.as_deref(), Some("Pomme"));
    }

    #[tokio::test]
    async fn test_detail_not_found_without_concept_type() {
        let (_dir, service) = service_with(SAMPLE);
        // http://ex.org/fruit appears as an object but is not typed.
        let detail = service.concept_detail("http://ex.org/fruit", None).await.unwrap();
        assert!(detail.is_none());
        let detail = service.concept_detail("http://ex.org/nope", None).await.unwrap();
        assert!(detail.is_none());
    }

    #[tokio::test]
    async fn test_detail_groups_and_best_fields() {
        let (_dir, service) = service_with(SAMPLE);
        let detail = service
            .concept_detail("http://ex.org/apple", Some("fr"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(detail.pref_label["en"], vec!["Apple"]);
        assert_eq!(detail.pref_label["fr"], vec!["Pomme"]);
        assert_eq!(detail.broader, vec!["http://ex.org/fruit"]);
        assert_eq!(detail.notation, vec!["A1"]);

        assert_eq!(detail.best_pref_label.as_deref(), Some("Pomme"));
        // No fr definition and "A fruit"@en is not language-less, so the
        // first candidate is returned.
        assert_eq!(detail.best_definition.as_deref(), Some("A fruit"));
    }

    #[tokio::test]
    async fn test_detail_langless_grouped_under_und() {
        let (_dir, service) = service_with(SAMPLE);
        let detail = service
            .concept_detail("http://ex.org/banana", None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.definition["und"], vec!["Long yellow fruit"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let service = VocabService::new(dir.path().join("absent.ttl"), "en");
        let (page, total) = service.list_concepts(10, 0, None).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_malformed_file_is_fatal() {
        let (_dir, service) = service_with("this is { not turtle");
        let err = service.ensure_loaded().await.unwrap_err();
        assert!(matches!(err, VocabError::Load { .. }));
    }

    #[tokio::test]
    async fn test_parse_failure_keeps_previous_snapshot() {
        let (_dir, service) = service_with(SAMPLE);
        let before = service.ensure_loaded().await.unwrap();

        fs::write(service.data_path(), "broken {").unwrap();
        bump_mtime(service.data_path());
        assert!(service.ensure_loaded().await.is_err());

        // Restoring the file recovers; meanwhile the old snapshot was
        // never replaced by a partial graph.
        assert_eq!(before.subjects_with(vocab::rdf::TYPE, vocab::skos::CONCEPT).len(), 3);
        fs::write(service.data_path(), SAMPLE).unwrap();
        bump_mtime(service.data_path());
        assert!(service.ensure_loaded().await.is_ok());
    }

    #[tokio::test]
    async fn test_unchanged_mtime_skips_reparse() {
        let (_dir, service) = service_with(SAMPLE);
        let first = service.ensure_loaded().await.unwrap();
        let second = service.ensure_loaded().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_changed_mtime_triggers_reparse() {
        let (_dir, service) = service_with(SAMPLE);
        let (_, total) = service.list_concepts(10, 0, None).await.unwrap();
        assert_eq!(total, 3);

        fs::write(
            service.data_path(),
            r#"
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
<http://ex.org/date> a skos:Concept ; skos:prefLabel "Date"@en .
"#,
        )
        .unwrap();
        bump_mtime(service.data_path());

        let (page, total) = service.list_concepts(10, 0, None).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(page[0].iri, "http://ex.org/date");
    }

    #[tokio::test]
    async fn test_reload_ignores_timestamp_cache() {
        let (_dir, service) = service_with(SAMPLE);
        let first = service.ensure_loaded().await.unwrap();

        service.reload().await.unwrap();

        let second = service.ensure_loaded().await.unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_inflight_snapshot_survives_reload() {
        let (_dir, service) = service_with(SAMPLE);

        // An "in-flight query" holds the old snapshot across a reload.
        let snapshot = service.ensure_loaded().await.unwrap();

        fs::write(
            service.data_path(),
            r#"
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
<http://ex.org/elderberry> a skos:Concept ; skos:prefLabel "Elderberry"@en .
"#,
        )
        .unwrap();
        service.reload().await.unwrap();

        // The old snapshot still answers consistently.
        assert_eq!(
            snapshot.subjects_with(vocab::rdf::TYPE, vocab::skos::CONCEPT).len(),
            3
        );
        // A subsequent call sees the new data.
        let (page, total) = service.list_concepts(10, 0, None).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(page[0].iri, "http://ex.org/elderberry");
    }

    #[tokio::test]
    async fn test_serialize_round_trip_and_unknown_format() {
        let (_dir, service) = service_with(SAMPLE);

        let (text, mime) = service.serialize("ttl").await.unwrap();
        assert_eq!(mime, "text/turtle");
        let reparsed = Turtle::from_str(&text, None).unwrap();
        let snapshot = service.ensure_loaded().await.unwrap();
        let original: HashSet<_> = snapshot.triples().cloned().collect();
        let round_tripped: HashSet<_> = reparsed.triples().cloned().collect();
        assert_eq!(original, round_tripped);

        let err = service.serialize("docx").await.unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("docx"));
    }
}
