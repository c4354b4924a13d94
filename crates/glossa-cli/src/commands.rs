//! CLI command implementations.

use crate::import;
use colored::Colorize;
use glossa_core::vocab;
use glossa_server::{GlossaServer, ServerConfig};
use glossa_skos::VocabService;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Runtime configuration, read from the environment with defaults.
///
/// Command-line flags override these; nothing is memoized process-wide.
pub struct Settings {
    pub data_path: PathBuf,
    pub base_iri: String,
    pub default_language: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            data_path: std::env::var("GLOSSA_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/vocabulary.ttl")),
            base_iri: std::env::var("GLOSSA_BASE_IRI")
                .unwrap_or_else(|_| "https://vocabulary.example.org".to_string()),
            default_language: std::env::var("GLOSSA_DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
        }
    }
}

/// Starts the HTTP server.
pub async fn serve(port: u16, headless: bool, data: Option<PathBuf>) -> Result<()> {
    let settings = Settings::from_env();
    let data_path = data.unwrap_or(settings.data_path);
    let bind_addr = if headless { "0.0.0.0" } else { "127.0.0.1" };

    if headless {
        println!("{}", "Starting glossa server in headless mode...".cyan());
    } else {
        println!("{}", "Starting glossa server...".cyan());
    }

    let service = Arc::new(VocabService::new(&data_path, settings.default_language));

    // Load eagerly so a malformed data file fails at startup, not on
    // the first request.
    let graph = service.ensure_loaded().await?;
    println!(
        "{} Loaded {} triples from {}",
        "✓".green(),
        graph.len().to_string().cyan(),
        data_path.display()
    );

    let addr: SocketAddr = format!("{bind_addr}:{port}").parse()?;
    println!("  Listening on {}", format!("http://{addr}").cyan());

    let server = GlossaServer::new(service, ServerConfig { addr });
    server.run().await?;
    Ok(())
}

/// Imports a CSV file into a SKOS Turtle vocabulary.
pub fn import(
    input_csv: &Path,
    output: Option<PathBuf>,
    base_iri: Option<String>,
    lang: &str,
    title: &str,
) -> Result<()> {
    let settings = Settings::from_env();
    let output = output.unwrap_or(settings.data_path);
    let base_iri = base_iri.unwrap_or(settings.base_iri);

    let count = import::import_csv(input_csv, &output, &base_iri, lang, title)?;

    println!(
        "{} Wrote {} concepts to {}",
        "✓".green(),
        count.to_string().cyan(),
        output.display()
    );
    Ok(())
}

/// Exports the vocabulary in a serialization format.
pub async fn export(format: &str, output: &Path, data: Option<PathBuf>) -> Result<()> {
    let settings = Settings::from_env();
    let data_path = data.unwrap_or(settings.data_path);

    let service = VocabService::new(data_path, settings.default_language);
    let (payload, content_type) = service.serialize(format).await?;
    fs::write(output, payload)?;

    println!(
        "{} Exported {} to {}",
        "✓".green(),
        content_type.cyan(),
        output.display()
    );
    Ok(())
}

/// Prints vocabulary statistics.
pub async fn status(data: Option<PathBuf>, json: bool) -> Result<()> {
    let settings = Settings::from_env();
    let data_path = data.unwrap_or(settings.data_path);

    let service = VocabService::new(&data_path, settings.default_language);
    let graph = service.ensure_loaded().await?;
    let concepts = graph
        .subjects_with(vocab::rdf::TYPE, vocab::skos::CONCEPT)
        .len();

    if json {
        let summary = serde_json::json!({
            "data": data_path.display().to_string(),
            "triples": graph.len(),
            "concepts": concepts,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {} triples, {} concepts in {}",
            "✓".green(),
            graph.len().to_string().cyan(),
            concepts.to_string().cyan(),
            data_path.display()
        );
    }
    Ok(())
}
