//! Glossa CLI - Command-line interface for Glossa
//!
//! This is the main entry point for operating the vocabulary: serving
//! it over HTTP, importing CSV data, exporting serializations, and
//! checking status.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod import;

#[derive(Parser)]
#[command(name = "glossa")]
#[command(author = "Glossa Contributors")]
#[command(version)]
#[command(about = "SKOS vocabulary server and import tools", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the vocabulary HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Headless mode: bind to 0.0.0.0 for remote access (WSL/Docker/Server)
        #[arg(long)]
        headless: bool,

        /// Turtle data file (defaults to $GLOSSA_DATA_PATH)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Import a CSV file into a SKOS Turtle vocabulary
    Import {
        /// Input CSV with columns: prefLabel, altLabel, definition
        input_csv: PathBuf,

        /// Output Turtle path (defaults to the configured data file)
        output: Option<PathBuf>,

        /// Base IRI for minted concepts (defaults to $GLOSSA_BASE_IRI)
        #[arg(long)]
        base_iri: Option<String>,

        /// Language tag for imported literals
        #[arg(long, default_value = "en")]
        lang: String,

        /// Title of the emitted concept scheme
        #[arg(long, default_value = "Vocabulary")]
        title: String,
    },

    /// Export the vocabulary in a serialization format
    Export {
        /// Output format: turtle, jsonld, rdfxml, or ntriples
        #[arg(short, long, default_value = "turtle")]
        format: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Turtle data file (defaults to $GLOSSA_DATA_PATH)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Show vocabulary statistics
    Status {
        /// Turtle data file (defaults to $GLOSSA_DATA_PATH)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Serve {
            port,
            headless,
            data,
        } => commands::serve(port, headless, data).await,
        Commands::Import {
            input_csv,
            output,
            base_iri,
            lang,
            title,
        } => commands::import(&input_csv, output, base_iri, &lang, &title),
        Commands::Export {
            format,
            output,
            data,
        } => commands::export(&format, &output, data).await,
        Commands::Status { data, json } => commands::status(data, json).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
