//! Glossa Server - HTTP layer over the vocabulary service
//!
//! A thin axum adapter: every route resolves to one query operation on
//! `glossa_skos::VocabService`. The server holds no state of its own
//! beyond the shared service handle.
//!
//! Routes:
//! - `GET /health` health check with triple count
//! - `GET /` HTML index with optional search
//! - `GET /concepts` JSON listing or search
//! - `GET /concepts/{iri}` JSON concept detail
//! - `GET /c/{iri}` HTML concept page
//! - `GET /download/{format}` dataset serialization
//! - `GET|POST /reload` forced reparse

mod handlers;
mod pages;
mod routes;
mod server;

pub use handlers::SharedService;
pub use routes::{create_router, create_router_with_middleware};
pub use server::{GlossaServer, ServerConfig};
