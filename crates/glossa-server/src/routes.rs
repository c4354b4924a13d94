//! API routes definition.

use axum::{routing::get, Router};

use crate::handlers::{self, SharedService};

/// Creates the router with shared state.
pub fn create_router(service: SharedService) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::index))
        .route("/concepts", get(handlers::list_concepts))
        .route("/concepts/{iri}", get(handlers::concept_json))
        .route("/c/{iri}", get(handlers::concept_page))
        .route("/download/{format}", get(handlers::download))
        .route("/reload", get(handlers::reload).post(handlers::reload))
        .with_state(service)
}

/// Creates the router with CORS and logging middleware.
pub fn create_router_with_middleware(service: SharedService) -> Router {
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::trace::TraceLayer;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
