//! Request handlers for the API endpoints.
//!
//! Each handler resolves to one operation on the vocabulary service and
//! maps its result onto a response; nothing here touches the graph
//! directly.

use crate::pages;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use glossa_skos::{VocabError, VocabService};
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared vocabulary service handle.
pub type SharedService = Arc<VocabService>;

/// Maps service failures onto HTTP responses: client-input errors (an
/// unknown download format) become 400, everything else 500.
pub struct ApiError(VocabError);

impl From<VocabError> for ApiError {
    fn from(err: VocabError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

fn default_limit() -> usize {
    50
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,

    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default)]
    pub offset: usize,

    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LangParams {
    pub lang: Option<String>,
}

pub async fn health(State(service): State<SharedService>) -> Result<Json<Value>, ApiError> {
    let graph = service.ensure_loaded().await?;
    Ok(Json(json!({ "status": "ok", "triples": graph.len() })))
}

/// HTML index: search results when `q` is present and non-empty,
/// otherwise the first page of concepts.
pub async fn index(
    State(service): State<SharedService>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, ApiError> {
    let lang = params.lang.as_deref();
    let results = match params.q.as_deref() {
        Some(q) if !q.is_empty() => service.search_concepts(q, 50, lang).await?,
        _ => service.list_concepts(50, 0, lang).await?.0,
    };
    Ok(Html(pages::index(params.q.as_deref(), &results)))
}

/// JSON listing or search over concepts.
pub async fn list_concepts(
    State(service): State<SharedService>,
    Query(params): Query<ListParams>,
) -> Result<Response, ApiError> {
    let lang = params.lang.as_deref();
    if let Some(q) = params.q.as_deref() {
        let results = service.search_concepts(q, params.limit, lang).await?;
        return Ok(Json(results).into_response());
    }
    let (items, total) = service
        .list_concepts(params.limit, params.offset, lang)
        .await?;
    Ok(Json(json!({ "total": total, "items": items })).into_response())
}

pub async fn concept_json(
    State(service): State<SharedService>,
    Path(iri): Path<String>,
    Query(params): Query<LangParams>,
) -> Result<Response, ApiError> {
    let iri = decode_iri(&iri);
    match service.concept_detail(&iri, params.lang.as_deref()).await? {
        Some(detail) => Ok(Json(detail).into_response()),
        None => Ok(not_found_json()),
    }
}

pub async fn concept_page(
    State(service): State<SharedService>,
    Path(iri): Path<String>,
    Query(params): Query<LangParams>,
) -> Result<Response, ApiError> {
    let iri = decode_iri(&iri);
    match service.concept_detail(&iri, params.lang.as_deref()).await? {
        Some(detail) => Ok(Html(pages::concept(&detail)).into_response()),
        None => Ok((StatusCode::NOT_FOUND, Html(pages::not_found(&iri))).into_response()),
    }
}

/// Serves the whole dataset in the requested serialization format.
pub async fn download(
    State(service): State<SharedService>,
    Path(format): Path<String>,
) -> Result<Response, ApiError> {
    let (payload, content_type) = service.serialize(&format).await?;
    Ok(([(header::CONTENT_TYPE, content_type)], payload).into_response())
}

pub async fn reload(State(service): State<SharedService>) -> Result<Json<Value>, ApiError> {
    service.reload().await?;
    Ok(Json(json!({ "status": "reloaded" })))
}

/// Decodes a percent-encoded IRI path segment.
///
/// Axum already decodes path parameters once; clients that encode the
/// whole IRI into one segment arrive decoded, and this second pass is a
/// no-op for them.
fn decode_iri(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn not_found_json() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "concept not found" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_iri() {
        assert_eq!(
            decode_iri("http%3A%2F%2Fex.org%2Fconcept%2Fapple"),
            "http://ex.org/concept/apple"
        );
        assert_eq!(
            decode_iri("http://ex.org/concept/apple"),
            "http://ex.org/concept/apple"
        );
    }
}
