//! Glossa SKOS - vocabulary query service
//!
//! This crate owns the loaded vocabulary graph and answers read-only
//! queries against it: listing and paginating concepts, substring search
//! across labels, concept detail projections, and re-serialization into
//! the supported wire formats.
//!
//! # Architecture
//!
//! `VocabService` keeps exactly one current graph snapshot behind a lock
//! that guards only the check-timestamp/replace-snapshot transition.
//! Queries clone out an `Arc<Graph>` and run without the lock, so a
//! reload never corrupts an in-flight query: the old snapshot stays
//! alive until its last reader drops it.
//!
//! # Example
//!
//! ```no_run
//! use glossa_skos::VocabService;
//!
//! # async fn run() -> Result<(), glossa_skos::VocabError> {
//! let service = VocabService::new("data/vocabulary.ttl", "en");
//! let (page, total) = service.list_concepts(50, 0, None).await?;
//! println!("{total} concepts, showing {}", page.len());
//! # Ok(())
//! # }
//! ```

mod concept;
mod error;
mod select;
mod service;

pub use concept::{ConceptDetail, ConceptSummary};
pub use error::VocabError;
pub use select::select_literal;
pub use service::VocabService;
