use glossa_core::GraphError;
use std::path::Path;
use thiserror::Error;

/// Errors surfaced by the vocabulary service.
#[derive(Error, Debug)]
pub enum VocabError {
    #[error("failed to load vocabulary from {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: GraphError,
    },

    #[error(transparent)]
    Format(#[from] GraphError),
}

impl VocabError {
    pub(crate) fn load(path: &Path, source: GraphError) -> Self {
        Self::Load {
            path: path.display().to_string(),
            source,
        }
    }

    /// True for errors caused by client input (e.g. an unknown
    /// serialization format) rather than service state.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Format(GraphError::UnsupportedFormat(_)))
    }
}
