use std::path::Path;

use thiserror::Error;

use crate::schema::Dataset;

/// Failure of the one-shot dataset load. The load is never retried
/// automatically; callers log the error and fall back to the empty state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error reading dataset document: {0}")]
    Io(#[from] std::io::Error),
    #[error("error parsing dataset document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of the startup load. `Pending` and `Failed` both render as the
/// empty state; `Loaded` is installed atomically as a whole snapshot.
#[derive(Debug)]
pub enum LoadState {
    Pending,
    Loaded(Dataset),
    Failed,
}

impl LoadState {
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadState::Loaded(dataset) => Some(dataset),
            LoadState::Pending | LoadState::Failed => None,
        }
    }
}

/// Reads and deserializes the dataset document at `path`.
pub async fn load_from_path(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{load_from_path, LoadError, LoadState};

    const DOCUMENT: &str = r#"{
        "authors": [
            { "id": 1, "name": "Ada" },
            { "id": 2, "name": "Grace" },
            { "id": 3, "name": "Edsger" }
        ],
        "articles": [{
            "id": 1,
            "author_id": 1,
            "title": "First",
            "body": "Body",
            "image_url": "https://example.com/1.jpg",
            "created_at": "2024-01-13T09:30:00Z"
        }]
    }"#;

    #[tokio::test]
    async fn loads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let dataset = load_from_path(file.path()).await.unwrap();
        assert_eq!(dataset.authors.len(), 3);
        assert_eq!(dataset.articles.len(), 1);
    }

    #[tokio::test]
    async fn missing_document_is_an_io_error() {
        let directory = tempfile::tempdir().unwrap();
        let error = load_from_path(&directory.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(error, LoadError::Io(_)));
    }

    #[tokio::test]
    async fn malformed_document_is_a_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"authors\": [").unwrap();

        let error = load_from_path(file.path()).await.unwrap_err();
        assert!(matches!(error, LoadError::Json(_)));
    }

    #[test]
    fn only_loaded_exposes_a_dataset() {
        assert!(LoadState::Pending.dataset().is_none());
        assert!(LoadState::Failed.dataset().is_none());
        assert!(LoadState::Loaded(Default::default()).dataset().is_some());
    }
}
