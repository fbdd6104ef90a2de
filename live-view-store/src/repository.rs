use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::LoadError;
use crate::model::{ResultDocument, ViewState};

/// Read-only access to the result file. Nothing is cached between calls, so
/// every load sees whatever the producer wrote last.
#[derive(Debug, Clone)]
pub struct ResultRepository {
    path: PathBuf,
}

impl ResultRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<ResultDocument, LoadError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => LoadError::FileAbsent {
                    path: self.path.clone(),
                },
                _ => LoadError::FileUnreadable {
                    path: self.path.clone(),
                    source,
                },
            })?;

        ResultDocument::from_json_str(&content).map_err(|source| LoadError::MalformedJson {
            path: self.path.clone(),
            source,
        })
    }

    /// Loads the document, folding every failure into `ViewState::Empty`.
    pub async fn view_state(&self) -> ViewState {
        match self.load().await {
            Ok(doc) => ViewState::Loaded(doc),
            Err(e) => {
                debug!("No result to show: {e}");
                ViewState::Empty
            }
        }
    }
}
