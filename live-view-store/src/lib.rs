pub mod model;
pub mod repository;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use model::{ResultDocument, ViewState};
pub use repository::ResultRepository;

/// Why a result file could not be turned into a document.
///
/// The page renders every variant the same way; the distinction only shows
/// up in logs and tests.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("result file not found: {path:?}")]
    FileAbsent { path: PathBuf },

    #[error("failed to read result file {path:?}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("result file {path:?} is not valid JSON: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
