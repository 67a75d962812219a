use std::path::PathBuf;

use thiserror::Error;

/// Errors from fetching, caching or writing out a masterlist. Decoding itself can't fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to request the masterlist: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize servers: {0}")]
    Json(#[from] serde_json::Error),
    #[error("the master server is unreachable and there is no cached masterlist at {}", path.display())]
    NoSource { path: PathBuf },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
