//! Indexing error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking the assets root or writing the manifest
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot read assets root `{path}`")]
    RootMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read `{path}`")]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{path}` is not inside public root `{root}`")]
    OutsidePublicRoot { path: PathBuf, root: PathBuf },

    #[error("failed to serialize manifest")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write manifest `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
