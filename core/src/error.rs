use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while building the corpus. No partial index survives one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no corpus sources configured")]
    NoSources,
    #[error("failed to enumerate corpus source {path}: {source}")]
    Enumerate {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("corpus source {path} is not a directory")]
    NotADirectory { path: PathBuf },
    #[error("failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
