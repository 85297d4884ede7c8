use std::path::PathBuf;

/// Failures while reading a table-of-contents document.
#[derive(Debug, thiserror::Error)]
pub enum TocError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid table of contents in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but holds no poems.
    #[error("table of contents in {0} has no poems")]
    Empty(PathBuf),
}
