use super::error::TocError;
use crate::domain::{
    source::{TocSnapshot, TocSource},
    toc::BookToc,
};
use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads a book table of contents from a JSON file on every load.
pub struct JsonTocSource {
    path: PathBuf,
}

impl JsonTocSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<TocSnapshot, TocError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| TocError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_snapshot(&content, &self.path)
    }
}

pub fn parse_snapshot(content: &str, path: &Path) -> Result<TocSnapshot, TocError> {
    let toc: BookToc = serde_json::from_str(content).map_err(|source| TocError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = toc.flatten();
    if entries.is_empty() {
        return Err(TocError::Empty(path.to_path_buf()));
    }

    Ok(TocSnapshot {
        book_title: toc.title().to_string(),
        entries,
    })
}

#[async_trait]
impl TocSource for JsonTocSource {
    async fn load(&self) -> Result<TocSnapshot> {
        let snapshot = self.read().await?;
        tracing::info!(
            path = %self.path.display(),
            entries = snapshot.entries.len(),
            "table of contents loaded"
        );
        Ok(snapshot)
    }

    fn watch_path(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOC: &str = r#"{
        "meta": { "bookTitle": "Night Letters" },
        "sections": [
            { "type": "part", "id": "p1", "title": "Roads", "items": [
                { "type": "poem", "id": "evening-song", "title": "Evening Song", "page": 3 },
                { "type": "poem", "id": "morning-light", "title": "Morning Light", "page": 4 }
            ] }
        ]
    }"#;

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();

        let source = JsonTocSource::new(file.path());
        let snapshot = source.load().await.unwrap();
        assert_eq!(snapshot.book_title, "Night Letters");
        assert_eq!(snapshot.entries.len(), 2);
        assert_eq!(snapshot.entries[1].title, "Morning Light");
        assert_eq!(source.watch_path().as_deref(), Some(file.path()));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonTocSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.read().await, Err(TocError::Io { .. })));
    }

    #[test]
    fn test_parse_errors() {
        let path = Path::new("toc.json");
        assert!(matches!(
            parse_snapshot("{ not json", path),
            Err(TocError::Parse { .. })
        ));
        assert!(matches!(
            parse_snapshot(r#"{ "meta": { "bookTitle": "Blank" } }"#, path),
            Err(TocError::Empty(_))
        ));
    }
}
