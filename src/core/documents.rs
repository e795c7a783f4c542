//! Document discovery, reading, and writing
//!
//! The tool reads plain-text documents from an input directory and writes
//! one anonymized text file per input, keyed by the input's base filename.
//! Output files carry exactly the anonymized text, no metadata envelope.

use crate::domain::{Result, TextveilError};
use std::path::{Path, PathBuf};

/// Discover documents with the given extension in a directory
///
/// Non-recursive; results are sorted by path for a stable processing order.
pub async fn discover_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(TextveilError::Document(format!(
            "Input directory not found: {}",
            dir.display()
        )));
    }

    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Read a document as UTF-8 text
pub async fn read_document(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TextveilError::Document(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write anonymized content next to its source's base filename
///
/// Creates the output directory if needed and returns the written path.
pub async fn write_document(
    output_dir: &Path,
    source_path: &Path,
    content: &str,
) -> Result<PathBuf> {
    let file_name = source_path.file_name().ok_or_else(|| {
        TextveilError::Document(format!(
            "Source path has no file name: {}",
            source_path.display()
        ))
    })?;

    tokio::fs::create_dir_all(output_dir).await.map_err(|e| {
        TextveilError::Document(format!(
            "Failed to create output directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    let target = output_dir.join(file_name);
    tokio::fs::write(&target, content).await.map_err(|e| {
        TextveilError::Document(format!("Failed to write {}: {}", target.display(), e))
    })?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_discover_only_matching_extension() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "one").unwrap();
        std::fs::write(dir.path().join("b.txt"), "two").unwrap();
        std::fs::write(dir.path().join("notes.md"), "skip").unwrap();

        let files = discover_documents(dir.path(), "txt").await.unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "txt"));
        // Sorted for stable processing order
        assert!(files[0] < files[1]);
    }

    #[tokio::test]
    async fn test_discover_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = discover_documents(&missing, "txt").await.unwrap_err();
        assert!(matches!(err, TextveilError::Document(_)));
    }

    #[tokio::test]
    async fn test_write_keyed_by_base_filename() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("anonymized");
        let source = dir.path().join("input").join("letter.txt");

        let written = write_document(&out_dir, &source, "masked text")
            .await
            .unwrap();

        assert_eq!(written, out_dir.join("letter.txt"));
        assert_eq!(std::fs::read_to_string(written).unwrap(), "masked text");
    }

    #[tokio::test]
    async fn test_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "Alice met Bob.").unwrap();

        let content = read_document(&path).await.unwrap();
        assert_eq!(content, "Alice met Bob.");
    }
}
