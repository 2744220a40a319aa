//! Grid document output.
//!
//! Serializes the hero grid document as pretty-printed JSON.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::GridDocument;

/// Errors that can occur while writing output.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "hero_grid_config.json";

/// Render the document as the JSON text written to disk.
pub fn render_grid_document(document: &GridDocument) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write the document, replacing any existing file.
pub fn write_grid_document(path: &Path, document: &GridDocument) -> Result<PathBuf, StorageError> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Err(StorageError::InvalidPath(path.display().to_string()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = render_grid_document(document)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(json.as_bytes())?;
    writeln!(writer)?;
    writer.flush()?;

    info!(
        "Wrote {} grid configs to {:?}",
        document.configs.len(),
        path
    );

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GridCell, GridConfig};
    use pretty_assertions::assert_eq;

    fn read_back(path: &Path) -> GridDocument {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn document() -> GridDocument {
        GridDocument {
            version: 3,
            configs: vec![GridConfig {
                config_name: "POSITION_1 Pos. 7.38".to_string(),
                categories: vec![GridCell {
                    category_name: "Best VS".to_string(),
                    x_position: 32.09,
                    y_position: 0.0,
                    width: 293.48,
                    height: 50.0,
                    hero_ids: vec![2, 3],
                }],
            }],
        }
    }

    #[test]
    fn test_write_and_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join(DEFAULT_OUTPUT_FILE);

        let written = write_grid_document(&path, &document()).unwrap();

        assert_eq!(written, path);
        assert_eq!(read_back(&path), document());
    }

    #[test]
    fn test_write_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_OUTPUT_FILE);
        fs::write(&path, "stale").unwrap();

        write_grid_document(&path, &GridDocument::default()).unwrap();

        let doc = read_back(&path);
        assert!(doc.configs.is_empty());
        assert_eq!(doc.version, 3);
    }

    #[test]
    fn test_write_to_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let result = write_grid_document(tmp.path(), &document());
        assert!(matches!(result, Err(StorageError::InvalidPath(_))));
    }

    #[test]
    fn test_render_is_pretty() {
        let json = render_grid_document(&document()).unwrap();
        assert!(json.contains("\n"));
        assert!(json.contains("\"config_name\": \"POSITION_1 Pos. 7.38\""));
    }
}
