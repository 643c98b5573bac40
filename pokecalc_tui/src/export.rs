//! JSON export of calculation results

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pretty-print `value` to `path`, returning the path written
pub fn export_json<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf, ExportError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_io_error() {
        let path = std::env::temp_dir()
            .join("pokecalc_no_such_dir")
            .join("nested")
            .join("out.json");
        let err = export_json(&path, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(err.to_string().contains("out.json"));
    }
}
