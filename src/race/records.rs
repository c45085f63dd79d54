//! Race domain: best-times persistence as JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

const RECORDS_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct RecordsFile {
    version: u32,
    times: Vec<f32>,
}

/// Error reading or writing the best-times file.
#[derive(Debug)]
pub enum RecordsError {
    Io { path: String, source: io::Error },
    Json { path: String, source: serde_json::Error },
}

impl std::fmt::Display for RecordsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordsError::Io { path, source } => {
                write!(f, "Best times IO error at {}: {}", path, source)
            }
            RecordsError::Json { path, source } => {
                write!(f, "Best times JSON error at {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for RecordsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordsError::Io { source, .. } => Some(source),
            RecordsError::Json { source, .. } => Some(source),
        }
    }
}

/// Read stored times. A missing file is an empty list.
pub fn load_records(path: &Path) -> Result<Vec<f32>, RecordsError> {
    let path_name = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(RecordsError::Io {
                path: path_name,
                source,
            });
        }
    };

    let file: RecordsFile =
        serde_json::from_str(&contents).map_err(|source| RecordsError::Json {
            path: path_name,
            source,
        })?;
    Ok(file.times)
}

/// Write times, replacing any previous file.
pub fn save_records(path: &Path, times: &[f32]) -> Result<(), RecordsError> {
    let path_name = path.display().to_string();
    let file = RecordsFile {
        version: RECORDS_VERSION,
        times: times.to_vec(),
    };
    let json = serde_json::to_string_pretty(&file).map_err(|source| RecordsError::Json {
        path: path_name.clone(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RecordsError::Io {
            path: path_name.clone(),
            source,
        })?;
    }
    fs::write(path, json).map_err(|source| RecordsError::Io {
        path: path_name,
        source,
    })
}
