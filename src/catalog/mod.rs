//! Filesystem catalog: model listing, document reading, image lookup.
//!
//! Outputs live under one configured root, one subdirectory per extraction
//! model, one `.json` file per analyzed document. All I/O is blocking and
//! request-scoped; a missing or unreadable entry yields an empty listing or
//! a [`ReadError`], never a panic.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a document could not be produced. `Missing` and `Unreadable` are
/// file-level failures; `Malformed` means the bytes were read but are not
/// valid JSON. All three surface to the user as the same fixed message;
/// logs keep the distinction.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("document not found")]
    Missing,
    #[error("unable to read document: {0}")]
    Unreadable(#[source] std::io::Error),
    #[error("malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// A source image located by filename convention.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub bytes: Vec<u8>,
    /// MIME type for data-URI embedding.
    pub media_type: &'static str,
}

/// The document catalog rooted at one resolved directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Model names: the sorted subdirectories of the root. An unreadable
    /// root is an empty catalog, not an error.
    pub fn models(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            debug!(root = %self.root.display(), "catalog root not readable");
            return Vec::new();
        };
        let mut models: Vec<String> = entries
            .flatten()
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        models.sort();
        models
    }

    /// Sorted `.json` filenames for a model. Unknown or unsafe model names
    /// yield an empty list.
    pub fn documents(&self, model: &str) -> Vec<String> {
        if !is_safe_selector(model) {
            return Vec::new();
        }
        let Ok(entries) = fs::read_dir(self.root.join(model)) else {
            return Vec::new();
        };
        let mut files: Vec<String> = entries
            .flatten()
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| Path::new(name).extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        files
    }

    /// Read and parse one document. Failures are logged here with the
    /// model/file context; callers only need the coarse [`ReadError`].
    pub fn read_document(&self, model: &str, file: &str) -> Result<Value, ReadError> {
        if !is_safe_selector(model) || !is_safe_selector(file) {
            return Err(ReadError::Missing);
        }
        let path = self.root.join(model).join(file);
        if !path.is_file() {
            warn!(path = %path.display(), "document does not exist");
            return Err(ReadError::Missing);
        }
        let content = fs::read_to_string(&path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "error reading document");
            ReadError::Unreadable(e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            warn!(path = %path.display(), error = %e, "JSON parsing error");
            ReadError::Malformed(e)
        })
    }
}

/// Source-image lookup over a short ordered list of directories.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dirs: Vec<PathBuf>,
}

impl ImageStore {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Probe each directory for `<base>.png`; first hit wins. An
    /// unreadable hit is treated as absent.
    pub fn find(&self, base_name: &str) -> Option<SourceImage> {
        if !is_safe_selector(base_name) {
            return None;
        }
        self.dirs.iter().find_map(|dir| {
            let path = dir.join(format!("{base_name}.png"));
            match fs::read(&path) {
                Ok(bytes) => Some(SourceImage {
                    bytes,
                    media_type: "image/png",
                }),
                Err(_) => None,
            }
        })
    }
}

/// Selectors come from the request surface; anything that could leave the
/// catalog directory is rejected outright.
fn is_safe_selector(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\'])
}
