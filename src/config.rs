//! Startup configuration.
//!
//! The viewer takes one resolved data root at startup instead of probing a
//! list of hardcoded paths at runtime. Configuration comes from a TOML file
//! or is derived from a root path given on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

/// Viewer configuration.
///
/// `image_dirs` left empty in the file means "use the conventional
/// locations": `png/` and `invoices/png/` next to the data root, matching
/// how the extraction pipeline lays out scanned originals.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    /// Directory holding one subdirectory of JSON outputs per model.
    pub data_root: PathBuf,
    /// Ordered list of directories probed for source images.
    #[serde(default)]
    pub image_dirs: Vec<PathBuf>,
    /// Bind address for the HTTP surface.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl ViewerConfig {
    /// Load from a TOML file and fill in derived defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.resolved())
    }

    /// Build a configuration from just a data root, with every other value
    /// defaulted.
    pub fn for_root(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            image_dirs: Vec::new(),
            listen_addr: default_listen_addr(),
        }
        .resolved()
    }

    fn resolved(mut self) -> Self {
        if self.image_dirs.is_empty() {
            if let Some(parent) = self.data_root.parent() {
                self.image_dirs = vec![parent.join("png"), parent.join("invoices").join("png")];
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_root_derives_image_dirs_from_parent() {
        let config = ViewerConfig::for_root("data/outputs");
        assert_eq!(
            config.image_dirs,
            vec![
                PathBuf::from("data/png"),
                PathBuf::from("data/invoices/png")
            ]
        );
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
    }

    #[test]
    fn explicit_image_dirs_are_kept() {
        let config: ViewerConfig = toml::from_str(
            r#"
            data_root = "/srv/outputs"
            image_dirs = ["/srv/scans"]
            listen_addr = "0.0.0.0:9000"
            "#,
        )
        .unwrap();
        let config = config.resolved();
        assert_eq!(config.image_dirs, vec![PathBuf::from("/srv/scans")]);
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
    }
}
