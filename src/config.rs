//! Configuration manager for Chrona.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Structure of the `config.yaml` file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Instance name, echoed in the startup report.
    #[serde(default)]
    pub name: String,
    /// Also log RFC 3339 renderings next to the raw millisecond values.
    #[serde(default)]
    pub rfc3339: bool,
    #[serde(default)]
    version: String,
    #[serde(skip)]
    path: PathBuf,
}

impl Configuration {
    /// Overrides the configuration file location.
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    ///
    /// A missing file falls back to the defaults; a malformed one is an
    /// error.
    pub fn read(self) -> Result<Arc<Self>> {
        let file_path = if self.path.is_file() {
            self.path.clone()
        } else {
            PathBuf::from(DEFAULT_CONFIG_PATH)
        };

        match File::open(&file_path) {
            Ok(file) => {
                let mut config: Configuration =
                    serde_yaml::from_reader(file)?;

                // set app version.
                config.version = VERSION.to_owned();

                Ok(Arc::new(config))
            },
            Err(err) => Ok(Arc::new(self.missing(err))),
        }
    }

    /// Return a default configuration as fallback.
    fn missing(&self, err: impl std::error::Error) -> Self {
        tracing::error!(error = %err, "`config.yaml` file not found");
        Self {
            version: VERSION.to_owned(),
            ..Default::default()
        }
    }
}
