//! Error handler for Chrona.

/// Alias for results carrying a crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that may occur during the configuration loading process.
///
/// The clock path itself has no failure mode: reading the system time
/// always succeeds, so only the bootstrap surface can error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configuration file exists but is not valid YAML.
    #[error("failed to deserialize `config.yaml`: {0}")]
    Deserialize(#[from] serde_yaml::Error),
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
