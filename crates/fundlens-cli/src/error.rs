use std::path::PathBuf;

use fundlens_core::{DataIntegrityError, ProviderError};

/// Top-level failure modes of the `fundlens` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config file not found: {}", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),

    #[error("no fund produced a usable analysis")]
    NoUsableFunds,

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error, grouped by failure family.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigMissing { .. } | Self::Config(_) => 2,
            Self::Provider(_) | Self::Integrity(_) | Self::NoUsableFunds => 3,
            Self::Chart(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
