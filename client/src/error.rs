use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid configuration: {0}")]
    Config(#[from] envconfig::Error),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("version server answered with status {0}")]
    Status(u16),

    #[error("invalid version {version:?}: {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },
}
