use thiserror::Error;

/// Errors raised while resolving store connection settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The env file could not be read.
    #[error("Failed to read env file {path}: {source}")]
    EnvFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A non-comment line in the env file is not `KEY=VALUE`.
    #[error("Invalid env file: malformed line {0} (expected KEY=VALUE)")]
    MalformedLine(usize),

    /// A line in the env file has an empty key.
    #[error("Invalid env file: empty key at line {0}")]
    EmptyKey(usize),

    /// The connection string could not be parsed.
    #[error("Invalid connection string: {0}")]
    InvalidUrl(String),

    /// `PGPORT` is not a port number.
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// `PGSSLMODE` is not one of disable, prefer, require.
    #[error("Invalid sslmode: {0}")]
    InvalidSslMode(String),
}
