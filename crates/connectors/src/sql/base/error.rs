use thiserror::Error;

/// Failure while talking to the store or decoding what it returned.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Any driver error: connection loss, syntax, constraint violation.
    #[error("SQL error: {0}")]
    Sql(#[from] tokio_postgres::Error),

    /// The TLS connector could not be built.
    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),

    /// A bind value has no exact representation in the column type it
    /// is sent as. `position` is one-based, matching the `$n` placeholder.
    #[error("Cannot bind parameter ${position}: {reason}")]
    Bind { position: usize, reason: String },

    /// A result column could not be converted to a `Value`.
    #[error("Cannot decode column `{column}`: {reason}")]
    Decode { column: String, reason: String },
}
