use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input at line {line}: {detail}")]
    MalformedInput { line: u64, detail: String },

    #[error("Schema mismatch: required column '{field}' not found in source header")]
    SchemaMismatch { field: String },

    #[error("Sink unavailable: {path}: {reason}")]
    SinkUnavailable { path: String, reason: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Columnar serialization error: {0}")]
    ColumnarError(#[from] polars::error::PolarsError),

    #[error("Configuration error: {field} = '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EtlError {
    /// Process exit code for the CLI. Config problems exit 2, sink problems 3,
    /// everything else 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            EtlError::InvalidConfigValueError { .. } => 2,
            EtlError::SinkUnavailable { .. } | EtlError::ColumnarError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
