use thiserror::Error;

/// Errors from reading or writing CSV data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The input contains no header row.
    #[error("input file has no header row")]
    MissingHeaderRow,
    /// The underlying CSV reader or writer failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// I/O failure while reading or writing a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialized output was not valid UTF-8.
    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
