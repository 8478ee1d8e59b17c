use thiserror::Error;
use std::io;

/// Unified error type for the optio library.
#[derive(Error, Debug)]
pub enum Error {
    /// A schema line matched neither accepted grammar, carried an unknown
    /// type token, or failed validation. Fatal at compile time.
    #[error("Schema Format Error: {0}")]
    SchemaFormatError(String),

    /// A non-blank config line had no discoverable key/colon/value.
    /// Fatal at parse time; reported with the file name and 1-based line.
    #[error("Invalid entry in {file} at line {line}.")]
    ConfigLineError { file: String, line: usize },

    /// Error reading a schema, template, or output file. Missing config
    /// files are not errors; the loader falls back to defaults instead.
    #[error("IO Error: {0}")]
    IoError(#[from] io::Error),

    /// A pipeline invariant was broken (e.g. a state handler ran before
    /// its input was produced).
    #[error("Internal Error: {0}")]
    InternalError(String),
}

/// A specialized `Result` type for optio operations.
pub type Result<T> = std::result::Result<T, Error>;
