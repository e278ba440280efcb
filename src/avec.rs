//! Drivers decoding whole documents.
//!
//! The functions in this module acquire a buffer, partition it, and scan the
//! partitions in parallel, reporting a [`Summary`] of the document. Most users
//! should begin with [`decode_file`] or [`decode_slice`].

#[cfg(feature = "baseline")]
pub mod baseline;
pub mod file;
pub mod reader;
pub mod slice;

pub use file::decode as decode_file;
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

use thiserror::Error;

use crate::sans::{
    aggregate::AggregateError, document::DocumentError, formula::EARTH_RADIUS_KM,
    scanner::ScanError, split::SplitError,
};

/// Errors occurring while decoding a document.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be read or mapped.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The document is not framed as a pairs document.
    #[error("Malformed document: {0}")]
    Document(#[from] DocumentError),
    /// The document could not be partitioned.
    #[error("Cannot partition document: {0}")]
    Split(#[from] SplitError),
    /// A record does not match the record grammar.
    #[error("Malformed record: {0}")]
    Format(#[from] ScanError),
    /// The document holds no records.
    #[error("Document holds no records to average.")]
    DivideByZero,
    /// The worker pool could not be started.
    #[error("Cannot start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    /// The generic decoder rejected the document.
    #[cfg(feature = "baseline")]
    #[error("Generic decoder failed: {0}")]
    Baseline(#[from] serde_json::Error),
}

impl From<AggregateError> for Error {
    fn from(err: AggregateError) -> Self {
        match err {
            AggregateError::DivideByZero => Self::DivideByZero,
        }
    }
}

/// Broad classes of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Structure,
    Format,
    DivideByZero,
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) | Error::Pool(_) => ErrorKind::Io,
            Error::Document(_) | Error::Split(_) => ErrorKind::Structure,
            Error::Format(_) => ErrorKind::Format,
            #[cfg(feature = "baseline")]
            Error::Baseline(_) => ErrorKind::Format,
            Error::DivideByZero => ErrorKind::DivideByZero,
        }
    }
}

/// How a file is brought into memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Source {
    /// Map the file into the address space.
    #[default]
    Map,
    /// Read the whole file into an owned buffer.
    Read,
}

/// Parameters of a decoding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Requested number of partitions, each scanned by its own worker.
    pub partitions: usize,
    /// Radius of the sphere distances are measured on.
    pub radius: f64,
    /// How [`decode_file`] acquires its buffer.
    pub source: Source,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            partitions: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            radius: EARTH_RADIUS_KM,
            source: Source::default(),
        }
    }
}

impl Config {
    /// Use `partitions` workers.
    pub fn with_partitions(self, partitions: usize) -> Self {
        Self { partitions, ..self }
    }
}

/// Outcome of a decoding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Mean distance over all records.
    pub average: f64,
    /// Number of records decoded.
    pub count: u64,
    /// Number of partitions the document was scanned in.
    pub partitions: usize,
}
