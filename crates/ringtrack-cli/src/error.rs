use ringtrack::core::io::lattice_file::LatticeFileError;
use ringtrack::core::io::points::PointsFileError;
use ringtrack::core::io::report::ReportError;
use ringtrack::core::status::Status;
use ringtrack::engine::error::QueryError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Lattice(#[from] LatticeFileError),

    #[error(transparent)]
    Points(#[from] PointsFileError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Library outcome behind the error, if it came from the library.
    pub fn status(&self) -> Option<Status> {
        match self {
            CliError::Query(e) => Some(e.status()),
            CliError::Lattice(e) => Some(e.status()),
            CliError::Points(e) => Some(e.status()),
            CliError::Report(e) => Some(e.status()),
            _ => None,
        }
    }
}
