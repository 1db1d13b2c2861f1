use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Usage: {program} <source.csv> <output.php> <table_name>")]
    Usage { program: String },
    #[error("Source file is not readable, or not found: {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error writing to destination file: {}: {source}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected {expected} fields, found {found}")]
pub struct RowShape {
    pub expected: usize,
    pub found: usize,
}
