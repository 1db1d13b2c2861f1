use std::path::PathBuf;

use crate::error::Error;

/// Command line settings: `<program> <source.csv> <output.php> <table_name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub table: String,
}

impl Config {
    // program name first
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| "outcodes".to_string());
        let rest: Vec<String> = args.collect();

        match <[String; 3]>::try_from(rest) {
            Ok([source, destination, table]) => Ok(Config {
                source: PathBuf::from(source),
                destination: PathBuf::from(destination),
                table,
            }),
            Err(_) => Err(Error::Usage { program }),
        }
    }
}
