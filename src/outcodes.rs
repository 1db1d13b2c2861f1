//! Converts a UK postcode lookup CSV export into `$this->connection->insert`
//! calls, one per distinct postcode outcode.

use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};

pub mod config;
pub mod error;
pub mod outcode;
pub mod progress;
pub mod record;
pub mod splitter;
pub mod statement;

pub use config::Config;
pub use error::Error;
pub use outcode::{extract, outcode_of, Extraction, SeenOutcodes};
pub use progress::{count_lines, Progress};
pub use record::{Field, PostcodeRecord};
pub use splitter::split_line;
pub use statement::format_statement;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub lines_read: u64,
    pub lines_written: u64,
    pub headers: u64,
    pub duplicates: u64,
    pub blank: u64,
    pub malformed: u64,
}

pub fn convert<R, W, C>(
    mut source: R,
    mut dest: W,
    table: &str,
    progress: &mut Progress<C>,
) -> Result<Summary, Error>
where
    R: BufRead,
    W: Write,
    C: Write,
{
    let mut seen = SeenOutcodes::new();
    let mut summary = Summary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if source.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines_read += 1;
        let line_num = summary.lines_read;
        let line = String::from_utf8_lossy(strip_terminator(&buf));

        let fields = split_line(&line);
        if fields.is_empty() {
            summary.blank += 1;
        } else {
            match PostcodeRecord::from_fields(fields) {
                Ok(record) => match extract(&record, &mut seen) {
                    Extraction::Accepted(outcode) => {
                        let statement = format_statement(table, &outcode, &record);
                        write!(dest, "{}{}", statement, LINE_ENDING)?;
                        summary.lines_written += 1;
                    }
                    Extraction::Duplicate(outcode) => {
                        debug!("line {}: outcode '{}' already written", line_num, outcode);
                        summary.duplicates += 1;
                    }
                    Extraction::Header => {
                        debug!("line {}: header row skipped", line_num);
                        summary.headers += 1;
                    }
                },
                Err(shape) => {
                    warn!("line {} is malformed, will be skipped: {}", line_num, shape);
                    summary.malformed += 1;
                }
            }
        }

        progress.update(line_num)?;
    }

    Ok(summary)
}

// The source is checked before the destination is created, so a missing
// source leaves no output file behind.
pub fn run<C: Write>(config: &Config, mut console: C) -> Result<Summary, Error> {
    let source = open_source(config)?;
    writeln!(console, "Processing File: {}", config.source.display())?;

    let mut reader = BufReader::new(source);
    let total = count_lines(&mut reader)?;
    writeln!(console, "Lines Found: {}", total)?;
    reader.seek(SeekFrom::Start(0))?;

    let dest = File::create(&config.destination).map_err(|source| Error::DestinationUnwritable {
        path: config.destination.clone(),
        source,
    })?;
    writeln!(console, "Generating File: {}", config.destination.display())?;

    let mut dest = BufWriter::new(dest);
    let mut progress = Progress::new(&mut console, total);
    let summary = convert(reader, &mut dest, &config.table, &mut progress)?;
    dest.flush()?;
    progress.finish(summary.lines_written)?;

    info!(
        "{} lines read: {} written, {} duplicate, {} header, {} blank, {} malformed",
        summary.lines_read,
        summary.lines_written,
        summary.duplicates,
        summary.headers,
        summary.blank,
        summary.malformed
    );
    Ok(summary)
}

fn open_source(config: &Config) -> Result<File, Error> {
    let unreadable = |source| Error::SourceUnreadable {
        path: config.source.clone(),
        source,
    };
    let file = File::open(&config.source).map_err(unreadable)?;
    if !file.metadata().map_err(unreadable)?.is_file() {
        return Err(unreadable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok(file)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
