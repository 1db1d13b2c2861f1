use std::io::{self, BufRead, Write};

pub fn count_lines<R: BufRead>(mut reader: R) -> io::Result<u64> {
    let mut count = 0;
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(count);
        }
        count += buf.iter().filter(|&&b| b == b'\n').count() as u64;
        let len = buf.len();
        reader.consume(len);
    }
}

pub struct Progress<W: Write> {
    out: W,
    total: u64,
}

impl<W: Write> Progress<W> {
    pub fn new(out: W, total: u64) -> Self {
        Progress { out, total }
    }

    pub fn percent(&self, line: u64) -> u64 {
        if self.total == 0 {
            return 100;
        }
        let percent = (line as f64 / self.total as f64 * 100.0).round() as u64;
        percent.min(100)
    }

    pub fn update(&mut self, line: u64) -> io::Result<()> {
        write!(
            self.out,
            "Processing Line: {} ({}%)\r",
            line,
            self.percent(line)
        )?;
        self.out.flush()
    }

    pub fn finish(&mut self, lines_written: u64) -> io::Result<()> {
        writeln!(self.out, "\nFile generation complete.")?;
        writeln!(self.out, "Lines written: {}", lines_written)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
