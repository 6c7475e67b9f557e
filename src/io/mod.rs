mod csv;
mod database;

pub use self::csv::summarize_text;
pub use self::csv::CSVStudentReader;
pub use database::read_database;
pub use database::read_database_sync;

use std::io;
use std::io::Write;

/// Line oriented output of reports.
#[cfg_attr(test, mockall::automock)]
pub trait Sink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Writes every line to the process standard output.
#[derive(Debug, Default)]
pub struct StdoutSink {}

impl StdoutSink {
    pub fn new() -> Self {
        StdoutSink {}
    }
}

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)
    }
}
