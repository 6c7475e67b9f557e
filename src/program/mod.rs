//! This module contains the student count report: load a database from some path, then write
//! the total and one line per field to some `Sink`.
//!
//! # Example
//!
//! ```no_run
//! use student_records::{count_students, StdoutSink};
//!
//! let summary = count_students("database.csv", &mut StdoutSink::new())?;
//! assert!(summary.total() > 0);
//! # Ok::<(), student_records::ReportError>(())
//! ```
use std::path::Path;

use crate::{read_database_sync, FieldGroup, ReportError, Sink, Summary};

/// `Number of students in <field>: <count>. List: <names>`
pub fn field_line(group: &FieldGroup) -> String {
    format!(
        "Number of students in {}: {}. List: {}",
        group.field(),
        group.len(),
        group.list()
    )
}

/// Lines of the count report, fields in the order they first appear in the file.
pub fn count_lines(summary: &Summary) -> Vec<String> {
    let mut lines = Vec::with_capacity(summary.len() + 1);
    lines.push(format!("Number of students: {}", summary.total()));
    lines.extend(summary.iter().map(field_line));
    lines
}

/// Loads the database at `path` and writes its count report to `sink`.
///
/// # Returns
///
/// The summary that was reported, or `ReportError::Database` when the file cannot be loaded.
/// Nothing is written in that case.
pub fn count_students<K>(path: impl AsRef<Path>, sink: &mut K) -> Result<Summary, ReportError>
where
    K: Sink + ?Sized,
{
    let summary = read_database_sync(path)?;
    for line in count_lines(&summary) {
        sink.write_line(&line)?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use mockall::Sequence;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::MockSink;

    fn database(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn expect_lines(sink: &mut MockSink, lines: &[&'static str]) {
        let mut seq = Sequence::new();
        for line in lines {
            let line = *line;
            sink.expect_write_line()
                .withf(move |written| written == line)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }
    }

    #[test]
    fn test_count_students_success() {
        let file = database(
            "firstname,lastname,age,field\nJohann,Kerbrou,30,SWE\nGuillaume,Salou,30,CS\nArielle,Salou,20,SWE\n",
        );
        let mut sink = MockSink::new();
        expect_lines(
            &mut sink,
            &[
                "Number of students: 3",
                "Number of students in SWE: 2. List: Johann, Arielle",
                "Number of students in CS: 1. List: Guillaume",
            ],
        );

        let summary = count_students(file.path(), &mut sink).unwrap();
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_count_students_skips_malformed_lines() {
        let file = database("firstname,lastname,age,field\n\nJohann,Kerbrou,30,CS\nbad line\n\n");
        let mut sink = MockSink::new();
        expect_lines(
            &mut sink,
            &[
                "Number of students: 1",
                "Number of students in CS: 1. List: Johann",
            ],
        );

        count_students(file.path(), &mut sink).unwrap();
    }

    #[test]
    fn test_count_students_header_only() {
        let file = database("firstname,lastname,age,field\n");
        let mut sink = MockSink::new();
        sink.expect_write_line().never();

        let result = count_students(file.path(), &mut sink);
        assert!(matches!(result, Err(ReportError::Database(_))));
        assert_eq!(result.unwrap_err().to_string(), "Cannot load the database");
    }

    #[test]
    fn test_count_students_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = MockSink::new();
        sink.expect_write_line().never();

        let result = count_students(dir.path().join("nope.csv"), &mut sink);
        assert!(matches!(result, Err(ReportError::Database(_))));
    }

    #[test]
    fn test_count_students_sink_error() {
        let file = database("h\nJohann,Kerbrou,30,CS\nArielle,Salou,20,SWE\n");
        let mut sink = MockSink::new();
        sink.expect_write_line().times(1).returning(|_| {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "Error writing to sink",
            ))
        });

        let result = count_students(file.path(), &mut sink);
        assert!(matches!(result, Err(ReportError::Sink(_))));
    }

    #[test]
    fn test_count_lines_empty_summary() {
        assert_eq!(count_lines(&Summary::default()), vec!["Number of students: 0"]);
    }
}
