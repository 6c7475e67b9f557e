use std::fmt;

use csv::StringRecord;
use log::debug;

use crate::domain::DatabaseError;
use crate::domain::Student;
use crate::domain::Summary;
use crate::engine::FieldSummarizer;
use crate::engine::Summarizer;

const FIELDS_PER_RECORD: usize = 4;

/// Reads students out of the raw text of a database snapshot.
///
/// Lines end at `\n` and are split on `,` with no quoting rules. The first line
/// is the header and is skipped without validation. Lines that do not have
/// exactly four tokens, blank lines included, are dropped silently.
pub struct CSVStudentReader<'a> {
    records: &'a str,
}

impl fmt::Debug for CSVStudentReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CSVStudentReader")
    }
}

/// Drops the `\r` a CRLF line ending leaves on the last token.
fn strip_carriage_return(record: StringRecord) -> StringRecord {
    let last = record.len().saturating_sub(1);
    record
        .iter()
        .enumerate()
        .map(|(i, token)| {
            if i == last {
                token.strip_suffix('\r').unwrap_or(token)
            } else {
                token
            }
        })
        .collect()
}

impl<'a> CSVStudentReader<'a> {
    /// Fails when the trimmed content has no line past the header.
    pub fn new(content: &'a str) -> Result<Self, DatabaseError> {
        match content.trim_end().split_once('\n') {
            Some((_header, records)) => Ok(CSVStudentReader { records }),
            None => {
                debug!("database has no record past the header");
                Err(DatabaseError::Load)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Student> + 'a {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_reader(self.records.as_bytes());
        reader
            .into_records()
            .filter_map(|record| match record {
                Ok(record) => Some(strip_carriage_return(record)),
                Err(e) => {
                    debug!("Skipping unreadable line: {:?}", e);
                    None
                }
            })
            .filter(|record| record.len() == FIELDS_PER_RECORD)
            .filter_map(|record| match record.deserialize::<Student>(None) {
                Ok(student) => Some(student),
                Err(e) => {
                    debug!("Skipping line: {:?}", e);
                    None
                }
            })
    }

    pub fn summarize(&self) -> Summary {
        let mut summarizer = FieldSummarizer::new();
        for student in self.iter() {
            summarizer.process(&student);
        }
        summarizer.summary()
    }
}

/// Builds the summary of one database snapshot.
pub fn summarize_text(content: &str) -> Result<Summary, DatabaseError> {
    Ok(CSVStudentReader::new(content)?.summarize())
}
