//! Loaders turning a database file into a [`Summary`].
//!
//! Both loaders read the whole file as UTF-8 and hand the text to
//! [`summarize_text`], so they always agree on the same input.
use std::path::Path;

use log::debug;

use super::csv::summarize_text;
use crate::domain::DatabaseError;
use crate::domain::Summary;

/// Reads and summarizes the database without blocking the runtime.
pub async fn read_database(path: impl AsRef<Path>) -> Result<Summary, DatabaseError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        debug!("Cannot read {}: {}", path.display(), e);
        DatabaseError::Load
    })?;
    summarize_text(&content)
}

/// Blocking variant of [`read_database`].
pub fn read_database_sync(path: impl AsRef<Path>) -> Result<Summary, DatabaseError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        debug!("Cannot read {}: {}", path.display(), e);
        DatabaseError::Load
    })?;
    summarize_text(&content)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn database(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_read_database_matches_sync() {
        let file = database("firstname,lastname,age,field\nJohann,Kerbrou,30,CS\n\nGuillaume,Salou,30,SWE\n");
        let from_async = read_database(file.path()).await.unwrap();
        let from_sync = read_database_sync(file.path()).unwrap();
        assert_eq!(from_async, from_sync);
        assert_eq!(from_async.total(), 2);
    }

    #[tokio::test]
    async fn test_read_database_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        assert_eq!(read_database(&path).await, Err(DatabaseError::Load));
        assert_eq!(read_database_sync(&path), Err(DatabaseError::Load));
    }

    #[tokio::test]
    async fn test_read_database_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_database(dir.path()).await, Err(DatabaseError::Load));
    }

    #[test]
    fn test_read_database_not_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'h', b'\n', 0xff, 0xfe, b',', b'a']).unwrap();
        assert_eq!(read_database_sync(file.path()), Err(DatabaseError::Load));
    }
}
