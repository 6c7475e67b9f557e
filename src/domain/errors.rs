use thiserror::Error;

/// Any failure to turn a database file into a summary.
///
/// Missing, unreadable and header-only files are reported the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatabaseError {
    #[error("Cannot load the database")]
    Load,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Major parameter must be CS or SWE")]
pub struct InvalidMajorError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Invalid operation type")]
    InvalidOperation(String),
    #[error("Error")]
    DivisionByZero,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
    #[error("Error writing report - {0}")]
    Sink(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid port {0}")]
    InvalidPort(String),
}
