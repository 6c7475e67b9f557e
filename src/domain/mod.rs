//! Module that describe domain entities and errors.
mod entities;
mod errors;
mod summary;

pub use entities::Major;
pub use entities::Student;
pub use errors::*;
pub use summary::FieldGroup;
pub use summary::Summary;
