mod grouping;

pub use grouping::FieldSummarizer;

use crate::domain::Student;
use crate::domain::Summary;

/// Folds students into a [`Summary`].
pub trait Summarizer {
    fn process(&mut self, student: &Student);
    fn summary(self) -> Summary;
}
