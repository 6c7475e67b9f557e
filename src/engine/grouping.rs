//! In-memory grouping of students by field.
use std::fmt;

use super::Summarizer;
use crate::domain::FieldGroup;
use crate::domain::Student;
use crate::domain::Summary;

/// Accumulates students in the order they are read.
///
/// Groups are kept in a plain vector so the first-occurrence order of each
/// field survives into the resulting [`Summary`].
#[derive(Clone, Default)]
pub struct FieldSummarizer {
    groups: Vec<FieldGroup>,
}

impl fmt::Debug for FieldSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSummarizer")
            .field("fields", &self.groups.len())
            .finish()
    }
}

impl FieldSummarizer {
    pub fn new() -> Self {
        FieldSummarizer { groups: vec![] }
    }
}

impl Summarizer for FieldSummarizer {
    fn process(&mut self, student: &Student) {
        match self
            .groups
            .iter_mut()
            .find(|group| group.field() == student.field())
        {
            Some(group) => group.push(student.first_name()),
            None => {
                let mut group = FieldGroup::new(student.field());
                group.push(student.first_name());
                self.groups.push(group);
            }
        }
    }

    fn summary(self) -> Summary {
        Summary::new(self.groups)
    }
}
