use std::slice;

/// First names of the students enrolled in one field, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    field: String,
    students: Vec<String>,
}

impl FieldGroup {
    pub(crate) fn new(field: impl Into<String>) -> Self {
        FieldGroup {
            field: field.into(),
            students: vec![],
        }
    }

    pub(crate) fn push(&mut self, first_name: impl Into<String>) {
        self.students.push(first_name.into());
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Names joined with `", "`.
    pub fn list(&self) -> String {
        self.students.join(", ")
    }
}

/// Students of one database snapshot grouped by field.
///
/// Groups keep the order in which their field first appeared in the file. Use
/// [`Summary::sorted`] when a stable, display-friendly order is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    groups: Vec<FieldGroup>,
}

impl Summary {
    pub(crate) fn new(groups: Vec<FieldGroup>) -> Self {
        Summary { groups }
    }

    /// Number of well-formed records in the snapshot.
    pub fn total(&self) -> usize {
        self.groups.iter().map(FieldGroup::len).sum()
    }

    pub fn get(&self, field: &str) -> Option<&FieldGroup> {
        self.groups.iter().find(|group| group.field == field)
    }

    pub fn iter(&self) -> slice::Iter<'_, FieldGroup> {
        self.groups.iter()
    }

    /// Groups ordered lexicographically by field.
    pub fn sorted(&self) -> Vec<&FieldGroup> {
        let mut groups: Vec<&FieldGroup> = self.groups.iter().collect();
        groups.sort_by(|a, b| a.field.cmp(&b.field));
        groups
    }

    /// Number of distinct fields.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a FieldGroup;
    type IntoIter = slice::Iter<'a, FieldGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
