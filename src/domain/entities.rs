use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use typed_builder::TypedBuilder;

use super::InvalidMajorError;

/// One well-formed line of the students database.
///
/// Columns are read by position, so the header names in the file do not matter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct Student {
    first_name: String,
    last_name: String,
    age: String,
    field: String,
}

impl Student {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Age as written in the file. It is never parsed.
    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

/// Majors that can be queried individually.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Major {
    CS,
    SWE,
}

impl Major {
    pub fn as_str(&self) -> &'static str {
        match self {
            Major::CS => "CS",
            Major::SWE => "SWE",
        }
    }
}

impl FromStr for Major {
    type Err = InvalidMajorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CS" => Ok(Major::CS),
            "SWE" => Ok(Major::SWE),
            _ => Err(InvalidMajorError),
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_from_str() {
        assert_eq!("CS".parse::<Major>(), Ok(Major::CS));
        assert_eq!("SWE".parse::<Major>(), Ok(Major::SWE));
    }

    #[test]
    fn test_major_is_case_sensitive() {
        assert_eq!("cs".parse::<Major>(), Err(InvalidMajorError));
        assert_eq!("Swe".parse::<Major>(), Err(InvalidMajorError));
        assert_eq!("ME".parse::<Major>(), Err(InvalidMajorError));
        assert_eq!("".parse::<Major>(), Err(InvalidMajorError));
    }

    #[test]
    fn test_major_display_round_trips() {
        for major in [Major::CS, Major::SWE] {
            assert_eq!(major.to_string().parse::<Major>(), Ok(major));
        }
    }

    #[test]
    fn test_builder() {
        let student = Student::builder()
            .first_name("Johann")
            .last_name("Kerbrou")
            .age("30")
            .field("CS")
            .build();
        assert_eq!(student.first_name(), "Johann");
        assert_eq!(student.last_name(), "Kerbrou");
        assert_eq!(student.age(), "30");
        assert_eq!(student.field(), "CS");
    }
}
