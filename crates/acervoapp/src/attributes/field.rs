//! Field catalogue.

use crate::error::{AcervoError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An item field, named as in the store documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Artist,
    Year,
    #[serde(rename = "type")]
    Type,
    Location,
    Status,
    RegNumber,
    Description,
    Provenance,
    Condition,
    Image,
    CustomFields,
}

/// All fields, in document order.
pub const FIELDS: &[Field] = &[
    Field::Title,
    Field::Artist,
    Field::Year,
    Field::Type,
    Field::Location,
    Field::Status,
    Field::RegNumber,
    Field::Description,
    Field::Provenance,
    Field::Condition,
    Field::Image,
    Field::CustomFields,
];

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Artist => "artist",
            Field::Year => "year",
            Field::Type => "type",
            Field::Location => "location",
            Field::Status => "status",
            Field::RegNumber => "regNumber",
            Field::Description => "description",
            Field::Provenance => "provenance",
            Field::Condition => "condition",
            Field::Image => "image",
            Field::CustomFields => "customFields",
        }
    }

    /// Sensitive fields are hidden from the public unless a visibility flag
    /// discloses them.
    pub fn is_sensitive(self) -> bool {
        matches!(
            self,
            Field::Location | Field::Provenance | Field::RegNumber | Field::Condition
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = AcervoError;

    fn from_str(s: &str) -> Result<Self> {
        FIELDS
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| AcervoError::Api(format!("Unknown field: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for field in FIELDS {
            assert_eq!(field.name().parse::<Field>().unwrap(), *field);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!("acquisition".parse::<Field>().is_err());
    }

    #[test]
    fn test_sensitive_fields() {
        let sensitive: Vec<Field> = FIELDS.iter().copied().filter(|f| f.is_sensitive()).collect();
        assert_eq!(
            sensitive,
            vec![
                Field::Location,
                Field::RegNumber,
                Field::Provenance,
                Field::Condition
            ]
        );
    }
}
