use std::{
    error::Error,
    fmt::{Display, Formatter},
};

/// Raised when a record received from the game service cannot be turned into a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeserializationError {
    /// A required key is not present in the record
    MissingField(&'static str),

    /// The key is present but its value is null or of the wrong JSON type
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
}

impl DeserializationError {
    pub fn field(&self) -> &'static str {
        match self {
            DeserializationError::MissingField(field) => field,
            DeserializationError::InvalidType { field, .. } => field,
        }
    }
}

impl Display for DeserializationError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            DeserializationError::MissingField(field) => {
                write!(f, "Deserialization error: missing field \"{}\"", field)
            }
            DeserializationError::InvalidType { field, expected } => write!(
                f,
                "Deserialization error: field \"{}\" is not {}",
                field, expected
            ),
        }
    }
}

impl Error for DeserializationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let missing = DeserializationError::MissingField("turn");
        assert_eq!(
            missing.to_string(),
            "Deserialization error: missing field \"turn\""
        );

        let invalid = DeserializationError::InvalidType {
            field: "createdAt",
            expected: "an integer",
        };
        assert_eq!(
            invalid.to_string(),
            "Deserialization error: field \"createdAt\" is not an integer"
        );
        assert_eq!(invalid.field(), "createdAt");
    }
}
