use thiserror::Error;

use crate::kind::Kind;

/// Why a value was rejected. Rendered as the tail of the error message, after
/// the kind label and the quoted value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("must not be empty")]
    Empty,

    #[error("is a reserved value")]
    Reserved,

    #[error("contains reserved delimiter '{0}' (';', ':' and ',' are not allowed)")]
    ReservedDelimiter(char),

    #[error("contains invalid character '{found}', {allowed}")]
    InvalidCharacter { found: char, allowed: &'static str },

    #[error("must start with {expected} (found '{found}')")]
    InvalidStart { found: char, expected: &'static str },

    #[error("must end with {expected} (found '{found}')")]
    InvalidEnd { found: char, expected: &'static str },

    #[error("must not consist of digits only")]
    Numeric,

    #[error("must be no more than {max} characters (got {len})")]
    TooLong { max: usize, len: usize },

    #[error("must not contain empty dot-separated segments")]
    EmptyDomainSegment,

    #[error("must contain at most one '/' separating prefix and name")]
    MultipleSlashes,

    #[error("has an empty prefix before '/'")]
    EmptyPrefix,

    #[error("has an empty name after '/'")]
    EmptyName,

    #[error("has an invalid prefix: {0}")]
    InvalidPrefix(Box<Violation>),

    #[error("must not contain '/'")]
    SlashNotAllowed,
}

/// A rejected identifier.
///
/// The message always starts with `"<Kind label> '<value>'"`, for example
/// `Function name 'EXAMPLE' contains invalid character 'E', ...`. Callers print
/// it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} '{value}' {violation}", .kind.label())]
pub struct ValidationError {
    pub kind: Kind,
    pub value: String,
    pub violation: Violation,
}

impl ValidationError {
    pub fn new(kind: Kind, value: impl Into<String>, violation: Violation) -> Self {
        Self {
            kind,
            value: value.into(),
            violation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_shape() {
        let err = ValidationError::new(
            Kind::Namespace,
            "123invalid",
            Violation::InvalidStart {
                found: '1',
                expected: "a letter",
            },
        );
        assert_eq!(
            err.to_string(),
            "Namespace '123invalid' must start with a letter (found '1')"
        );
    }

    #[test]
    fn nested_prefix_violation() {
        let err = ValidationError::new(
            Kind::LabelKey,
            "a..b/c",
            Violation::InvalidPrefix(Box::new(Violation::EmptyDomainSegment)),
        );
        assert_eq!(
            err.to_string(),
            "Label key 'a..b/c' has an invalid prefix: must not contain empty dot-separated segments"
        );
    }
}
