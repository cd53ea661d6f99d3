use thiserror::Error;

/// All errors produced while parsing a cron line.
///
/// The `Display` text of each variant is the message shown to the user, so
/// it is kept identical to what the command line tool prints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input was empty or only whitespace.
    #[error("No expression!")]
    NoExpression,

    /// The input was not a string (e.g. bytes that are not UTF-8).
    #[error("Invalid argument")]
    InvalidInput,

    /// The line did not split into exactly six tokens.
    #[error("Invalid format")]
    InvalidFormat,

    /// Malformed field syntax: a second `/` or a second `-` in one term.
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// A range reaching outside the field's bounds.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// A literal that is not a number, or an unknown alias.
    #[error("Invalid value {0}")]
    InvalidValue(String),
}

impl ParseError {
    pub fn expression(text: impl Into<String>) -> Self {
        Self::InvalidExpression(text.into())
    }

    pub fn range(text: impl Into<String>) -> Self {
        Self::InvalidRange(text.into())
    }

    pub fn value(text: impl Into<String>) -> Self {
        Self::InvalidValue(text.into())
    }

    /// True for errors raised while evaluating a single field, as opposed to
    /// errors about the shape of the whole line.
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidExpression(_) | Self::InvalidRange(_) | Self::InvalidValue(_)
        )
    }
}
