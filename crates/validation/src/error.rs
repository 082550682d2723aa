use thiserror::Error;

/// Why a guard rejected its input.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A string was expected but something else was provided.
    #[error("provided input is not of type string, provided type: {found}")]
    TypeMismatch { found: &'static str },

    /// The string was empty or consisted only of whitespace.
    #[error("empty or whitespace string provided")]
    BlankString,

    /// The value was not a number the guard accepts (`NaN`, an infinity, or a non-number).
    #[error("the provided value is not a number, provided: {provided}")]
    InvalidNumber { provided: String },

    /// The value would be used as a divisor and is zero.
    #[error("cannot divide by 0")]
    DivisionByZeroRisk,

    /// The name is not a known input element kind.
    #[error("invalid input element name provided, provided value: {provided}")]
    UnknownControlKind { provided: String },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
