use thiserror::Error;

/// A failed rule of the booking validation schema.
///
/// The `Display` output is the message shown inline under the field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Invalid phone number.")]
    InvalidPhoneNumber,

    #[error("Must be more than {min} character")]
    TooShort { min: usize },

    #[error("Not more than {max} characters")]
    TooLong { max: usize },

    #[error("Please select a valid option")]
    UnknownOption,

    #[error("Please select a valid date")]
    InvalidDate,
}

pub type ValidationResult<T> = Result<T, ValidationError>;
