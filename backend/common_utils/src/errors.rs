//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Parsing Errors
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// Failed to parse struct
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
}

/// Validation errors raised for caller supplied input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The provided input is missing a required field.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: String },

    /// An incorrect value was provided for the field specified by `field_name`.
    #[error("Incorrect value provided for field: {field_name}: {message}")]
    IncorrectValueProvided {
        field_name: &'static str,
        message: String,
    },

    /// An invalid input was provided.
    #[error("{message}")]
    InvalidValue { message: String },
}
