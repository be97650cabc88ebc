//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
///
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Serialization and deserialization failures.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// A value could not be encoded into the target format
    #[error("Failed to encode {0}")]
    EncodeError(&'static str),
    /// Bytes could not be decoded into the named structure
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
}

/// Cryptograpic algorithm errors
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// A signature or key could not be decoded from its text form
    #[error("Failed to decode")]
    DecodingFailed,
}
