//! Errors of the client surface

pub use common_utils::errors::CustomResult;

/// Failure of a client operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiClientError {
    /// A mandatory builder or settings value is absent or empty
    #[error("Missing required configuration: {field_name}")]
    MissingConfiguration {
        /// Name of the missing value
        field_name: &'static str,
    },
    /// The request body could not be built
    #[error("Failed to serialize the request body")]
    SerializationFailure,
    /// The request could not be sent or its response could not be read
    #[error("Failed to send the request: {0}")]
    TransportFailure(String),
    /// The remote answered with a status other than 200
    #[error("Received unexpected status code {status_code}")]
    UnexpectedStatus {
        /// Received HTTP status
        status_code: u16,
    },
    /// A 200 response body did not match the expected shape
    #[error("Failed to decode the response body")]
    DecodeFailure,
    /// A string is not one of the declared values of an enum
    #[error("Invalid {type_name} value: {value:?}")]
    InvalidEnumValue {
        /// Name of the enum
        type_name: &'static str,
        /// Rejected input
        value: String,
    },
    /// The default HTTP client could not be constructed
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
}
