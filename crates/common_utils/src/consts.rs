//! Commonly used constants

/// Default timeout for an outbound request, in seconds
pub const REQUEST_TIME_OUT: u64 = 30;

/// Content type of JSON request bodies
pub const APPLICATION_JSON: &str = "application/json";
