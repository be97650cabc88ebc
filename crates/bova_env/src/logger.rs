//!
//! Logger of the client.
//!

pub use tracing::{debug, error, event as log, info, instrument, trace, warn, Level};

mod setup;
pub use setup::{setup, SetupError, TelemetryGuard};

mod types;
pub use types::{Flow, Logger, LoggerError};
