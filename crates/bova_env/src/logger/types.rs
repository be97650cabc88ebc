//!
//! Verbosity gate of a single client instance.
//!

use std::str::FromStr;

use strum::Display;

use tracing::Level;

use crate::config::LogConsole;

/// Invalid logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggerError {
    /// The level name is not one of `trace`, `debug`, `info`, `warn`, `error`.
    #[error("Invalid log level: {0:?}")]
    InvalidLevel(String),
}

///
/// Per-client logger: an on/off switch plus the most verbose level that still gets emitted.
///
/// Events are handed to `tracing`, so they reach whatever subscriber the application
/// installed (see [`crate::setup`]).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    enabled: bool,
    level: Level,
}

impl Logger {
    /// Create a logger from an on/off flag and a level name, case-insensitive.
    pub fn new(enabled: bool, level: &str) -> Result<Self, LoggerError> {
        let level =
            Level::from_str(level.trim()).map_err(|_| LoggerError::InvalidLevel(level.to_owned()))?;
        Ok(Self { enabled, level })
    }

    /// A logger that emits nothing.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            level: Level::INFO,
        }
    }

    /// Whether events are emitted at all.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Most verbose level that is emitted.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether an event at `level` passes this logger.
    pub fn is_enabled(&self, level: Level) -> bool {
        // more verbose levels compare greater
        self.enabled && level <= self.level
    }
}

impl From<&LogConsole> for Logger {
    fn from(console: &LogConsole) -> Self {
        Self {
            enabled: console.enabled,
            level: console.level.into_level(),
        }
    }
}

/// API flow, recorded as the `flow` field of every endpoint span.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Create a P2P deposit transaction
    CreateP2PTransaction,
    /// Report a P2P transaction as paid by the payer
    MarkP2PTransactionPaid,
    /// Cancel a P2P transaction
    CancelP2PTransaction,
    /// Retrieve a P2P transaction
    GetP2PTransaction,
    /// Open a dispute on a P2P transaction
    CreateP2PDispute,
    /// Create a payout to a card
    CreateMassTransaction,
    /// Retrieve a payout
    GetMassTransaction,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::INFO,
        }
    }
}
