#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Environment of the Bova client: logger setup and log configuration.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod config;
pub mod logger;

#[doc(inline)]
pub use logger::*;
pub use tracing;
