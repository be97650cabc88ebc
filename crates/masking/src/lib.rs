#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Secret keeping for the Bova client.
//!
//! Values wrapped in [`Secret`] never show up in `Debug` output, and [`Maskable`] lets request
//! headers carry the same guarantee into logs.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

mod strategy;
pub use strategy::{CardNumberStrategy, Strategy, WithType, WithoutType};

mod abs;
pub use abs::{ExposeInterface, PeekInterface};

mod secret;
pub use secret::Secret;

mod string;

mod serde;
pub use crate::serde::SerializableSecret;

pub mod maskable;
pub use maskable::*;

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, PeekInterface};
}
