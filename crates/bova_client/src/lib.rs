#![forbid(unsafe_code)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod client;
pub mod configs;
pub mod consts;
pub mod enums;
pub mod errors;
pub mod mass_transaction;
pub mod p2p;
pub mod services;
pub mod signature;
pub mod types;

pub use client::{BovaApi, BovaApiBuilder};
pub use mass_transaction::MassTransaction;
pub use p2p::P2P;
pub use signature::{calculate_signature, verify_signature};
