//! Canonical text codecs for Ethereum chain data.
//!
//! Provides fixed-width hashes, addresses and nonces, arbitrary-precision
//! integers, byte blobs, primitive-keyed mappings and the composite chain
//! records built from them. Every value has exactly one canonical text form;
//! decoding is strict and reports where a malformed document failed.

pub mod config;
pub mod core;
pub mod types;
pub mod utils;

pub use crate::config::DecodeLimits;
pub use crate::core::{block::BlockHeader, log::Log, receipt::Receipt, transaction::Transaction};
pub use crate::types::address::Address;
pub use crate::types::big_int::BigInt;
pub use crate::types::blob::Blob;
pub use crate::types::canonical::CanonicalText;
pub use crate::types::document::Record;
pub use crate::types::error::CodecError;
pub use crate::types::hash::Hash;
pub use crate::types::keyed_map::{decode_mapping, encode_mapping};
pub use crate::types::nonce::BlockNonce;
