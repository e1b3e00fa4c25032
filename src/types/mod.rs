//! Primitive value types and their codecs.
//!
//! - `Hash`, `Address`, `BlockNonce`: fixed-width byte values written as
//!   `0x`-prefixed lowercase hex
//! - `BigInt`: unbounded non-negative integer written as decimal text
//! - `Blob`: variable-length bytes written as hex
//! - `CanonicalText`: the text contract every primitive implements, which also
//!   makes it usable as a mapping key (see `keyed_map`)
//! - `Document`, `DocumentValue`, `Record`: the document model records are
//!   encoded through

pub mod address;
pub mod big_int;
pub mod blob;
pub mod canonical;
pub mod document;
pub mod error;
pub mod fixed_bytes;
pub mod hash;
pub mod keyed_map;
pub mod nonce;
