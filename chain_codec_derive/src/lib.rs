//! Derive macros for the chain_codec crate.
//!
//! Provides:
//! - `#[derive(Record)]` - field-by-field document encoding for composite records
//! - `#[derive(Error)]` - error type boilerplate (thiserror replacement)

mod error;
mod record;

use proc_macro::TokenStream;

/// Implements `DocumentValue` and `Record` for a struct with named fields.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}

/// Automatically implements `Display` and `Error` traits for error types.
#[proc_macro_derive(Error, attributes(error))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    error::derive_error(input)
}
