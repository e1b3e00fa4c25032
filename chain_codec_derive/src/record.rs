//! Derive macro for document-encoded records.
//!
//! Generates `DocumentValue` and `Record` implementations for structs with
//! named fields. Every field is encoded through its own `DocumentValue`
//! implementation, so the encoding rule of a record is fixed at compile time.
//!
//! # Document Format
//!
//! A record becomes a JSON object whose entries appear in field declaration
//! order. Keys default to the camelCase form of the field name and can be
//! overridden per field:
//!
//! ```ignore
//! use chain_codec_derive::Record;
//!
//! #[derive(Record)]
//! pub struct BlockHeader {
//!     pub parent_hash: Hash,              // "parentHash"
//!     #[record(rename = "sha3Uncles")]
//!     pub uncle_hash: Hash,               // "sha3Uncles"
//! }
//! ```
//!
//! # Generated Code
//!
//! ```ignore
//! impl DocumentValue for BlockHeader {
//!     const SHAPE: &'static str = "object";
//!
//!     fn to_document(&self) -> Document {
//!         Document::Object(vec![
//!             (String::from("parentHash"), DocumentValue::to_document(&self.parent_hash)),
//!             (String::from("sha3Uncles"), DocumentValue::to_document(&self.uncle_hash)),
//!         ])
//!     }
//!
//!     fn from_document(document: &Document) -> Result<Self, CodecError> {
//!         let entries = document.as_object()?;
//!         Ok(Self {
//!             parent_hash: read_field(entries, "BlockHeader", "parentHash")?,
//!             uncle_hash: read_field(entries, "BlockHeader", "sha3Uncles")?,
//!         })
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derives `DocumentValue` and `Record` for a named-field struct.
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_record(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_record(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let record_name = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => fields,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Record derive requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Record derive supports only structs",
            ));
        }
    };

    let mut idents = Vec::with_capacity(fields.named.len());
    let mut keys = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "field without a name"))?;
        let key = match field_rename(&field.attrs)? {
            Some(key) => key,
            None => camel_case(&ident.unraw().to_string()),
        };
        if keys.contains(&key) {
            return Err(syn::Error::new_spanned(
                field,
                format!("document key `{key}` is used by more than one field"),
            ));
        }
        idents.push(ident);
        keys.push(key);
    }

    let encode_entries = idents.iter().zip(keys.iter()).map(|(ident, key)| {
        quote! {
            (
                ::std::string::String::from(#key),
                crate::types::document::DocumentValue::to_document(&self.#ident),
            ),
        }
    });

    let decode_fields = idents.iter().zip(keys.iter()).map(|(ident, key)| {
        quote! {
            #ident: crate::types::document::read_field(entries, #record_name, #key)?,
        }
    });

    Ok(quote! {
        impl #impl_generics crate::types::document::DocumentValue for #name #ty_generics #where_clause {
            const SHAPE: &'static str = "object";

            fn to_document(&self) -> crate::types::document::Document {
                crate::types::document::Document::Object(::std::vec![
                    #(#encode_entries)*
                ])
            }

            fn from_document(
                document: &crate::types::document::Document,
            ) -> ::std::result::Result<Self, crate::types::error::CodecError> {
                let entries = document.as_object()?;
                Ok(Self {
                    #(#decode_fields)*
                })
            }
        }

        impl #impl_generics crate::types::document::Record for #name #ty_generics #where_clause {
            const NAME: &'static str = #record_name;
        }
    })
}

/// Reads `#[record(rename = "...")]` from a field's attributes.
fn field_rename(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported record attribute; expected `rename = \"...\"`"))
            }
        })?;
    }
    Ok(rename)
}

/// Converts a snake_case field name into a camelCase document key.
fn camel_case(field: &str) -> String {
    let mut key = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = !key.is_empty();
        } else if upper_next {
            key.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            key.push(ch);
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::camel_case;

    #[test]
    fn camel_case_joins_words() {
        assert_eq!(camel_case("parent_hash"), "parentHash");
        assert_eq!(camel_case("cumulative_gas_used"), "cumulativeGasUsed");
        assert_eq!(camel_case("removed"), "removed");
    }

    #[test]
    fn camel_case_ignores_leading_underscore() {
        assert_eq!(camel_case("_index"), "index");
    }
}
