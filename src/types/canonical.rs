//! Canonical text form shared by every primitive value.
//!
//! A type implementing [`CanonicalText`] has exactly one text rendering
//! (`to_canonical`) and a decoder that accepts that rendering plus the looser
//! input variants the type tolerates (`from_canonical`). The pair is what lets
//! a primitive appear as a document string, an array element or an object key.

use crate::types::error::CodecError;

/// Types with a unique canonical text encoding.
///
/// Implementations must satisfy `from_canonical(&v.to_canonical()) == Ok(v)`
/// and must be injective: distinct values never share a canonical text.
pub trait CanonicalText: Sized {
    /// Renders the canonical text form.
    fn to_canonical(&self) -> String;

    /// Parses text into a value, rejecting malformed input.
    fn from_canonical(text: &str) -> Result<Self, CodecError>;
}

/// Strips an optional `0x` or `0X` prefix.
pub(crate) fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Decodes hex digits into `out`, which must be exactly half their length.
pub(crate) fn decode_hex_into(input: &str, digits: &str, out: &mut [u8]) -> Result<(), CodecError> {
    if digits.len() % 2 != 0 {
        return Err(CodecError::MalformedHex(input.to_string()));
    }
    hex::decode_to_slice(digits, out).map_err(|_| CodecError::MalformedHex(input.to_string()))
}

/// Implements `serde::Serialize` and `serde::Deserialize` through the canonical text.
///
/// The value serializes as a plain string, so it is accepted wherever a
/// serializer expects a map key.
macro_rules! impl_canonical_serde {
    ($($t:ty),* $(,)?) => {
        $(
            impl ::serde::Serialize for $t {
                fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&$crate::types::canonical::CanonicalText::to_canonical(self))
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $t {
                fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let text = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                    <$t as $crate::types::canonical::CanonicalText>::from_canonical(&text)
                        .map_err(::serde::de::Error::custom)
                }
            }
        )*
    };
}

pub(crate) use impl_canonical_serde;
