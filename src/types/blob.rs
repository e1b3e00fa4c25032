//! Variable-length byte payloads with canonical `0x` hex text.

use crate::types::canonical::{CanonicalText, decode_hex_into, impl_canonical_serde, strip_hex_prefix};
use crate::types::document::impl_text_document;
use crate::types::error::CodecError;
use bytes::Bytes;
use std::fmt;
use std::ops::Deref;

/// Opaque byte payload such as log data, bloom filters or header extra data.
///
/// Wraps `bytes::Bytes`, so cloning a blob shares the underlying buffer.
/// Equality is byte-wise and length-sensitive: `0x00` is not `0x`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Blob(pub Bytes);

impl Blob {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Blob(data.into())
    }

    /// Creates a zero-length blob.
    pub fn empty() -> Self {
        Blob(Bytes::new())
    }

    /// Decodes hex text with an optional `0x` prefix.
    ///
    /// An odd number of digits or any non-hex character is rejected with
    /// `MalformedHex`; `"0x"` and `""` both decode to the empty blob.
    pub fn from_hex(text: &str) -> Result<Self, CodecError> {
        let digits = strip_hex_prefix(text);
        if digits.len() % 2 != 0 {
            return Err(CodecError::MalformedHex(text.to_string()));
        }
        let mut out = vec![0u8; digits.len() / 2];
        decode_hex_into(text, digits, &mut out)?;
        Ok(Blob(Bytes::from(out)))
    }

    /// Encodes as `0x` followed by lowercase hex; the empty blob is `"0x"`.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }
}

impl Deref for Blob {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl CanonicalText for Blob {
    fn to_canonical(&self) -> String {
        self.to_hex()
    }

    fn from_canonical(text: &str) -> Result<Self, CodecError> {
        Self::from_hex(text)
    }
}

impl std::str::FromStr for Blob {
    type Err = CodecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_hex(text)
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({})", self.to_hex())
    }
}

impl From<Vec<u8>> for Blob {
    fn from(v: Vec<u8>) -> Self {
        Blob(Bytes::from(v))
    }
}

impl From<&[u8]> for Blob {
    fn from(s: &[u8]) -> Self {
        Blob(Bytes::copy_from_slice(s))
    }
}

impl<const N: usize> From<[u8; N]> for Blob {
    fn from(a: [u8; N]) -> Self {
        Blob(Bytes::copy_from_slice(&a))
    }
}

impl_canonical_serde!(Blob);
impl_text_document!(Blob);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_blob_law() {
        let empty = Blob::from_hex("0x").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty, Blob::empty());
        assert_eq!(Blob::empty().to_hex(), "0x");
    }

    #[test]
    fn length_is_significant() {
        let zero_byte = Blob::from([0u8]);
        assert_ne!(zero_byte, Blob::empty());
        assert_eq!(zero_byte.to_hex(), "0x00");
        assert_eq!(Blob::from_hex("0x00").unwrap(), zero_byte);
    }

    #[test]
    fn odd_length_rejected() {
        assert_eq!(
            Blob::from_hex("0x123").unwrap_err(),
            CodecError::MalformedHex("0x123".into())
        );
    }

    #[test]
    fn non_hex_rejected() {
        assert!(matches!(Blob::from_hex("0xgg"), Err(CodecError::MalformedHex(_))));
    }

    #[test]
    fn mixed_case_input_lowercase_output() {
        let blob = Blob::from_hex("0XDeadBEEF").unwrap();
        assert_eq!(&*blob, &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(blob.to_string(), "0xdeadbeef");
    }

    #[test]
    fn prefix_optional_on_input() {
        assert_eq!(Blob::from_hex("0102").unwrap(), Blob::from(vec![1, 2]));
    }
}
