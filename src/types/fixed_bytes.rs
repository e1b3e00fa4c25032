//! Fixed-width byte values with canonical hex text.
//!
//! [`FixedBytes`] carries every rule shared by hashes, addresses and block
//! nonces; the concrete types are thin newtypes declared with
//! `fixed_width_type!`.
//!
//! # Text Format
//!
//! - Output: `0x` followed by exactly `2 * N` lowercase hex digits
//! - Input: optional `0x`/`0X` prefix, any letter case
//! - Shorter input is right-aligned (left zero-padded), so `"0x1"` and
//!   `"0x0001"` denote the same value; an odd digit count is allowed for the
//!   same reason
//! - More than `2 * N` digits fail with `WidthOverflow` before any decoding

use crate::types::canonical::{CanonicalText, decode_hex_into, strip_hex_prefix};
use crate::types::error::CodecError;
use std::fmt;

/// A big-endian byte value of exactly `N` bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedBytes<const N: usize>(pub [u8; N]);

impl<const N: usize> FixedBytes<N> {
    /// Creates a value with every byte set to zero.
    pub const fn zero() -> Self {
        Self([0u8; N])
    }

    /// Returns `true` if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Decodes hex text, left-padding short input with zero bytes.
    pub fn from_hex(text: &str) -> Result<Self, CodecError> {
        let digits = strip_hex_prefix(text);
        if digits.len() > 2 * N {
            return Err(CodecError::WidthOverflow {
                width: N,
                digits: digits.len(),
            });
        }

        // An odd digit count is a leading nibble of a right-aligned value.
        let padded;
        let digits = if digits.len() % 2 == 1 {
            padded = format!("0{digits}");
            padded.as_str()
        } else {
            digits
        };

        let mut out = [0u8; N];
        decode_hex_into(text, digits, &mut out[N - digits.len() / 2..])?;
        Ok(Self(out))
    }

    /// Encodes as `0x` followed by `2 * N` lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> CanonicalText for FixedBytes<N> {
    fn to_canonical(&self) -> String {
        self.to_hex()
    }

    fn from_canonical(text: &str) -> Result<Self, CodecError> {
        Self::from_hex(text)
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Declares a named fixed-width type backed by [`FixedBytes`].
///
/// The generated type delegates parsing, formatting, ordering and the
/// document/serde codecs to the shared implementation.
macro_rules! fixed_width_type {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(pub $crate::types::fixed_bytes::FixedBytes<{ $len }>);

        impl $name {
            /// Creates a value with every byte set to zero.
            pub const fn zero() -> Self {
                Self($crate::types::fixed_bytes::FixedBytes::zero())
            }

            /// Returns `true` if every byte is zero.
            pub fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            /// Returns the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &(self.0).0
            }

            /// Decodes hex text; see [`FixedBytes::from_hex`].
            pub fn from_hex(text: &str) -> Result<Self, $crate::types::error::CodecError> {
                $crate::types::fixed_bytes::FixedBytes::from_hex(text).map(Self)
            }

            /// Canonical `0x`-prefixed lowercase hex.
            pub fn to_hex(&self) -> String {
                self.0.to_hex()
            }
        }

        impl $crate::types::canonical::CanonicalText for $name {
            fn to_canonical(&self) -> String {
                self.to_hex()
            }

            fn from_canonical(text: &str) -> Result<Self, $crate::types::error::CodecError> {
                Self::from_hex(text)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::types::error::CodecError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                Self::from_hex(text)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self($crate::types::fixed_bytes::FixedBytes(bytes))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        $crate::types::canonical::impl_canonical_serde!($name);
        $crate::types::document::impl_text_document!($name);
    };
}

pub(crate) use fixed_width_type;
