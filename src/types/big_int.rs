//! Arbitrary-precision non-negative integers with canonical decimal text.
//!
//! Chain quantities such as difficulty, gas and block numbers can exceed any
//! native integer width. [`BigInt`] stores the magnitude as normalized
//! little-endian `u32` limbs and only supports construction and the text
//! round-trip; arithmetic is deliberately absent.
//!
//! # Text Format
//!
//! - Output: decimal digits without leading zeros; zero is `"0"`
//! - Input: decimal digits, or hex digits after a `0x`/`0X` prefix
//! - Signs, whitespace, empty input and bare prefixes are rejected

use crate::types::canonical::{CanonicalText, impl_canonical_serde};
use crate::types::document::impl_text_document;
use crate::types::error::CodecError;
use std::cmp::Ordering;
use std::fmt::{self, Write};

/// Maximum number of digits accepted when parsing, bounding the quadratic
/// base conversion.
pub const MAX_BIG_INT_DIGITS: usize = 4096;

/// Largest power of ten that fits in a limb.
const DECIMAL_BASE: u32 = 1_000_000_000;
const DECIMAL_CHUNK: usize = 9;
const HEX_CHUNK: usize = 8;

/// Unbounded non-negative integer.
///
/// Limbs are little-endian and never carry trailing zero limbs, so derived
/// equality and hashing are numeric: `"007"` and `"7"` parse to equal values.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    limbs: Vec<u32>,
}

impl BigInt {
    /// Returns the value zero.
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Parses decimal text, or hex text after a `0x` prefix.
    pub fn from_text(text: &str) -> Result<Self, CodecError> {
        let malformed = || CodecError::MalformedInteger(text.to_string());

        let hex_digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"));
        let digits = hex_digits.unwrap_or(text);
        if digits.len() > MAX_BIG_INT_DIGITS {
            return Err(CodecError::MalformedInteger(format!(
                "{} digits exceed limit of {MAX_BIG_INT_DIGITS}",
                digits.len()
            )));
        }

        let value = match hex_digits {
            Some(digits) => {
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(malformed());
                }
                Self::parse_hex(digits)
            }
            None => {
                if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed());
                }
                Self::parse_decimal(text)
            }
        };
        Ok(value)
    }

    /// Renders the canonical decimal form.
    pub fn to_text(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut limbs = self.limbs.clone();
        let mut chunks = Vec::new();
        while !limbs.is_empty() {
            chunks.push(div_rem_small(&mut limbs, DECIMAL_BASE));
        }

        let mut out = String::with_capacity(chunks.len() * DECIMAL_CHUNK);
        let mut rest = chunks.iter().rev();
        if let Some(head) = rest.next() {
            let _ = write!(out, "{head}");
        }
        for chunk in rest {
            let _ = write!(out, "{chunk:09}");
        }
        out
    }

    /// Builds a value from big-endian bytes; leading zero bytes are ignored.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs: Vec<u32> = bytes
            .rchunks(4)
            .map(|chunk| chunk.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32))
            .collect();
        trim(&mut limbs);
        Self { limbs }
    }

    /// Returns the value if it fits in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs.as_slice() {
            [] => Some(0),
            [lo] => Some(*lo as u64),
            [lo, hi] => Some(((*hi as u64) << 32) | *lo as u64),
            _ => None,
        }
    }

    fn parse_decimal(digits: &str) -> Self {
        let mut limbs = Vec::with_capacity(digits.len() / DECIMAL_CHUNK + 1);
        let head = digits.len() % DECIMAL_CHUNK;
        let (first, rest) = digits.split_at(head);
        let chunks = std::iter::once(first)
            .filter(|chunk| !chunk.is_empty())
            .chain(rest.as_bytes().chunks(DECIMAL_CHUNK).map(ascii_str));

        for chunk in chunks {
            let scale = 10u32.pow(chunk.len() as u32);
            let value = chunk
                .bytes()
                .fold(0u32, |acc, b| acc * 10 + (b - b'0') as u32);
            mul_add_small(&mut limbs, scale, value);
        }
        trim(&mut limbs);
        Self { limbs }
    }

    fn parse_hex(digits: &str) -> Self {
        let mut limbs: Vec<u32> = digits
            .as_bytes()
            .rchunks(HEX_CHUNK)
            .map(|chunk| {
                chunk.iter().fold(0u32, |acc, &b| {
                    let nibble = (b as char).to_digit(16).unwrap_or(0);
                    (acc << 4) | nibble
                })
            })
            .collect();
        trim(&mut limbs);
        Self { limbs }
    }
}

/// Digits were validated as ASCII before chunking.
fn ascii_str(chunk: &[u8]) -> &str {
    std::str::from_utf8(chunk).unwrap_or_default()
}

/// `limbs = limbs * mul + add`.
fn mul_add_small(limbs: &mut Vec<u32>, mul: u32, add: u32) {
    let mut carry = add as u64;
    for limb in limbs.iter_mut() {
        let value = *limb as u64 * mul as u64 + carry;
        *limb = value as u32;
        carry = value >> 32;
    }
    if carry != 0 {
        limbs.push(carry as u32);
    }
}

/// Divides in place and returns the remainder.
fn div_rem_small(limbs: &mut Vec<u32>, divisor: u32) -> u32 {
    let mut rem = 0u64;
    for limb in limbs.iter_mut().rev() {
        let current = (rem << 32) | *limb as u64;
        *limb = (current / divisor as u64) as u32;
        rem = current % divisor as u64;
    }
    trim(limbs);
    rem as u32
}

fn trim(limbs: &mut Vec<u32>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from(value as u128)
    }
}

impl From<u128> for BigInt {
    fn from(value: u128) -> Self {
        Self::from_be_bytes(&value.to_be_bytes())
    }
}

impl TryFrom<i64> for BigInt {
    type Error = CodecError;

    /// Negative values cannot be represented and are rejected here, so a
    /// negative `BigInt` never exists to be encoded.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from(value as i128)
    }
}

impl TryFrom<i128> for BigInt {
    type Error = CodecError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        u128::try_from(value)
            .map(Self::from)
            .map_err(|_| CodecError::MalformedInteger(value.to_string()))
    }
}

impl CanonicalText for BigInt {
    fn to_canonical(&self) -> String {
        self.to_text()
    }

    fn from_canonical(text: &str) -> Result<Self, CodecError> {
        Self::from_text(text)
    }
}

impl std::str::FromStr for BigInt {
    type Err = CodecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self.to_text())
    }
}

impl_canonical_serde!(BigInt);
impl_text_document!(BigInt);

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> BigInt {
        BigInt::from_text(text).expect("invalid decimal literal")
    }

    #[test]
    fn zero_law() {
        let zero = dec("0");
        assert_eq!(zero, dec("00"));
        assert_eq!(zero, dec("000"));
        assert_eq!(zero.to_text(), "0");
        assert!(zero.is_zero());
        assert_eq!(BigInt::default(), zero);
    }

    #[test]
    fn leading_zeros_are_numeric_noise() {
        assert_eq!(dec("007"), dec("7"));
        assert_eq!(dec("000123").to_text(), "123");
    }

    #[test]
    fn exceeds_u128() {
        let text = "340282366920938463463374607431768211456123456789";
        let value = dec(text);
        assert_eq!(value.to_text(), text);
        assert_eq!(value.to_u64(), None);
    }

    #[test]
    fn chunk_boundaries() {
        for text in ["999999999", "1000000000", "4294967295", "4294967296", "18446744073709551616"] {
            assert_eq!(dec(text).to_text(), text);
        }
    }

    #[test]
    fn hex_prefix_is_recognized() {
        assert_eq!(dec("0xff"), BigInt::from(255u64));
        assert_eq!(dec("0X10000000000000000"), dec("18446744073709551616"));
    }

    #[test]
    fn rejects_signs_and_garbage() {
        for text in ["", "-1", "+1", "12a", " 1", "1.0", "0x", "0xzz", "1_000"] {
            assert!(
                matches!(BigInt::from_text(text), Err(CodecError::MalformedInteger(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn digit_limit_is_exact() {
        let at_limit = "9".repeat(MAX_BIG_INT_DIGITS);
        assert_eq!(dec(&at_limit).to_text(), at_limit);
        let over = "9".repeat(MAX_BIG_INT_DIGITS + 1);
        assert!(matches!(
            BigInt::from_text(&over),
            Err(CodecError::MalformedInteger(_))
        ));
    }

    #[test]
    fn hex_digit_limit_excludes_prefix() {
        let at_limit = format!("0x{}", "f".repeat(MAX_BIG_INT_DIGITS));
        assert!(BigInt::from_text(&at_limit).is_ok());
        let over = format!("0X{}", "f".repeat(MAX_BIG_INT_DIGITS + 1));
        assert!(matches!(
            BigInt::from_text(&over),
            Err(CodecError::MalformedInteger(_))
        ));
    }

    #[test]
    fn negative_literals_fail_at_construction() {
        assert!(BigInt::try_from(-1i64).is_err());
        assert_eq!(BigInt::try_from(100i64).unwrap(), BigInt::from(100u64));
        assert_eq!(BigInt::try_from(i128::MAX).unwrap().to_text(), i128::MAX.to_string());
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(dec("9") < dec("10"));
        assert!(dec("18446744073709551616") > dec("18446744073709551615"));
        assert_eq!(dec("0042").cmp(&dec("42")), Ordering::Equal);
    }

    #[test]
    fn byte_views() {
        let value = BigInt::from_be_bytes(&[0, 0, 1, 0]);
        assert_eq!(value, BigInt::from(256u64));
        assert!(BigInt::from_be_bytes(&[0, 0, 0]).is_zero());
        assert_eq!(BigInt::from(u64::MAX).to_u64(), Some(u64::MAX));
    }
}
