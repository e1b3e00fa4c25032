//! 8-byte proof-of-work block nonce.

use crate::types::fixed_bytes::fixed_width_type;

/// Block nonce length in bytes.
pub const NONCE_LEN: usize = 8;

fixed_width_type!(
    /// Fixed-size 8-byte nonce carried in block headers.
    BlockNonce,
    NONCE_LEN
);

impl BlockNonce {
    /// Returns the nonce as a big-endian integer.
    pub fn to_u64(&self) -> u64 {
        u64::from_be_bytes(*self.as_bytes())
    }
}

impl From<u64> for BlockNonce {
    fn from(value: u64) -> Self {
        Self::from(value.to_be_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_bytes_keep_their_position() {
        let nonce = BlockNonce::from([1, 2, 3, 0, 0, 0, 0, 0]);
        assert_eq!(nonce.to_hex(), "0x0102030000000000");
        assert_eq!(BlockNonce::from_hex("0x0102030000000000").unwrap(), nonce);
    }

    #[test]
    fn integer_view_is_big_endian() {
        let nonce = BlockNonce::from(0x42u64);
        assert_eq!(nonce.to_hex(), "0x0000000000000042");
        assert_eq!(nonce.to_u64(), 0x42);
        assert_eq!(BlockNonce::from_hex("0x42").unwrap(), nonce);
    }
}
