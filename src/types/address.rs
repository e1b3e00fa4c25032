//! 20-byte account addresses.

use crate::types::fixed_bytes::fixed_width_type;

/// Address length in bytes.
pub const ADDRESS_LEN: usize = 20;

fixed_width_type!(
    /// Fixed-size 20-byte address identifying accounts and contracts.
    ///
    /// No checksum casing is applied: input of any case is accepted and the
    /// canonical form is lowercase.
    Address,
    ADDRESS_LEN
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::error::CodecError;

    #[test]
    fn checksum_case_is_ignored() {
        let mixed = Address::from_hex("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap();
        let lower = Address::from_hex("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(mixed, lower);
        assert_eq!(mixed.to_hex(), "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
    }

    #[test]
    fn forty_one_digits_overflow() {
        assert!(matches!(
            Address::from_hex(&"f".repeat(41)),
            Err(CodecError::WidthOverflow { width: ADDRESS_LEN, .. })
        ));
    }

    #[test]
    fn short_address_is_padded() {
        let addr = Address::from_hex("0xdead").unwrap();
        assert_eq!(addr.to_hex(), format!("0x{}dead", "0".repeat(36)));
    }
}
