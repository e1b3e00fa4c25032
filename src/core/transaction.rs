//! Transaction record.

use crate::types::address::Address;
use crate::types::big_int::BigInt;
use crate::types::blob::Blob;
use crate::types::document::Record;
use crate::types::hash::Hash;

/// A transaction as reported by an Ethereum node.
#[derive(Clone, Debug, PartialEq, Eq, Record)]
pub struct Transaction {
    /// Block that included the transaction
    pub block_hash: Hash,
    /// Call data or contract init code
    #[record(rename = "input")]
    pub data: Blob,
    #[record(rename = "maxFeePerGas")]
    pub gas_fee_cap: BigInt,
    #[record(rename = "maxPriorityFeePerGas")]
    pub gas_tip_cap: BigInt,
    pub gas_price: BigInt,
    pub hash: Hash,
    /// Recipient; `None` for contract creation, encoded as `null`
    pub to: Option<Address>,
    pub from: Address,
    /// EIP-2718 envelope type
    #[record(rename = "type")]
    pub tx_type: u8,
}

impl Transaction {
    /// Returns `true` if the transaction deploys a contract.
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::error::CodecError;
    use crate::utils::test_utils::utils::{random_address, sample_transaction};

    #[test]
    fn transfer_round_trip() {
        let to = random_address();
        let tx = sample_transaction(Some(to));
        let decoded = Transaction::deserialize(&tx.serialize()).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded.to, Some(to));
        assert!(!decoded.is_contract_creation());
    }

    #[test]
    fn contract_creation_keeps_absent_recipient() {
        let tx = sample_transaction(None);
        let bytes = tx.serialize();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains(r#""to":null"#));

        let decoded = Transaction::deserialize(&bytes).unwrap();
        assert_eq!(decoded.to, None);
        assert!(decoded.is_contract_creation());
        assert_eq!(decoded, tx);
    }

    #[test]
    fn zero_address_is_not_absent() {
        let tx = sample_transaction(Some(Address::zero()));
        let decoded = Transaction::deserialize(&tx.serialize()).unwrap();
        assert_eq!(decoded.to, Some(Address::zero()));
    }

    #[test]
    fn recipient_of_wrong_shape() {
        let tx = sample_transaction(None);
        let text = String::from_utf8(tx.serialize())
            .unwrap()
            .replace(r#""to":null"#, r#""to":42"#);
        let err = Transaction::deserialize(text.as_bytes()).unwrap_err();
        assert_eq!(err.field_path(), ["to"]);
        assert_eq!(err.root_cause(), &CodecError::UnknownFieldShape { found: "number" });
    }

    #[test]
    fn type_out_of_range() {
        let tx = sample_transaction(None);
        let text = String::from_utf8(tx.serialize())
            .unwrap()
            .replace(r#""type":2"#, r#""type":300"#);
        let err = Transaction::deserialize(text.as_bytes()).unwrap_err();
        assert!(matches!(err.root_cause(), CodecError::MalformedInteger(_)));
    }

    #[test]
    fn oversized_document_rejected_before_parsing() {
        use crate::config::DecodeLimits;

        let bytes = sample_transaction(None).serialize();
        let limits = DecodeLimits::default().with_max_document_bytes(16);
        let err = Transaction::deserialize_with_limits(&bytes, &limits).unwrap_err();
        assert_eq!(
            err,
            CodecError::DocumentTooLarge {
                size: bytes.len(),
                limit: 16
            }
        );
    }
}
