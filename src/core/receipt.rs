//! Transaction receipt record.

use crate::core::log::Log;
use crate::types::address::Address;
use crate::types::big_int::BigInt;
use crate::types::blob::Blob;
use crate::types::document::Record;
use crate::types::hash::Hash;

/// Execution outcome of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Record)]
pub struct Receipt {
    #[record(rename = "type")]
    pub receipt_type: u8,
    /// Pre-Byzantium intermediate state root; empty afterwards
    #[record(rename = "root")]
    pub post_state: Blob,
    /// 1 on success, 0 on failure
    pub status: u64,
    pub cumulative_gas_used: u64,
    #[record(rename = "logsBloom")]
    pub bloom: Blob,
    pub logs: Vec<Log>,
    pub transaction_hash: Hash,
    /// Deployed contract, zero when the transaction was not a creation
    pub contract_address: Address,
    pub gas_used: BigInt,
    pub block_hash: Hash,
    pub block_number: BigInt,
    pub transaction_index: u64,
}

impl Receipt {
    pub fn succeeded(&self) -> bool {
        self.status == 1
    }
}
