//! Event log record.

use crate::types::address::Address;
use crate::types::big_int::BigInt;
use crate::types::blob::Blob;
use crate::types::document::Record;
use crate::types::hash::Hash;

/// An event emitted by a contract during execution.
#[derive(Clone, Debug, PartialEq, Eq, Record)]
pub struct Log {
    /// Emitting contract
    pub address: Address,
    /// Indexed event arguments; order is significant
    pub topics: Vec<Hash>,
    pub data: Blob,
    pub block_number: BigInt,
    #[record(rename = "transactionHash")]
    pub tx_hash: Hash,
    #[record(rename = "transactionIndex")]
    pub tx_index: BigInt,
    pub block_hash: Hash,
    #[record(rename = "logIndex")]
    pub index: BigInt,
    /// Set when a chain reorganisation dropped the log
    pub removed: bool,
}
