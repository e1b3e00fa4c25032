//! Block header record.

use crate::types::address::Address;
use crate::types::big_int::BigInt;
use crate::types::blob::Blob;
use crate::types::document::Record;
use crate::types::hash::Hash;
use crate::types::nonce::BlockNonce;

/// Block header as reported by an Ethereum node.
///
/// The codec enforces no relation between fields; every field round-trips
/// independently.
#[derive(Clone, Debug, PartialEq, Eq, Record)]
pub struct BlockHeader {
    /// Hash of the parent block
    pub parent_hash: Hash,
    /// Hash of the uncle list
    #[record(rename = "sha3Uncles")]
    pub uncle_hash: Hash,
    /// Beneficiary of the block reward
    #[record(rename = "miner")]
    pub coinbase: Address,
    /// State trie root after executing the block
    #[record(rename = "stateRoot")]
    pub root: Hash,
    #[record(rename = "transactionsRoot")]
    pub transaction_hash: Hash,
    #[record(rename = "receiptsRoot")]
    pub receipt_hash: Hash,
    /// Bloom filter over the block's logs
    #[record(rename = "logsBloom")]
    pub bloom: Blob,
    pub difficulty: BigInt,
    pub number: BigInt,
    pub gas_limit: BigInt,
    pub gas_used: BigInt,
    /// Unix timestamp in seconds
    #[record(rename = "timestamp")]
    pub time: u64,
    #[record(rename = "extraData")]
    pub extra: Blob,
    #[record(rename = "mixHash")]
    pub mix_digest: Hash,
    pub nonce: BlockNonce,
    /// EIP-1559 base fee per gas
    #[record(rename = "baseFeePerGas")]
    pub base_fee: BigInt,
}
