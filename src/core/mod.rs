//! Chain data records.
//!
//! Each record is a flat aggregation of primitive, sequence and nested record
//! fields, encoded through `#[derive(Record)]` with Ethereum JSON-RPC field
//! names:
//! - `BlockHeader`: block metadata and trie roots
//! - `Transaction`: a signed transaction as reported by a node
//! - `Receipt`: execution outcome of a transaction, carrying its `Log`s
//! - `Log`: an event emitted during execution

pub mod block;
pub mod log;
pub mod receipt;
pub mod transaction;
