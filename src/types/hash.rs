//! 32-byte hash identifiers (block, transaction and state roots).

use crate::types::fixed_bytes::fixed_width_type;

/// Hash length in bytes.
pub const HASH_LEN: usize = 32;

fixed_width_type!(
    /// Fixed-size 32-byte hash used for block, transaction and trie roots.
    ///
    /// This type is `Copy`: hashes are passed around constantly while
    /// building and comparing records and fit comfortably on the stack.
    Hash,
    HASH_LEN
);
