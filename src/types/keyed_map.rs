//! Mappings keyed by primitive values.
//!
//! Object keys in an interchange document must be strings, while the natural
//! keys of chain data (hashes, addresses, block numbers) are typed values.
//! Any [`CanonicalText`] type can key a `HashMap` or `BTreeMap`: keys are
//! written as their canonical text and parsed back with the type's decoder.
//!
//! Decoding is strict. Key texts that decode to the same typed key, such as
//! `"0x1"` and `"0x01"` for a hash or `"7"` and `"07"` for a big integer, are
//! rejected with `DuplicateKey` rather than letting one entry win.

use crate::config::DecodeLimits;
use crate::types::canonical::CanonicalText;
use crate::types::document::{Document, DocumentValue};
use crate::types::error::CodecError;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Map types whose keys encode through [`CanonicalText`].
pub trait Mapping: DocumentValue {}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: CanonicalText + Eq + Hash,
    V: DocumentValue,
    S: BuildHasher + Default,
{
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: CanonicalText + Ord,
    V: DocumentValue,
{
}

/// Encodes a mapping as a JSON object, entries sorted by key text.
pub fn encode_mapping<M: Mapping>(mapping: &M) -> String {
    mapping.to_document().to_text()
}

/// Decodes a JSON object into a mapping with typed keys.
pub fn decode_mapping<M: Mapping>(text: &str) -> Result<M, CodecError> {
    let document = Document::parse(text.as_bytes(), &DecodeLimits::default())?;
    M::from_document(&document)
}

fn encode_entries<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Document
where
    K: CanonicalText + 'a,
    V: DocumentValue + 'a,
{
    let mut pairs: Vec<(String, Document)> = entries
        .map(|(key, value)| (key.to_canonical(), value.to_document()))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    Document::Object(pairs)
}

/// Feeds decoded entries to `insert`, which returns `false` if the key was already present.
fn decode_entries<K, V>(
    document: &Document,
    mut insert: impl FnMut(K, V) -> bool,
) -> Result<(), CodecError>
where
    K: CanonicalText,
    V: DocumentValue,
{
    for (text, value) in document.as_object()? {
        let key = K::from_canonical(text)?;
        let value = V::from_document(value)?;
        if !insert(key, value) {
            return Err(CodecError::DuplicateKey(text.clone()));
        }
    }
    Ok(())
}

impl<K, V, S> DocumentValue for HashMap<K, V, S>
where
    K: CanonicalText + Eq + Hash,
    V: DocumentValue,
    S: BuildHasher + Default,
{
    const SHAPE: &'static str = "object";

    fn to_document(&self) -> Document {
        encode_entries(self.iter())
    }

    fn from_document(document: &Document) -> Result<Self, CodecError> {
        let mut map = HashMap::with_hasher(S::default());
        decode_entries(document, |key, value| map.insert(key, value).is_none())?;
        Ok(map)
    }
}

impl<K, V> DocumentValue for BTreeMap<K, V>
where
    K: CanonicalText + Ord,
    V: DocumentValue,
{
    const SHAPE: &'static str = "object";

    fn to_document(&self) -> Document {
        encode_entries(self.iter())
    }

    fn from_document(document: &Document) -> Result<Self, CodecError> {
        let mut map = BTreeMap::new();
        decode_entries(document, |key, value| map.insert(key, value).is_none())?;
        Ok(map)
    }
}

/// Strict keyed-map support for serde-derived structs.
///
/// Primitive-keyed maps already work with plain serde, but serde map
/// deserialization lets a repeated key overwrite the earlier one. Use this
/// module to get the `DuplicateKey` check:
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Snapshot {
///     #[serde(with = "chain_codec::types::keyed_map::serde_strict")]
///     balances: HashMap<Address, BigInt>,
/// }
/// ```
pub mod serde_strict {
    use super::Mapping;
    use crate::types::document::Document;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<M: Mapping, S: Serializer>(mapping: &M, serializer: S) -> Result<S::Ok, S::Error> {
        mapping.to_document().serialize(serializer)
    }

    pub fn deserialize<'de, M: Mapping, D: Deserializer<'de>>(deserializer: D) -> Result<M, D::Error> {
        let document = Document::deserialize(deserializer)?;
        M::from_document(&document).map_err(serde::de::Error::custom)
    }
}
