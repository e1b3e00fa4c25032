//! Document model and the per-type document codec.
//!
//! Every value crosses the interchange boundary as a [`Document`]: a JSON
//! tree whose objects keep their entries in order and keep repeated keys, so
//! that decoders can reject duplicates instead of silently keeping one.
//!
//! # Shapes
//!
//! - Primitives (hash, address, nonce, big integer, blob): string
//! - Unsigned scalars: number
//! - `bool`: boolean
//! - `Vec<T>`: array, order preserved
//! - `Option<T>`: the value, or `null` when absent
//! - Maps keyed by primitives: object keyed by canonical text (see `keyed_map`)
//! - Records: object keyed by field name, in declaration order

use crate::config::DecodeLimits;
use crate::types::error::CodecError;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::fmt;

pub use chain_codec_derive::Record;

/// Maximum number of elements accepted in a decoded sequence.
///
/// Checked on the parsed array, so the memory it takes is bounded by
/// `DecodeLimits::max_document_bytes` rather than by this cap.
pub const MAX_SEQUENCE_LEN: usize = 1_000_000;

/// A parsed or to-be-written interchange document.
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Document>),
    /// Entries in document order; repeated keys are kept.
    Object(Vec<(String, Document)>),
}

impl Document {
    /// Name of the document shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Null => "null",
            Document::Bool(_) => "boolean",
            Document::Number(_) => "number",
            Document::String(_) => "string",
            Document::Array(_) => "array",
            Document::Object(_) => "object",
        }
    }

    /// Returns the entries of an object document.
    pub fn as_object(&self) -> Result<&[(String, Document)], CodecError> {
        match self {
            Document::Object(entries) => Ok(entries),
            other => Err(CodecError::TypeMismatch {
                expected: "object",
                found: other.kind(),
            }),
        }
    }

    /// Writes the document as compact JSON.
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("documents have string keys and finite numbers")
    }

    /// Writes the document as a compact JSON string.
    pub fn to_text(&self) -> String {
        serde_json::to_string(self).expect("documents have string keys and finite numbers")
    }

    /// Parses JSON bytes, enforcing the size limit before parsing.
    pub fn parse(bytes: &[u8], limits: &DecodeLimits) -> Result<Document, CodecError> {
        if bytes.len() > limits.max_document_bytes {
            crate::error!(
                "refusing {}-byte document (limit {} bytes)",
                bytes.len(),
                limits.max_document_bytes
            );
            return Err(CodecError::DocumentTooLarge {
                size: bytes.len(),
                limit: limits.max_document_bytes,
            });
        }
        serde_json::from_slice(bytes).map_err(|e| CodecError::InvalidDocument(e.to_string()))
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Bool(b) => serializer.serialize_bool(*b),
            Document::Number(n) => n.serialize(serializer),
            Document::String(s) => serializer.serialize_str(s),
            Document::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Document::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Document, D::Error> {
        Document::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Document, E> {
        Ok(Document::Bool(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Document, E> {
        Ok(Document::Number(v.into()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Document, E> {
        Ok(Document::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Document, E> {
        Number::from_f64(v)
            .map(Document::Number)
            .ok_or_else(|| E::custom("non-finite number"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Document, E> {
        Ok(Document::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Document, E> {
        Ok(Document::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Document, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(1024));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Document::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Document, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0).min(1024));
        while let Some(entry) = map.next_entry::<String, Document>()? {
            entries.push(entry);
        }
        Ok(Document::Object(entries))
    }
}

/// Per-type encoding into and decoding from a [`Document`].
pub trait DocumentValue: Sized {
    /// Kind of document this type encodes to, as reported by [`Document::kind`].
    const SHAPE: &'static str;

    fn to_document(&self) -> Document;

    fn from_document(document: &Document) -> Result<Self, CodecError>;
}

/// A composite record with a fixed set of named fields.
///
/// Implemented through `#[derive(Record)]`. The byte form is the compact JSON
/// text of the record's object document, with fields in declaration order.
pub trait Record: DocumentValue {
    /// Type name reported in errors and logs.
    const NAME: &'static str;

    /// Encodes the record as canonical document bytes.
    fn serialize(&self) -> Vec<u8> {
        self.to_document().to_bytes()
    }

    /// Decodes a record under the default [`DecodeLimits`].
    fn deserialize(bytes: &[u8]) -> Result<Self, CodecError> {
        Self::deserialize_with_limits(bytes, &DecodeLimits::default())
    }

    /// Decodes a record; either every field decodes or the whole record is rejected.
    fn deserialize_with_limits(bytes: &[u8], limits: &DecodeLimits) -> Result<Self, CodecError> {
        Document::parse(bytes, limits)
            .and_then(|document| Self::from_document(&document))
            .inspect_err(|err| crate::warn!("rejected {} document: {}", Self::NAME, err))
    }
}

/// Decodes the field `field` of `record` from an object's entries.
///
/// Used by `#[derive(Record)]`. Failures are wrapped with the record and
/// field name; a field that appears twice is a `DuplicateKey`.
pub fn read_field<T: DocumentValue>(
    entries: &[(String, Document)],
    record: &'static str,
    field: &'static str,
) -> Result<T, CodecError> {
    let mut found = entries.iter().filter(|(key, _)| key == field);
    let Some((_, value)) = found.next() else {
        return Err(CodecError::MissingField { record, field });
    };

    let result = if found.next().is_some() {
        Err(CodecError::DuplicateKey(field.to_string()))
    } else {
        T::from_document(value)
    };
    result.map_err(|source| CodecError::Field {
        record,
        field,
        source: Box::new(source),
    })
}

/// Decodes a primitive from its string shape.
pub(crate) fn text_from_document<T: crate::types::canonical::CanonicalText>(
    document: &Document,
) -> Result<T, CodecError> {
    match document {
        Document::String(text) => T::from_canonical(text),
        other => Err(CodecError::TypeMismatch {
            expected: "string",
            found: other.kind(),
        }),
    }
}

/// Implements [`DocumentValue`] as a string holding the canonical text.
macro_rules! impl_text_document {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::types::document::DocumentValue for $t {
                const SHAPE: &'static str = "string";

                fn to_document(&self) -> $crate::types::document::Document {
                    $crate::types::document::Document::String(
                        $crate::types::canonical::CanonicalText::to_canonical(self),
                    )
                }

                fn from_document(
                    document: &$crate::types::document::Document,
                ) -> Result<Self, $crate::types::error::CodecError> {
                    $crate::types::document::text_from_document(document)
                }
            }
        )*
    };
}

pub(crate) use impl_text_document;

// Unsigned scalars
macro_rules! impl_uint_document {
    ($($t:ty),*) => {
        $(
            impl DocumentValue for $t {
                const SHAPE: &'static str = "number";

                fn to_document(&self) -> Document {
                    Document::Number(Number::from(*self))
                }

                fn from_document(document: &Document) -> Result<Self, CodecError> {
                    match document {
                        Document::Number(n) => n
                            .as_u64()
                            .and_then(|v| <$t>::try_from(v).ok())
                            .ok_or_else(|| CodecError::MalformedInteger(n.to_string())),
                        other => Err(CodecError::TypeMismatch {
                            expected: "number",
                            found: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_uint_document!(u8, u16, u32, u64);

impl DocumentValue for bool {
    const SHAPE: &'static str = "boolean";

    fn to_document(&self) -> Document {
        Document::Bool(*self)
    }

    fn from_document(document: &Document) -> Result<Self, CodecError> {
        match document {
            Document::Bool(b) => Ok(*b),
            other => Err(CodecError::TypeMismatch {
                expected: "boolean",
                found: other.kind(),
            }),
        }
    }
}

impl<T: DocumentValue> DocumentValue for Vec<T> {
    const SHAPE: &'static str = "array";

    fn to_document(&self) -> Document {
        Document::Array(self.iter().map(DocumentValue::to_document).collect())
    }

    fn from_document(document: &Document) -> Result<Self, CodecError> {
        let Document::Array(items) = document else {
            return Err(CodecError::TypeMismatch {
                expected: "array",
                found: document.kind(),
            });
        };
        if items.len() > MAX_SEQUENCE_LEN {
            return Err(CodecError::SequenceTooLong {
                len: items.len(),
                limit: MAX_SEQUENCE_LEN,
            });
        }
        items.iter().map(T::from_document).collect()
    }
}

// `null` is the absence marker; any other shape than the inner type's is
// neither a value nor absence. Mismatches nested inside the value are the
// inner type's own errors.
impl<T: DocumentValue> DocumentValue for Option<T> {
    const SHAPE: &'static str = T::SHAPE;

    fn to_document(&self) -> Document {
        match self {
            None => Document::Null,
            Some(value) => value.to_document(),
        }
    }

    fn from_document(document: &Document) -> Result<Self, CodecError> {
        match document {
            Document::Null => Ok(None),
            other if other.kind() != T::SHAPE => Err(CodecError::UnknownFieldShape {
                found: other.kind(),
            }),
            other => T::from_document(other).map(Some),
        }
    }
}
