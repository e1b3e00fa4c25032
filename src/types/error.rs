//! Decode errors shared by every codec in the crate.

use chain_codec_derive::Error;

/// Reasons a canonical text value or a document can be rejected.
///
/// Encoding never fails; every variant describes input that could not be
/// turned into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Non-hex characters, odd digit count or a misplaced `0x` prefix.
    #[error("malformed hex: {0:?}")]
    MalformedHex(String),
    /// More hex digits than a fixed-width value can hold.
    #[error("{digits} hex digits overflow a {width}-byte value")]
    WidthOverflow { width: usize, digits: usize },
    /// Sign, non-digit character, empty input or a value out of range.
    #[error("malformed integer: {0:?}")]
    MalformedInteger(String),
    /// Two entries canonicalize to the same key.
    #[error("duplicate key {0:?}")]
    DuplicateKey(String),
    /// A record field is not present in the document.
    #[error("{record} is missing field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    /// A value has the wrong document shape.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// An optional slot holds neither a value nor the `null` absence marker.
    #[error("expected a value or null, found {found}")]
    UnknownFieldShape { found: &'static str },
    /// A record field failed to decode.
    #[error("{record}.{field}: {source}")]
    Field {
        record: &'static str,
        field: &'static str,
        source: Box<CodecError>,
    },
    /// The input bytes are not a well-formed document.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    /// The input exceeds the configured document size.
    #[error("document of {size} bytes exceeds limit of {limit} bytes")]
    DocumentTooLarge { size: usize, limit: usize },
    /// A sequence holds more elements than allowed.
    #[error("sequence of {len} elements exceeds limit of {limit}")]
    SequenceTooLong { len: usize, limit: usize },
}

impl CodecError {
    /// Returns the innermost error, unwrapping any field context.
    pub fn root_cause(&self) -> &CodecError {
        match self {
            CodecError::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the `record.field` path leading to the innermost error.
    pub fn field_path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        let mut current = self;
        while let CodecError::Field {
            field, source, ..
        } = current
        {
            path.push(*field);
            current = source;
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CodecError::WidthOverflow {
                width: 32,
                digits: 65
            }
            .to_string(),
            "65 hex digits overflow a 32-byte value"
        );
        assert_eq!(
            CodecError::MalformedHex("zz".into()).to_string(),
            "malformed hex: \"zz\""
        );
        assert_eq!(
            CodecError::MissingField {
                record: "Log",
                field: "topics"
            }
            .to_string(),
            "Log is missing field `topics`"
        );
    }

    #[test]
    fn field_context_unwraps_to_root_cause() {
        let err = CodecError::Field {
            record: "Receipt",
            field: "logs",
            source: Box::new(CodecError::Field {
                record: "Log",
                field: "data",
                source: Box::new(CodecError::MalformedHex("0xabc".into())),
            }),
        };
        assert_eq!(err.root_cause(), &CodecError::MalformedHex("0xabc".into()));
        assert_eq!(err.field_path(), vec!["logs", "data"]);
        assert_eq!(err.to_string(), "Receipt.logs: Log.data: malformed hex: \"0xabc\"");
    }
}
