//! Decode limits.
//!
//! The document size limit is checked before any parsing, so it bounds every
//! allocation made while decoding. Hard caps that never vary per caller live
//! next to the codec they bound (`MAX_SEQUENCE_LEN`, `MAX_BIG_INT_DIGITS`) and
//! apply to values that already fit within that limit.

/// Default upper bound on a single document: 16 MiB.
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 16 * 1024 * 1024;

/// Environment variable overriding [`DecodeLimits::max_document_bytes`].
pub const MAX_DOCUMENT_BYTES_ENV: &str = "CHAIN_CODEC_MAX_DOCUMENT_BYTES";

/// Caller-tunable bounds applied when decoding documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Largest document, in bytes, that will be parsed.
    pub max_document_bytes: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

impl DecodeLimits {
    /// Reads limits from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads limits through `lookup`; unparsable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut limits = Self::default();
        if let Some(raw) = lookup(MAX_DOCUMENT_BYTES_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(bytes) if bytes > 0 => {
                    crate::info!("{MAX_DOCUMENT_BYTES_ENV} set, documents limited to {bytes} bytes");
                    limits.max_document_bytes = bytes;
                }
                _ => crate::warn!(
                    "ignoring {MAX_DOCUMENT_BYTES_ENV}={raw:?}, using {} bytes",
                    limits.max_document_bytes
                ),
            }
        }
        limits
    }

    pub fn with_max_document_bytes(mut self, bytes: usize) -> Self {
        self.max_document_bytes = bytes;
        self
    }
}
