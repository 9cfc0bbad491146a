//! Byte-level classification of a raw config blob.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//! 1. zero-length input is [`FormatClass::Empty`]
//! 2. a gzip stream is decompressed once and the rules below (and the
//!    empty rule) are applied to the expanded bytes
//! 3. a first line of `#cloud-config` is [`FormatClass::CloudConfig`]
//! 4. a leading `#!` is [`FormatClass::Script`]
//! 5. everything else is a [`FormatClass::JsonCandidate`]
//!
//! Decompression has no size limit; callers that accept untrusted input
//! must cap it themselves.

use std::borrow::Cow;
use std::io::Read;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Leading bytes of every gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Header line that marks a cloud-init document.
const CLOUD_CONFIG_HEADER: &[u8] = b"#cloud-config";

/// Prefix that marks an interpreter script.
const SHEBANG: &[u8] = b"#!";

/// What kind of document a blob is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatClass {
    /// No bytes at all.
    Empty,
    /// A cloud-init document.
    CloudConfig,
    /// A shebang script.
    Script,
    /// Possibly JSON; the version resolver decides.
    JsonCandidate,
}

impl std::fmt::Display for FormatClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::CloudConfig => write!(f, "cloud-config"),
            Self::Script => write!(f, "script"),
            Self::JsonCandidate => write!(f, "json"),
        }
    }
}

/// Result of sniffing: the class plus the bytes later stages should read.
#[derive(Debug)]
pub struct Sniffed<'a> {
    /// Classification of the (possibly decompressed) content.
    pub class: FormatClass,
    /// Content to hand to the next stage. Borrowed unless decompressed.
    pub content: Cow<'a, [u8]>,
}

impl Sniffed<'_> {
    /// Whether the content was expanded from a gzip stream.
    #[must_use]
    pub fn was_compressed(&self) -> bool {
        matches!(self.content, Cow::Owned(_))
    }
}

type Rule = (fn(&[u8]) -> bool, FormatClass);

/// Ordered classification rules, applied after decompression.
const RULES: &[Rule] = &[
    (<[u8]>::is_empty, FormatClass::Empty),
    (is_cloud_config, FormatClass::CloudConfig),
    (is_script, FormatClass::Script),
];

/// Classify `blob`, decompressing it first when it is gzipped.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if the blob carries the gzip magic but
/// is not a valid gzip stream.
pub fn sniff(blob: &[u8]) -> ConfigResult<Sniffed<'_>> {
    if blob.is_empty() {
        debug!("config blob is empty");
        return Ok(Sniffed {
            class: FormatClass::Empty,
            content: Cow::Borrowed(blob),
        });
    }

    let content = if is_gzip(blob) {
        let expanded = decompress(blob)?;
        debug!(
            compressed = blob.len(),
            expanded = expanded.len(),
            "decompressed gzipped config"
        );
        Cow::Owned(expanded)
    } else {
        Cow::Borrowed(blob)
    };

    let class = classify(&content);
    debug!(class = %class, "sniffed config format");
    Ok(Sniffed { class, content })
}

/// Apply the ordered rules to already-decompressed bytes.
#[must_use]
pub fn classify(content: &[u8]) -> FormatClass {
    RULES
        .iter()
        .find(|(matches, _)| matches(content))
        .map_or(FormatClass::JsonCandidate, |(_, class)| *class)
}

/// Whether `blob` starts with the gzip magic bytes.
#[must_use]
pub fn is_gzip(blob: &[u8]) -> bool {
    blob.starts_with(&GZIP_MAGIC)
}

fn is_cloud_config(content: &[u8]) -> bool {
    content
        .split(|&b| b == b'\n')
        .next()
        .is_some_and(|header| header.trim_ascii_end() == CLOUD_CONFIG_HEADER)
}

fn is_script(content: &[u8]) -> bool {
    content.starts_with(SHEBANG)
}

fn decompress(blob: &[u8]) -> ConfigResult<Vec<u8>> {
    let mut expanded = Vec::new();
    GzDecoder::new(blob)
        .read_to_end(&mut expanded)
        .map_err(|e| ConfigError::Invalid {
            reason: format!("failed to decompress gzipped config: {e}"),
            position: None,
        })?;
    Ok(expanded)
}
