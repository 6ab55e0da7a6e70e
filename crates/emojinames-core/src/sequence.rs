//! Code point sequences and the collections keyed by them

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::codepoint::EMOJI_VS;

/// An ordered, immutable run of Unicode code points denoting one emoji
///
/// The canonical form (as supplied by the metadata provider) is the lookup
/// key for every table in the system, so equality is plain element-wise
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodePointSequence(Vec<u32>);

/// Maps an alias sequence to the canonical sequence it stands for
pub type AliasMap = BTreeMap<CodePointSequence, CodePointSequence>;

/// Sequences omitted from the catalog entirely
pub type ExclusionSet = BTreeSet<CodePointSequence>;

/// Maps a canonical sequence to the base name of its image file
pub type ImageMap = BTreeMap<CodePointSequence, String>;

/// A category label and its member sequences, in metadata order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiGroup {
    pub name: String,
    pub members: Vec<CodePointSequence>,
}

impl EmojiGroup {
    pub fn new(name: impl Into<String>, members: Vec<CodePointSequence>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

impl CodePointSequence {
    /// Create a sequence from code points
    pub fn new(cps: impl Into<Vec<u32>>) -> Self {
        Self(cps.into())
    }

    /// Borrow the code points
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First code point, if any
    pub fn first(&self) -> Option<u32> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.0.contains(&cp)
    }

    /// Build a new sequence keeping only the code points that match
    pub fn retain(&self, mut keep: impl FnMut(u32) -> bool) -> Self {
        Self(self.0.iter().copied().filter(|&cp| keep(cp)).collect())
    }

    /// Drop every emoji variation selector
    pub fn without_variation_selectors(&self) -> Self {
        self.retain(|cp| cp != EMOJI_VS)
    }

    /// Parse the underscore separated hex form used by image and alias files
    ///
    /// ```
    /// use emojinames_core::CodePointSequence;
    ///
    /// let seq = CodePointSequence::parse_hex("1f468_200d_2764").unwrap();
    /// assert_eq!(seq.as_slice(), &[0x1F468, 0x200D, 0x2764]);
    /// ```
    pub fn parse_hex(text: &str) -> Result<Self, SequenceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SequenceError::Empty);
        }

        text.split('_')
            .map(parse_codepoint)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Render as underscore separated lower-case hex
    pub fn to_hex(&self) -> String {
        self.0
            .iter()
            .map(|cp| format!("{:x}", cp))
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Render as underscore separated hex, each code point at least four digits
    pub fn to_padded_hex(&self) -> String {
        self.0
            .iter()
            .map(|cp| format!("{:04x}", cp))
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Encode as concatenated numeric character references, omitting VS16
    ///
    /// ```
    /// use emojinames_core::CodePointSequence;
    ///
    /// let seq = CodePointSequence::new(vec![0x2764, 0xFE0F]);
    /// assert_eq!(seq.to_char_refs(), "&#x2764;");
    /// ```
    pub fn to_char_refs(&self) -> String {
        self.0
            .iter()
            .filter(|&&cp| cp != EMOJI_VS)
            .map(|cp| format!("&#x{:x};", cp))
            .collect()
    }

    /// Decode a string produced by [`CodePointSequence::to_char_refs`]
    pub fn from_char_refs(text: &str) -> Result<Self, SequenceError> {
        let mut cps = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            let body = rest
                .strip_prefix("&#x")
                .ok_or_else(|| SequenceError::MalformedReference(rest.to_string()))?;
            let end = body
                .find(';')
                .ok_or_else(|| SequenceError::MalformedReference(rest.to_string()))?;
            cps.push(parse_codepoint(&body[..end])?);
            rest = &body[end + 1..];
        }

        if cps.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self(cps))
    }
}

fn parse_codepoint(hex: &str) -> Result<u32, SequenceError> {
    let cp = u32::from_str_radix(hex, 16)
        .map_err(|_| SequenceError::InvalidHex(hex.to_string()))?;
    if cp > 0x10FFFF {
        return Err(SequenceError::OutOfRange(cp));
    }
    Ok(cp)
}

impl std::fmt::Display for CodePointSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<&[u32]> for CodePointSequence {
    fn from(cps: &[u32]) -> Self {
        Self(cps.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for CodePointSequence {
    fn from(cps: [u32; N]) -> Self {
        Self(cps.to_vec())
    }
}

/// Sequence parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("Empty sequence")]
    Empty,

    #[error("Invalid hex code point: '{0}'")]
    InvalidHex(String),

    #[error("Code point out of range: {0:#x}")]
    OutOfRange(u32),

    #[error("Malformed character reference at '{0}'")]
    MalformedReference(String),
}
