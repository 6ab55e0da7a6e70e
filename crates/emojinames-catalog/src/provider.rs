//! Provider traits for emoji metadata and image catalogs

use emojinames_core::codepoint;
use emojinames_core::{AliasMap, CodePointSequence, EmojiGroup, ExclusionSet, ImageMap};

/// Errors that can occur while loading provider data
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("{path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("{0} is not a directory")]
    DirectoryNotFound(String),
}

impl ProviderError {
    pub(crate) fn io(path: impl std::fmt::Display, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn parse(path: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_string(),
            line,
            message: message.into(),
        }
    }
}

/// Read-only view of Unicode emoji metadata
///
/// Group order and member order are significant: the catalog is emitted in
/// exactly this order.
pub trait UnicodeMetadata {
    /// Short description of where the data came from
    fn source(&self) -> &str;

    /// All emoji groups, in display order
    fn groups(&self) -> &[EmojiGroup];

    /// Base display name for a sequence
    fn sequence_name(&self, seq: &CodePointSequence) -> Option<&str>;

    /// Character name of a single code point
    fn codepoint_name(&self, cp: u32) -> Option<&str>;

    /// Canonical (fully-qualified) form of a sequence
    ///
    /// Image files are named without variation selectors; this maps them back
    /// to the form the metadata uses as a key.
    fn canonical_sequence(&self, seq: &CodePointSequence) -> CodePointSequence {
        seq.clone()
    }

    /// Names of all groups, in display order
    fn group_names(&self) -> Vec<&str> {
        self.groups().iter().map(|g| g.name.as_str()).collect()
    }

    /// Look up a group by name
    fn group(&self, name: &str) -> Option<&EmojiGroup> {
        self.groups().iter().find(|g| g.name == name)
    }

    /// Members of a group, empty when the group is unknown
    fn group_members(&self, name: &str) -> &[CodePointSequence] {
        self.group(name)
            .map(|g| g.members.as_slice())
            .unwrap_or(&[])
    }

    /// Character names for every code point of a sequence
    ///
    /// Unnamed code points render as `U+XXXX`.
    fn codepoint_names(&self, seq: &CodePointSequence) -> Vec<String> {
        seq.iter()
            .map(|cp| {
                self.codepoint_name(cp)
                    .map(str::to_string)
                    .unwrap_or_else(|| codepoint::codepoint_label(cp))
            })
            .collect()
    }

    fn is_skin_tone_modifier(&self, cp: u32) -> bool {
        codepoint::is_skin_tone_modifier(cp)
    }

    fn is_regional_indicator(&self, cp: u32) -> bool {
        codepoint::is_regional_indicator(cp)
    }

    fn is_regional_indicator_seq(&self, seq: &CodePointSequence) -> bool {
        codepoint::is_regional_indicator_seq(seq.as_slice())
    }

    fn is_regional_tag_seq(&self, seq: &CodePointSequence) -> bool {
        codepoint::is_regional_tag_seq(seq.as_slice())
    }

    fn is_keycap_seq(&self, seq: &CodePointSequence) -> bool {
        codepoint::is_keycap_seq(seq.as_slice())
    }

    fn regional_indicator_to_ascii(&self, cp: u32) -> Option<char> {
        codepoint::regional_indicator_to_ascii(cp)
    }
}

/// Read-only view of the available emoji images
pub trait ImageCatalog {
    /// Canonical sequence to image file name
    fn images(&self) -> &ImageMap;

    /// Alias sequence to the canonical sequence it stands for
    fn aliases(&self) -> &AliasMap;

    /// Sequences explicitly excluded from display
    fn excluded(&self) -> &ExclusionSet;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockMetadata;

    #[test]
    fn default_predicates_follow_codepoint_rules() {
        let meta = MockMetadata::new();
        assert!(meta.is_skin_tone_modifier(0x1F3FC));
        assert!(meta.is_regional_indicator(0x1F1E6));
        assert!(meta.is_regional_indicator_seq(&CodePointSequence::from([0x1F1FA, 0x1F1F8])));
        assert!(!meta.is_regional_tag_seq(&CodePointSequence::from([0x1F1FA, 0x1F1F8])));
        assert!(meta.is_keycap_seq(&CodePointSequence::from([0x23, 0xFE0F, 0x20E3])));
        assert!(!meta.is_keycap_seq(&CodePointSequence::from([0x23])));
        assert_eq!(meta.regional_indicator_to_ascii(0x1F1E8), Some('C'));
    }

    #[test]
    fn codepoint_names_fall_back_to_labels() {
        let meta = MockMetadata::new().with_codepoint_name(0x1F468, "MAN");
        let names = meta.codepoint_names(&CodePointSequence::from([0x1F468, 0x200D]));
        assert_eq!(names, vec!["MAN".to_string(), "U+200D".to_string()]);
    }

    #[test]
    fn group_lookup() {
        let meta = MockMetadata::new()
            .with_group("Smileys & Emotion", vec![CodePointSequence::from([0x1F600])])
            .with_group("Flags", vec![]);
        assert_eq!(meta.group_names(), vec!["Smileys & Emotion", "Flags"]);
        assert_eq!(meta.group("Flags").unwrap().members.len(), 0);
        assert!(meta.group("Misc").is_none());
        assert_eq!(meta.group_members("Smileys & Emotion").len(), 1);
        assert!(meta.group_members("Misc").is_empty());
    }

    #[test]
    fn error_display() {
        let err = ProviderError::parse("emoji-test.txt", 12, "missing ';'");
        assert_eq!(err.to_string(), "emoji-test.txt:12: missing ';'");
    }
}
