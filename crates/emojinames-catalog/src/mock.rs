//! In-memory providers for testing
//!
//! These return predefined data without touching the filesystem. They are
//! useful for unit testing the naming engine and the assembler, and for
//! reproducing catalog edge cases with a handful of sequences.
//!
//! ## Usage
//!
//! ```rust
//! use emojinames_catalog::{ImageCatalog, MockImageCatalog, MockMetadata, UnicodeMetadata};
//!
//! let metadata = MockMetadata::new()
//!     .with_group("Smileys & Emotion", vec![[0x1F600].into()])
//!     .with_name([0x1F600], "grinning face");
//!
//! let images = MockImageCatalog::new().with_image([0x1F600], "emoji_u1f600.png");
//!
//! assert_eq!(metadata.sequence_name(&[0x1F600].into()), Some("grinning face"));
//! assert_eq!(images.images().len(), 1);
//! ```

use std::collections::HashMap;

use emojinames_core::{AliasMap, CodePointSequence, EmojiGroup, ExclusionSet, ImageMap};

use crate::provider::{ImageCatalog, UnicodeMetadata};

/// Mock metadata provider
#[derive(Debug, Clone, Default)]
pub struct MockMetadata {
    groups: Vec<EmojiGroup>,
    names: HashMap<CodePointSequence, String>,
    codepoint_names: HashMap<u32, String>,
    canonical: HashMap<CodePointSequence, CodePointSequence>,
}

impl MockMetadata {
    /// Create a provider with no groups or names
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group (groups keep insertion order)
    pub fn with_group(mut self, name: impl Into<String>, members: Vec<CodePointSequence>) -> Self {
        self.groups.push(EmojiGroup::new(name, members));
        self
    }

    /// Set the base name of a sequence
    pub fn with_name(mut self, seq: impl Into<CodePointSequence>, name: impl Into<String>) -> Self {
        self.names.insert(seq.into(), name.into());
        self
    }

    /// Set the character name of a code point
    pub fn with_codepoint_name(mut self, cp: u32, name: impl Into<String>) -> Self {
        self.codepoint_names.insert(cp, name.into());
        self
    }

    /// Map a variation-selector-free sequence to its canonical form
    pub fn with_canonical(
        mut self,
        seq: impl Into<CodePointSequence>,
        canonical: impl Into<CodePointSequence>,
    ) -> Self {
        self.canonical.insert(seq.into(), canonical.into());
        self
    }
}

impl UnicodeMetadata for MockMetadata {
    fn source(&self) -> &str {
        "Mock"
    }

    fn groups(&self) -> &[EmojiGroup] {
        &self.groups
    }

    fn sequence_name(&self, seq: &CodePointSequence) -> Option<&str> {
        self.names.get(seq).map(String::as_str)
    }

    fn codepoint_name(&self, cp: u32) -> Option<&str> {
        self.codepoint_names.get(&cp).map(String::as_str)
    }

    fn canonical_sequence(&self, seq: &CodePointSequence) -> CodePointSequence {
        self.canonical.get(seq).cloned().unwrap_or_else(|| seq.clone())
    }
}

/// Mock image catalog
#[derive(Debug, Clone, Default)]
pub struct MockImageCatalog {
    images: ImageMap,
    aliases: AliasMap,
    excluded: ExclusionSet,
}

impl MockImageCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image file for a sequence
    pub fn with_image(mut self, seq: impl Into<CodePointSequence>, file: impl Into<String>) -> Self {
        self.images.insert(seq.into(), file.into());
        self
    }

    /// Register an alias
    pub fn with_alias(
        mut self,
        alias: impl Into<CodePointSequence>,
        target: impl Into<CodePointSequence>,
    ) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }

    /// Register an excluded sequence
    pub fn with_excluded(mut self, seq: impl Into<CodePointSequence>) -> Self {
        self.excluded.insert(seq.into());
        self
    }
}

impl ImageCatalog for MockImageCatalog {
    fn images(&self) -> &ImageMap {
        &self.images
    }

    fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    fn excluded(&self) -> &ExclusionSet {
        &self.excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_metadata_lookups() {
        let meta = MockMetadata::new()
            .with_name([0x1F600], "grinning face")
            .with_canonical([0x2764], [0x2764, 0xFE0F]);

        assert_eq!(meta.source(), "Mock");
        assert_eq!(meta.sequence_name(&CodePointSequence::from([0x1F600])), Some("grinning face"));
        assert_eq!(meta.sequence_name(&CodePointSequence::from([0x1F601])), None);
        assert_eq!(
            meta.canonical_sequence(&CodePointSequence::from([0x2764])),
            CodePointSequence::from([0x2764, 0xFE0F])
        );
    }

    #[test]
    fn mock_image_catalog() {
        let images = MockImageCatalog::new()
            .with_image([0x1F1F3, 0x1F1F4], "emoji_u1f1f3_1f1f4.png")
            .with_alias([0x1F1E7, 0x1F1FB], [0x1F1F3, 0x1F1F4])
            .with_excluded([0x1F46A]);

        assert_eq!(images.images().len(), 1);
        assert_eq!(images.aliases().len(), 1);
        assert!(images.excluded().contains(&CodePointSequence::from([0x1F46A])));
    }
}
