//! Alias handling for the catalog
//!
//! Most aliases map gender-neutral sequences onto gendered images. The
//! catalog names entries by the image, so those aliases would only show up
//! as duplicates and are excluded. Flag aliases are different: each has its
//! own country name, so they borrow the target's image and stay listed.

use emojinames_catalog::{ImageCatalog, UnicodeMetadata};
use emojinames_core::codepoint::{regional_indicator_seq_to_string, UNKNOWN_FLAG_PUA};
use emojinames_core::{CodePointSequence, Diagnostic, DiagnosticCode, ExclusionSet, ImageMap, Severity};

/// Flag alias remapping result
#[derive(Debug, Clone, Default)]
pub struct AliasRemap {
    /// The image map with flag aliases added
    pub images: ImageMap,

    /// Flag aliases that were given their target's image
    pub remapped: Vec<CodePointSequence>,

    /// Warnings for aliases that already had an image of their own
    pub diagnostics: Vec<Diagnostic>,
}

/// Decides which alias sequences appear in the catalog
pub struct AliasFilter;

impl AliasFilter {
    /// Sequences that never appear in the catalog
    ///
    /// Every non-flag alias, everything the image set excludes, and the
    /// private use "unknown flag" character.
    pub fn exclusions<M, I>(metadata: &M, images: &I) -> ExclusionSet
    where
        M: UnicodeMetadata + ?Sized,
        I: ImageCatalog + ?Sized,
    {
        let mut excluded: ExclusionSet = images
            .aliases()
            .keys()
            .filter(|alias| !metadata.is_regional_indicator_seq(alias))
            .cloned()
            .collect();
        excluded.insert(CodePointSequence::from([UNKNOWN_FLAG_PUA]));
        excluded.extend(images.excluded().iter().cloned());
        excluded
    }

    /// Give flag aliases their target's image
    ///
    /// An alias that already has its own image keeps it and produces an
    /// `ALIAS_HAS_IMAGE` warning. An alias whose target has no image is left
    /// out.
    pub fn remap_flag_aliases<M, I>(metadata: &M, images: &I) -> AliasRemap
    where
        M: UnicodeMetadata + ?Sized,
        I: ImageCatalog + ?Sized,
    {
        let base = images.images();
        let mut remap = AliasRemap {
            images: base.clone(),
            ..Default::default()
        };

        for (alias, target) in images.aliases() {
            if !metadata.is_regional_indicator_seq(alias) {
                continue;
            }

            if let Some(file) = base.get(alias) {
                let flag = regional_indicator_seq_to_string(alias.as_slice());
                tracing::warn!("alias {} has file {}", flag, file);
                remap.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCode::AliasHasImage,
                        Severity::Warn,
                        format!("alias {} has file {}", flag, file),
                    )
                    .with_sequence(alias.clone()),
                );
                continue;
            }

            if let Some(file) = base.get(target) {
                tracing::debug!(alias = %alias, target = %target, file = %file, "remapped flag alias");
                remap.images.insert(alias.clone(), file.clone());
                remap.remapped.push(alias.clone());
            }
        }

        remap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojinames_catalog::{MockImageCatalog, MockMetadata};
    use pretty_assertions::assert_eq;

    const NO: [u32; 2] = [0x1F1F3, 0x1F1F4];
    const BV: [u32; 2] = [0x1F1E7, 0x1F1FB];
    const SJ: [u32; 2] = [0x1F1F8, 0x1F1EF];
    const UM: [u32; 2] = [0x1F1FA, 0x1F1F2];
    const US: [u32; 2] = [0x1F1FA, 0x1F1F8];

    fn seq<const N: usize>(cps: [u32; N]) -> CodePointSequence {
        CodePointSequence::from(cps)
    }

    #[test]
    fn exclusions_cover_non_flag_aliases() {
        let images = MockImageCatalog::new()
            .with_alias([0x1F46A], [0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F466])
            .with_alias(BV, NO)
            .with_excluded([0x1F93C, 0x1F3FB]);

        let excluded = AliasFilter::exclusions(&MockMetadata::new(), &images);

        assert_eq!(excluded.len(), 3);
        assert!(excluded.contains(&seq([0x1F46A])));
        assert!(excluded.contains(&seq([0x1F93C, 0x1F3FB])));
        assert!(excluded.contains(&seq([UNKNOWN_FLAG_PUA])));
        assert!(!excluded.contains(&seq(BV)));
    }

    #[test]
    fn flag_alias_borrows_target_image() {
        let images = MockImageCatalog::new()
            .with_image(NO, "emoji_u1f1f3_1f1f4.png")
            .with_alias(BV, NO)
            .with_alias(SJ, NO);

        let remap = AliasFilter::remap_flag_aliases(&MockMetadata::new(), &images);

        assert_eq!(remap.images.len(), 3);
        assert_eq!(remap.images.get(&seq(BV)).unwrap(), "emoji_u1f1f3_1f1f4.png");
        assert_eq!(remap.images.get(&seq(SJ)).unwrap(), "emoji_u1f1f3_1f1f4.png");
        assert_eq!(remap.remapped, vec![seq(BV), seq(SJ)]);
        assert!(remap.diagnostics.is_empty());
    }

    #[test]
    fn flag_alias_with_own_image_warns() {
        let images = MockImageCatalog::new()
            .with_image(US, "emoji_u1f1fa_1f1f8.png")
            .with_image(UM, "emoji_u1f1fa_1f1f2.png")
            .with_alias(UM, US);

        let remap = AliasFilter::remap_flag_aliases(&MockMetadata::new(), &images);

        assert_eq!(remap.images.get(&seq(UM)).unwrap(), "emoji_u1f1fa_1f1f2.png");
        assert!(remap.remapped.is_empty());
        assert_eq!(remap.diagnostics.len(), 1);

        let diag = &remap.diagnostics[0];
        assert_eq!(diag.code, DiagnosticCode::AliasHasImage);
        assert_eq!(diag.severity, Severity::Warn);
        assert_eq!(diag.message, "alias UM has file emoji_u1f1fa_1f1f2.png");
    }

    #[test]
    fn flag_alias_without_target_image_is_dropped() {
        let images = MockImageCatalog::new().with_alias(BV, NO);
        let remap = AliasFilter::remap_flag_aliases(&MockMetadata::new(), &images);
        assert!(remap.images.is_empty());
        assert!(remap.remapped.is_empty());
    }

    #[test]
    fn non_flag_aliases_are_not_remapped() {
        let images = MockImageCatalog::new()
            .with_image([0x1F468], "emoji_u1f468.png")
            .with_alias([0x1F9D1], [0x1F468]);
        let remap = AliasFilter::remap_flag_aliases(&MockMetadata::new(), &images);
        assert_eq!(remap.images.len(), 1);
    }
}
