//! Sequence normalization
//!
//! Each lookup path strips a fixed set of cosmetic code points before
//! consulting its table. The rules are never mixed: a table is always keyed
//! by sequences normalized with exactly the rules listed for it.

use emojinames_core::codepoint::{
    is_skin_tone_modifier, EMOJI_VS, FEMALE_SIGN, MALE_SIGN, MAN, WOMAN, ZWJ,
};
use emojinames_core::CodePointSequence;

/// A code point stripping rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripRule {
    /// ZWJ, emoji variation selector and every skin tone modifier
    NonGender,

    /// Male and female signs, plus the MAN and WOMAN base characters
    Gender,

    /// Skin tone modifiers, unless the sequence starts with one
    SkinTone,
}

impl StripRule {
    /// Apply the rule, producing a new sequence
    pub fn apply(&self, seq: &CodePointSequence) -> CodePointSequence {
        match self {
            Self::NonGender => seq.retain(|cp| !is_non_gender_cosmetic(cp)),
            Self::Gender => seq.retain(|cp| !is_gender_marker(cp)),
            Self::SkinTone => match seq.first() {
                // The modifier is the subject of the name
                Some(first) if is_skin_tone_modifier(first) => seq.clone(),
                _ => seq.retain(|cp| !is_skin_tone_modifier(cp)),
            },
        }
    }

    /// Apply several rules in order
    pub fn apply_all(rules: &[StripRule], seq: &CodePointSequence) -> CodePointSequence {
        rules
            .iter()
            .fold(seq.clone(), |acc, rule| rule.apply(&acc))
    }
}

fn is_non_gender_cosmetic(cp: u32) -> bool {
    cp == ZWJ || cp == EMOJI_VS || is_skin_tone_modifier(cp)
}

fn is_gender_marker(cp: u32) -> bool {
    matches!(cp, FEMALE_SIGN | MALE_SIGN | MAN | WOMAN)
}
