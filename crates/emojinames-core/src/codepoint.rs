//! Code point vocabulary used by emoji sequences
//!
//! Constants and predicates over single code points and raw slices.
//! Everything here is pure; metadata providers expose the same predicates
//! so callers can stay generic over where the data comes from.

/// Zero width joiner
pub const ZWJ: u32 = 0x200D;

/// Emoji presentation variation selector (VS16)
pub const EMOJI_VS: u32 = 0xFE0F;

/// First skin tone modifier (Fitzpatrick type 1-2)
pub const SKIN_TONE_START: u32 = 0x1F3FB;

/// Last skin tone modifier (Fitzpatrick type 6)
pub const SKIN_TONE_END: u32 = 0x1F3FF;

/// Female sign
pub const FEMALE_SIGN: u32 = 0x2640;

/// Male sign
pub const MALE_SIGN: u32 = 0x2642;

pub const MAN: u32 = 0x1F468;
pub const WOMAN: u32 = 0x1F469;
pub const BOY: u32 = 0x1F466;
pub const GIRL: u32 = 0x1F467;

/// Regional indicator symbol letter A
pub const REGIONAL_INDICATOR_START: u32 = 0x1F1E6;

/// Regional indicator symbol letter Z
pub const REGIONAL_INDICATOR_END: u32 = 0x1F1FF;

/// Waving black flag, the base of subdivision flag tag sequences
pub const BLACK_FLAG: u32 = 0x1F3F4;

/// First tag character usable inside a tag sequence
pub const TAG_START: u32 = 0xE0020;

/// Cancel tag, terminates a tag sequence
pub const CANCEL_TAG: u32 = 0xE007F;

/// Combining enclosing keycap
pub const KEYCAP: u32 = 0x20E3;

/// Private use code point standing in for the "unknown flag" image
pub const UNKNOWN_FLAG_PUA: u32 = 0xFE82B;

/// Check if a code point is a skin tone modifier
pub fn is_skin_tone_modifier(cp: u32) -> bool {
    (SKIN_TONE_START..=SKIN_TONE_END).contains(&cp)
}

/// Check if a code point is one of the 26 regional indicator symbols
pub fn is_regional_indicator(cp: u32) -> bool {
    (REGIONAL_INDICATOR_START..=REGIONAL_INDICATOR_END).contains(&cp)
}

/// Check if a sequence is a flag made of exactly two regional indicators
pub fn is_regional_indicator_seq(cps: &[u32]) -> bool {
    cps.len() == 2 && cps.iter().all(|&cp| is_regional_indicator(cp))
}

/// Check if a sequence is a subdivision flag (black flag, tags, cancel tag)
pub fn is_regional_tag_seq(cps: &[u32]) -> bool {
    match cps {
        [BLACK_FLAG, tags @ .., CANCEL_TAG] => {
            !tags.is_empty() && tags.iter().all(|cp| (TAG_START..CANCEL_TAG).contains(cp))
        }
        _ => false,
    }
}

/// Check if a sequence is a keycap (base, optional VS16, enclosing keycap)
pub fn is_keycap_seq(cps: &[u32]) -> bool {
    matches!(cps, [_, KEYCAP] | [_, EMOJI_VS, KEYCAP])
}

/// Convert a regional indicator to its upper-case ASCII letter
///
/// Returns `None` for anything outside the regional indicator block.
pub fn regional_indicator_to_ascii(cp: u32) -> Option<char> {
    if !is_regional_indicator(cp) {
        return None;
    }
    char::from_u32(u32::from(b'A') + (cp - REGIONAL_INDICATOR_START))
}

/// Render a run of regional indicators as letters (e.g. "BV")
///
/// Non-indicator code points render as `?`.
pub fn regional_indicator_seq_to_string(cps: &[u32]) -> String {
    cps.iter()
        .map(|&cp| regional_indicator_to_ascii(cp).unwrap_or('?'))
        .collect()
}

/// Fallback display for a code point without a known name
pub fn codepoint_label(cp: u32) -> String {
    format!("U+{:04X}", cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skin_tone_range() {
        assert!(is_skin_tone_modifier(0x1F3FB));
        assert!(is_skin_tone_modifier(0x1F3FF));
        assert!(!is_skin_tone_modifier(0x1F3FA));
        assert!(!is_skin_tone_modifier(0x1F400));
    }

    #[test]
    fn regional_indicators() {
        assert!(is_regional_indicator(0x1F1E6));
        assert!(is_regional_indicator(0x1F1FF));
        assert!(!is_regional_indicator(0x1F200));

        assert_eq!(regional_indicator_to_ascii(0x1F1E6), Some('A'));
        assert_eq!(regional_indicator_to_ascii(0x1F1FF), Some('Z'));
        assert_eq!(regional_indicator_to_ascii(0x41), None);

        assert!(is_regional_indicator_seq(&[0x1F1FA, 0x1F1F8]));
        assert!(!is_regional_indicator_seq(&[0x1F1FA]));
        assert!(!is_regional_indicator_seq(&[0x1F1FA, 0x1F1F8, 0x1F1E6]));
        assert_eq!(regional_indicator_seq_to_string(&[0x1F1E7, 0x1F1FB]), "BV");
    }

    #[test]
    fn tag_sequences() {
        // England: black flag, g b e n g, cancel tag
        let england = [BLACK_FLAG, 0xE0067, 0xE0062, 0xE0065, 0xE006E, 0xE0067, CANCEL_TAG];
        assert!(is_regional_tag_seq(&england));
        assert!(!is_regional_tag_seq(&[BLACK_FLAG, CANCEL_TAG]));
        assert!(!is_regional_tag_seq(&[BLACK_FLAG]));
        assert!(!is_regional_tag_seq(&[0x1F3F3, 0xE0067, CANCEL_TAG]));
    }

    #[test]
    fn keycaps() {
        assert!(is_keycap_seq(&[0x23, EMOJI_VS, KEYCAP]));
        assert!(is_keycap_seq(&[0x31, KEYCAP]));
        assert!(!is_keycap_seq(&[0x31]));
    }

    #[test]
    fn labels() {
        assert_eq!(codepoint_label(0x23), "U+0023");
        assert_eq!(codepoint_label(0x1F468), "U+1F468");
    }
}
