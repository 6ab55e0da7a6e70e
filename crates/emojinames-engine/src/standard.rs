//! Standard display names derived from Unicode names

use std::sync::LazyLock;

use emojinames_catalog::UnicodeMetadata;
use emojinames_core::CodePointSequence;
use regex::{Captures, Regex};

use crate::normalize::StripRule;

/// Prefix Unicode puts on text characters given emoji presentation
const EMOJI_PREFIX: &str = "(emoji) ";

static AMPERSAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s&\s").expect("ampersand pattern is valid"));

// No leading \b: the first word of a name keeps its capital
static MINOR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\s:?(?:a|and|from|in|of|with|for))\b").expect("minor word pattern is valid")
});

/// Naming errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("No Unicode name for sequence {0}")]
    Unnamed(CodePointSequence),
}

/// Derives a display name from the metadata provider's base name
pub struct StandardNameDeriver;

impl StandardNameDeriver {
    /// Derive the standard display name for `seq`
    ///
    /// Skin tones are ignored unless the sequence is a skin tone itself.
    /// Lone regional indicators become "Regional Symbol X"; flags and tag
    /// sequences keep their Unicode name verbatim. Everything else is title
    /// cased with "&" spelled out and short function words lowercased.
    pub fn derive<M>(metadata: &M, seq: &CodePointSequence) -> Result<String, NameError>
    where
        M: UnicodeMetadata + ?Sized,
    {
        let stripped = StripRule::SkinTone.apply(seq);

        if stripped.len() == 1 {
            if let Some(letter) = stripped.first().and_then(|cp| metadata.regional_indicator_to_ascii(cp)) {
                return Ok(format!("Regional Symbol {}", letter));
            }
        }

        // Mixed-tone sequences have no untoned entry of their own
        let name = match metadata.sequence_name(&stripped) {
            Some(name) => name.to_string(),
            None => metadata
                .sequence_name(seq)
                .map(without_skin_tones)
                .ok_or_else(|| NameError::Unnamed(stripped.clone()))?,
        };
        let name = name.strip_prefix(EMOJI_PREFIX).unwrap_or(name.as_str());

        if metadata.is_regional_indicator_seq(&stripped) || metadata.is_regional_tag_seq(&stripped) {
            return Ok(name.to_string());
        }

        Ok(format_name(name))
    }
}

/// Drop the skin tone qualifiers from a name
///
/// "kiss: person, person, light skin tone, medium skin tone" becomes
/// "kiss: person, person".
pub fn without_skin_tones(name: &str) -> String {
    let Some((base, qualifiers)) = name.split_once(": ") else {
        return name.to_string();
    };

    let kept: Vec<&str> = qualifiers
        .split(", ")
        .filter(|part| !part.ends_with("skin tone"))
        .collect();

    if kept.is_empty() {
        base.to_string()
    } else {
        format!("{}: {}", base, kept.join(", "))
    }
}

/// Title case a name, then fix ampersands and minor words
pub fn format_name(name: &str) -> String {
    let name = title_case(name);
    let name = AMPERSAND.replace_all(&name, " and ");
    MINOR_WORD
        .replace_all(&name, |caps: &Captures| caps[1].to_lowercase())
        .into_owned()
}

/// Title case the way word-at-a-time casing does it
///
/// A letter is uppercased when the character before it is not a letter, so
/// apostrophes and hyphens start new words: "o’clock" becomes "O’Clock".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;

    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && prev_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }

    out
}
