//! Built-in display name overrides
//!
//! Three tables, each keyed by normalized sequences:
//!
//! - caps fixes: single characters whose generated title case is wrong
//!   ("ATM Sign", possessives like "Woman’s Hat")
//! - gendered: kiss, couple and family sequences collapse to one short name
//! - generic: gender-neutral activity and occupation names

use std::collections::HashMap;
use std::fmt;

use emojinames_core::codepoint::{BOY, GIRL, MAN, WOMAN};
use emojinames_core::CodePointSequence;

const HEART: u32 = 0x2764;
const KISS_MARK: u32 = 0x1F48B;
const EYE: u32 = 0x1F441;
const SPEECH: u32 = 0x1F5E8;
const WHITE_FLAG: u32 = 0x1F3F3;
const RAINBOW: u32 = 0x1F308;

/// Which override table a name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideTier {
    CapsFix,
    Gendered,
    Generic,
}

impl fmt::Display for OverrideTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CapsFix => "caps-fix",
            Self::Gendered => "gendered",
            Self::Generic => "generic",
        };
        write!(f, "{}", label)
    }
}

/// Errors raised while building override tables
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    #[error("duplicate {tier} override for {sequence}")]
    Duplicate {
        tier: OverrideTier,
        sequence: CodePointSequence,
    },
}

/// One table of display name overrides
#[derive(Debug, Clone)]
pub struct NameOverrideTable {
    tier: OverrideTier,
    names: HashMap<CodePointSequence, String>,
}

impl NameOverrideTable {
    /// Create an empty table
    pub fn new(tier: OverrideTier) -> Self {
        Self {
            tier,
            names: HashMap::new(),
        }
    }

    /// Build a table, rejecting duplicate keys
    pub fn from_entries<I, S>(tier: OverrideTier, entries: I) -> Result<Self, OverrideError>
    where
        I: IntoIterator<Item = (CodePointSequence, S)>,
        S: Into<String>,
    {
        let mut table = Self::new(tier);
        for (seq, name) in entries {
            table.insert(seq, name)?;
        }
        Ok(table)
    }

    /// Add an override; a key may only be defined once
    pub fn insert(
        &mut self,
        seq: CodePointSequence,
        name: impl Into<String>,
    ) -> Result<(), OverrideError> {
        if self.names.contains_key(&seq) {
            return Err(OverrideError::Duplicate {
                tier: self.tier,
                sequence: seq,
            });
        }
        self.names.insert(seq, name.into());
        Ok(())
    }

    pub fn get(&self, seq: &CodePointSequence) -> Option<&str> {
        self.names.get(seq).map(String::as_str)
    }

    pub fn tier(&self) -> OverrideTier {
        self.tier
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // Key uniqueness of the built-in tables is checked by the tests below
    fn from_static(tier: OverrideTier, entries: &[(&[u32], &str)]) -> Self {
        let names = entries
            .iter()
            .map(|(cps, name)| (CodePointSequence::from(*cps), (*name).to_string()))
            .collect();
        Self { tier, names }
    }
}

/// The three override tables used by the custom name resolver
#[derive(Debug, Clone)]
pub struct OverrideTables {
    pub caps_fix: NameOverrideTable,
    pub gendered: NameOverrideTable,
    pub generic: NameOverrideTable,
}

impl OverrideTables {
    /// The built-in tables
    pub fn builtin() -> Self {
        Self {
            caps_fix: NameOverrideTable::from_static(OverrideTier::CapsFix, CAPS_FIX_NAMES),
            gendered: NameOverrideTable::from_static(OverrideTier::Gendered, GENDERED_NAMES),
            generic: NameOverrideTable::from_static(OverrideTier::Generic, GENERIC_NAMES),
        }
    }

    /// Tables with no entries
    pub fn empty() -> Self {
        Self {
            caps_fix: NameOverrideTable::new(OverrideTier::CapsFix),
            gendered: NameOverrideTable::new(OverrideTier::Gendered),
            generic: NameOverrideTable::new(OverrideTier::Generic),
        }
    }

    pub fn table(&self, tier: OverrideTier) -> &NameOverrideTable {
        match tier {
            OverrideTier::CapsFix => &self.caps_fix,
            OverrideTier::Gendered => &self.gendered,
            OverrideTier::Generic => &self.generic,
        }
    }

    pub fn table_mut(&mut self, tier: OverrideTier) -> &mut NameOverrideTable {
        match tier {
            OverrideTier::CapsFix => &mut self.caps_fix,
            OverrideTier::Gendered => &mut self.gendered,
            OverrideTier::Generic => &mut self.generic,
        }
    }
}

impl Default for OverrideTables {
    fn default() -> Self {
        Self::builtin()
    }
}

// Possessives are listed here so the letter after the apostrophe stays
// lowercase. "O’Clock" style names are left to title casing.
const CAPS_FIX_NAMES: &[(&[u32], &str)] = &[
    (&[0x26D1], "Rescue Worker’s Helmet"),
    (&[0x1F170], "A Button (blood type)"),
    (&[0x1F171], "B Button (blood type)"),
    (&[0x1F17E], "O Button (blood type)"),
    (&[0x1F18E], "AB Button (blood type)"),
    (&[0x1F191], "CL Button"),
    (&[0x1F192], "COOL Button"),
    (&[0x1F193], "FREE Button"),
    (&[0x1F194], "ID Button"),
    (&[0x1F195], "NEW Button"),
    (&[0x1F196], "NG Button"),
    (&[0x1F197], "OK Button"),
    (&[0x1F198], "SOS Button"),
    (&[0x1F199], "UP! Button"),
    (&[0x1F19A], "VS Button"),
    (&[0x1F3E7], "ATM Sign"),
    (&[0x1F44C], "OK Hand"),
    (&[0x1F452], "Woman’s Hat"),
    (&[0x1F45A], "Woman’s Clothes"),
    (&[0x1F45E], "Man’s Shoe"),
    (&[0x1F461], "Woman’s Sandal"),
    (&[0x1F462], "Woman’s Boot"),
    (&[0x1F519], "BACK Arrow"),
    (&[0x1F51A], "END Arrow"),
    (&[0x1F51B], "ON! Arrow"),
    (&[0x1F51C], "SOON Arrow"),
    (&[0x1F51D], "TOP Arrow"),
    (&[0x1F6B9], "Men’s Room"),
    (&[0x1F6BA], "Women’s Room"),
];

const GENDERED_NAMES: &[(&[u32], &str)] = &[
    (&[MAN, HEART, KISS_MARK, MAN], "Kiss"),
    (&[WOMAN, HEART, KISS_MARK, WOMAN], "Kiss"),
    (&[WOMAN, HEART, KISS_MARK, MAN], "Kiss"),
    (&[WOMAN, HEART, MAN], "Couple with Heart"),
    (&[MAN, HEART, MAN], "Couple with Heart"),
    (&[WOMAN, HEART, WOMAN], "Couple with Heart"),
    (&[MAN, GIRL], "Family"),
    (&[MAN, GIRL, GIRL], "Family"),
    (&[MAN, GIRL, BOY], "Family"),
    (&[MAN, BOY], "Family"),
    (&[MAN, BOY, BOY], "Family"),
    (&[MAN, WOMAN, GIRL], "Family"),
    (&[MAN, WOMAN, GIRL, GIRL], "Family"),
    (&[MAN, WOMAN, GIRL, BOY], "Family"),
    (&[MAN, WOMAN, BOY], "Family"),
    (&[MAN, WOMAN, BOY, BOY], "Family"),
    (&[MAN, MAN, GIRL], "Family"),
    (&[MAN, MAN, GIRL, GIRL], "Family"),
    (&[MAN, MAN, GIRL, BOY], "Family"),
    (&[MAN, MAN, BOY], "Family"),
    (&[MAN, MAN, BOY, BOY], "Family"),
    (&[WOMAN, GIRL], "Family"),
    (&[WOMAN, GIRL, GIRL], "Family"),
    (&[WOMAN, GIRL, BOY], "Family"),
    (&[WOMAN, BOY], "Family"),
    (&[WOMAN, BOY, BOY], "Family"),
    (&[WOMAN, WOMAN, GIRL], "Family"),
    (&[WOMAN, WOMAN, GIRL, GIRL], "Family"),
    (&[WOMAN, WOMAN, GIRL, BOY], "Family"),
    (&[WOMAN, WOMAN, BOY], "Family"),
    (&[WOMAN, WOMAN, BOY, BOY], "Family"),
];

// "Person xyz-ing" becomes the activity, "Man Xyz" drops the gender
const GENERIC_NAMES: &[(&[u32], &str)] = &[
    (&[EYE, SPEECH], "I Witness"),
    (&[WHITE_FLAG, RAINBOW], "Rainbow Flag"),
    (&[0x2695], "Health Worker"),
    (&[0x2696], "Judge"),
    (&[0x26F7], "Skiing"),
    (&[0x26F9], "Bouncing a Ball"),
    (&[0x2708], "Pilot"),
    (&[0x1F33E], "Farmer"),
    (&[0x1F373], "Cook"),
    (&[0x1F393], "Student"),
    (&[0x1F3A4], "Singer"),
    (&[0x1F3A8], "Artist"),
    (&[0x1F3C2], "Snowboarding"),
    (&[0x1F3C3], "Running"),
    (&[0x1F3C4], "Surfing"),
    (&[0x1F3CA], "Swimming"),
    (&[0x1F3CB], "Weight Lifting"),
    (&[0x1F3CC], "Golfing"),
    (&[0x1F3EB], "Teacher"),
    (&[0x1F3ED], "Factory Worker"),
    (&[0x1F46E], "Police Officer"),
    (&[0x1F46F], "Partying"),
    (&[0x1F471], "Person with Blond Hair"),
    (&[0x1F473], "Person Wearing Turban"),
    (&[0x1F477], "Construction Worker"),
    (&[0x1F481], "Tipping Hand"),
    (&[0x1F482], "Guard"),
    (&[0x1F486], "Face Massage"),
    (&[0x1F487], "Haircut"),
    (&[0x1F4BB], "Technologist"),
    (&[0x1F4BC], "Office Worker"),
    (&[0x1F527], "Mechanic"),
    (&[0x1F52C], "Scientist"),
    (&[0x1F575], "Detective"),
    (&[0x1F645], "No Good Gesture"),
    (&[0x1F646], "OK Gesture"),
    (&[0x1F647], "Bowing Deeply"),
    (&[0x1F64B], "Raising Hand"),
    (&[0x1F64D], "Frowning"),
    (&[0x1F64E], "Pouting"),
    (&[0x1F680], "Astronaut"),
    (&[0x1F692], "Firefighter"),
    (&[0x1F6A3], "Rowing"),
    (&[0x1F6B4], "Bicycling"),
    (&[0x1F6B5], "Mountain Biking"),
    (&[0x1F6B6], "Walking"),
    (&[0x1F926], "Face Palm"),
    (&[0x1F937], "Shrug"),
    (&[0x1F938], "Doing a Cartwheel"),
    (&[0x1F939], "Juggling"),
    (&[0x1F93C], "Wrestling"),
    (&[0x1F93D], "Water Polo"),
    (&[0x1F93E], "Playing Handball"),
    (&[0x1F9D6], "Person in Steamy Room"),
    (&[0x1F9D7], "Climbing"),
    (&[0x1F9D8], "Person in Lotus Position"),
    (&[0x1F9D9], "Mage"),
    (&[0x1F9DA], "Fairy"),
    (&[0x1F9DB], "Vampire"),
    (&[0x1F9DD], "Elf"),
    (&[0x1F9DE], "Genie"),
    (&[0x1F9DF], "Zombie"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_have_unique_keys() {
        let tables = OverrideTables::builtin();
        assert_eq!(tables.caps_fix.len(), CAPS_FIX_NAMES.len());
        assert_eq!(tables.gendered.len(), GENDERED_NAMES.len());
        assert_eq!(tables.generic.len(), GENERIC_NAMES.len());

        assert_eq!(tables.caps_fix.len(), 29);
        assert_eq!(tables.gendered.len(), 31);
        assert_eq!(tables.generic.len(), 62);
    }

    #[test]
    fn builtin_tables_pass_duplicate_check() {
        for (tier, entries) in [
            (OverrideTier::CapsFix, CAPS_FIX_NAMES),
            (OverrideTier::Gendered, GENDERED_NAMES),
            (OverrideTier::Generic, GENERIC_NAMES),
        ] {
            let checked = NameOverrideTable::from_entries(
                tier,
                entries.iter().map(|(cps, name)| (CodePointSequence::from(*cps), *name)),
            );
            assert!(checked.is_ok(), "{:?}", checked.err());
        }
    }

    #[test]
    fn builtin_lookups() {
        let tables = OverrideTables::builtin();
        assert_eq!(
            tables.caps_fix.get(&CodePointSequence::from([0x1F3E7])),
            Some("ATM Sign")
        );
        assert_eq!(
            tables.gendered.get(&CodePointSequence::from([WOMAN, HEART, MAN])),
            Some("Couple with Heart")
        );
        assert_eq!(
            tables.generic.get(&CodePointSequence::from([EYE, SPEECH])),
            Some("I Witness")
        );
        assert_eq!(tables.table(OverrideTier::Generic).tier(), OverrideTier::Generic);
    }

    #[test]
    fn gendered_keys_have_no_joiners() {
        let tables = OverrideTables::builtin();
        let zwj_form = CodePointSequence::from([MAN, 0x200D, GIRL]);
        assert_eq!(tables.gendered.get(&zwj_form), None);
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let result = NameOverrideTable::from_entries(
            OverrideTier::Generic,
            vec![
                (CodePointSequence::from([0x1F680]), "Astronaut"),
                (CodePointSequence::from([0x1F680]), "Rocket"),
            ],
        );
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "duplicate generic override for 1f680");
    }

    #[test]
    fn empty_tables() {
        let mut tables = OverrideTables::empty();
        assert!(tables.caps_fix.is_empty());

        tables
            .table_mut(OverrideTier::CapsFix)
            .insert(CodePointSequence::from([0x1F197]), "OK Button")
            .unwrap();
        assert_eq!(tables.caps_fix.len(), 1);
    }
}
