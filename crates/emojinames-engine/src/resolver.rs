//! Display name resolution
//!
//! [`CustomNameResolver`] walks an ordered list of [`LookupStep`]s over the
//! override tables. [`NameResolver`] tries it first and falls back to the
//! [`StandardNameDeriver`].

use emojinames_catalog::UnicodeMetadata;
use emojinames_core::CodePointSequence;

use crate::normalize::StripRule;
use crate::overrides::{OverrideTables, OverrideTier};
use crate::standard::{NameError, StandardNameDeriver};

/// One step of the custom lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStep {
    /// Normalize with `strips`, then consult the table for `tier`
    Table {
        tier: OverrideTier,
        strips: &'static [StripRule],
    },

    /// Give up if the normalized sequence is a single code point
    ///
    /// Single characters that take part in longer sequences (the fire engine
    /// in "firefighter") must keep their own names.
    StopIfSingle { strips: &'static [StripRule] },
}

/// Result of running one lookup step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome<'t> {
    Found { tier: OverrideTier, name: &'t str },
    Continue,
    Stop,
}

impl LookupStep {
    pub fn run<'t>(&self, seq: &CodePointSequence, tables: &'t OverrideTables) -> LookupOutcome<'t> {
        match self {
            Self::Table { tier, strips } => {
                let key = StripRule::apply_all(strips, seq);
                match tables.table(*tier).get(&key) {
                    Some(name) => LookupOutcome::Found { tier: *tier, name },
                    None => LookupOutcome::Continue,
                }
            }
            Self::StopIfSingle { strips } => {
                if StripRule::apply_all(strips, seq).len() == 1 {
                    LookupOutcome::Stop
                } else {
                    LookupOutcome::Continue
                }
            }
        }
    }
}

const NON_GENDER: &[StripRule] = &[StripRule::NonGender];
const NON_GENDER_THEN_GENDER: &[StripRule] = &[StripRule::NonGender, StripRule::Gender];

/// The built-in lookup order
pub const DEFAULT_STEPS: [LookupStep; 4] = [
    LookupStep::Table {
        tier: OverrideTier::CapsFix,
        strips: NON_GENDER,
    },
    LookupStep::StopIfSingle { strips: NON_GENDER },
    LookupStep::Table {
        tier: OverrideTier::Gendered,
        strips: NON_GENDER,
    },
    LookupStep::Table {
        tier: OverrideTier::Generic,
        strips: NON_GENDER_THEN_GENDER,
    },
];

/// Looks a sequence up in the override tables
#[derive(Debug, Clone)]
pub struct CustomNameResolver {
    tables: OverrideTables,
    steps: Vec<LookupStep>,
}

impl CustomNameResolver {
    /// Resolver over `tables` using the default lookup order
    pub fn new(tables: OverrideTables) -> Self {
        Self::with_steps(tables, DEFAULT_STEPS.to_vec())
    }

    pub fn with_steps(tables: OverrideTables, steps: Vec<LookupStep>) -> Self {
        Self { tables, steps }
    }

    /// Resolver over the built-in tables
    pub fn builtin() -> Self {
        Self::new(OverrideTables::builtin())
    }

    /// Find an override and the table it came from
    pub fn resolve(&self, seq: &CodePointSequence) -> Option<(OverrideTier, &str)> {
        for step in &self.steps {
            match step.run(seq, &self.tables) {
                LookupOutcome::Found { tier, name } => return Some((tier, name)),
                LookupOutcome::Stop => return None,
                LookupOutcome::Continue => {}
            }
        }
        None
    }

    /// Find an override name
    pub fn name(&self, seq: &CodePointSequence) -> Option<&str> {
        self.resolve(seq).map(|(_, name)| name)
    }

    pub fn tables(&self) -> &OverrideTables {
        &self.tables
    }

    pub fn steps(&self) -> &[LookupStep] {
        &self.steps
    }
}

impl Default for CustomNameResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Where a display name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Override(OverrideTier),
    Standard,
}

/// A resolved display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    pub source: NameSource,
}

/// Custom overrides first, standard derivation second
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    custom: CustomNameResolver,
}

impl NameResolver {
    pub fn new(custom: CustomNameResolver) -> Self {
        Self { custom }
    }

    pub fn builtin() -> Self {
        Self::new(CustomNameResolver::builtin())
    }

    pub fn resolve<M>(&self, metadata: &M, seq: &CodePointSequence) -> Result<ResolvedName, NameError>
    where
        M: UnicodeMetadata + ?Sized,
    {
        if let Some((tier, name)) = self.custom.resolve(seq) {
            return Ok(ResolvedName {
                name: name.to_string(),
                source: NameSource::Override(tier),
            });
        }

        let name = StandardNameDeriver::derive(metadata, seq)?;
        Ok(ResolvedName {
            name,
            source: NameSource::Standard,
        })
    }

    /// Resolve and keep only the name
    pub fn name<M>(&self, metadata: &M, seq: &CodePointSequence) -> Result<String, NameError>
    where
        M: UnicodeMetadata + ?Sized,
    {
        self.resolve(metadata, seq).map(|resolved| resolved.name)
    }

    pub fn custom(&self) -> &CustomNameResolver {
        &self.custom
    }
}
