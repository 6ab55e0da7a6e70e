//! Emoji naming engine
//!
//! This crate turns metadata and an image set into the catalog:
//! - Sequence normalization for override lookups
//! - Custom name overrides (caps fixes, gendered and generic tables)
//! - Standard name derivation from Unicode names
//! - Alias filtering and flag alias remapping
//! - Catalog assembly with the missing image limit

pub mod normalize;
pub mod overrides;
pub mod resolver;
pub mod standard;
pub mod aliases;
pub mod assembler;

pub use normalize::StripRule;
pub use overrides::{NameOverrideTable, OverrideError, OverrideTables, OverrideTier};
pub use resolver::{CustomNameResolver, LookupOutcome, LookupStep, NameResolver, NameSource, ResolvedName};
pub use standard::{without_skin_tones, NameError, StandardNameDeriver};
pub use aliases::{AliasFilter, AliasRemap};
pub use assembler::{
    missing_line, quote_list, validate_omit_groups, AssembleError, AssembledCatalog, AssemblerOptions, CatalogAssembler,
    EntryOutcome,
};
