//! emojinames core
//!
//! Domain model shared by every layer: code point sequences, the catalog
//! document, diagnostics and configuration.
//! The catalog document shape is consumed by other tools; keep it stable.

pub mod codepoint;
pub mod sequence;
pub mod catalog;
pub mod diagnostic;
pub mod config;

pub use sequence::{AliasMap, CodePointSequence, EmojiGroup, ExclusionSet, ImageMap, SequenceError};
pub use catalog::{Catalog, CatalogCategory, CatalogEntry, OutputStyle};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use config::{Config, ConfigError, ImagesConfig, MissingLimit, PathsConfig};
