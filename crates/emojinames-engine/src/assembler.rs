//! Catalog assembly
//!
//! Walks the metadata groups in order and builds one category per kept
//! group. Members with an image become entries; members without one are
//! counted, and the run fails once the count goes over the missing limit.

use std::collections::HashSet;
use std::path::Path;

use emojinames_catalog::{ImageCatalog, UnicodeMetadata};
use emojinames_core::{
    Catalog, CatalogCategory, CatalogEntry, CodePointSequence, Diagnostic, DiagnosticCode,
    ImageMap, MissingLimit, Severity,
};

use crate::aliases::AliasFilter;
use crate::resolver::NameResolver;
use crate::standard::NameError;

/// Assembly errors
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("{}", describe_unknown_groups(.unknown))]
    UnknownGroups {
        /// Unrecognized names, in the order given
        unknown: Vec<String>,
        /// Every group the metadata knows about
        valid: Vec<String>,
    },

    #[error("skipped too many items: {count} sequences have no image (limit {limit})")]
    MissingLimitExceeded { count: usize, limit: usize },

    #[error(transparent)]
    Name(#[from] NameError),
}

impl AssembleError {
    /// The diagnostic to report for this error, if it has a stable code
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            Self::UnknownGroups { .. } => Some(Diagnostic::new(
                DiagnosticCode::UnknownGroup,
                Severity::Error,
                self.to_string(),
            )),
            Self::MissingLimitExceeded { .. } => Some(Diagnostic::new(
                DiagnosticCode::MissingLimitExceeded,
                Severity::Error,
                self.to_string(),
            )),
            Self::Name(_) => None,
        }
    }
}

fn describe_unknown_groups(unknown: &[String]) -> String {
    format!(
        "did not recognize {} group{}: {}",
        unknown.len(),
        if unknown.len() == 1 { "" } else { "s" },
        quote_list(unknown)
    )
}

/// Render names as `"a", "b"`
pub fn quote_list<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| format!("\"{}\"", name.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check omitted group names against the metadata's groups
///
/// Unknown names are reported in the order they were given.
pub fn validate_omit_groups<M>(metadata: &M, omit_groups: &[String]) -> Result<(), AssembleError>
where
    M: UnicodeMetadata + ?Sized,
{
    let valid = metadata.group_names();
    let known: HashSet<&str> = valid.iter().copied().collect();

    let unknown: Vec<String> = omit_groups
        .iter()
        .filter(|name| !known.contains(name.as_str()))
        .cloned()
        .collect();

    if unknown.is_empty() {
        return Ok(());
    }

    Err(AssembleError::UnknownGroups {
        unknown,
        valid: valid.into_iter().map(str::to_string).collect(),
    })
}

/// One line of the verbose missing-image listing
pub fn missing_line(seq: &CodePointSequence, codepoint_names: &[String]) -> String {
    format!("  {} ({})", seq.to_padded_hex(), codepoint_names.join(", "))
}

/// Assembly options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerOptions {
    /// Groups left out of the catalog
    pub omit_groups: Vec<String>,

    pub missing_limit: MissingLimit,

    /// Log every sequence that has no image
    pub verbose: bool,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            omit_groups: Vec::new(),
            missing_limit: MissingLimit::AtMost(20),
            verbose: false,
        }
    }
}

/// What happened to one group member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The member has an image and gets an entry
    Entry(CatalogEntry),

    /// No image, still within the missing limit
    Missing,

    /// No image, and the missing count is now over the limit
    Abort,
}

/// A finished catalog plus what was noticed on the way
#[derive(Debug, Clone)]
pub struct AssembledCatalog {
    pub catalog: Catalog,
    pub diagnostics: Vec<Diagnostic>,

    /// Members skipped for lack of an image
    pub missing: usize,

    /// Flag aliases that borrowed their target's image
    pub remapped_aliases: usize,
}

impl AssembledCatalog {
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warn)
            .count()
    }
}

/// Builds the catalog from metadata, images and names
pub struct CatalogAssembler<'a, M: ?Sized, I: ?Sized> {
    metadata: &'a M,
    images: &'a I,
    resolver: NameResolver,
    options: AssemblerOptions,
}

impl<'a, M, I> CatalogAssembler<'a, M, I>
where
    M: UnicodeMetadata + ?Sized,
    I: ImageCatalog + ?Sized,
{
    pub fn new(metadata: &'a M, images: &'a I, resolver: NameResolver, options: AssemblerOptions) -> Self {
        Self {
            metadata,
            images,
            resolver,
            options,
        }
    }

    /// Check every omitted group name against the metadata
    pub fn validate_omit_groups(&self) -> Result<(), AssembleError> {
        validate_omit_groups(self.metadata, &self.options.omit_groups)
    }

    /// Build the catalog
    ///
    /// Nothing is produced when the missing limit is exceeded.
    pub fn assemble(&self) -> Result<AssembledCatalog, AssembleError> {
        self.validate_omit_groups()?;

        let excluded = AliasFilter::exclusions(self.metadata, self.images);
        let remap = AliasFilter::remap_flag_aliases(self.metadata, self.images);

        let mut diagnostics = remap.diagnostics;
        let mut catalog = Catalog::new();
        let mut missing = 0;

        for group in self.metadata.groups() {
            if self.options.omit_groups.contains(&group.name) {
                tracing::debug!(group = %group.name, "omitting group");
                continue;
            }

            let mut category = CatalogCategory::new(group.name.as_str());
            let mut header_logged = false;

            for seq in &group.members {
                if excluded.contains(seq) {
                    continue;
                }

                let abort = match self.entry_outcome(seq, &remap.images, missing)? {
                    EntryOutcome::Entry(entry) => {
                        category.emojis.push(entry);
                        continue;
                    }
                    EntryOutcome::Missing => false,
                    EntryOutcome::Abort => true,
                };

                missing += 1;
                // The listing is console output, independent of the log filter
                if self.options.verbose {
                    if !header_logged {
                        println!("group {}", group.name);
                        header_logged = true;
                    }
                    println!("{}", missing_line(seq, &self.metadata.codepoint_names(seq)));
                }
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCode::MissingImage,
                        Severity::Info,
                        format!("no image for {}", seq),
                    )
                    .with_sequence(seq.clone())
                    .with_group(group.name.as_str()),
                );

                if abort {
                    let limit = match self.options.missing_limit {
                        MissingLimit::AtMost(limit) => limit,
                        MissingLimit::Unlimited => missing,
                    };
                    return Err(AssembleError::MissingLimitExceeded {
                        count: missing,
                        limit,
                    });
                }
            }

            tracing::debug!(group = %group.name, entries = category.emojis.len(), "assembled group");
            catalog.push(category);
        }

        Ok(AssembledCatalog {
            catalog,
            diagnostics,
            missing,
            remapped_aliases: remap.remapped.len(),
        })
    }

    /// Decide the fate of one member, given how many were missing before it
    pub fn entry_outcome(
        &self,
        seq: &CodePointSequence,
        images: &ImageMap,
        missing_before: usize,
    ) -> Result<EntryOutcome, AssembleError> {
        match images.get(seq) {
            Some(file) => Ok(EntryOutcome::Entry(self.entry(seq, file)?)),
            None if self.options.missing_limit.is_exceeded_by(missing_before + 1) => {
                Ok(EntryOutcome::Abort)
            }
            None => Ok(EntryOutcome::Missing),
        }
    }

    fn entry(&self, seq: &CodePointSequence, file: &str) -> Result<CatalogEntry, AssembleError> {
        let resolved = self.resolver.resolve(self.metadata, seq)?;
        tracing::trace!(sequence = %seq, name = %resolved.name, source = ?resolved.source, "named");

        // Image maps may hold paths; entries only carry the file name
        let file = Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file);

        Ok(CatalogEntry::new(file, seq.to_char_refs(), resolved.name))
    }
}
