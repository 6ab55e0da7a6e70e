//! Image catalog backed by a directory of emoji images
//!
//! Images follow the `<prefix><hex>_<hex>.<extension>` convention, e.g.
//! `emoji_u1f468_200d_1f469.png`. File names never carry the emoji
//! variation selector, so every parsed sequence is mapped back to its
//! canonical form through the metadata provider.
//!
//! Alias and exclusion tables use the same underscore hex notation:
//!
//! ```text
//! # alias;target
//! 1f1e7_1f1fb;1f1f3_1f1f4  # BV -> NO
//! ```

use std::path::{Path, PathBuf};

use emojinames_core::{AliasMap, CodePointSequence, ExclusionSet, ImageMap};
use walkdir::WalkDir;

use crate::provider::{ImageCatalog, ProviderError, UnicodeMetadata};

/// Emoji images found in a single directory
#[derive(Debug, Clone, Default)]
pub struct ImageDirectory {
    root: PathBuf,
    images: ImageMap,
    aliases: AliasMap,
    excluded: ExclusionSet,
}

impl ImageDirectory {
    /// Scan the top level of `dir` for emoji images
    ///
    /// Files that do not match the naming convention are skipped. When two
    /// files canonicalize to the same sequence the first (in file name order)
    /// wins.
    pub fn scan<M>(dir: &Path, extension: &str, prefix: &str, metadata: &M) -> Result<Self, ProviderError>
    where
        M: UnicodeMetadata + ?Sized,
    {
        if !dir.is_dir() {
            return Err(ProviderError::DirectoryNotFound(dir.display().to_string()));
        }

        let suffix = format!(".{}", extension);
        let mut images = ImageMap::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // A dangling link is one bad image, not a bad directory
                Err(e) if e.depth() > 0 => {
                    tracing::warn!(error = %e, "skipping unreadable image entry");
                    continue;
                }
                Err(e) => return Err(ProviderError::io(dir.display(), e)),
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };

            let Some(seq) = parse_image_name(file_name, prefix, &suffix) else {
                tracing::debug!(file = file_name, "skipping file that is not an emoji image");
                continue;
            };

            let canonical = metadata.canonical_sequence(&seq);
            if let Some(existing) = images.get(&canonical) {
                tracing::warn!(
                    file = file_name,
                    existing = %existing,
                    sequence = %canonical,
                    "duplicate image for sequence, keeping the first"
                );
                continue;
            }
            images.insert(canonical, file_name.to_string());
        }

        tracing::info!(dir = %dir.display(), images = images.len(), "scanned image directory");

        Ok(Self {
            root: dir.to_path_buf(),
            images,
            aliases: AliasMap::new(),
            excluded: ExclusionSet::new(),
        })
    }

    /// Load the alias table from a file
    pub fn with_aliases_file<M>(self, path: &Path, metadata: &M) -> Result<Self, ProviderError>
    where
        M: UnicodeMetadata + ?Sized,
    {
        let text = std::fs::read_to_string(path).map_err(|e| ProviderError::io(path.display(), e))?;
        self.with_aliases(&text, &path.display().to_string(), metadata)
    }

    /// Load the alias table from `alias;target` lines
    pub fn with_aliases<M>(mut self, text: &str, source: &str, metadata: &M) -> Result<Self, ProviderError>
    where
        M: UnicodeMetadata + ?Sized,
    {
        for (line_no, line) in data_lines(text) {
            let (alias, target) = line
                .split_once(';')
                .ok_or_else(|| ProviderError::parse(source, line_no, "expected '<alias>;<target>'"))?;

            let alias = parse_sequence(alias, source, line_no)?;
            let target = parse_sequence(target, source, line_no)?;

            self.aliases.insert(
                metadata.canonical_sequence(&alias),
                metadata.canonical_sequence(&target),
            );
        }

        Ok(self)
    }

    /// Load the excluded sequences from a file
    pub fn with_excluded_file<M>(self, path: &Path, metadata: &M) -> Result<Self, ProviderError>
    where
        M: UnicodeMetadata + ?Sized,
    {
        let text = std::fs::read_to_string(path).map_err(|e| ProviderError::io(path.display(), e))?;
        self.with_excluded(&text, &path.display().to_string(), metadata)
    }

    /// Load excluded sequences, one per line
    pub fn with_excluded<M>(mut self, text: &str, source: &str, metadata: &M) -> Result<Self, ProviderError>
    where
        M: UnicodeMetadata + ?Sized,
    {
        for (line_no, line) in data_lines(text) {
            let seq = parse_sequence(line, source, line_no)?;
            self.excluded.insert(metadata.canonical_sequence(&seq));
        }

        Ok(self)
    }

    /// Directory that was scanned
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageCatalog for ImageDirectory {
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

/// Parse `emoji_u1f600.png` style names
fn parse_image_name(file_name: &str, prefix: &str, suffix: &str) -> Option<CodePointSequence> {
    let hex = file_name.strip_prefix(prefix)?.strip_suffix(suffix)?;
    CodePointSequence::parse_hex(hex).ok()
}

/// Non-empty lines with `#` comments removed, numbered from 1
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(idx, line)| {
        let data = line.split('#').next().unwrap_or("").trim();
        (!data.is_empty()).then_some((idx + 1, data))
    })
}

fn parse_sequence(text: &str, source: &str, line_no: usize) -> Result<CodePointSequence, ProviderError> {
    CodePointSequence::parse_hex(text).map_err(|e| ProviderError::parse(source, line_no, e.to_string()))
}
