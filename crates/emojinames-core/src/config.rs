//! Configuration schema (emojinames.toml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default groups left out of the catalog
pub const DEFAULT_OMIT_GROUPS: [&str; 2] = ["Misc", "Flags"];

/// Default number of missing images tolerated before failing
pub const DEFAULT_MISSING_LIMIT: i64 = 20;

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory containing the emoji images
    #[serde(default = "default_src_dir")]
    pub src_dir: PathBuf,

    /// Directory the catalog is written into
    #[serde(default = "default_dst_dir")]
    pub dst_dir: PathBuf,

    /// File name of the catalog inside `dst_dir`
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Unicode emoji-test.txt (groups, sequences, names)
    #[serde(default = "default_emoji_test")]
    pub emoji_test: PathBuf,

    /// Unicode UnicodeData.txt (code point names), optional
    #[serde(default)]
    pub unicode_data: Option<PathBuf>,

    /// Alias table (`alias;target` per line), optional
    #[serde(default)]
    pub aliases: Option<PathBuf>,

    /// Excluded sequences (one per line), optional
    #[serde(default)]
    pub excluded: Option<PathBuf>,
}

fn default_src_dir() -> PathBuf {
    PathBuf::from("build/compressed_pngs")
}

fn default_dst_dir() -> PathBuf {
    PathBuf::from("emoji")
}

fn default_output_file() -> String {
    "data.json".to_string()
}

fn default_emoji_test() -> PathBuf {
    PathBuf::from("data/emoji-test.txt")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            dst_dir: default_dst_dir(),
            output_file: default_output_file(),
            emoji_test: default_emoji_test(),
            unicode_data: None,
            aliases: None,
            excluded: None,
        }
    }
}

impl PathsConfig {
    /// Full path of the catalog file
    pub fn output_path(&self) -> PathBuf {
        self.dst_dir.join(&self.output_file)
    }
}

/// Image file naming convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesConfig {
    /// File extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File name prefix before the hex sequence
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_extension() -> String {
    "png".to_string()
}

fn default_prefix() -> String {
    "emoji_u".to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            prefix: default_prefix(),
        }
    }
}

/// How many sequences may lack an image before the run fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingLimit {
    /// Never fail on missing images
    Unlimited,

    /// Fail once the count goes above this value
    AtMost(usize),
}

impl MissingLimit {
    /// Negative values mean unlimited
    pub fn from_signed(limit: i64) -> Self {
        if limit < 0 {
            Self::Unlimited
        } else {
            Self::AtMost(limit as usize)
        }
    }

    /// Whether `missing` images is more than this limit allows
    pub fn is_exceeded_by(&self, missing: usize) -> bool {
        match self {
            Self::Unlimited => false,
            Self::AtMost(limit) => missing > *limit,
        }
    }
}

impl std::fmt::Display for MissingLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::AtMost(limit) => write!(f, "{}", limit),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Missing images tolerated before failing, negative for no limit
    #[serde(default = "default_missing_limit")]
    pub missing_limit: i64,

    /// Emoji groups left out of the catalog
    #[serde(default = "default_omit_groups")]
    pub omit_groups: Vec<String>,

    /// Indent the written JSON
    #[serde(default)]
    pub pretty_print: bool,

    /// Input and output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Image naming convention
    #[serde(default)]
    pub images: ImagesConfig,
}

fn default_missing_limit() -> i64 {
    DEFAULT_MISSING_LIMIT
}

fn default_omit_groups() -> Vec<String> {
    DEFAULT_OMIT_GROUPS.iter().map(|g| g.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            missing_limit: default_missing_limit(),
            omit_groups: default_omit_groups(),
            pretty_print: false,
            paths: PathsConfig::default(),
            images: ImagesConfig::default(),
        }
    }
}

impl Config {
    /// Load config from TOML file
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        let mut config = Self::from_toml(&contents)?;

        if let Some(parent) = path.parent() {
            config.resolve_relative_to(parent);
        }

        Ok(config)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Missing image budget as a typed limit
    pub fn missing_limit(&self) -> MissingLimit {
        MissingLimit::from_signed(self.missing_limit)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };

        resolve(&mut self.paths.src_dir);
        resolve(&mut self.paths.dst_dir);
        resolve(&mut self.paths.emoji_test);
        for path in [
            &mut self.paths.unicode_data,
            &mut self.paths.aliases,
            &mut self.paths.excluded,
        ]
        .into_iter()
        .flatten()
        {
            resolve(path);
        }
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
