//! Diagnostic codes recorded while building a catalog
//!
//! Codes are stable strings; tools grep run output for them.
//! Add new codes rather than renaming existing ones.

use serde::{Deserialize, Serialize};

use crate::sequence::CodePointSequence;

/// Diagnostic code registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    /// A regional indicator alias already has its own image, so it is not remapped
    AliasHasImage,

    /// A catalogued sequence has no image file
    MissingImage,

    /// An omitted group name is not a known emoji group
    UnknownGroup,

    /// Too many sequences were missing images
    MissingLimitExceeded,
}

impl DiagnosticCode {
    /// Get the diagnostic code as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AliasHasImage => "ALIAS_HAS_IMAGE",
            Self::MissingImage => "MISSING_IMAGE",
            Self::UnknownGroup => "UNKNOWN_GROUP",
            Self::MissingLimitExceeded => "MISSING_LIMIT_EXCEEDED",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with structured metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable diagnostic code
    pub code: DiagnosticCode,

    /// Severity level
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Sequence the diagnostic is about, if any
    pub sequence: Option<CodePointSequence>,

    /// Emoji group the sequence was found in, if any
    pub group: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic with minimal fields
    pub fn new(code: DiagnosticCode, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            sequence: None,
            group: None,
        }
    }

    /// Set the sequence
    pub fn with_sequence(mut self, sequence: CodePointSequence) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Set the group
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}
