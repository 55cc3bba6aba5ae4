//! Data-file glob pattern newtype.
//!
//! A pattern is matched against filenames directly inside one namespace
//! directory, so it must be a bare filename glob: no path separators
//! and no parent-directory components. The domain defaults are the
//! `py.typed` type-marker file and the `*.pyi` stub-file pattern.

use super::error::{ManifestError, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel filename signalling that a namespace carries authoritative
/// type information.
pub const TYPE_MARKER_FILE: &str = "py.typed";

/// Glob matching the stub-definition files of a namespace.
pub const STUB_FILE_GLOB: &str = "*.pyi";

/// A validated filename glob for one namespace's data files.
///
/// # Examples
///
/// ```
/// use stubpack::manifest::data_pattern::DataPattern;
///
/// let stubs: DataPattern = "*.pyi".try_into().unwrap();
/// assert!(stubs.matches("Symbol.pyi"));
/// assert!(!stubs.matches("Symbol.py"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataPattern {
    raw: String,
    glob: Pattern,
}

impl DataPattern {
    /// The `py.typed` type-marker pattern.
    #[must_use]
    pub fn type_marker() -> Self {
        Self::known_good(TYPE_MARKER_FILE)
    }

    /// The `*.pyi` stub-file pattern.
    #[must_use]
    pub fn stub_files() -> Self {
        Self::known_good(STUB_FILE_GLOB)
    }

    /// The default two-pattern rule for a stub-carrying namespace: the
    /// type marker plus all stub files.
    #[must_use]
    pub fn stub_defaults() -> Vec<Self> {
        vec![Self::type_marker(), Self::stub_files()]
    }

    /// Return the pattern as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `filename` matches this pattern.
    #[must_use]
    pub fn matches(&self, filename: &str) -> bool {
        self.glob.matches(filename)
    }

    /// Build a pattern from a literal this module controls.
    fn known_good(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            glob: Pattern::new(raw).expect("module constants compile as globs"),
        }
    }
}

impl TryFrom<&str> for DataPattern {
    type Error = ManifestError;

    fn try_from(value: &str) -> Result<Self> {
        let glob = validate_pattern(value)?;
        Ok(Self {
            raw: value.to_owned(),
            glob,
        })
    }
}

impl TryFrom<String> for DataPattern {
    type Error = ManifestError;

    fn try_from(value: String) -> Result<Self> {
        let glob = validate_pattern(&value)?;
        Ok(Self {
            raw: value,
            glob,
        })
    }
}

impl From<DataPattern> for String {
    fn from(pattern: DataPattern) -> Self {
        pattern.raw
    }
}

impl AsRef<str> for DataPattern {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for DataPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Validate that `value` is a bare filename glob and compile it.
fn validate_pattern(value: &str) -> Result<Pattern> {
    if value.is_empty() {
        return Err(ManifestError::InvalidDataPattern {
            value: value.to_owned(),
            reason: "pattern must not be empty".to_owned(),
        });
    }
    if value.contains('/') || value.contains('\\') {
        return Err(ManifestError::InvalidDataPattern {
            value: value.to_owned(),
            reason: "pattern must not contain path separators".to_owned(),
        });
    }
    if value == ".." || value == "." {
        return Err(ManifestError::InvalidDataPattern {
            value: value.to_owned(),
            reason: "pattern must name files, not directories".to_owned(),
        });
    }
    Pattern::new(value).map_err(|e| ManifestError::InvalidDataPattern {
        value: value.to_owned(),
        reason: e.to_string(),
    })
}
