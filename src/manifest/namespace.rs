//! Namespace newtype for importable package paths.
//!
//! Validates a dot-delimited hierarchy such as `QuantConnect.Data`:
//! every component must be a valid identifier (letter or underscore
//! first, then letters, digits, or underscores). The namespace maps
//! onto an on-disk directory via [`Namespace::relative_path`].

use super::error::{ManifestError, Result};
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated dot-delimited namespace path.
///
/// Namespaces are totally ordered so they can key the per-namespace
/// data-file rule map deterministically.
///
/// # Examples
///
/// ```
/// use stubpack::manifest::namespace::Namespace;
///
/// let ns: Namespace = "QuantConnect.Data".try_into().unwrap();
/// assert_eq!(ns.as_str(), "QuantConnect.Data");
/// assert_eq!(ns.relative_path().as_str(), "QuantConnect/Data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// Return the namespace as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Iterate over the dot-separated components.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Return the directory path for this namespace relative to the
    /// package root, with one directory per component.
    ///
    /// # Examples
    ///
    /// ```
    /// use stubpack::manifest::namespace::Namespace;
    ///
    /// let ns = Namespace::try_from("QuantConnect.Securities").unwrap();
    /// assert_eq!(ns.relative_path().as_str(), "QuantConnect/Securities");
    /// ```
    #[must_use]
    pub fn relative_path(&self) -> Utf8PathBuf {
        let mut path = Utf8PathBuf::new();
        for component in self.components() {
            path.push(component);
        }
        path
    }
}

impl TryFrom<&str> for Namespace {
    type Error = ManifestError;

    fn try_from(value: &str) -> Result<Self> {
        validate_namespace(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for Namespace {
    type Error = ManifestError;

    fn try_from(value: String) -> Result<Self> {
        validate_namespace(&value)?;
        Ok(Self(value))
    }
}

impl From<Namespace> for String {
    fn from(namespace: Namespace) -> Self {
        namespace.0
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate that `value` is a well-formed dot-delimited namespace.
fn validate_namespace(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ManifestError::InvalidNamespace {
            value: value.to_owned(),
            reason: "namespace must not be empty".to_owned(),
        });
    }
    for component in value.split('.') {
        validate_component(value, component)?;
    }
    Ok(())
}

/// Validate a single dot-separated component of a namespace.
fn validate_component(value: &str, component: &str) -> Result<()> {
    let mut chars = component.chars();
    let Some(first) = chars.next() else {
        return Err(ManifestError::InvalidNamespace {
            value: value.to_owned(),
            reason: "empty component".to_owned(),
        });
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(ManifestError::InvalidNamespace {
            value: value.to_owned(),
            reason: format!("component \"{component}\" must start with a letter or underscore"),
        });
    }
    if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(ManifestError::InvalidNamespace {
            value: value.to_owned(),
            reason: format!("disallowed character '{bad}' in component \"{component}\""),
        });
    }
    Ok(())
}
