//! Distribution name newtype for the package manifest.
//!
//! Validates that the value is a non-empty ASCII string of letters,
//! digits, hyphens, underscores, and full stops that starts and ends
//! with a letter or digit, matching common distribution-index naming
//! rules.

use super::error::{ManifestError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated distribution name.
///
/// # Examples
///
/// ```
/// use stubpack::manifest::package_name::PackageName;
///
/// let name: PackageName = "quantconnect-lean-stubs".try_into().unwrap();
/// assert_eq!(name.as_str(), "quantconnect-lean-stubs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    /// Return the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for PackageName {
    type Error = ManifestError;

    fn try_from(value: &str) -> Result<Self> {
        validate_package_name(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for PackageName {
    type Error = ManifestError;

    fn try_from(value: String) -> Result<Self> {
        validate_package_name(&value)?;
        Ok(Self(value))
    }
}

impl From<PackageName> for String {
    fn from(name: PackageName) -> Self {
        name.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate that `value` is a well-formed distribution name.
fn validate_package_name(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ManifestError::InvalidPackageName {
            value: value.to_owned(),
            reason: "name must not be empty".to_owned(),
        });
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.'))
    {
        return Err(ManifestError::InvalidPackageName {
            value: value.to_owned(),
            reason: format!("disallowed character '{bad}'"),
        });
    }
    let starts_ok = value.chars().next().is_some_and(|c| c.is_ascii_alphanumeric());
    let ends_ok = value.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
    if !starts_ok || !ends_ok {
        return Err(ManifestError::InvalidPackageName {
            value: value.to_owned(),
            reason: "name must start and end with a letter or digit".to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_name() {
        let name = PackageName::try_from("quantconnect-lean-stubs");
        assert!(name.is_ok());
        assert_eq!(
            name.expect("checked above").as_str(),
            "quantconnect-lean-stubs"
        );
    }

    #[test]
    fn accepts_dotted_name() {
        let name = PackageName::try_from("engine.stubs");
        assert!(name.is_ok());
    }

    #[test]
    fn rejects_empty_string() {
        let result = PackageName::try_from("");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_disallowed_character() {
        let result = PackageName::try_from("engine stubs");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ManifestError::InvalidPackageName { .. }));
    }

    #[test]
    fn rejects_leading_separator() {
        let result = PackageName::try_from("-engine-stubs");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_trailing_separator() {
        let result = PackageName::try_from("engine-stubs.");
        assert!(result.is_err());
    }

    #[test]
    fn display_shows_inner_value() {
        let name = PackageName::try_from("lean-stubs").expect("known good");
        assert_eq!(format!("{name}"), "lean-stubs");
    }

    #[test]
    fn from_owned_string_accepts_valid() {
        let name = PackageName::try_from(String::from("lean_stubs"));
        assert!(name.is_ok());
    }
}
