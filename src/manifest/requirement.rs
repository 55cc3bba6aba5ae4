//! Minimum-runtime requirement newtype.
//!
//! Parses a version constraint such as `>=3.6`: a comparator followed
//! by a [`ReleaseVersion`]. The constraint is checked against the
//! active runtime by [`crate::environment::check_runtime`].

use super::error::{ManifestError, Result};
use super::version::ReleaseVersion;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The comparison operator of a runtime requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `>=` — at least the stated version.
    GreaterEq,
    /// `>` — strictly newer than the stated version.
    Greater,
    /// `<=` — at most the stated version.
    LessEq,
    /// `<` — strictly older than the stated version.
    Less,
    /// `==` — exactly the stated version (padded comparison).
    Equal,
    /// `!=` — anything but the stated version (padded comparison).
    NotEqual,
}

impl Comparator {
    /// Return the operator's source form.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::GreaterEq => ">=",
            Comparator::Greater => ">",
            Comparator::LessEq => "<=",
            Comparator::Less => "<",
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
        }
    }

    /// Whether `ordering` (version compared to the requirement's
    /// version) satisfies this comparator.
    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Comparator::GreaterEq => ordering != Ordering::Less,
            Comparator::Greater => ordering == Ordering::Greater,
            Comparator::LessEq => ordering != Ordering::Greater,
            Comparator::Less => ordering == Ordering::Less,
            Comparator::Equal => ordering == Ordering::Equal,
            Comparator::NotEqual => ordering != Ordering::Equal,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A validated runtime version constraint.
///
/// # Examples
///
/// ```
/// use stubpack::manifest::requirement::RuntimeRequirement;
/// use stubpack::manifest::version::ReleaseVersion;
///
/// let requirement: RuntimeRequirement = ">=3.6".try_into().unwrap();
/// let runtime = ReleaseVersion::try_from("3.9.7").unwrap();
/// assert!(requirement.is_satisfied_by(&runtime));
///
/// assert!(RuntimeRequirement::try_from(">=abc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuntimeRequirement {
    comparator: Comparator,
    version: ReleaseVersion,
}

impl RuntimeRequirement {
    /// Return the comparison operator.
    #[must_use]
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    /// Return the version the constraint compares against.
    #[must_use]
    pub fn version(&self) -> &ReleaseVersion {
        &self.version
    }

    /// Whether `runtime` satisfies this constraint. Comparison pads
    /// missing trailing segments with zeroes, so `>=3.6` accepts
    /// `3.6.0`.
    #[must_use]
    pub fn is_satisfied_by(&self, runtime: &ReleaseVersion) -> bool {
        self.comparator.accepts(runtime.compare(&self.version))
    }
}

impl TryFrom<&str> for RuntimeRequirement {
    type Error = ManifestError;

    fn try_from(value: &str) -> Result<Self> {
        parse_requirement(value)
    }
}

impl TryFrom<String> for RuntimeRequirement {
    type Error = ManifestError;

    fn try_from(value: String) -> Result<Self> {
        parse_requirement(&value)
    }
}

impl From<RuntimeRequirement> for String {
    fn from(requirement: RuntimeRequirement) -> Self {
        requirement.to_string()
    }
}

impl fmt::Display for RuntimeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator, self.version)
    }
}

/// Parse a requirement string into comparator and version parts.
fn parse_requirement(value: &str) -> Result<RuntimeRequirement> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ManifestError::InvalidRequirement {
            value: value.to_owned(),
            reason: "requirement must not be empty".to_owned(),
        });
    }
    let (comparator, rest) = split_comparator(trimmed).ok_or_else(|| {
        ManifestError::InvalidRequirement {
            value: value.to_owned(),
            reason: "expected a comparator such as \">=\"".to_owned(),
        }
    })?;
    let version =
        ReleaseVersion::try_from(rest.trim()).map_err(|e| ManifestError::InvalidRequirement {
            value: value.to_owned(),
            reason: e.to_string(),
        })?;
    Ok(RuntimeRequirement {
        comparator,
        version,
    })
}

/// Split a trimmed requirement into its comparator and version text.
/// Two-character operators are tried before their one-character
/// prefixes.
fn split_comparator(value: &str) -> Option<(Comparator, &str)> {
    const OPERATORS: [(&str, Comparator); 6] = [
        (">=", Comparator::GreaterEq),
        ("<=", Comparator::LessEq),
        ("==", Comparator::Equal),
        ("!=", Comparator::NotEqual),
        (">", Comparator::Greater),
        ("<", Comparator::Less),
    ];
    OPERATORS
        .iter()
        .find_map(|(symbol, comparator)| value.strip_prefix(symbol).map(|rest| (*comparator, rest)))
}
