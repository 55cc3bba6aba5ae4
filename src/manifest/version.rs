//! Release version newtype for the package manifest.
//!
//! Validates a dotted sequence of one to four decimal segments, e.g.
//! `0.1.0` or `3.6`. Comparison pads missing segments with zeroes so
//! `3.6` and `3.6.0` compare equal when a requirement is evaluated.

use super::error::{ManifestError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Maximum number of dot-separated segments in a version.
const MAX_SEGMENTS: usize = 4;

/// A validated static release version string.
///
/// Equality is literal (`3.6` != `3.6.0` as manifest fields); ordered
/// comparison against a requirement uses [`ReleaseVersion::compare`],
/// which pads the shorter version with zero segments.
///
/// # Examples
///
/// ```
/// use stubpack::manifest::version::ReleaseVersion;
///
/// let version: ReleaseVersion = "0.1.0".try_into().unwrap();
/// assert_eq!(version.as_str(), "0.1.0");
/// assert!(ReleaseVersion::try_from("abc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReleaseVersion {
    repr: String,
    segments: Vec<u32>,
}

impl ReleaseVersion {
    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.repr
    }

    /// Return the parsed numeric segments.
    #[must_use]
    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    /// Compare two versions segment-wise, treating missing trailing
    /// segments as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use stubpack::manifest::version::ReleaseVersion;
    ///
    /// let a = ReleaseVersion::try_from("3.6").unwrap();
    /// let b = ReleaseVersion::try_from("3.6.0").unwrap();
    /// assert_eq!(a.compare(&b), Ordering::Equal);
    ///
    /// let c = ReleaseVersion::try_from("3.10").unwrap();
    /// assert_eq!(c.compare(&a), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for index in 0..len {
            let lhs = self.segments.get(index).copied().unwrap_or(0);
            let rhs = other.segments.get(index).copied().unwrap_or(0);
            match lhs.cmp(&rhs) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl TryFrom<&str> for ReleaseVersion {
    type Error = ManifestError;

    fn try_from(value: &str) -> Result<Self> {
        let segments = parse_segments(value)?;
        Ok(Self {
            repr: value.to_owned(),
            segments,
        })
    }
}

impl TryFrom<String> for ReleaseVersion {
    type Error = ManifestError;

    fn try_from(value: String) -> Result<Self> {
        let segments = parse_segments(&value)?;
        Ok(Self {
            repr: value,
            segments,
        })
    }
}

impl From<ReleaseVersion> for String {
    fn from(version: ReleaseVersion) -> Self {
        version.repr
    }
}

impl AsRef<str> for ReleaseVersion {
    fn as_ref(&self) -> &str {
        &self.repr
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr)
    }
}

/// Parse and validate the dotted decimal segments of a version string.
fn parse_segments(value: &str) -> Result<Vec<u32>> {
    if value.is_empty() {
        return Err(ManifestError::InvalidVersion {
            value: value.to_owned(),
            reason: "version must not be empty".to_owned(),
        });
    }
    let raw: Vec<&str> = value.split('.').collect();
    if raw.len() > MAX_SEGMENTS {
        return Err(ManifestError::InvalidVersion {
            value: value.to_owned(),
            reason: format!("at most {MAX_SEGMENTS} segments allowed, got {}", raw.len()),
        });
    }
    raw.iter()
        .map(|segment| {
            if segment.is_empty() {
                return Err(ManifestError::InvalidVersion {
                    value: value.to_owned(),
                    reason: "empty segment".to_owned(),
                });
            }
            segment
                .parse::<u32>()
                .map_err(|_| ManifestError::InvalidVersion {
                    value: value.to_owned(),
                    reason: format!("segment \"{segment}\" is not a decimal number"),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single("3", &[3])]
    #[case::two("3.6", &[3, 6])]
    #[case::three("0.1.0", &[0, 1, 0])]
    #[case::four("1.2.3.4", &[1, 2, 3, 4])]
    fn accepts_valid_versions(#[case] value: &str, #[case] expected: &[u32]) {
        let version = ReleaseVersion::try_from(value);
        assert!(version.is_ok(), "expected Ok for {value}");
        assert_eq!(version.expect("checked above").segments(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::alphabetic("abc")]
    #[case::mixed("3.x")]
    #[case::trailing_dot("3.6.")]
    #[case::leading_dot(".3.6")]
    #[case::too_many_segments("1.2.3.4.5")]
    #[case::negative("-1.0")]
    fn rejects_malformed_versions(#[case] value: &str) {
        let result = ReleaseVersion::try_from(value);
        assert!(result.is_err(), "expected Err for {value:?}");
        let err = result.unwrap_err();
        assert!(matches!(err, ManifestError::InvalidVersion { .. }));
    }

    #[test]
    fn compare_pads_missing_segments_with_zero() {
        let short = ReleaseVersion::try_from("3.6").expect("known good");
        let long = ReleaseVersion::try_from("3.6.0").expect("known good");
        assert_eq!(short.compare(&long), Ordering::Equal);
    }

    #[test]
    fn compare_is_numeric_not_lexicographic() {
        let ten = ReleaseVersion::try_from("3.10").expect("known good");
        let nine = ReleaseVersion::try_from("3.9").expect("known good");
        assert_eq!(ten.compare(&nine), Ordering::Greater);
    }

    #[test]
    fn literal_equality_distinguishes_padding() {
        let short = ReleaseVersion::try_from("3.6").expect("known good");
        let long = ReleaseVersion::try_from("3.6.0").expect("known good");
        assert_ne!(short, long);
    }

    #[test]
    fn display_shows_original_repr() {
        let version = ReleaseVersion::try_from("0.1.0").expect("known good");
        assert_eq!(format!("{version}"), "0.1.0");
    }
}
