//! The package manifest: identity, metadata, and contents of a stub
//! distribution.
//!
//! A manifest is a pure declarative value. Field validity is enforced
//! by the newtypes; cross-field consistency (no orphan data-file rule,
//! no duplicate namespace) is enforced here at construction, so a
//! [`PackageManifest`] that exists is consistent. Whether the declared
//! namespaces exist on disk is checked later by [`crate::resolve`].

use super::data_pattern::DataPattern;
use super::error::{ManifestError, Result};
use super::namespace::Namespace;
use super::package_name::PackageName;
use super::requirement::RuntimeRequirement;
use super::version::ReleaseVersion;
use std::collections::{BTreeMap, BTreeSet};

/// Identity fields of a distribution: what it is called and which
/// release this is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    /// Distribution name, unique within the target index.
    pub name: PackageName,
    /// Static release version.
    pub version: ReleaseVersion,
}

/// Descriptive metadata published alongside the distribution.
///
/// These fields are opaque to the packaging machinery; nothing is
/// derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Author display name.
    pub author: String,
    /// Contact address for the author.
    pub contact: String,
    /// Homepage URL.
    pub homepage: String,
    /// Name of or pointer to the license document.
    pub license: String,
    /// Human-readable summary.
    pub description: String,
}

/// The distributable contents: namespaces, their data-file rules, and
/// the runtime constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageContents {
    /// Importable namespaces, in declared order.
    pub namespaces: Vec<Namespace>,
    /// Per-namespace data-file globs. A namespace absent from this map
    /// is code-only and bundles no data files.
    pub data_files: BTreeMap<Namespace, Vec<DataPattern>>,
    /// Minimum-runtime constraint checked at build time.
    pub requires_runtime: RuntimeRequirement,
}

/// A validated, consistent package manifest.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use stubpack::manifest::data_pattern::DataPattern;
/// use stubpack::manifest::namespace::Namespace;
/// use stubpack::manifest::package_manifest::{
///     PackageContents, PackageIdentity, PackageManifest, PackageMetadata,
/// };
///
/// let identity = PackageIdentity {
///     name: "quantconnect-lean-stubs".try_into().unwrap(),
///     version: "0.1.0".try_into().unwrap(),
/// };
/// let metadata = PackageMetadata {
///     author: "QuantConnect Corp.".to_owned(),
///     contact: "support@quantconnect.com".to_owned(),
///     homepage: "https://www.quantconnect.com".to_owned(),
///     license: "LICENSE.md".to_owned(),
///     description: "Type stubs for the Lean engine".to_owned(),
/// };
/// let root = Namespace::try_from("QuantConnect").unwrap();
/// let contents = PackageContents {
///     namespaces: vec![root.clone()],
///     data_files: BTreeMap::from([(root, DataPattern::stub_defaults())]),
///     requires_runtime: ">=3.6".try_into().unwrap(),
/// };
/// let manifest = PackageManifest::new(identity, metadata, contents).unwrap();
/// assert_eq!(manifest.name().as_str(), "quantconnect-lean-stubs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    identity: PackageIdentity,
    metadata: PackageMetadata,
    contents: PackageContents,
}

impl PackageManifest {
    /// Construct a manifest, enforcing cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::NoNamespaces`] if no namespace is
    /// declared, [`ManifestError::DuplicateNamespace`] if one appears
    /// twice, and [`ManifestError::OrphanDataRule`] if a data-file rule
    /// names an undeclared namespace.
    pub fn new(
        identity: PackageIdentity,
        metadata: PackageMetadata,
        contents: PackageContents,
    ) -> Result<Self> {
        validate_contents(&contents)?;
        Ok(Self {
            identity,
            metadata,
            contents,
        })
    }

    /// Return the distribution name.
    #[must_use]
    pub fn name(&self) -> &PackageName {
        &self.identity.name
    }

    /// Return the release version.
    #[must_use]
    pub fn version(&self) -> &ReleaseVersion {
        &self.identity.version
    }

    /// Return the descriptive metadata.
    #[must_use]
    pub fn metadata(&self) -> &PackageMetadata {
        &self.metadata
    }

    /// Return the declared namespaces in declaration order.
    #[must_use]
    pub fn namespaces(&self) -> &[Namespace] {
        &self.contents.namespaces
    }

    /// Return the full data-file rule map.
    #[must_use]
    pub fn data_files(&self) -> &BTreeMap<Namespace, Vec<DataPattern>> {
        &self.contents.data_files
    }

    /// Return the data-file patterns for one namespace. A code-only
    /// namespace yields an empty slice.
    #[must_use]
    pub fn data_patterns(&self, namespace: &Namespace) -> &[DataPattern] {
        self.contents
            .data_files
            .get(namespace)
            .map_or(&[], Vec::as_slice)
    }

    /// Return the minimum-runtime constraint.
    #[must_use]
    pub fn requires_runtime(&self) -> &RuntimeRequirement {
        &self.contents.requires_runtime
    }
}

/// Check the cross-field invariants of manifest contents.
fn validate_contents(contents: &PackageContents) -> Result<()> {
    if contents.namespaces.is_empty() {
        return Err(ManifestError::NoNamespaces);
    }
    let mut seen = BTreeSet::new();
    for namespace in &contents.namespaces {
        if !seen.insert(namespace) {
            return Err(ManifestError::DuplicateNamespace {
                namespace: namespace.as_str().to_owned(),
            });
        }
    }
    for namespace in contents.data_files.keys() {
        if !seen.contains(namespace) {
            return Err(ManifestError::OrphanDataRule {
                namespace: namespace.as_str().to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "package_manifest_tests.rs"]
mod tests;
