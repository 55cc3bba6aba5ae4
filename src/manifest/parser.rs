//! Manifest file parsing for stub distributions.
//!
//! The well-known entry point is a `stubpack.toml` file at the package
//! root. Newtype validation runs during deserialization, so malformed
//! fields are rejected at parse time; the cross-field invariants are
//! then enforced by [`PackageManifest::new`].

use super::data_pattern::DataPattern;
use super::namespace::Namespace;
use super::package_manifest::{
    PackageContents, PackageIdentity, PackageManifest, PackageMetadata,
};
use super::package_name::PackageName;
use super::requirement::RuntimeRequirement;
use super::version::ReleaseVersion;
use crate::error::{PackagingError, Result};
use camino::Utf8Path;
use log::trace;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Filename of the manifest entry point under a package root.
pub const MANIFEST_FILE_NAME: &str = "stubpack.toml";

/// On-disk manifest layout: a `[package]` table plus an optional
/// `[data-files]` table keyed by namespace.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawManifest {
    package: RawPackage,
    #[serde(default)]
    data_files: BTreeMap<Namespace, Vec<DataPattern>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawPackage {
    name: PackageName,
    version: ReleaseVersion,
    author: String,
    contact: String,
    homepage: String,
    license: String,
    description: String,
    requires_runtime: RuntimeRequirement,
    namespaces: Vec<Namespace>,
}

/// Parse manifest TOML into a validated [`PackageManifest`].
///
/// # Errors
///
/// Returns [`PackagingError::InvalidManifestFile`] if the TOML is
/// malformed or a field fails newtype validation, and a
/// [`PackagingError::Manifest`] if a cross-field invariant is violated.
///
/// # Examples
///
/// ```
/// use stubpack::manifest::parser::parse_manifest;
///
/// let toml = r#"
/// [package]
/// name = "quantconnect-lean-stubs"
/// version = "0.1.0"
/// author = "QuantConnect Corp."
/// contact = "support@quantconnect.com"
/// homepage = "https://www.quantconnect.com"
/// license = "LICENSE.md"
/// description = "Python type definitions for the Lean algorithmic trading engine"
/// requires-runtime = ">=3.6"
/// namespaces = ["QuantConnect"]
///
/// [data-files]
/// "QuantConnect" = ["py.typed", "*.pyi"]
/// "#;
/// let manifest = parse_manifest(toml).expect("valid manifest");
/// assert_eq!(manifest.name().as_str(), "quantconnect-lean-stubs");
/// ```
pub fn parse_manifest(contents: &str) -> Result<PackageManifest> {
    let raw: RawManifest =
        toml::from_str(contents).map_err(|e| PackagingError::InvalidManifestFile {
            path: Utf8Path::new(MANIFEST_FILE_NAME).to_owned(),
            reason: e.to_string(),
        })?;
    let manifest = build_manifest(raw)?;
    trace!(
        "parse_manifest: {} v{} with {} namespaces",
        manifest.name(),
        manifest.version(),
        manifest.namespaces().len()
    );
    Ok(manifest)
}

/// Load and parse the `stubpack.toml` under `package_root`.
///
/// # Errors
///
/// Returns [`PackagingError::ManifestFileNotFound`] if the file is
/// absent, [`PackagingError::Io`] if it cannot be read, and the
/// [`parse_manifest`] errors otherwise.
pub fn load_manifest(package_root: &Utf8Path) -> Result<PackageManifest> {
    let path = package_root.join(MANIFEST_FILE_NAME);
    if !path.is_file() {
        return Err(PackagingError::ManifestFileNotFound { path });
    }
    let contents = std::fs::read_to_string(&path)?;
    parse_manifest(&contents).map_err(|e| match e {
        PackagingError::InvalidManifestFile { reason, .. } => {
            PackagingError::InvalidManifestFile { path, reason }
        }
        other => other,
    })
}

/// Assemble the validated manifest from its raw layout.
fn build_manifest(raw: RawManifest) -> Result<PackageManifest> {
    let identity = PackageIdentity {
        name: raw.package.name,
        version: raw.package.version,
    };
    let metadata = PackageMetadata {
        author: raw.package.author,
        contact: raw.package.contact,
        homepage: raw.package.homepage,
        license: raw.package.license,
        description: raw.package.description,
    };
    let contents = PackageContents {
        namespaces: raw.package.namespaces,
        data_files: raw.data_files,
        requires_runtime: raw.package.requires_runtime,
    };
    Ok(PackageManifest::new(identity, metadata, contents)?)
}
