//! Data-file resolution against an on-disk package tree.
//!
//! For each declared namespace the resolver maps the namespace to a
//! directory under the package root and expands its data-file globs
//! against the regular files directly inside that directory. A missing
//! directory fails the run; a glob matching zero files does not. The
//! result is a [`DistPlan`] describing exactly what an external
//! archiver should bundle.

use crate::error::{PackagingError, Result};
use crate::manifest::data_pattern::DataPattern;
use crate::manifest::namespace::Namespace;
use crate::manifest::package_manifest::PackageManifest;
use crate::manifest::package_name::PackageName;
use crate::manifest::version::ReleaseVersion;
use camino::Utf8Path;
use log::trace;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// The resolved contents of a distribution: which files each namespace
/// bundles, keyed deterministically.
///
/// File lists are sorted and deduplicated, so resolving the same tree
/// twice yields equal plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistPlan {
    name: PackageName,
    version: ReleaseVersion,
    files: BTreeMap<Namespace, Vec<String>>,
}

impl DistPlan {
    /// Return the distribution name.
    #[must_use]
    pub fn name(&self) -> &PackageName {
        &self.name
    }

    /// Return the release version.
    #[must_use]
    pub fn version(&self) -> &ReleaseVersion {
        &self.version
    }

    /// Return the per-namespace resolved file names.
    #[must_use]
    pub fn files(&self) -> &BTreeMap<Namespace, Vec<String>> {
        &self.files
    }

    /// Return the total number of resolved data files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Serialize the plan to pretty-printed JSON for the external
    /// archiver.
    ///
    /// # Errors
    ///
    /// Returns [`PackagingError::Serialization`] if serialization
    /// fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Resolve the data files of every namespace in `manifest` against the
/// tree rooted at `package_root`.
///
/// Resolution is all-or-nothing: the first missing namespace directory
/// aborts the run and no partial plan is produced.
///
/// # Errors
///
/// Returns [`PackagingError::NamespaceDirectoryMissing`] if a declared
/// namespace has no directory, or [`PackagingError::Io`] if a directory
/// cannot be read.
pub fn resolve_data_files(
    manifest: &PackageManifest,
    package_root: &Utf8Path,
) -> Result<DistPlan> {
    let mut files = BTreeMap::new();

    for namespace in manifest.namespaces() {
        let directory = package_root.join(namespace.relative_path());
        if !directory.is_dir() {
            return Err(PackagingError::NamespaceDirectoryMissing {
                namespace: namespace.clone(),
                path: directory,
            });
        }

        let matched = collect_matches(&directory, manifest.data_patterns(namespace))?;
        trace!(
            "resolve_data_files: {namespace} -> {} data files",
            matched.len()
        );
        files.insert(namespace.clone(), matched);
    }

    Ok(DistPlan {
        name: manifest.name().clone(),
        version: manifest.version().clone(),
        files,
    })
}

/// Match the regular files directly inside `directory` against
/// `patterns`, deduplicating across patterns.
fn collect_matches(directory: &Utf8Path, patterns: &[DataPattern]) -> Result<Vec<String>> {
    if patterns.is_empty() {
        // Code-only namespace: nothing to bundle.
        return Ok(Vec::new());
    }

    let mut matched = BTreeSet::new();
    for entry in directory.read_dir_utf8()? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if patterns.iter().any(|pattern| pattern.matches(file_name)) {
            matched.insert(file_name.to_owned());
        }
    }

    Ok(matched.into_iter().collect())
}
