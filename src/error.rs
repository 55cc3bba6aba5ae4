//! Crate-level error types for manifest loading, data-file resolution,
//! and the runtime environment check.
//!
//! Every error here is fatal to a packaging run; nothing is caught,
//! recovered, or retried. Field validation errors from the manifest
//! model convert in via `From`.

use crate::manifest::error::ManifestError;
use crate::manifest::namespace::Namespace;
use crate::manifest::requirement::RuntimeRequirement;
use crate::manifest::version::ReleaseVersion;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, checking, or resolving a stub
/// distribution.
#[derive(Debug, Error)]
pub enum PackagingError {
    /// A manifest field or cross-field invariant is invalid.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// No manifest file was found at the expected location.
    #[error("manifest file not found at {path}")]
    ManifestFileNotFound {
        /// Path where the manifest was expected.
        path: Utf8PathBuf,
    },

    /// The manifest file exists but could not be parsed.
    #[error("invalid manifest file at {path}: {reason}")]
    InvalidManifestFile {
        /// Path to the malformed manifest.
        path: Utf8PathBuf,
        /// Description of the parse error.
        reason: String,
    },

    /// A declared namespace has no corresponding directory under the
    /// package root.
    #[error("namespace {namespace} has no directory at {path}")]
    NamespaceDirectoryMissing {
        /// The namespace whose directory is absent.
        namespace: Namespace,
        /// Path that was expected to be a directory.
        path: Utf8PathBuf,
    },

    /// The active runtime version could not be determined.
    #[error("runtime probe failed: {reason}")]
    RuntimeProbe {
        /// Description of the probe failure.
        reason: String,
    },

    /// The active runtime does not satisfy the manifest's constraint.
    #[error("runtime version {found} does not satisfy requirement {required}")]
    RuntimeMismatch {
        /// The constraint declared by the manifest.
        required: RuntimeRequirement,
        /// The version the probe reported.
        found: ReleaseVersion,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the distribution plan failed.
    #[error("plan serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using [`PackagingError`].
pub type Result<T> = std::result::Result<T, PackagingError>;
