//! Error types for manifest field and cross-field validation.
//!
//! Each variant identifies the invalid input and the constraint that was
//! violated. These are the configuration errors of the manifest model;
//! filesystem and environment failures live in [`crate::error`].

use thiserror::Error;

/// Errors arising from invalid manifest field values or inconsistent
/// manifest contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// A distribution name is empty or contains disallowed characters.
    #[error("invalid package name \"{value}\": {reason}")]
    InvalidPackageName {
        /// The rejected name string.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// A namespace path is empty or has a malformed component.
    #[error("invalid namespace \"{value}\": {reason}")]
    InvalidNamespace {
        /// The rejected namespace string.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// A version string is not a dotted sequence of decimal segments.
    #[error("invalid version \"{value}\": {reason}")]
    InvalidVersion {
        /// The rejected version string.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// A runtime requirement string has no comparator or a malformed
    /// version part.
    #[error("invalid runtime requirement \"{value}\": {reason}")]
    InvalidRequirement {
        /// The rejected requirement string.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// A data-file pattern is empty, escapes its namespace directory, or
    /// does not compile as a glob.
    #[error("invalid data-file pattern \"{value}\": {reason}")]
    InvalidDataPattern {
        /// The rejected pattern string.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// The same namespace appears more than once in the declared list.
    #[error("namespace {namespace} is declared more than once")]
    DuplicateNamespace {
        /// The repeated namespace.
        namespace: String,
    },

    /// A data-file rule names a namespace that is not declared.
    #[error("data-file rule for {namespace} has no matching namespace declaration")]
    OrphanDataRule {
        /// The undeclared namespace the rule refers to.
        namespace: String,
    },

    /// The manifest declares no namespaces at all.
    #[error("manifest must declare at least one namespace")]
    NoNamespaces,
}

/// Result type alias using [`ManifestError`].
pub type Result<T> = std::result::Result<T, ManifestError>;
