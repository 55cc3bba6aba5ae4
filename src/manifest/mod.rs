//! The declarative manifest model for a stub distribution.
//!
//! Field validity lives in newtypes that reject malformed values at
//! construction (and therefore at parse time); the aggregate
//! [`package_manifest::PackageManifest`] enforces cross-field
//! consistency. The manifest itself never touches the filesystem;
//! resolution against a package tree is [`crate::resolve`]'s job.
//!
//! # Sub-modules
//!
//! - [`data_pattern`] — Data-file glob newtype (`DataPattern`).
//! - [`error`] — Validation error types (`ManifestError`).
//! - [`namespace`] — Dot-delimited namespace path (`Namespace`).
//! - [`package_manifest`] — The manifest aggregate (`PackageManifest`).
//! - [`package_name`] — Distribution name newtype (`PackageName`).
//! - [`parser`] — `stubpack.toml` loading and parsing.
//! - [`requirement`] — Runtime constraint (`RuntimeRequirement`).
//! - [`version`] — Release version newtype (`ReleaseVersion`).

pub mod data_pattern;
pub mod error;
pub mod namespace;
pub mod package_manifest;
pub mod package_name;
pub mod parser;
pub mod requirement;
pub mod version;
