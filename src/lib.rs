//! Stubpack: packaging support for Python type-stub distributions.
//!
//! This crate models the manifest of a distributable unit of type-stub
//! files (a package name and version, descriptive metadata, a list of
//! importable namespaces, and per-namespace data-file globs), loads it
//! from a `stubpack.toml` entry point, resolves the declared globs
//! against an on-disk package tree, and checks the manifest's
//! minimum-runtime constraint against the active interpreter. The
//! output is a distribution plan an external archiver can bundle.
//!
//! Errors are fatal and all-or-nothing: a missing namespace directory,
//! a malformed manifest field, or an unsatisfied runtime constraint
//! aborts the run with no partial artifact.
//!
//! # Modules
//!
//! - [`environment`] - Runtime version probing and constraint checking
//! - [`error`] - Crate-level error types
//! - [`manifest`] - The declarative manifest model and its parser
//! - [`resolve`] - Data-file resolution and distribution plans

pub mod environment;
pub mod error;
pub mod manifest;
pub mod resolve;
