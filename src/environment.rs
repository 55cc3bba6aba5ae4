//! Runtime environment checking for the minimum-runtime constraint.
//!
//! The manifest declares a constraint such as `>=3.6`; before a
//! distribution is built, the active interpreter's version is probed
//! and checked against it. The probe is a trait so tests can supply
//! canned versions without a real interpreter.

use crate::error::{PackagingError, Result};
use crate::manifest::requirement::RuntimeRequirement;
use crate::manifest::version::ReleaseVersion;
use log::trace;
use std::process::Command;

/// Interpreter command used when none is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Abstraction over querying the active runtime's version.
#[cfg_attr(test, mockall::automock)]
pub trait RuntimeProbe {
    /// Report the runtime's version string, e.g. `3.9.7`.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be queried.
    fn runtime_version(&self) -> std::io::Result<String>;
}

/// Probes a real interpreter by running `<command> --version` and
/// taking the trailing version token of its output.
#[derive(Debug, Clone)]
pub struct InterpreterProbe {
    command: String,
}

impl InterpreterProbe {
    /// Create a probe for the given interpreter command.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Return the interpreter command this probe runs.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for InterpreterProbe {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl RuntimeProbe for InterpreterProbe {
    fn runtime_version(&self) -> std::io::Result<String> {
        let output = Command::new(&self.command).arg("--version").output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(std::io::Error::other(format!(
                "{} --version exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }
        // Some interpreters print the banner to stderr instead.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let banner = if stdout.trim().is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            stdout.into_owned()
        };
        extract_version_token(&banner).map(str::to_owned).ok_or_else(|| {
            std::io::Error::other(format!(
                "no version token in {} --version output: {banner:?}",
                self.command
            ))
        })
    }
}

/// Take the last whitespace-separated token of the banner's first
/// non-empty line, e.g. `3.9.7` from `Python 3.9.7`.
fn extract_version_token(banner: &str) -> Option<&str> {
    banner
        .lines()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| line.split_whitespace().last())
}

/// Check the active runtime against the manifest's constraint.
///
/// Returns the probed version on success so callers can report it.
///
/// # Errors
///
/// Returns [`PackagingError::RuntimeProbe`] if the probe fails or
/// reports an unparseable version, and
/// [`PackagingError::RuntimeMismatch`] if the version does not satisfy
/// `requirement`.
pub fn check_runtime(
    requirement: &RuntimeRequirement,
    probe: &dyn RuntimeProbe,
) -> Result<ReleaseVersion> {
    let reported = probe
        .runtime_version()
        .map_err(|e| PackagingError::RuntimeProbe {
            reason: format!("failed to query runtime version: {e}"),
        })?;
    let found = ReleaseVersion::try_from(reported.trim()).map_err(|e| {
        PackagingError::RuntimeProbe {
            reason: format!("runtime reported an unparseable version: {e}"),
        }
    })?;
    trace!("check_runtime: found {found}, requirement {requirement}");

    if requirement.is_satisfied_by(&found) {
        Ok(found)
    } else {
        Err(PackagingError::RuntimeMismatch {
            required: requirement.clone(),
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn requirement(value: &str) -> RuntimeRequirement {
        RuntimeRequirement::try_from(value).expect("valid requirement")
    }

    fn probe_reporting(version: &str) -> MockRuntimeProbe {
        let version = version.to_owned();
        let mut probe = MockRuntimeProbe::new();
        probe
            .expect_runtime_version()
            .return_once(move || Ok(version));
        probe
    }

    #[test]
    fn satisfied_requirement_returns_found_version() {
        let probe = probe_reporting("3.9.7");
        let found = check_runtime(&requirement(">=3.6"), &probe).expect("runtime satisfies");
        assert_eq!(found.as_str(), "3.9.7");
    }

    #[test]
    fn unsatisfied_requirement_is_a_mismatch() {
        let probe = probe_reporting("3.5.2");
        let result = check_runtime(&requirement(">=3.6"), &probe);
        match result {
            Err(PackagingError::RuntimeMismatch { required, found }) => {
                assert_eq!(required.to_string(), ">=3.6");
                assert_eq!(found.as_str(), "3.5.2");
            }
            other => panic!("expected RuntimeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn boundary_version_satisfies_greater_eq() {
        let probe = probe_reporting("3.6.0");
        let result = check_runtime(&requirement(">=3.6"), &probe);
        assert!(result.is_ok());
    }

    #[test]
    fn probe_failure_is_reported() {
        let mut probe = MockRuntimeProbe::new();
        probe
            .expect_runtime_version()
            .return_once(|| Err(std::io::Error::other("interpreter not found")));

        let result = check_runtime(&requirement(">=3.6"), &probe);
        match result {
            Err(PackagingError::RuntimeProbe { reason }) => {
                assert!(reason.contains("interpreter not found"));
            }
            other => panic!("expected RuntimeProbe, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_reported_version_is_a_probe_error() {
        let probe = probe_reporting("nightly");
        let result = check_runtime(&requirement(">=3.6"), &probe);
        assert!(matches!(result, Err(PackagingError::RuntimeProbe { .. })));
    }

    #[rstest]
    #[case::plain_banner("Python 3.9.7", Some("3.9.7"))]
    #[case::trailing_newline("Python 3.9.7\n", Some("3.9.7"))]
    #[case::bare_version("3.6", Some("3.6"))]
    #[case::leading_blank_line("\nPython 3.6.15\n", Some("3.6.15"))]
    #[case::empty("", None)]
    #[case::whitespace_only("   \n", None)]
    fn extract_version_token_cases(#[case] banner: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_version_token(banner), expected);
    }

    #[test]
    fn default_probe_uses_python3() {
        let probe = InterpreterProbe::default();
        assert_eq!(probe.command(), DEFAULT_INTERPRETER);
    }
}
