//! Tests for manifest construction and cross-field invariants.

use super::*;
use rstest::{fixture, rstest};

fn namespace(value: &str) -> Namespace {
    Namespace::try_from(value).expect("valid namespace")
}

#[fixture]
fn sample_identity() -> PackageIdentity {
    PackageIdentity {
        name: PackageName::try_from("quantconnect-lean-stubs").expect("valid name"),
        version: ReleaseVersion::try_from("0.1.0").expect("valid version"),
    }
}

#[fixture]
fn sample_metadata() -> PackageMetadata {
    PackageMetadata {
        author: "QuantConnect Corp.".to_owned(),
        contact: "support@quantconnect.com".to_owned(),
        homepage: "https://www.quantconnect.com".to_owned(),
        license: "LICENSE.md".to_owned(),
        description: "Python type definitions for the Lean algorithmic trading engine".to_owned(),
    }
}

#[fixture]
fn sample_contents() -> PackageContents {
    let namespaces = vec![
        namespace("QuantConnect"),
        namespace("QuantConnect.Data"),
        namespace("QuantConnect.Securities"),
        namespace("QuantConnect.Algorithm"),
    ];
    let data_files = namespaces
        .iter()
        .cloned()
        .map(|ns| (ns, DataPattern::stub_defaults()))
        .collect();
    PackageContents {
        namespaces,
        data_files,
        requires_runtime: RuntimeRequirement::try_from(">=3.6").expect("valid requirement"),
    }
}

#[rstest]
fn accessors_return_all_fields(
    sample_identity: PackageIdentity,
    sample_metadata: PackageMetadata,
    sample_contents: PackageContents,
) {
    let manifest = PackageManifest::new(sample_identity, sample_metadata, sample_contents)
        .expect("consistent manifest");

    assert_eq!(manifest.name().as_str(), "quantconnect-lean-stubs");
    assert_eq!(manifest.version().as_str(), "0.1.0");
    assert_eq!(manifest.metadata().author, "QuantConnect Corp.");
    assert_eq!(manifest.metadata().license, "LICENSE.md");
    assert_eq!(manifest.namespaces().len(), 4);
    assert_eq!(manifest.requires_runtime().to_string(), ">=3.6");
}

#[rstest]
fn every_declared_namespace_carries_the_default_patterns(
    sample_identity: PackageIdentity,
    sample_metadata: PackageMetadata,
    sample_contents: PackageContents,
) {
    let manifest = PackageManifest::new(sample_identity, sample_metadata, sample_contents)
        .expect("consistent manifest");

    for ns in manifest.namespaces() {
        let patterns = manifest.data_patterns(ns);
        assert_eq!(patterns.len(), 2, "namespace {ns} should have two patterns");
        assert_eq!(patterns[0].as_str(), "py.typed");
        assert_eq!(patterns[1].as_str(), "*.pyi");
    }
}

#[rstest]
fn identical_inputs_build_identical_manifests(
    sample_identity: PackageIdentity,
    sample_metadata: PackageMetadata,
    sample_contents: PackageContents,
) {
    let first = PackageManifest::new(
        sample_identity.clone(),
        sample_metadata.clone(),
        sample_contents.clone(),
    )
    .expect("consistent manifest");
    let second = PackageManifest::new(sample_identity, sample_metadata, sample_contents)
        .expect("consistent manifest");

    assert_eq!(first, second);
}

#[rstest]
fn rejects_orphan_data_file_rule(
    sample_identity: PackageIdentity,
    sample_metadata: PackageMetadata,
    mut sample_contents: PackageContents,
) {
    sample_contents.data_files.insert(
        namespace("QuantConnect.Orders"),
        DataPattern::stub_defaults(),
    );

    let result = PackageManifest::new(sample_identity, sample_metadata, sample_contents);
    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        ManifestError::OrphanDataRule { namespace } if namespace == "QuantConnect.Orders"
    ));
}

#[rstest]
fn rejects_duplicate_namespace(
    sample_identity: PackageIdentity,
    sample_metadata: PackageMetadata,
    mut sample_contents: PackageContents,
) {
    sample_contents.namespaces.push(namespace("QuantConnect"));

    let result = PackageManifest::new(sample_identity, sample_metadata, sample_contents);
    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        ManifestError::DuplicateNamespace { namespace } if namespace == "QuantConnect"
    ));
}

#[rstest]
fn rejects_empty_namespace_list(
    sample_identity: PackageIdentity,
    sample_metadata: PackageMetadata,
    mut sample_contents: PackageContents,
) {
    sample_contents.namespaces.clear();
    sample_contents.data_files.clear();

    let result = PackageManifest::new(sample_identity, sample_metadata, sample_contents);
    assert!(matches!(result.unwrap_err(), ManifestError::NoNamespaces));
}

#[rstest]
fn code_only_namespace_has_no_patterns(
    sample_identity: PackageIdentity,
    sample_metadata: PackageMetadata,
    mut sample_contents: PackageContents,
) {
    let code_only = namespace("QuantConnect.Util");
    sample_contents.namespaces.push(code_only.clone());

    let manifest = PackageManifest::new(sample_identity, sample_metadata, sample_contents)
        .expect("consistent manifest");
    assert!(manifest.data_patterns(&code_only).is_empty());
}
