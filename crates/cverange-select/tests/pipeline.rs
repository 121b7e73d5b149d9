//! End-to-end enrichment of a Maven CVE against real-shaped registry data

use cverange_common::EnrichConfig;
use cverange_core::{Ecosystem, PackageNameCandidate};
use cverange_nvd::{extract, CveDocument};
use cverange_select::{ranges_from_cve, StaticLookup, VersionSelector};
use cverange_version::VersionInterval;

const CATALINA: &str = "org.apache.tomcat:tomcat-catalina";

/// Published Maven versions of tomcat-catalina at fixture time.
const CATALINA_VERSIONS: &[&str] = &[
    "7.0.0", "7.0.2", "7.0.4", "7.0.5", "7.0.6", "7.0.8", "7.0.10", "7.0.11", "7.0.12", "7.0.14",
    "7.0.16", "7.0.19", "7.0.20", "7.0.21", "7.0.22", "7.0.23", "7.0.25", "7.0.26", "7.0.27",
    "7.0.28", "7.0.29", "7.0.30", "7.0.32", "7.0.33", "7.0.34", "7.0.35", "7.0.37", "7.0.39",
    "7.0.40", "7.0.41", "7.0.42", "7.0.47", "7.0.50", "7.0.52", "7.0.53", "7.0.54", "7.0.55",
    "7.0.56", "7.0.57", "7.0.59", "7.0.61", "7.0.63", "7.0.64", "7.0.65", "7.0.67", "7.0.68",
    "7.0.69", "7.0.70", "7.0.72", "7.0.73", "7.0.75", "7.0.76", "7.0.77", "7.0.78", "7.0.79",
    "7.0.81", "7.0.82", "7.0.84", "7.0.85", "7.0.86", "7.0.88", "7.0.90", "7.0.91", "7.0.92",
    "8.0.0-RC1", "8.0.0-RC3", "8.0.0-RC5", "8.0.0-RC10", "8.0.1", "8.0.3", "8.0.5", "8.0.8",
    "8.0.9", "8.0.11", "8.0.12", "8.0.14", "8.0.15", "8.0.17", "8.0.18", "8.0.20", "8.0.21",
    "8.0.22", "8.0.23", "8.0.24", "8.0.26", "8.0.27", "8.0.28", "8.0.29", "8.0.30", "8.0.32",
    "8.0.33", "8.0.35", "8.0.36", "8.0.37", "8.0.38", "8.0.39", "8.0.41", "8.0.42", "8.0.43",
    "8.0.44", "8.0.45", "8.0.46", "8.0.47", "8.0.48", "8.0.49", "8.0.50", "8.0.51", "8.0.52",
    "8.0.53", "8.5.0", "8.5.2", "8.5.3", "8.5.4", "8.5.5", "8.5.6", "8.5.8", "8.5.9", "8.5.11",
    "8.5.12", "8.5.13", "8.5.14", "8.5.15", "8.5.16", "8.5.19", "8.5.20", "8.5.21", "8.5.23",
    "8.5.24", "8.5.27", "8.5.28", "8.5.29", "8.5.30", "8.5.31", "8.5.32", "8.5.33", "8.5.34",
    "8.5.35", "8.5.37", "8.5.38", "9.0.0.M1", "9.0.0.M3", "9.0.0.M4", "9.0.0.M6", "9.0.0.M8",
    "9.0.0.M9", "9.0.0.M10", "9.0.0.M11", "9.0.0.M13", "9.0.0.M15", "9.0.0.M17", "9.0.0.M18",
    "9.0.0.M19", "9.0.0.M20", "9.0.0.M21", "9.0.0.M22", "9.0.0.M25", "9.0.0.M26", "9.0.0.M27",
    "9.0.1", "9.0.2", "9.0.4", "9.0.5", "9.0.6", "9.0.7", "9.0.8", "9.0.10", "9.0.11", "9.0.12",
    "9.0.13", "9.0.14",
];

fn maven_cve() -> CveDocument {
    let raw = include_str!("data/maven-nvdcve.json");
    serde_json::from_str(raw).expect("fixture parses")
}

fn catalina_lookup() -> StaticLookup {
    let mut lookup = StaticLookup::new();
    lookup.insert(CATALINA, Ecosystem::Java, CATALINA_VERSIONS.iter().copied());
    lookup
}

fn rendered(ranges: &[VersionInterval]) -> Vec<String> {
    ranges.iter().map(VersionInterval::render).collect()
}

fn assert_same_set(mut actual: Vec<String>, expected: &[&str]) {
    for item in expected {
        let idx = actual
            .iter()
            .position(|a| a == item)
            .unwrap_or_else(|| panic!("missing range {item}, got {actual:?}"));
        actual.remove(idx);
    }
    assert!(actual.is_empty(), "unexpected extra ranges: {actual:?}");
}

#[test]
fn tomcat_catalina_ranges() {
    let cve = maven_cve();
    let lookup = catalina_lookup();

    let (affected, safe) =
        ranges_from_cve(&cve, CATALINA, Ecosystem::Java, &lookup).unwrap();

    assert_same_set(
        rendered(&affected),
        &["<=7.0.90,7.0.23", "<=8.5.33,8.5.0", "<=9.0.11,9.0.0.M1"],
    );
    assert_same_set(
        rendered(&safe),
        &[
            ">=9.0.12",
            "<=8.5.38,8.5.34",
            "<=8.0.53,7.0.91",
            "<=7.0.22,7.0.0",
        ],
    );
}

#[test]
fn every_published_version_is_accounted_for() {
    let cve = maven_cve();
    let lookup = catalina_lookup();

    let (affected, safe) =
        ranges_from_cve(&cve, CATALINA, Ecosystem::Java, &lookup).unwrap();

    for version in CATALINA_VERSIONS {
        let in_affected = affected.iter().any(|r| r.contains(version));
        let in_safe = safe.iter().any(|r| r.contains(version));
        assert!(
            in_affected ^ in_safe,
            "{version} should be in exactly one output (affected: {in_affected}, safe: {in_safe})"
        );
    }
}

#[test]
fn configuration_nodes_filter_to_applications() {
    let cve = maven_cve();
    assert_eq!(extract(&cve, true).len(), 3);
    assert_eq!(extract(&cve, false).len(), 4);
}

#[test]
fn selector_picks_package_with_matching_history() {
    let cve = maven_cve();
    let mut lookup = catalina_lookup();
    lookup.insert(
        "org.apache.tomcat:tomcat-annotations-api",
        Ecosystem::Java,
        ["10.0.0"],
    );

    let candidates = vec![
        PackageNameCandidate::new("org.apache.tomcat:tomcat-annotations-api", 10.0).unwrap(),
        PackageNameCandidate::new(CATALINA, 5.0).unwrap(),
    ];

    let selector = VersionSelector::new(EnrichConfig::default().ecosystem(Ecosystem::Java), &lookup);
    let winner = selector
        .pick_winner(&cve, &candidates)
        .unwrap()
        .expect("expected a winner");
    assert_eq!(winner.package(), CATALINA);
}
