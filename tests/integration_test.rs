use std::fs;
use std::path::Path;

use nereis::model::{CongenericsPayload, CoordinateKey};
use nereis::query::{sort_by_spec, Search, SearchMode, SortField, SortSpec};
use nereis::resolve::resolve;
use nereis::store::DatasetStore;
use nereis::view::build_view;
use nereis::NereisError;
use pretty_assertions::assert_eq;

const ACGT_SHA256: &str = "1dff3e84fe7877e0673b69bbddcf40124e396e3f9943dd890c91b6a09adb9af0";

const RESULTS_JSON: &str = r#"{
    "title": "eDNA survey results",
    "results": [
        {
            "taxonID": 7,
            "scientificName": "Foo bar",
            "decimalLongitude": 10.0,
            "decimalLatitude": 20.0,
            "density": 2,
            "suitability": 0.5,
            "score": 0.8,
            "cells": 10
        },
        {
            "taxonID": 5,
            "scientificName": "Quux corge",
            "decimalLongitude": 11.0,
            "decimalLatitude": 21.0,
            "density": 4,
            "suitability": 0.25,
            "score": 0.3,
            "cells": 2
        }
    ]
}"#;

const ASVS_JSON: &str = r#"{"7": {"10.0_20.0": ["ACGT"]}}"#;

fn write_dataset(root: &Path, dataset: &str) {
    let dir = root.join(dataset);
    fs::create_dir_all(dir.join("congenerics")).unwrap();
    fs::write(dir.join("results.json"), RESULTS_JSON).unwrap();
    fs::write(dir.join("asvs.json"), ASVS_JSON).unwrap();
}

#[test]
fn end_to_end_resolution_scenario() {
    let tmp = tempfile::tempdir().unwrap();
    write_dataset(tmp.path(), "scandola");

    let store = DatasetStore::new(tmp.path(), Some("scandola"));
    let (results, asvs) = store.load_dataset().unwrap();
    assert_eq!(results.title, "eDNA survey results");
    assert_eq!(results.results.len(), 2);

    let view = build_view(&results.results, &asvs);

    // taxon 7 carries one site with one sequence
    let enriched = &view[0];
    assert_eq!(enriched.record.taxon_id, 7);
    let sites = enriched.sites.as_ref().expect("taxon 7 has an ASV entry");
    assert_eq!(sites.len(), 1);
    assert_eq!(enriched.total_sequences, 1);
    assert_eq!(sites[0].coordinates, Some((10.0, 20.0)));

    // taxon 5 is absent from the index entirely
    assert!(view[1].sites.is_none());
    assert_eq!(view[1].total_sequences, 0);

    // resolving the single sequence produces the digest-addressed key
    let key = resolve(
        enriched.record.taxon_id,
        &sites[0].key,
        &sites[0].sequences[0],
    );
    assert_eq!(key.as_str(), format!("7_10.0_20.0_{}.json", ACGT_SHA256));
}

#[test]
fn congenerics_artifact_loads_sorted_by_score_descending() {
    let tmp = tempfile::tempdir().unwrap();
    write_dataset(tmp.path(), "scandola");

    let key = resolve(7, &CoordinateKey::from_raw("10.0_20.0"), "ACGT");
    let artifact = tmp
        .path()
        .join("scandola")
        .join("congenerics")
        .join(key.as_str());
    fs::write(
        &artifact,
        r#"[
            {"scientificName": "Foo baz", "score": 0.2, "refdb": true},
            {"scientificName": "Foo qux", "pident": 99.1},
            {"scientificName": "Foo bar", "taxonID": 7, "score": 0.9}
        ]"#,
    )
    .unwrap();

    let store = DatasetStore::new(tmp.path(), Some("scandola"));
    let payload = store.load_congenerics(&key).unwrap();
    let CongenericsPayload::Tabular(records) = payload else {
        panic!("expected tabular payload");
    };
    let names: Vec<_> = records.iter().map(|r| r.scientific_name.as_str()).collect();
    // missing score coerces to zero, sorting it last
    assert_eq!(names, vec!["Foo bar", "Foo baz", "Foo qux"]);
    assert_eq!(records[2].score, None);
}

#[test]
fn opaque_congenerics_payload_passes_through() {
    let tmp = tempfile::tempdir().unwrap();
    write_dataset(tmp.path(), "scandola");

    let key = resolve(7, &CoordinateKey::from_raw("10.0_20.0"), "ACGT");
    let artifact = tmp
        .path()
        .join("scandola")
        .join("congenerics")
        .join(key.as_str());
    fs::write(&artifact, r#"{"note": "no candidates above threshold"}"#).unwrap();

    let store = DatasetStore::new(tmp.path(), Some("scandola"));
    let payload = store.load_congenerics(&key).unwrap();
    assert!(!payload.is_tabular());
}

#[test]
fn missing_top_level_document_is_a_blocking_load_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("scandola");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("results.json"), RESULTS_JSON).unwrap();
    // asvs.json deliberately absent

    let store = DatasetStore::new(tmp.path(), Some("scandola"));
    assert!(matches!(
        store.load_dataset().unwrap_err(),
        NereisError::Load(_)
    ));
}

#[test]
fn missing_artifact_is_a_local_failure_only() {
    let tmp = tempfile::tempdir().unwrap();
    write_dataset(tmp.path(), "scandola");

    let store = DatasetStore::new(tmp.path(), Some("scandola"));
    // the taxon table still loads
    assert!(store.load_dataset().is_ok());

    let key = resolve(7, &CoordinateKey::from_raw("10.0_20.0"), "ACGTT");
    assert!(matches!(
        store.load_congenerics(&key).unwrap_err(),
        NereisError::Artifact(_)
    ));
}

#[test]
fn absent_dataset_selector_resolves_to_the_empty_dataset() {
    let tmp = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(tmp.path(), None);
    assert!(!store.is_resolved());

    let (results, asvs) = store.load_dataset().unwrap();
    assert!(results.results.is_empty());
    assert!(asvs.is_empty());

    let key = resolve(7, &CoordinateKey::from_raw("10.0_20.0"), "ACGT");
    assert!(matches!(
        store.load_congenerics(&key).unwrap_err(),
        NereisError::Artifact(_)
    ));
}

#[test]
fn view_sorts_and_filters_like_the_result_table() {
    let tmp = tempfile::tempdir().unwrap();
    write_dataset(tmp.path(), "scandola");

    let store = DatasetStore::new(tmp.path(), Some("scandola"));
    let (results, asvs) = store.load_dataset().unwrap();
    let mut view = build_view(&results.results, &asvs);

    // default display order: density ascending
    sort_by_spec(&mut view, SortSpec::ascending(SortField::Density));
    assert_eq!(view[0].record.taxon_id, 7);

    // toggling the active ascending field flips it
    let spec = SortSpec::ascending(SortField::Density).toggled(SortField::Density);
    sort_by_spec(&mut view, spec);
    assert_eq!(view[0].record.taxon_id, 5);

    let search = Search::new("foo", SearchMode::ScientificName);
    view.retain(|taxon| search.matches(taxon));
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].record.scientific_name, "Foo bar");
}
