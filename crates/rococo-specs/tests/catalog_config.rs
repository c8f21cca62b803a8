use std::fs;

use rococo_specs::config::CONFIG_FILE_NAME;
use rococo_specs::entities::museums::MUSEUM_SCHEMA;
use rococo_specs::entities::{ImageFilter, MuseumFilter};
use rococo_specs::{Catalog, Criterion, DistinctPolicy, Matcher, SpecComposer, SpecsConfig, SpecsError};
use tempfile::TempDir;
use uuid::Uuid;

fn query(filter: &MuseumFilter) -> Criterion<'_> {
    Criterion::text(&filter.query)
}

fn country(filter: &MuseumFilter) -> Criterion<'_> {
    Criterion::id(filter.country_id)
}

#[test]
fn test_binding_to_missing_field_is_fatal() {
    let result = SpecComposer::builder(&MUSEUM_SCHEMA)
        .bind(Matcher::PartialText, "title", query)
        .bind(Matcher::PartialText, "name", query)
        .build();

    match result {
        Err(SpecsError::Configuration { entity, field, .. }) => {
            assert_eq!(entity, "museum");
            assert_eq!(field, "name");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("binding to an unknown field must not build"),
    }
}

#[test]
fn test_binding_with_wrong_matcher_is_fatal() {
    let err = SpecComposer::builder(&MUSEUM_SCHEMA)
        .bind(Matcher::PartialText, "countryId", country)
        .build()
        .err()
        .unwrap();

    let msg = err.to_string();
    assert!(msg.contains("museum.countryId"), "{msg}");
    assert!(msg.contains("PartialText"), "{msg}");
}

#[test]
fn test_catalog_reads_distinct_policy_from_project_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "distinct = \"membership\"\n").unwrap();

    let config = SpecsConfig::load(Some(dir.path())).unwrap();
    assert_eq!(config.distinct(), DistinctPolicy::Membership);

    let catalog = Catalog::new(&config).unwrap();
    let by_query = MuseumFilter {
        query: Some("louvre".into()),
        ..Default::default()
    };
    assert!(!catalog.museums.find_by_criteria(&by_query).is_distinct());

    let by_ids = ImageFilter {
        entity_ids: Some(vec![Uuid::new_v4()]),
        ..Default::default()
    };
    assert!(catalog.images.find_by_criteria(&by_ids).is_distinct());
}

#[test]
fn test_missing_project_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = SpecsConfig::load(Some(dir.path())).unwrap();
    let catalog = Catalog::new(&config).unwrap();

    assert!(catalog
        .museums
        .find_by_criteria(&MuseumFilter::default())
        .is_distinct());
}

#[test]
fn test_specification_serializes_for_external_executors() {
    let catalog = Catalog::new(&SpecsConfig::default()).unwrap();
    let filter = MuseumFilter {
        city: Some("Paris".into()),
        ..Default::default()
    };

    let json = serde_json::to_value(catalog.museums.find_by_criteria(&filter)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "predicates": [{
                "attribute": "city",
                "op": "contains_ignore_case",
                "values": [{"type": "text", "value": "paris"}]
            }],
            "distinct": true
        })
    );
}
