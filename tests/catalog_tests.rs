//! Tests for the catalog provider.
//!
//! These tests verify:
//! - Determinism and the fixed record count
//! - The breed × gender pairing of the fixture
//! - Field validity (genders, image handles)
//! - The canonical index-0 record

use std::collections::{HashMap, HashSet};

use puptui::assets::handles;
use puptui::{Catalog, Gender};

// =============================================================================
// Shape and determinism
// =============================================================================

#[test]
fn test_catalog_always_returns_exactly_ten_records() {
    assert_eq!(Catalog::standard().len(), 10);
}

#[test]
fn test_catalog_is_deterministic() {
    let first = Catalog::standard();
    let second = Catalog::standard();
    assert_eq!(first, second);
}

#[test]
fn test_catalog_order_is_stable() {
    let breeds: Vec<_> = Catalog::standard()
        .records()
        .iter()
        .map(|r| r.breed_name.clone())
        .collect();

    // Five female entries first, then the same five breeds male
    assert_eq!(breeds[0], "Golden Retriever");
    assert_eq!(breeds[4], "German Shepherd");
    assert_eq!(breeds[5], "Golden Retriever");
    assert_eq!(breeds[9], "German Shepherd");
}

// =============================================================================
// Fixture contents
// =============================================================================

#[test]
fn test_two_records_per_breed_one_per_gender() {
    let catalog = Catalog::standard();
    let expected_breeds = [
        "Golden Retriever",
        "Labrador Retriever",
        "Siberian Husky",
        "Rottweiler",
        "German Shepherd",
    ];

    let mut by_breed: HashMap<&str, Vec<Gender>> = HashMap::new();
    for record in catalog.records() {
        by_breed
            .entry(record.breed_name.as_str())
            .or_default()
            .push(record.gender);
    }

    assert_eq!(by_breed.len(), expected_breeds.len());
    for breed in expected_breeds {
        let genders = by_breed.get(breed).expect("breed missing from catalog");
        assert_eq!(genders.len(), 2, "{breed} should appear twice");
        assert!(genders.contains(&Gender::Female));
        assert!(genders.contains(&Gender::Male));
    }
}

#[test]
fn test_every_record_has_valid_gender_text() {
    for record in Catalog::standard().records() {
        let gender = record.gender.to_string();
        assert!(gender == "male" || gender == "female");
    }
}

#[test]
fn test_image_handles_are_distinct() {
    let handles: HashSet<_> = Catalog::standard()
        .records()
        .iter()
        .map(|r| r.image.raw())
        .collect();
    assert_eq!(handles.len(), 10);
}

#[test]
fn test_no_empty_text_fields() {
    for record in Catalog::standard().records() {
        assert!(!record.breed_name.is_empty());
        assert!(!record.age.is_empty());
        assert!(!record.details.is_empty());
    }
}

#[test]
fn test_index_zero_is_the_female_golden_retriever() {
    let catalog = Catalog::standard();
    let record = catalog.get(0).expect("catalog must not be empty");

    assert_eq!(record.breed_name, "Golden Retriever");
    assert_eq!(record.age, "2 Months");
    assert_eq!(record.gender, Gender::Female);
    assert!(
        record
            .details
            .starts_with("Golden retrievers are very versatile")
    );
    assert_eq!(record.image, handles::GOLDEN_1);
}

// =============================================================================
// Serialization snapshot
// =============================================================================

#[test]
fn test_catalog_serializes_with_lowercase_genders() {
    let json = serde_json::to_string(&Catalog::standard()).expect("catalog serializes");
    assert!(json.contains("\"gender\":\"female\""));
    assert!(json.contains("\"gender\":\"male\""));
    assert!(json.contains("Golden Retriever"));
}
