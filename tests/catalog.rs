#![cfg(not(target_arch = "wasm32"))]

use castaway_frames::catalog::{inventory_context, CoverType, COVERS};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn catalog_has_three_covers_with_three_fillers_each() {
    assert_eq!(COVERS.len(), 3);
    for cover in COVERS {
        assert_eq!(cover.options.len(), 3, "{} is under-stocked", cover.name);
        assert!(!cover.description.is_empty());
        for option in cover.options {
            assert!(option.price > 0);
            assert!(option.model_url.ends_with(".glb"));
            assert!(option.image.starts_with("https://"));
        }
    }
}

#[test]
fn cover_ids_and_option_ids_are_unique() {
    let mut ids: Vec<&str> = COVERS
        .iter()
        .flat_map(|c| std::iter::once(c.id).chain(c.options.iter().map(|o| o.id)))
        .collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn every_kind_quotes_nominal_dimensions() {
    for kind in [CoverType::Chair, CoverType::Sofa, CoverType::Table] {
        assert!(kind.nominal_dimensions().contains('"'));
    }
}

#[test]
fn inventory_context_is_valid_json_naming_every_product() {
    let context = inventory_context();
    let parsed: Value = serde_json::from_str(&context).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), COVERS.len());

    for (entry, cover) in entries.iter().zip(COVERS) {
        assert_eq!(entry["name"], cover.name);
        assert_eq!(entry["type"], cover.kind.label());
        // Price range lists every option.
        let prices = entry["priceRange"].as_str().unwrap();
        for option in cover.options {
            assert!(prices.contains(&option.price.to_string()));
        }
    }
}
