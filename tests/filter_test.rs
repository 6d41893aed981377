//! Tests for the catalogue filter engine

mod common;

use common::{listing, three_item_catalog};
use dari_market::models::TransactionType;
use dari_market::search::{filter_listings, FilterCriteria};

/// Rentals in Alger over the 3-item catalogue: exactly item-3
#[test]
fn wilaya_and_transaction_narrow_to_one_listing() {
    let catalog = three_item_catalog();
    let criteria = FilterCriteria {
        wilaya: Some("Alger".to_string()),
        transaction: Some(TransactionType::Rent),
        ..Default::default()
    };

    let results = filter_listings(&catalog, &criteria);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "item-3");
}

/// Same criteria, same collection: identical ordered output
#[test]
fn filtering_is_deterministic() {
    let catalog = three_item_catalog();
    let criteria = FilterCriteria {
        wilaya: Some("Alger".to_string()),
        ..Default::default()
    };

    let first: Vec<&str> = filter_listings(&catalog, &criteria)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    let second: Vec<&str> = filter_listings(&catalog, &criteria)
        .iter()
        .map(|l| l.id.as_str())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first, vec!["item-1", "item-3"]);
}

#[test]
fn default_criteria_keep_everything_in_order() {
    let catalog = three_item_catalog();
    let results = filter_listings(&catalog, &FilterCriteria::default());
    let ids: Vec<&str> = results.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["item-1", "item-2", "item-3"]);
}

#[test]
fn price_bounds_are_independently_optional() {
    let catalog = vec![
        listing("cheap", "Alger", TransactionType::Rent, 30_000, 40, None),
        listing("mid", "Alger", TransactionType::Rent, 50_000, 60, None),
        listing("high", "Alger", TransactionType::Rent, 90_000, 100, None),
    ];

    let min_only = FilterCriteria {
        price_min: Some(40_000),
        ..Default::default()
    };
    let ids: Vec<&str> = filter_listings(&catalog, &min_only)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, vec!["mid", "high"]);

    let max_only = FilterCriteria {
        price_max: Some(50_000),
        ..Default::default()
    };
    let ids: Vec<&str> = filter_listings(&catalog, &max_only)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, vec!["cheap", "mid"]);

    let both = FilterCriteria {
        price_min: Some(40_000),
        price_max: Some(50_000),
        ..Default::default()
    };
    let ids: Vec<&str> = filter_listings(&catalog, &both)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, vec!["mid"]);
}

#[test]
fn surface_bounds_follow_the_price_pattern() {
    let catalog = three_item_catalog();
    let criteria = FilterCriteria {
        surface_min: Some(70),
        surface_max: Some(80),
        ..Default::default()
    };
    let results = filter_listings(&catalog, &criteria);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "item-3");
}

#[test]
fn room_count_is_an_exact_match() {
    let catalog = three_item_catalog();
    let criteria = FilterCriteria {
        rooms: Some(3),
        ..Default::default()
    };
    let ids: Vec<&str> = filter_listings(&catalog, &criteria)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, vec!["item-1", "item-3"]);

    // Listings with no room count never match an exact room filter
    let no_rooms = vec![listing("bare", "Alger", TransactionType::Buy, 1_000, 50, None)];
    assert!(filter_listings(&no_rooms, &criteria).is_empty());
}

#[test]
fn predicates_are_and_combined() {
    let catalog = three_item_catalog();
    let criteria = FilterCriteria {
        wilaya: Some("Oran".to_string()),
        transaction: Some(TransactionType::Buy),
        ..Default::default()
    };
    assert!(filter_listings(&catalog, &criteria).is_empty());
}

#[test]
fn filtering_does_not_mutate_the_catalogue() {
    let catalog = three_item_catalog();
    let criteria = FilterCriteria {
        wilaya: Some("Alger".to_string()),
        ..Default::default()
    };
    let _ = filter_listings(&catalog, &criteria);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog[0].id, "item-1");
}
