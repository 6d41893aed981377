//! Common test utilities

#![allow(dead_code)]

use chrono::Utc;
use dari_market::models::{
    AccountKind, Listing, Location, PropertyType, Seller, SignupProfile, TransactionType,
};
use dari_market::store::{MemoryStorage, SessionStore};
use dari_market::MarketConfig;

/// Default config with zero simulated latency
pub fn test_config() -> MarketConfig {
    MarketConfig {
        latency_ms: 0,
        ..MarketConfig::default()
    }
}

pub fn fresh_store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new(), test_config())
}

pub fn profile() -> SignupProfile {
    SignupProfile {
        display_name: "Nadia Cherif".to_string(),
        email: "nadia@example.com".to_string(),
        phone: Some("+213 555 00 11 22".to_string()),
        kind: AccountKind::Individual,
    }
}

/// Store with a freshly registered free-tier user
pub async fn signed_in_store() -> SessionStore<MemoryStorage> {
    let mut store = fresh_store();
    store.register(profile()).await.unwrap();
    store
}

pub fn listing(
    id: &str,
    wilaya: &str,
    transaction: TransactionType,
    price: i64,
    surface: i32,
    rooms: Option<u32>,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Listing {id}"),
        description: String::new(),
        price,
        surface,
        property_type: PropertyType::Apartment,
        transaction,
        location: Location {
            city: wilaya.to_string(),
            wilaya: wilaya.to_string(),
        },
        rooms,
        bedrooms: None,
        floor: None,
        amenities: vec![],
        images: vec![],
        seller: Seller {
            id: "seller-1".to_string(),
            name: "Agence Test".to_string(),
            kind: AccountKind::Agency,
        },
        created_at: Utc::now(),
        is_boosted: false,
    }
}

/// Three-listing catalogue: a sale in Alger, a rental in Oran and a rental
/// in Alger
pub fn three_item_catalog() -> Vec<Listing> {
    vec![
        listing("item-1", "Alger", TransactionType::Buy, 20_000_000, 90, Some(3)),
        listing("item-2", "Oran", TransactionType::Rent, 40_000, 60, Some(2)),
        listing("item-3", "Alger", TransactionType::Rent, 55_000, 75, Some(3)),
    ]
}
