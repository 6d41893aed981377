//! Static listing catalogue. Reference data only: browsed and filtered,
//! never edited in place.

use chrono::{Duration, Utc};

use crate::models::listing::{Listing, Location, PropertyType, Seller, TransactionType};
use crate::models::user::AccountKind;

/// Boosted listings float to the top for display. Cosmetic ordering, not a
/// contract: within each group the catalogue order is kept.
pub fn display_order(listings: &[Listing]) -> Vec<&Listing> {
    let mut ordered: Vec<&Listing> = listings.iter().filter(|l| l.is_boosted).collect();
    ordered.extend(listings.iter().filter(|l| !l.is_boosted));
    ordered
}

/// Mock catalogue of typical listings across Alger, Oran and Constantine
pub fn mock_catalog() -> Vec<Listing> {
    let now = Utc::now();

    vec![
        Listing {
            id: "lst-001".to_string(),
            title: "F3 lumineux à Hydra".to_string(),
            description: "Appartement F3 au 4e étage avec ascenseur, vue dégagée, proche commodités.".to_string(),
            price: 28_500_000,
            surface: 95,
            property_type: PropertyType::Apartment,
            transaction: TransactionType::Buy,
            location: Location {
                city: "Hydra".to_string(),
                wilaya: "Alger".to_string(),
            },
            rooms: Some(3),
            bedrooms: Some(2),
            floor: Some(4),
            amenities: vec!["Ascenseur".to_string(), "Balcon".to_string(), "Parking".to_string()],
            images: vec!["lst-001-1.jpg".to_string(), "lst-001-2.jpg".to_string()],
            seller: Seller {
                id: "agc-immodar".to_string(),
                name: "ImmoDar Agence".to_string(),
                kind: AccountKind::Agency,
            },
            created_at: now - Duration::days(3),
            is_boosted: true,
        },
        Listing {
            id: "lst-002".to_string(),
            title: "Studio meublé à Bab Ezzouar".to_string(),
            description: "Studio meublé idéal étudiant, à 5 minutes de l'université.".to_string(),
            price: 35_000,
            surface: 28,
            property_type: PropertyType::Studio,
            transaction: TransactionType::Rent,
            location: Location {
                city: "Bab Ezzouar".to_string(),
                wilaya: "Alger".to_string(),
            },
            rooms: Some(1),
            bedrooms: None,
            floor: Some(2),
            amenities: vec!["Meublé".to_string(), "Internet".to_string()],
            images: vec!["lst-002-1.jpg".to_string()],
            seller: Seller {
                id: "usr-karim".to_string(),
                name: "Karim B.".to_string(),
                kind: AccountKind::Individual,
            },
            created_at: now - Duration::days(1),
            is_boosted: false,
        },
        Listing {
            id: "lst-003".to_string(),
            title: "Villa avec jardin à Bir El Djir".to_string(),
            description: "Villa R+1 de 220 m² sur un terrain de 400 m², quartier calme.".to_string(),
            price: 45_000_000,
            surface: 220,
            property_type: PropertyType::House,
            transaction: TransactionType::Buy,
            location: Location {
                city: "Bir El Djir".to_string(),
                wilaya: "Oran".to_string(),
            },
            rooms: Some(6),
            bedrooms: Some(4),
            floor: None,
            amenities: vec!["Jardin".to_string(), "Garage".to_string()],
            images: vec!["lst-003-1.jpg".to_string(), "lst-003-2.jpg".to_string()],
            seller: Seller {
                id: "agc-ouest".to_string(),
                name: "Agence de l'Ouest".to_string(),
                kind: AccountKind::Agency,
            },
            created_at: now - Duration::days(10),
            is_boosted: false,
        },
        Listing {
            id: "lst-004".to_string(),
            title: "F4 avec terrasse à Kouba".to_string(),
            description: "F4 de 110 m² avec grande terrasse, cuisine équipée, chauffage central.".to_string(),
            price: 65_000,
            surface: 110,
            property_type: PropertyType::Apartment,
            transaction: TransactionType::Rent,
            location: Location {
                city: "Kouba".to_string(),
                wilaya: "Alger".to_string(),
            },
            rooms: Some(4),
            bedrooms: Some(3),
            floor: Some(5),
            amenities: vec!["Terrasse".to_string(), "Chauffage central".to_string()],
            images: vec!["lst-004-1.jpg".to_string()],
            seller: Seller {
                id: "usr-lina".to_string(),
                name: "Lina M.".to_string(),
                kind: AccountKind::Individual,
            },
            created_at: now - Duration::days(5),
            is_boosted: true,
        },
        Listing {
            id: "lst-005".to_string(),
            title: "Local commercial au centre de Constantine".to_string(),
            description: "Local de 60 m² en rez-de-chaussée sur un axe passant.".to_string(),
            price: 120_000,
            surface: 60,
            property_type: PropertyType::Commercial,
            transaction: TransactionType::Rent,
            location: Location {
                city: "Constantine".to_string(),
                wilaya: "Constantine".to_string(),
            },
            rooms: None,
            bedrooms: None,
            floor: Some(0),
            amenities: vec!["Vitrine".to_string()],
            images: vec![],
            seller: Seller {
                id: "agc-cirta".to_string(),
                name: "Cirta Immobilier".to_string(),
                kind: AccountKind::Agency,
            },
            created_at: now - Duration::days(8),
            is_boosted: false,
        },
        Listing {
            id: "lst-006".to_string(),
            title: "Terrain constructible à Tipaza".to_string(),
            description: "Terrain de 350 m² avec acte, proche de la route nationale.".to_string(),
            price: 9_800_000,
            surface: 350,
            property_type: PropertyType::Land,
            transaction: TransactionType::Buy,
            location: Location {
                city: "Tipaza".to_string(),
                wilaya: "Tipaza".to_string(),
            },
            rooms: None,
            bedrooms: None,
            floor: None,
            amenities: vec![],
            images: vec!["lst-006-1.jpg".to_string()],
            seller: Seller {
                id: "usr-sofiane".to_string(),
                name: "Sofiane T.".to_string(),
                kind: AccountKind::Individual,
            },
            created_at: now - Duration::days(2),
            is_boosted: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boosted_listings_come_first_in_display_order() {
        let catalog = mock_catalog();
        let ordered = display_order(&catalog);
        assert_eq!(ordered.len(), catalog.len());
        let first_plain = ordered.iter().position(|l| !l.is_boosted).unwrap();
        assert!(ordered[..first_plain].iter().all(|l| l.is_boosted));
        assert!(ordered[first_plain..].iter().all(|l| !l.is_boosted));
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = mock_catalog();
        let mut ids: Vec<&str> = catalog.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
