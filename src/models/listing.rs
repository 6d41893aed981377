use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::user::{AccountKind, User};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Commercial,
    Office,
    Warehouse,
    Land,
}

/// Whether the listing is for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Rent,
}

/// Location information for a listing. The wilaya is the primary
/// geographic filter key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub wilaya: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: String,
    pub name: String,
    pub kind: AccountKind,
}

/// A published listing. Immutable reference data: the catalogue is never
/// edited in place, only browsed and filtered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Price in DZD (sale total or monthly rent)
    pub price: i64,
    /// Living surface in square meters
    pub surface: i32,
    pub property_type: PropertyType,
    pub transaction: TransactionType,
    pub location: Location,
    pub rooms: Option<u32>,
    pub bedrooms: Option<u32>,
    pub floor: Option<i32>,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub seller: Seller,
    pub created_at: DateTime<Utc>,
    pub is_boosted: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("listing title is empty")]
    EmptyTitle,
    #[error("price must be positive, got {0}")]
    NonPositivePrice(i64),
    #[error("surface must be positive, got {0}")]
    NonPositiveSurface(i32),
}

/// A listing being composed by the user. Validated locally; publishing does
/// not persist into the shared catalogue.
#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub surface: i32,
    pub property_type: Option<PropertyType>,
    pub transaction: Option<TransactionType>,
    pub city: String,
    pub wilaya: String,
    pub rooms: Option<u32>,
    pub amenities: Vec<String>,
}

impl ListingDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.price <= 0 {
            return Err(DraftError::NonPositivePrice(self.price));
        }
        if self.surface <= 0 {
            return Err(DraftError::NonPositiveSurface(self.surface));
        }
        Ok(())
    }

    /// Turn a validated draft into a listing owned by the given seller
    pub fn publish(self, seller: &User) -> Result<Listing, DraftError> {
        self.validate()?;
        Ok(Listing {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            price: self.price,
            surface: self.surface,
            property_type: self.property_type.unwrap_or(PropertyType::Apartment),
            transaction: self.transaction.unwrap_or(TransactionType::Buy),
            location: Location {
                city: self.city,
                wilaya: self.wilaya,
            },
            rooms: self.rooms,
            bedrooms: None,
            floor: None,
            amenities: self.amenities,
            images: Vec::new(),
            seller: Seller {
                id: seller.id.clone(),
                name: seller.display_name.clone(),
                kind: seller.kind,
            },
            created_at: Utc::now(),
            is_boosted: false,
        })
    }
}
