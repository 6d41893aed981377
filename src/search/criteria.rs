use serde::{Deserialize, Serialize};

use crate::models::listing::{Listing, PropertyType, TransactionType};

/// Search criteria for browsing the catalogue. Every field is optional;
/// `None` means the predicate is not applied. Predicates are AND-combined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Wilaya, exact match
    pub wilaya: Option<String>,
    /// Buy or rent
    pub transaction: Option<TransactionType>,
    pub property_type: Option<PropertyType>,
    /// Price bounds (DZD), each independently optional
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    /// Surface bounds in square meters
    pub surface_min: Option<i32>,
    pub surface_max: Option<i32>,
    /// Exact room count
    pub rooms: Option<u32>,
}

impl FilterCriteria {
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(wilaya) = &self.wilaya {
            if &listing.location.wilaya != wilaya {
                return false;
            }
        }
        if let Some(transaction) = self.transaction {
            if listing.transaction != transaction {
                return false;
            }
        }
        if let Some(property_type) = self.property_type {
            if listing.property_type != property_type {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if listing.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if listing.price > max {
                return false;
            }
        }
        if let Some(min) = self.surface_min {
            if listing.surface < min {
                return false;
            }
        }
        if let Some(max) = self.surface_max {
            if listing.surface > max {
                return false;
            }
        }
        if let Some(rooms) = self.rooms {
            if listing.rooms != Some(rooms) {
                return false;
            }
        }
        true
    }
}
