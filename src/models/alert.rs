use serde::{Deserialize, Serialize};

use super::listing::{Listing, PropertyType, TransactionType};

/// A saved search. `property_type == None` means any type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub property_type: Option<PropertyType>,
    pub transaction: TransactionType,
    pub wilaya: String,
    pub max_price: Option<i64>,
    pub is_active: bool,
}

impl Alert {
    /// Whether a listing would trigger this alert. Inactive alerts never
    /// match.
    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.is_active {
            return false;
        }
        if let Some(property_type) = self.property_type {
            if listing.property_type != property_type {
                return false;
            }
        }
        if listing.transaction != self.transaction {
            return false;
        }
        if listing.location.wilaya != self.wilaya {
            return false;
        }
        if let Some(max_price) = self.max_price {
            if listing.price > max_price {
                return false;
            }
        }
        true
    }
}

/// Alert as submitted by the user; id and active flag are assigned by the
/// session store.
#[derive(Debug, Clone)]
pub struct AlertDraft {
    pub property_type: Option<PropertyType>,
    pub transaction: TransactionType,
    pub wilaya: String,
    pub max_price: Option<i64>,
}
