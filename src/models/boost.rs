use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::listing::Listing;

/// Number of days a boost keeps a listing promoted
const BOOST_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BoostStatus {
    Active,
    Completed,
}

/// Read-only reporting record for a boosted listing. Display-only: the core
/// never mutates these. Counters are derived from the listing id so the
/// report for a given listing is stable across renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostAnalytics {
    pub listing_id: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: BoostStatus,
    pub spent_budget: i64,
    pub estimated_reach_min: u64,
    pub estimated_reach_max: u64,
    pub impressions: u64,
    pub clicks: u64,
    pub messages: u64,
    pub phone_reveals: u64,
}

impl BoostAnalytics {
    pub fn for_listing(listing: &Listing, spent_budget: i64) -> Self {
        let starts_at = listing.created_at;
        let ends_at = starts_at + Duration::days(BOOST_WINDOW_DAYS);
        let status = if Utc::now() < ends_at {
            BoostStatus::Active
        } else {
            BoostStatus::Completed
        };

        let seed = listing
            .id
            .bytes()
            .fold(0u64, |acc, b| acc.wrapping_mul(131).wrapping_add(u64::from(b)));
        let impressions = 900 + seed % 4_100;
        let clicks = impressions / 14 + seed % 9;

        Self {
            listing_id: listing.id.clone(),
            starts_at,
            ends_at,
            status,
            spent_budget,
            estimated_reach_min: impressions * 3,
            estimated_reach_max: impressions * 5,
            impressions,
            clicks,
            messages: clicks / 6,
            phone_reveals: clicks / 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{Location, PropertyType, Seller, TransactionType};
    use crate::models::user::AccountKind;

    fn listing(id: &str, created_at: DateTime<Utc>) -> Listing {
        Listing {
            id: id.to_string(),
            title: "Boosted listing".to_string(),
            description: String::new(),
            price: 50_000,
            surface: 70,
            property_type: PropertyType::Apartment,
            transaction: TransactionType::Rent,
            location: Location {
                city: "Alger".to_string(),
                wilaya: "Alger".to_string(),
            },
            rooms: Some(3),
            bedrooms: None,
            floor: None,
            amenities: vec![],
            images: vec![],
            seller: Seller {
                id: "seller-1".to_string(),
                name: "Agence Centrale".to_string(),
                kind: AccountKind::Agency,
            },
            created_at,
            is_boosted: true,
        }
    }

    #[test]
    fn counters_are_stable_for_a_listing() {
        let subject = listing("lst-042", Utc::now());
        let first = BoostAnalytics::for_listing(&subject, 500);
        let second = BoostAnalytics::for_listing(&subject, 500);
        assert_eq!(first.impressions, second.impressions);
        assert_eq!(first.clicks, second.clicks);
        assert_eq!(first.phone_reveals, second.phone_reveals);
    }

    #[test]
    fn fresh_boost_is_active_and_old_boost_is_completed() {
        let fresh = BoostAnalytics::for_listing(&listing("lst-1", Utc::now()), 500);
        assert_eq!(fresh.status, BoostStatus::Active);

        let old = listing("lst-2", Utc::now() - Duration::days(30));
        let report = BoostAnalytics::for_listing(&old, 500);
        assert_eq!(report.status, BoostStatus::Completed);
    }

    #[test]
    fn reach_range_brackets_impressions() {
        let report = BoostAnalytics::for_listing(&listing("lst-3", Utc::now()), 500);
        assert!(report.estimated_reach_min < report.estimated_reach_max);
        assert!(report.estimated_reach_min >= report.impressions);
    }
}
