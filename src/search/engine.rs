use tracing::debug;

use crate::models::listing::Listing;

use super::criteria::FilterCriteria;

/// Filter the catalogue by sequential predicate narrowing. Pure and
/// order-preserving: the result keeps the input order, and identical
/// criteria over an unchanged collection always yield the same subset.
pub fn filter_listings<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    let matches: Vec<&Listing> = listings.iter().filter(|l| criteria.matches(l)).collect();
    debug!("Filter kept {} of {} listings", matches.len(), listings.len());
    matches
}
