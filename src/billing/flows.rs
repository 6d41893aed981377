//! Purchase flows coordinating entitlement credits and the wallet.
//!
//! Spending is a two-step protocol: first ask the entitlement for a credit,
//! and only when that is refused check the balance and charge it. The steps
//! stay separate so the UI can tell "covered by the plan" apart from
//! "charged the wallet" apart from "insufficient funds".

use tracing::info;

use crate::models::SubscriptionTier;
use crate::store::error::{StoreError, StoreResult};
use crate::store::session::SessionStore;
use crate::store::storage::KeyValueStorage;

/// How a purchase was covered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendOutcome {
    /// Covered by the subscription (boost credit or free unlock quota)
    Included,
    /// Charged to the wallet
    BalanceCharged(i64),
}

/// Top up the wallet. Latency-wrapped like any other backend mutation.
pub async fn recharge<S: KeyValueStorage>(
    store: &mut SessionStore<S>,
    amount: i64,
) -> StoreResult<i64> {
    store.latency().wait().await;
    let balance = store.adjust_balance(amount)?;
    info!("Recharged {amount}, balance is now {balance}");
    Ok(balance)
}

/// Switch subscription tier, charging the tier price first. Free is always
/// chargeless. A refused charge leaves the current tier untouched.
pub async fn change_subscription<S: KeyValueStorage>(
    store: &mut SessionStore<S>,
    tier: SubscriptionTier,
) -> StoreResult<()> {
    let price = store.config().tier_price(tier);
    store.latency().wait().await;
    if price > 0 {
        charge(store, price)?;
    }
    store.set_subscription(tier)
}

/// Boost a listing: consume a subscription credit when one remains,
/// otherwise charge the boost price to the wallet.
pub async fn purchase_boost<S: KeyValueStorage>(
    store: &mut SessionStore<S>,
    listing_id: &str,
) -> StoreResult<SpendOutcome> {
    store.latency().wait().await;

    if store.consume_boost_credit()? {
        info!("Boosted listing {listing_id} with a subscription credit");
        return Ok(SpendOutcome::Included);
    }

    let cost = store.config().boost_price;
    charge(store, cost)?;
    info!("Boosted listing {listing_id} for {cost}");
    Ok(SpendOutcome::BalanceCharged(cost))
}

/// Reveal a seller's phone number: free quota (or unlimited tier) first,
/// then the wallet. Synchronous; unlocking is not a backend mutation.
pub fn unlock_phone<S: KeyValueStorage>(
    store: &mut SessionStore<S>,
    listing_id: &str,
) -> StoreResult<SpendOutcome> {
    if store.consume_phone_unlock()? {
        info!("Phone unlocked for listing {listing_id} within the plan");
        return Ok(SpendOutcome::Included);
    }

    let cost = store.config().phone_unlock_price;
    charge(store, cost)?;
    info!("Phone unlocked for listing {listing_id} for {cost}");
    Ok(SpendOutcome::BalanceCharged(cost))
}

/// Charge the wallet, refusing when the balance does not cover the cost.
/// The balance check lives here, not in `adjust_balance`: the store's debit
/// stays policy-driven while purchases always verify funds.
fn charge<S: KeyValueStorage>(store: &mut SessionStore<S>, cost: i64) -> StoreResult<i64> {
    let balance = store
        .current_user()
        .ok_or(StoreError::NotAuthenticated)?
        .balance;
    if balance < cost {
        return Err(StoreError::InsufficientFunds {
            required: cost,
            available: balance,
        });
    }
    store.adjust_balance(-cost)
}
