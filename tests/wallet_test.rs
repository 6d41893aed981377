//! Tests for the wallet and entitlement side of the session store

mod common;

use common::{fresh_store, profile, signed_in_store};
use dari_market::models::SubscriptionTier;
use dari_market::store::{MemoryStorage, SessionStore};
use dari_market::{BalancePolicy, MarketConfig, StoreError};

/// A new individual account starts with the welcome bonus, the free tier and
/// empty collections
#[tokio::test]
async fn registration_seeds_the_account() {
    let mut store = fresh_store();
    let user = store.register(profile()).await.unwrap();

    assert_eq!(user.balance, 1000);
    assert_eq!(user.subscription, SubscriptionTier::Free);
    assert!(user.favorites.is_empty());
    assert!(user.alerts.is_empty());
    assert_eq!(store.counters().boosts_remaining, 0);
    assert_eq!(store.counters().phone_unlocks_today, 0);
}

#[tokio::test]
async fn short_credential_is_rejected() {
    let mut store = fresh_store();
    let result = store.authenticate("amine@example.com", "short").await;
    assert!(matches!(result, Err(StoreError::CredentialTooShort { min: 8 })));
    assert!(store.current_user().is_none());
}

#[tokio::test]
async fn authenticate_constructs_a_user_when_nothing_is_persisted() {
    let mut store = fresh_store();
    let user = store.authenticate("amine@example.com", "longenough").await.unwrap();
    assert_eq!(user.email, "amine@example.com");
    assert_eq!(user.display_name, "amine");
    assert_eq!(user.balance, 1000);
}

#[tokio::test]
async fn favorite_toggle_is_idempotent() {
    let mut store = signed_in_store().await;

    assert!(store.toggle_favorite("lst-001").unwrap());
    assert!(store.is_favorite("lst-001"));

    assert!(!store.toggle_favorite("lst-001").unwrap());
    assert!(!store.is_favorite("lst-001"));
    assert!(store.current_user().unwrap().favorites.is_empty());
}

#[tokio::test]
async fn favorites_require_a_session() {
    let mut store = fresh_store();
    assert!(matches!(
        store.toggle_favorite("lst-001"),
        Err(StoreError::NotAuthenticated)
    ));
    assert!(!store.is_favorite("lst-001"));
}

/// Switching tiers always resets the boost allowance to the tier's fixed
/// value, discarding any partially used count
#[tokio::test]
async fn subscription_change_resets_boost_credits() {
    let mut store = signed_in_store().await;

    store.set_subscription(SubscriptionTier::Premium).unwrap();
    assert_eq!(store.counters().boosts_remaining, 2);

    assert!(store.consume_boost_credit().unwrap());
    assert_eq!(store.counters().boosts_remaining, 1);

    store.set_subscription(SubscriptionTier::Premium).unwrap();
    assert_eq!(store.counters().boosts_remaining, 2);

    store.set_subscription(SubscriptionTier::Ultime).unwrap();
    assert_eq!(store.counters().boosts_remaining, 10);

    store.set_subscription(SubscriptionTier::Free).unwrap();
    assert_eq!(store.counters().boosts_remaining, 0);
}

/// Free tier: unlocks 1-3 are allowed and counted, the 4th is refused and
/// the counter stays at the quota
#[tokio::test]
async fn free_tier_phone_unlock_quota_boundary() {
    let mut store = signed_in_store().await;

    for expected in 1..=3u32 {
        assert!(store.consume_phone_unlock().unwrap());
        assert_eq!(store.counters().phone_unlocks_today, expected);
    }

    assert!(!store.consume_phone_unlock().unwrap());
    assert_eq!(store.counters().phone_unlocks_today, 3);
}

/// Paid tiers bypass the quota and never touch the counter
#[tokio::test]
async fn paid_tiers_have_unlimited_phone_unlocks() {
    for tier in [SubscriptionTier::Premium, SubscriptionTier::Ultime] {
        let mut store = signed_in_store().await;
        store.set_subscription(tier).unwrap();

        for _ in 0..10 {
            assert!(store.consume_phone_unlock().unwrap());
        }
        assert_eq!(store.counters().phone_unlocks_today, 0);
    }
}

#[tokio::test]
async fn boost_credit_refused_when_none_remain() {
    let mut store = signed_in_store().await;
    assert!(!store.consume_boost_credit().unwrap());
    assert_eq!(store.counters().boosts_remaining, 0);
}

/// The permissive policy keeps the historical behavior: an over-debit goes
/// through and leaves a negative balance
#[tokio::test]
async fn permissive_policy_allows_negative_balance() {
    let mut store = signed_in_store().await;
    let balance = store.adjust_balance(-1500).unwrap();
    assert_eq!(balance, -500);
    assert_eq!(store.current_user().unwrap().balance, -500);
}

#[tokio::test]
async fn enforced_policy_rejects_over_debit() {
    let config = MarketConfig {
        latency_ms: 0,
        balance_policy: BalancePolicy::Enforced,
        ..MarketConfig::default()
    };
    let mut store = SessionStore::new(MemoryStorage::new(), config);
    store.register(profile()).await.unwrap();

    let result = store.adjust_balance(-1500);
    assert!(matches!(
        result,
        Err(StoreError::InsufficientFunds {
            required: 1500,
            available: 1000
        })
    ));
    assert_eq!(store.current_user().unwrap().balance, 1000);
}

#[tokio::test]
async fn profile_patch_merges_only_present_fields() {
    let mut store = signed_in_store().await;
    store
        .patch_profile(dari_market::models::ProfilePatch {
            display_name: Some("Nadia C.".to_string()),
            phone: Some("+213 770 00 00 00".to_string()),
            ..Default::default()
        })
        .unwrap();

    let user = store.current_user().unwrap();
    assert_eq!(user.display_name, "Nadia C.");
    assert_eq!(user.phone.as_deref(), Some("+213 770 00 00 00"));
    assert_eq!(user.email, "nadia@example.com");
}
