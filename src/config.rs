use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::billing::Latency;
use crate::models::SubscriptionTier;

/// What happens when a debit would push the balance below zero.
/// `Permissive` reproduces the historical behavior (negative balances are
/// reachable); `Enforced` rejects the debit instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BalancePolicy {
    Permissive,
    Enforced,
}

/// Marketplace tunables. Defaults match the fixed constants of the platform;
/// a JSON file can override any subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketConfig {
    /// Balance granted on signup (DZD)
    pub welcome_bonus: i64,
    /// Minimum accepted credential length
    pub min_credential_len: usize,
    /// Free-tier phone unlocks included per session
    pub free_unlock_quota: u32,
    /// Price of a phone unlock once the free quota is spent
    pub phone_unlock_price: i64,
    /// Price of boosting a listing without a boost credit
    pub boost_price: i64,
    pub premium_price: i64,
    pub ultime_price: i64,
    /// Simulated backend latency for state-changing flows
    pub latency_ms: u64,
    pub balance_policy: BalancePolicy,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            welcome_bonus: 1000,
            min_credential_len: 8,
            free_unlock_quota: 3,
            phone_unlock_price: 100,
            boost_price: 500,
            premium_price: 2500,
            ultime_price: 5000,
            latency_ms: 600,
            balance_policy: BalancePolicy::Permissive,
        }
    }
}

impl MarketConfig {
    pub fn tier_price(&self, tier: SubscriptionTier) -> i64 {
        match tier {
            SubscriptionTier::Free => 0,
            SubscriptionTier::Premium => self.premium_price,
            SubscriptionTier::Ultime => self.ultime_price,
        }
    }

    pub fn latency(&self) -> Latency {
        Latency::from_millis(self.latency_ms)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
