use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::alert::Alert;

/// Whether the account belongs to a private individual or an agency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Individual,
    Agency,
}

/// Subscription tier, drives boost credits and phone-unlock limits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Premium,
    Ultime,
}

impl SubscriptionTier {
    /// Boost credits included with the tier for the current session
    pub fn boost_allowance(self) -> u32 {
        match self {
            SubscriptionTier::Free => 0,
            SubscriptionTier::Premium => 2,
            SubscriptionTier::Ultime => 10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Premium => "premium",
            SubscriptionTier::Ultime => "ultime",
        }
    }
}

/// The signed-in user. The serialized form is the persisted snapshot; it must
/// match the in-memory record after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub kind: AccountKind,
    /// Wallet balance in DZD. Not withdrawable, only spent in-platform.
    pub balance: i64,
    pub subscription: SubscriptionTier,
    /// Listing ids, treated as a set (insertion order is not meaningful)
    pub favorites: Vec<String>,
    pub alerts: Vec<Alert>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh account from a signup form
    pub fn signup(profile: SignupProfile, welcome_bonus: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            display_name: profile.display_name,
            email: profile.email,
            phone: profile.phone,
            kind: profile.kind,
            balance: welcome_bonus,
            subscription: SubscriptionTier::Free,
            favorites: Vec::new(),
            alerts: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Build an account from a bare email, for sign-ins with no persisted
    /// record behind them. Display name falls back to the local part.
    pub fn from_email(email: &str, welcome_bonus: i64) -> Self {
        let display_name = email.split('@').next().unwrap_or(email).to_string();
        Self::signup(
            SignupProfile {
                display_name,
                email: email.to_string(),
                phone: None,
                kind: AccountKind::Individual,
            },
            welcome_bonus,
        )
    }
}

/// Signup form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupProfile {
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub kind: AccountKind,
}

/// Shallow profile update; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub kind: Option<AccountKind>,
}

/// Per-session counters derived from the subscription tier. Never persisted:
/// they are rebuilt on every session (re)initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCounters {
    pub boosts_remaining: u32,
    pub phone_unlocks_today: u32,
}

impl SessionCounters {
    pub fn for_tier(tier: SubscriptionTier) -> Self {
        Self {
            boosts_remaining: tier.boost_allowance(),
            phone_unlocks_today: 0,
        }
    }
}

impl Default for SessionCounters {
    fn default() -> Self {
        Self::for_tier(SubscriptionTier::Free)
    }
}
