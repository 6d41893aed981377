//! Session-scoped user store: wallet, entitlements, favorites, alerts.
//!
//! Single source of truth for the signed-in user. Every mutation rewrites
//! the persisted snapshot before returning, so the in-memory record and the
//! stored one never diverge. The store is single-owner: callers receive it
//! by reference, there is no global instance.

use tracing::{debug, info};
use uuid::Uuid;

use crate::billing::Latency;
use crate::config::{BalancePolicy, MarketConfig};
use crate::models::{
    Alert, AlertDraft, ProfilePatch, SessionCounters, SignupProfile, SubscriptionTier, User,
};

use super::error::{StoreError, StoreResult};
use super::storage::{KeyValueStorage, CURRENT_USER_KEY};

pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    config: MarketConfig,
    latency: Latency,
    user: Option<User>,
    counters: SessionCounters,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S, config: MarketConfig) -> Self {
        let latency = config.latency();
        Self {
            storage,
            config,
            latency,
            user: None,
            counters: SessionCounters::default(),
        }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn counters(&self) -> SessionCounters {
        self.counters
    }

    /// Rehydrate the session from storage, if a snapshot is present.
    /// Counters are re-derived from the persisted tier; the unlock counter
    /// starts back at zero (it only ever resets here).
    pub fn restore(&mut self) -> StoreResult<Option<&User>> {
        if let Some(raw) = self.storage.get(CURRENT_USER_KEY)? {
            let user: User = serde_json::from_str(&raw)?;
            debug!("Restored session for {}", user.email);
            self.counters = SessionCounters::for_tier(user.subscription);
            self.user = Some(user);
        }
        Ok(self.user.as_ref())
    }

    /// Sign in with an email and credential. Resolves the persisted user
    /// when the email matches, otherwise constructs a fresh account.
    pub async fn authenticate(&mut self, email: &str, credential: &str) -> StoreResult<User> {
        if credential.len() < self.config.min_credential_len {
            return Err(StoreError::CredentialTooShort {
                min: self.config.min_credential_len,
            });
        }

        self.latency.wait().await;

        let user = match self.storage.get(CURRENT_USER_KEY)? {
            Some(raw) => {
                let persisted: User = serde_json::from_str(&raw)?;
                if persisted.email.eq_ignore_ascii_case(email) {
                    persisted
                } else {
                    User::from_email(email, self.config.welcome_bonus)
                }
            }
            None => User::from_email(email, self.config.welcome_bonus),
        };

        info!("Signed in as {}", user.email);
        self.install(user.clone())?;
        Ok(user)
    }

    /// Create a new account. No uniqueness check: this is a single-user
    /// client, the previous snapshot is simply replaced.
    pub async fn register(&mut self, profile: SignupProfile) -> StoreResult<User> {
        self.latency.wait().await;

        let user = User::signup(profile, self.config.welcome_bonus);
        info!("Registered {} with welcome bonus {}", user.email, user.balance);
        self.install(user.clone())?;
        Ok(user)
    }

    /// Sign out: clears memory and removes the persisted snapshot
    pub fn deauthenticate(&mut self) -> StoreResult<()> {
        self.user = None;
        self.counters = SessionCounters::default();
        self.storage.remove(CURRENT_USER_KEY)
    }

    /// Apply a signed delta to the balance and return the new balance.
    /// Under the permissive policy the balance may go negative; the enforced
    /// policy rejects such debits instead.
    pub fn adjust_balance(&mut self, delta: i64) -> StoreResult<i64> {
        let policy = self.config.balance_policy;
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;

        let next = user.balance + delta;
        if policy == BalancePolicy::Enforced && next < 0 {
            return Err(StoreError::InsufficientFunds {
                required: -delta,
                available: user.balance,
            });
        }

        user.balance = next;
        debug!("Balance adjusted by {delta}, now {next}");
        self.persist()?;
        Ok(next)
    }

    /// Switch subscription tier. Re-derives the boost allowance from the new
    /// tier, discarding any partially used count. The unlock counter is left
    /// alone.
    pub fn set_subscription(&mut self, tier: SubscriptionTier) -> StoreResult<()> {
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;
        user.subscription = tier;
        self.counters.boosts_remaining = tier.boost_allowance();
        info!("Subscription set to {}", tier.as_str());
        self.persist()
    }

    /// Shallow-merge profile fields
    pub fn patch_profile(&mut self, patch: ProfilePatch) -> StoreResult<()> {
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;
        if let Some(display_name) = patch.display_name {
            user.display_name = display_name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(kind) = patch.kind {
            user.kind = kind;
        }
        self.persist()
    }

    /// Add the listing to favorites, or remove it if already there.
    /// Returns whether the listing is a favorite afterwards.
    pub fn toggle_favorite(&mut self, listing_id: &str) -> StoreResult<bool> {
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;
        let now_favorite = match user.favorites.iter().position(|id| id == listing_id) {
            Some(idx) => {
                user.favorites.remove(idx);
                false
            }
            None => {
                user.favorites.push(listing_id.to_string());
                true
            }
        };
        self.persist()?;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, listing_id: &str) -> bool {
        self.user
            .as_ref()
            .map(|u| u.favorites.iter().any(|id| id == listing_id))
            .unwrap_or(false)
    }

    /// Save a new alert, active by default
    pub fn add_alert(&mut self, draft: AlertDraft) -> StoreResult<Alert> {
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;
        let alert = Alert {
            id: Uuid::new_v4().to_string(),
            property_type: draft.property_type,
            transaction: draft.transaction,
            wilaya: draft.wilaya,
            max_price: draft.max_price,
            is_active: true,
        };
        user.alerts.push(alert.clone());
        self.persist()?;
        Ok(alert)
    }

    /// Flip an alert's active flag; returns the new state
    pub fn toggle_alert(&mut self, alert_id: &str) -> StoreResult<bool> {
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;
        let alert = user
            .alerts
            .iter_mut()
            .find(|a| a.id == alert_id)
            .ok_or_else(|| StoreError::AlertNotFound(alert_id.to_string()))?;
        alert.is_active = !alert.is_active;
        let is_active = alert.is_active;
        self.persist()?;
        Ok(is_active)
    }

    pub fn remove_alert(&mut self, alert_id: &str) -> StoreResult<()> {
        let user = self.user.as_mut().ok_or(StoreError::NotAuthenticated)?;
        let before = user.alerts.len();
        user.alerts.retain(|a| a.id != alert_id);
        if user.alerts.len() == before {
            return Err(StoreError::AlertNotFound(alert_id.to_string()));
        }
        self.persist()
    }

    /// Try to take a phone unlock from the entitlement. Paid tiers are
    /// unlimited and never touch the counter; the free tier gets a fixed
    /// quota per session. Returns false once the quota is spent; the caller
    /// decides whether to fall back to a balance charge.
    pub fn consume_phone_unlock(&mut self) -> StoreResult<bool> {
        let user = self.user.as_ref().ok_or(StoreError::NotAuthenticated)?;
        if user.subscription != SubscriptionTier::Free {
            return Ok(true);
        }
        if self.counters.phone_unlocks_today < self.config.free_unlock_quota {
            self.counters.phone_unlocks_today += 1;
            return Ok(true);
        }
        Ok(false)
    }

    /// Try to take a boost credit. Returns false when none remain; the
    /// caller decides whether to fall back to a balance charge.
    pub fn consume_boost_credit(&mut self) -> StoreResult<bool> {
        if self.user.is_none() {
            return Err(StoreError::NotAuthenticated);
        }
        if self.counters.boosts_remaining > 0 {
            self.counters.boosts_remaining -= 1;
            return Ok(true);
        }
        Ok(false)
    }

    fn install(&mut self, user: User) -> StoreResult<()> {
        self.counters = SessionCounters::for_tier(user.subscription);
        self.user = Some(user);
        self.persist()
    }

    fn persist(&self) -> StoreResult<()> {
        match &self.user {
            Some(user) => {
                let snapshot = serde_json::to_string(user)?;
                self.storage.set(CURRENT_USER_KEY, &snapshot)
            }
            None => self.storage.remove(CURRENT_USER_KEY),
        }
    }
}
