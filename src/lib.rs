//! dari-market core library
//!
//! Client-side core of a real-estate marketplace:
//! - Session store owning the signed-in user's wallet, entitlements,
//!   favorites and alerts, persisted after every mutation
//! - Catalogue filtering by AND-combined search criteria
//! - Purchase flows with simulated backend latency
//! - External AI description generation with a non-fatal failure path

pub mod billing;
pub mod catalog;
pub mod config;
pub mod describe;
pub mod inbox;
pub mod locale;
pub mod models;
pub mod search;
pub mod store;

pub use config::{BalancePolicy, MarketConfig};
pub use store::{SessionStore, StoreError, StoreResult};
