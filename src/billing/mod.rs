pub mod flows;
pub mod latency;

pub use flows::{change_subscription, purchase_boost, recharge, unlock_phone, SpendOutcome};
pub use latency::Latency;
