pub mod alert;
pub mod boost;
pub mod inbox;
pub mod listing;
pub mod user;

pub use alert::{Alert, AlertDraft};
pub use boost::{BoostAnalytics, BoostStatus};
pub use inbox::{Conversation, Message, MessageSender};
pub use listing::{Listing, ListingDraft, Location, PropertyType, Seller, TransactionType};
pub use user::{AccountKind, ProfilePatch, SessionCounters, SignupProfile, SubscriptionTier, User};
