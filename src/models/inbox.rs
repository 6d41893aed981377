use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    Me,
    Peer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: MessageSender,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

/// A conversation with one seller about one listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub peer_id: String,
    pub peer_name: String,
    pub listing_id: String,
    pub listing_title: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Unread messages from the peer
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == MessageSender::Peer && !m.read)
            .count()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
