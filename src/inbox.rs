//! Simulated messaging inbox. Single-user and in-memory: sending a message
//! appends it locally and echoes a canned acknowledgement from the seller,
//! there is no transport behind it.

use chrono::Utc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::inbox::{Conversation, Message, MessageSender};
use crate::models::listing::Listing;

const AUTO_REPLY: &str = "Merci pour votre message, je reviens vers vous rapidement.";

#[derive(Debug, Error)]
pub enum InboxError {
    #[error("conversation {0} not found")]
    ConversationNotFound(String),
}

#[derive(Debug, Default)]
pub struct Inbox {
    conversations: Vec<Conversation>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inbox pre-filled with a couple of ongoing conversations
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self {
            conversations: vec![
                Conversation {
                    id: "conv-001".to_string(),
                    peer_id: "agc-immodar".to_string(),
                    peer_name: "ImmoDar Agence".to_string(),
                    listing_id: "lst-001".to_string(),
                    listing_title: "F3 lumineux à Hydra".to_string(),
                    messages: vec![
                        Message {
                            id: "msg-001".to_string(),
                            sender: MessageSender::Me,
                            body: "Bonjour, l'appartement est-il toujours disponible ?".to_string(),
                            sent_at: now - chrono::Duration::hours(26),
                            read: true,
                        },
                        Message {
                            id: "msg-002".to_string(),
                            sender: MessageSender::Peer,
                            body: "Bonjour, oui il est disponible. Une visite est possible ce week-end.".to_string(),
                            sent_at: now - chrono::Duration::hours(20),
                            read: false,
                        },
                    ],
                },
                Conversation {
                    id: "conv-002".to_string(),
                    peer_id: "usr-karim".to_string(),
                    peer_name: "Karim B.".to_string(),
                    listing_id: "lst-002".to_string(),
                    listing_title: "Studio meublé à Bab Ezzouar".to_string(),
                    messages: vec![Message {
                        id: "msg-003".to_string(),
                        sender: MessageSender::Peer,
                        body: "Le studio se libère au début du mois prochain.".to_string(),
                        sent_at: now - chrono::Duration::days(2),
                        read: false,
                    }],
                },
            ],
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Unread messages across all conversations, for the badge
    pub fn unread_total(&self) -> usize {
        self.conversations.iter().map(|c| c.unread_count()).sum()
    }

    /// Open a conversation with a listing's seller, or return the existing
    /// one for that listing.
    pub fn start_conversation(&mut self, listing: &Listing) -> &Conversation {
        if let Some(idx) = self
            .conversations
            .iter()
            .position(|c| c.listing_id == listing.id)
        {
            return &self.conversations[idx];
        }
        let conversation = Conversation {
            id: Uuid::new_v4().to_string(),
            peer_id: listing.seller.id.clone(),
            peer_name: listing.seller.name.clone(),
            listing_id: listing.id.clone(),
            listing_title: listing.title.clone(),
            messages: Vec::new(),
        };
        self.conversations.push(conversation);
        self.conversations
            .last()
            .expect("conversation was just pushed")
    }

    /// Append a message from the user and simulate the seller's reply
    pub fn send_message(&mut self, conversation_id: &str, body: &str) -> Result<(), InboxError> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| InboxError::ConversationNotFound(conversation_id.to_string()))?;

        let now = Utc::now();
        conversation.messages.push(Message {
            id: Uuid::new_v4().to_string(),
            sender: MessageSender::Me,
            body: body.to_string(),
            sent_at: now,
            read: true,
        });
        conversation.messages.push(Message {
            id: Uuid::new_v4().to_string(),
            sender: MessageSender::Peer,
            body: AUTO_REPLY.to_string(),
            sent_at: now,
            read: false,
        });
        debug!("Message sent in {conversation_id}");
        Ok(())
    }

    /// Mark every peer message in the conversation as read
    pub fn mark_read(&mut self, conversation_id: &str) -> Result<(), InboxError> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| InboxError::ConversationNotFound(conversation_id.to_string()))?;
        for message in &mut conversation.messages {
            if message.sender == MessageSender::Peer {
                message.read = true;
            }
        }
        Ok(())
    }
}
