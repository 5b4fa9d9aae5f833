//! Append-only conversation log.
//!
//! The log records every exchanged message for the active session in
//! insertion order. Entries are never edited or removed; a new session
//! replaces the whole log. Bounding the rendered history, if desired at
//! all, is a presentation concern.

use crate::types::Message;

/// Ordered, append-only record of exchanged messages for one session.
#[derive(Clone, Debug, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, preserving insertion order.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Returns a borrowed view of the messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns an owned copy of the full ordered sequence.
    ///
    /// The copy is stable: later appends do not affect a snapshot a
    /// renderer is iterating.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Returns the most recently appended message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the log contains no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
