//! Conversation state of the floating chat assistant.

use serde::{Deserialize, Serialize};

use crate::models::ChatReply;

pub const GREETING: &str =
    "Hi! 👋 I'm the Mavecode AI assistant. Can I help you with courses, articles or subscriptions?";

pub const FAILURE_MESSAGE: &str =
    "Sorry, something went wrong. Please try again or reach us on WhatsApp: +62 851 9176 9521";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn assistant(content: &str) -> Self {
        Self {
            role: Role::Assistant,
            content: content.to_string(),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    session_id: Option<String>,
    pending: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            session_id: None,
            pending: false,
        }
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record the user's message and return the request to send, or `None`
    /// when the input is blank or a reply is still outstanding.
    pub fn begin_send(&mut self, input: &str) -> Option<ChatRequest> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            content: text.to_string(),
        });
        self.pending = true;
        Some(ChatRequest {
            message: text.to_string(),
            session_id: self.session_id.clone(),
        })
    }

    pub fn receive(&mut self, reply: ChatReply) {
        self.session_id = Some(reply.session_id);
        self.messages.push(ChatMessage::assistant(&reply.response));
        self.pending = false;
    }

    pub fn fail(&mut self) {
        self.messages.push(ChatMessage::assistant(FAILURE_MESSAGE));
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str, session: &str) -> ChatReply {
        ChatReply {
            response: text.to_string(),
            session_id: session.to_string(),
        }
    }

    #[test]
    fn test_starts_with_greeting() {
        let chat = ChatSession::new();
        assert_eq!(chat.messages(), &[ChatMessage::assistant(GREETING)]);
        assert_eq!(chat.session_id(), None);
    }

    #[test]
    fn test_blank_and_concurrent_sends_are_ignored() {
        let mut chat = ChatSession::new();
        assert_eq!(chat.begin_send("   "), None);

        let request = chat.begin_send("  berapa harga kursus?  ").unwrap();
        assert_eq!(request.message, "berapa harga kursus?");
        assert_eq!(request.session_id, None);
        assert!(chat.is_pending());
        assert_eq!(chat.begin_send("halo?"), None);
        assert_eq!(chat.messages().len(), 2);
    }

    #[test]
    fn test_session_id_is_replayed() {
        let mut chat = ChatSession::new();
        chat.begin_send("hi").unwrap();
        chat.receive(reply("hello", "s-42"));
        assert!(!chat.is_pending());

        let next = chat.begin_send("more").unwrap();
        assert_eq!(next.session_id.as_deref(), Some("s-42"));
        chat.receive(reply("sure", "s-43"));
        assert_eq!(chat.session_id(), Some("s-43"));
        assert_eq!(chat.messages().last().unwrap().content, "sure");
    }

    #[test]
    fn test_failure_appends_apology() {
        let mut chat = ChatSession::new();
        chat.begin_send("hi").unwrap();
        chat.fail();
        assert!(!chat.is_pending());
        assert_eq!(chat.messages().last().unwrap().content, FAILURE_MESSAGE);
        assert!(chat.begin_send("again").is_some());
    }
}
