//! Community "club" chat: fixed text channels with a local message list
//! per channel. Nothing is sent to the backend.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
    pub id: &'static str,
    pub name: &'static str,
}

pub const TEXT_CHANNELS: [Channel; 4] = [
    Channel { id: "general", name: "general" },
    Channel { id: "projects", name: "project-sharing" },
    Channel { id: "questions", name: "questions" },
    Channel { id: "coding", name: "coding-together" },
];

pub const DEFAULT_CHANNEL: &str = "general";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClubMessage {
    pub id: u64,
    pub author: String,
    /// `Some("Mentor")` for staff.
    pub tag: Option<String>,
    /// `HH:MM` for seeded messages, `None` for ones sent this session.
    pub time: Option<String>,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Club {
    active: &'static str,
    messages: HashMap<&'static str, Vec<ClubMessage>>,
    next_id: u64,
}

impl Default for Club {
    fn default() -> Self {
        let mut club = Self {
            active: DEFAULT_CHANNEL,
            messages: HashMap::new(),
            next_id: 0,
        };
        for (author, tag, time, text) in [
            (
                "Firza Ilmi",
                Some("Mentor"),
                "14:20",
                "Hi everyone! Welcome to the Mavecode Club. Talk about anything tech here.",
            ),
            (
                "Budi Raharjo",
                None,
                "14:22",
                "Love this! Is there a discussion group for the React Hooks module?",
            ),
            (
                "Siti Aminah",
                None,
                "14:25",
                "I just shared my landing page in #project-sharing. Reviews welcome! 🚀",
            ),
        ] {
            club.append(
                DEFAULT_CHANNEL,
                author,
                tag.map(str::to_string),
                Some(time.to_string()),
                text,
            );
        }
        club
    }
}

impl Club {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Channel {
        TEXT_CHANNELS
            .iter()
            .copied()
            .find(|c| c.id == self.active)
            .unwrap_or(TEXT_CHANNELS[0])
    }

    /// Switch to `id`. Unknown ids are ignored and return `false`.
    pub fn switch(&mut self, id: &str) -> bool {
        match TEXT_CHANNELS.iter().find(|c| c.id == id) {
            Some(channel) => {
                self.active = channel.id;
                true
            }
            None => false,
        }
    }

    /// Messages of the active channel, oldest first.
    pub fn messages(&self) -> &[ClubMessage] {
        self.messages.get(self.active).map_or(&[], Vec::as_slice)
    }

    /// Post `text` to the active channel. Blank input is rejected.
    pub fn send(&mut self, author: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.append(self.active, author, None, None, text);
        true
    }

    fn append(
        &mut self,
        channel: &'static str,
        author: &str,
        tag: Option<String>,
        time: Option<String>,
        text: &str,
    ) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.entry(channel).or_default().push(ClubMessage {
            id,
            author: author.to_string(),
            tag,
            time,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_general_with_welcome() {
        let club = Club::new();
        assert_eq!(club.active().id, DEFAULT_CHANNEL);
        assert_eq!(club.messages().len(), 3);
        assert_eq!(club.messages()[0].tag.as_deref(), Some("Mentor"));
    }

    #[test]
    fn test_messages_stay_in_their_channel() {
        let mut club = Club::new();
        assert!(club.switch("questions"));
        assert!(club.messages().is_empty());

        assert!(club.send("Sari", "  How do I reset my password?  "));
        assert_eq!(club.messages().len(), 1);
        assert_eq!(club.messages()[0].text, "How do I reset my password?");
        assert_eq!(club.messages()[0].time, None);

        club.switch("general");
        assert_eq!(club.messages().len(), 3);
        club.switch("questions");
        assert_eq!(club.messages().len(), 1);
    }

    #[test]
    fn test_blank_send_and_unknown_channel() {
        let mut club = Club::new();
        assert!(!club.send("Sari", "   "));
        assert_eq!(club.messages().len(), 3);

        assert!(!club.switch("voice-lounge"));
        assert_eq!(club.active().id, DEFAULT_CHANNEL);
    }
}
