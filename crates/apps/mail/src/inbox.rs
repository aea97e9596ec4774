//! Inbox state and message templates.

use platform_host::{DreamEntry, DreamEmail, DAY_MS};

/// Mail domain every dream character writes from.
pub const DREAM_REALM_DOMAIN: &str = "dreamrealm.void";
/// How many of the latest dreams send mail.
pub const DREAMS_PER_CHECK: usize = 3;
/// Stand-in sender when a dream has no detected characters.
pub const DEFAULT_CHARACTER: &str = "mysterious figure";
/// Sender used while the journal is empty.
pub const KEEPER_CHARACTER: &str = "The Dream Keeper";
/// Themes of the keeper's letter.
pub const KEEPER_THEMES: [&str; 2] = ["mystery", "awakening"];
/// Confirmation shown after sending.
pub const SENT_NOTICE: &str = "Email sent to the dream realm!";

const THEMES_PER_MESSAGE: usize = 3;

/// `first.last@dreamrealm.void` style address for a character name.
pub fn sender_address(character: &str) -> String {
    let local = character.split_whitespace().collect::<Vec<_>>().join(".");
    format!("{local}@{DREAM_REALM_DOMAIN}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One letter the oracle should write.
pub struct MailRequest {
    /// Inbox id.
    pub id: String,
    /// Themes woven into the letter.
    pub themes: Vec<String>,
    /// Who writes it.
    pub character: String,
    /// Sender address.
    pub from: String,
    /// Timestamp shown in the inbox.
    pub received_at_ms: u64,
}

impl MailRequest {
    /// Pairs the request with the generated letter.
    pub fn into_message(self, email: DreamEmail) -> MailMessage {
        MailMessage {
            id: self.id,
            from: self.from,
            subject: email.subject,
            content: email.content,
            received_at_ms: self.received_at_ms,
            read: false,
            starred: false,
        }
    }
}

/// Letters to request for the current journal: one per recent dream, newest dated today.
///
/// An empty journal yields a single letter from the dream keeper.
pub fn inbox_requests(entries: &[DreamEntry], now_ms: u64) -> Vec<MailRequest> {
    if entries.is_empty() {
        return vec![MailRequest {
            id: "1".to_string(),
            themes: KEEPER_THEMES.iter().map(|theme| theme.to_string()).collect(),
            character: KEEPER_CHARACTER.to_string(),
            from: format!("keeper@{DREAM_REALM_DOMAIN}"),
            received_at_ms: now_ms,
        }];
    }

    let recent = &entries[entries.len().saturating_sub(DREAMS_PER_CHECK)..];
    recent
        .iter()
        .enumerate()
        .map(|(index, dream)| {
            let character = dream
                .characters
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_CHARACTER.to_string());
            MailRequest {
                id: (index + 1).to_string(),
                themes: dream
                    .symbols
                    .iter()
                    .chain(dream.emotions.iter())
                    .take(THEMES_PER_MESSAGE)
                    .cloned()
                    .collect(),
                from: sender_address(&character),
                character,
                received_at_ms: now_ms.saturating_sub(index as u64 * DAY_MS),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A received letter.
pub struct MailMessage {
    /// Inbox id.
    pub id: String,
    /// Sender address.
    pub from: String,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub content: String,
    /// Receive time in unix milliseconds.
    pub received_at_ms: u64,
    /// Opened at least once.
    pub read: bool,
    /// Flagged by the reader.
    pub starred: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Received letters plus the open one.
pub struct Inbox {
    messages: Vec<MailMessage>,
    selected: Option<String>,
}

impl Inbox {
    /// Letters in arrival order.
    pub fn messages(&self) -> &[MailMessage] {
        &self.messages
    }

    /// Swaps in a fresh batch; the selection survives only if its id is still present.
    pub fn replace(&mut self, messages: Vec<MailMessage>) {
        self.messages = messages;
        if let Some(id) = &self.selected {
            if !self.messages.iter().any(|message| &message.id == id) {
                self.selected = None;
            }
        }
    }

    /// Opens a letter and marks it read.
    pub fn open(&mut self, id: &str) {
        if let Some(message) = self.messages.iter_mut().find(|message| message.id == id) {
            message.read = true;
            self.selected = Some(message.id.clone());
        }
    }

    /// Flips the star flag.
    pub fn toggle_star(&mut self, id: &str) {
        if let Some(message) = self.messages.iter_mut().find(|message| message.id == id) {
            message.starred = !message.starred;
        }
    }

    /// Drops a letter, closing it if open.
    pub fn delete(&mut self, id: &str) {
        self.messages.retain(|message| message.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    /// The open letter.
    pub fn selected(&self) -> Option<&MailMessage> {
        let id = self.selected.as_deref()?;
        self.messages.iter().find(|message| message.id == id)
    }

    /// Letters not yet opened.
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|message| !message.read).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Outgoing message being edited.
pub struct Compose {
    /// Recipient.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub body: String,
}

impl Compose {
    /// Reply addressed to the sender with the original quoted.
    pub fn reply(message: &MailMessage) -> Self {
        Self {
            to: message.from.clone(),
            subject: format!("Re: {}", message.subject),
            body: quoted("Original Message", message),
        }
    }

    /// Forward with an empty recipient.
    pub fn forward(message: &MailMessage) -> Self {
        Self {
            to: String::new(),
            subject: format!("Fwd: {}", message.subject),
            body: quoted("Forwarded Message", message),
        }
    }
}

fn quoted(label: &str, message: &MailMessage) -> String {
    format!(
        "\n\n--- {label} ---\nFrom: {}\nSubject: {}\n\n{}",
        message.from, message.subject, message.content
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dream(id: &str, symbols: &[&str], emotions: &[&str], characters: &[&str]) -> DreamEntry {
        let owned = |items: &[&str]| items.iter().map(|item| item.to_string()).collect();
        DreamEntry {
            symbols: owned(symbols),
            emotions: owned(emotions),
            characters: owned(characters),
            ..DreamEntry::new(id, id, "content", 0)
        }
    }

    fn message(id: &str) -> MailMessage {
        MailMessage {
            id: id.to_string(),
            from: "wise.guide@dreamrealm.void".to_string(),
            subject: "The Door".to_string(),
            content: "Knock twice.".to_string(),
            received_at_ms: 0,
            read: false,
            starred: false,
        }
    }

    #[test]
    fn sender_addresses_replace_spaces_with_dots() {
        assert_eq!(sender_address("shadow  self"), "shadow.self@dreamrealm.void");
        assert_eq!(sender_address("stranger"), "stranger@dreamrealm.void");
    }

    #[test]
    fn empty_journal_gets_the_keeper_letter() {
        let requests = inbox_requests(&[], 5);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].from, "keeper@dreamrealm.void");
        assert_eq!(requests[0].character, KEEPER_CHARACTER);
        assert_eq!(requests[0].themes, vec!["mystery", "awakening"]);
    }

    #[test]
    fn only_the_last_three_dreams_write_and_themes_are_capped() {
        let entries = vec![
            dream("a", &["door"], &[], &[]),
            dream("b", &["water", "fire"], &["joy", "fear"], &["wise guide"]),
            dream("c", &[], &[], &[]),
            dream("d", &["mirror"], &["wonder"], &["stranger", "anima"]),
        ];
        let now = 10 * DAY_MS;
        let requests = inbox_requests(&entries, now);

        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].themes, vec!["water", "fire", "joy"]);
        assert_eq!(requests[0].from, "wise.guide@dreamrealm.void");
        assert_eq!(requests[1].character, DEFAULT_CHARACTER);
        assert_eq!(requests[2].from, "stranger@dreamrealm.void");
        assert_eq!(requests[2].received_at_ms, now - 2 * DAY_MS);
    }

    #[test]
    fn opening_marks_read_and_delete_closes() {
        let mut inbox = Inbox::default();
        inbox.replace(vec![message("1"), message("2")]);
        assert_eq!(inbox.unread_count(), 2);

        inbox.open("2");
        assert_eq!(inbox.unread_count(), 1);
        assert_eq!(inbox.selected().map(|m| m.id.as_str()), Some("2"));

        inbox.toggle_star("2");
        assert!(inbox.selected().is_some_and(|m| m.starred));

        inbox.delete("2");
        assert_eq!(inbox.selected(), None);
        assert_eq!(inbox.messages().len(), 1);
    }

    #[test]
    fn refreshing_drops_a_stale_selection() {
        let mut inbox = Inbox::default();
        inbox.replace(vec![message("1")]);
        inbox.open("1");
        inbox.replace(vec![message("2")]);
        assert_eq!(inbox.selected(), None);
    }

    #[test]
    fn reply_and_forward_quote_the_original() {
        let original = message("1");
        let reply = Compose::reply(&original);
        assert_eq!(reply.to, original.from);
        assert_eq!(reply.subject, "Re: The Door");
        assert_eq!(
            reply.body,
            "\n\n--- Original Message ---\nFrom: wise.guide@dreamrealm.void\nSubject: The Door\n\nKnock twice."
        );

        let forward = Compose::forward(&original);
        assert_eq!(forward.to, "");
        assert_eq!(forward.subject, "Fwd: The Door");
        assert!(forward.body.starts_with("\n\n--- Forwarded Message ---"));
    }
}
