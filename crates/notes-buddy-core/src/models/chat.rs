//! Chat transcript between the student and the assistant.

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub sender: Sender,
    pub content: String,
    /// Pre-formatted local time label.
    pub timestamp: String,
}

impl Message {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Greeting shown when a chat opens.
pub const GREETING: &str = "Hello! I'm your AI Notes Buddy. Upload a document or ask me any \
                            questions about your study materials!";

/// Ordered list of chat messages with monotonically increasing ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u32,
}

impl Transcript {
    /// Start a transcript with the assistant greeting.
    pub fn new(timestamp: impl Into<String>) -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.push(Sender::Assistant, GREETING, timestamp);
        transcript
    }

    pub fn push_user(&mut self, content: impl Into<String>, timestamp: impl Into<String>) -> u32 {
        self.push(Sender::User, content, timestamp)
    }

    pub fn push_ai(
        &mut self,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> u32 {
        self.push(Sender::Assistant, content, timestamp)
    }

    /// Assistant acknowledgement after a file upload.
    pub fn push_upload_notice(&mut self, file_name: &str, timestamp: impl Into<String>) -> u32 {
        self.push(
            Sender::Assistant,
            format!(
                "I've uploaded \"{}\". Now I can answer questions about this document!",
                file_name
            ),
            timestamp,
        )
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(
        &mut self,
        sender: Sender,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            sender,
            content: content.into(),
            timestamp: timestamp.into(),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let transcript = Transcript::new("09:00");
        assert_eq!(transcript.len(), 1);
        let first = &transcript.messages()[0];
        assert_eq!(first.sender, Sender::Assistant);
        assert_eq!(first.content, GREETING);
    }

    #[test]
    fn test_ids_increase() {
        let mut transcript = Transcript::new("09:00");
        let a = transcript.push_user("hi", "09:01");
        let b = transcript.push_ai("hello", "09:01");
        assert!(b > a);
        assert!(transcript.messages()[1].is_user());
        assert!(!transcript.messages()[2].is_user());
    }

    #[test]
    fn test_upload_notice() {
        let mut transcript = Transcript::new("09:00");
        transcript.push_upload_notice("bio.pdf", "09:02");
        assert!(transcript.messages()[1].content.contains("\"bio.pdf\""));
    }
}
