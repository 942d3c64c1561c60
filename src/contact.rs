use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Message is empty")]
    Empty,
    #[error("Couldn't send message")]
    Delivery,
}

/// Fields submitted by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// A message with no body or no way to reply is not worth sending.
    pub fn is_blank(&self) -> bool {
        self.message.trim().is_empty() || self.email.trim().is_empty()
    }

    pub fn check(&self) -> Result<(), ContactError> {
        if self.is_blank() {
            Err(ContactError::Empty)
        } else {
            Ok(())
        }
    }

    /// One-line summary used in logs.
    pub fn summary(&self) -> String {
        let subject = self.subject.trim();
        let subject = if subject.is_empty() {
            "(no subject)"
        } else {
            subject
        };
        format!("{} <{}>: {}", self.name.trim(), self.email.trim(), subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: "Dashboard".to_string(),
            message: "Could you build one for us?".to_string(),
        }
    }

    #[test]
    fn test_blank() {
        assert!(ContactMessage::default().is_blank());
        assert_eq!(ContactMessage::default().check(), Err(ContactError::Empty));

        let whitespace = ContactMessage {
            message: "   \n".to_string(),
            ..message()
        };
        assert!(whitespace.is_blank());

        let no_reply = ContactMessage {
            email: String::new(),
            ..message()
        };
        assert!(no_reply.is_blank());
        assert_eq!(message().check(), Ok(()));
    }

    #[test]
    fn test_summary() {
        assert_eq!(message().summary(), "Ana <ana@example.com>: Dashboard");
        let untitled = ContactMessage {
            subject: " ".to_string(),
            ..message()
        };
        assert_eq!(untitled.summary(), "Ana <ana@example.com>: (no subject)");
    }
}
