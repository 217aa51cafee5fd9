use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("The {0} field is required")]
    MissingField(ContactField),
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
}

/// What the contact form collects. Nothing is sent anywhere; submissions are only logged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField(ContactField::Name));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField(ContactField::Email));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField(ContactField::Message));
        }
        let mut parts = self.email.trim().split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail(self.email.clone())),
        }
    }

    /// Validates and logs the message locally.
    pub fn submit(&self) -> Result<(), ContactError> {
        match self.validate() {
            Ok(()) => {
                log::info!("Form submitted: {self:?}");
                Ok(())
            }
            Err(e) => {
                log::warn!("Form rejected: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_message() {
        let msg = ContactMessage::new("  Satoshi ", "me@example.com", "Hello there");
        assert_eq!(msg.name, "Satoshi");
        assert_eq!(msg.validate(), Ok(()));
        assert_eq!(msg.submit(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            ContactMessage::new(" ", "me@example.com", "hi").validate(),
            Err(ContactError::MissingField(ContactField::Name))
        );
        assert_eq!(
            ContactMessage::new("A", "", "hi").validate(),
            Err(ContactError::MissingField(ContactField::Email))
        );
        assert_eq!(
            ContactMessage::new("A", "a@b.c", "\n\t").validate(),
            Err(ContactError::MissingField(ContactField::Message))
        );
        assert_eq!(
            ContactMessage::default().submit(),
            Err(ContactError::MissingField(ContactField::Name))
        );
    }

    #[test]
    fn test_invalid_email() {
        for email in ["plain", "@example.com", "me@", "a@b@c"] {
            let msg = ContactMessage::new("A", email, "hi");
            assert_eq!(
                msg.validate(),
                Err(ContactError::InvalidEmail(email.to_string())),
                "{email}"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(ContactField::Email).to_string(),
            "The email field is required"
        );
    }
}
