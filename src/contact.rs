use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_MESSAGE_CHARS: usize = 10;
/// How long a Sent/Failed status stays on screen before returning to Idle.
pub const STATUS_RESET_MS: f64 = 3000.0;

// local@domain.tld with no whitespace and exactly one @ before the domain.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        Err(FieldError::Required)
    } else if !EMAIL_RE.is_match(email) {
        Err(FieldError::InvalidEmail)
    } else {
        Ok(())
    }
}

pub fn validate_message(message: &str) -> Result<(), FieldError> {
    if message.trim().is_empty() {
        Err(FieldError::Required)
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        Err(FieldError::MessageTooShort)
    } else {
        Ok(())
    }
}

impl ContactMessage {
    /// First failing field, if any. The form also runs the field checks
    /// individually for inline errors; this gates the actual submission.
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_message(&self.message)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    /// Terminal statuses linger for [`STATUS_RESET_MS`] and then reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmitStatus::Sent | SubmitStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactMessage {
        ContactMessage {
            name: "Tafara".to_string(),
            email: "mutsvedu.work@gmail.com".to_string(),
            message: "I'd like to talk about a role.".to_string(),
        }
    }

    #[test]
    fn test_valid_message_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_empty_name_is_blocked() {
        let mut msg = valid();
        msg.name = String::new();
        assert_eq!(msg.validate(), Err(FieldError::Required));
    }

    #[test]
    fn test_whitespace_name_is_blocked() {
        assert_eq!(validate_name("   "), Err(FieldError::Required));
    }

    #[test]
    fn test_email_without_tld_is_blocked() {
        let mut msg = valid();
        msg.email = "a@b".to_string();
        assert_eq!(msg.validate(), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn test_email_shapes() {
        assert_eq!(validate_email("a@b.co"), Ok(()));
        assert_eq!(validate_email("first.last+tag@sub.domain.org"), Ok(()));
        assert_eq!(validate_email(""), Err(FieldError::Required));
        assert_eq!(validate_email("no-at-sign.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("spaced name@b.co"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a@b."), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn test_nine_character_message_is_blocked() {
        let mut msg = valid();
        msg.message = "123456789".to_string();
        assert_eq!(msg.validate(), Err(FieldError::MessageTooShort));
        msg.message = "1234567890".to_string();
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn test_message_length_counts_characters_not_bytes() {
        // Ten two-byte characters clear the ten character minimum.
        assert_eq!(validate_message("éééééééééé"), Ok(()));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!SubmitStatus::Idle.is_terminal());
        assert!(!SubmitStatus::Sending.is_terminal());
        assert!(SubmitStatus::Sent.is_terminal());
        assert!(SubmitStatus::Failed.is_terminal());
    }
}
