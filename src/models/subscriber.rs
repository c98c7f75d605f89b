use serde::Serialize;
use thiserror::Error;

use crate::entities::subscribers;

#[derive(Debug, Clone, Serialize)]
pub struct Subscriber {
    pub id: i32,
    pub email: String,
    pub subscribed_at: String,
    pub is_active: bool,
}

impl From<subscribers::Model> for Subscriber {
    fn from(model: subscribers::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            subscribed_at: model.subscribed_at,
            is_active: model.is_active,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Valid email is required")]
pub struct InvalidEmail;

/// Email address accepted for subscription: trimmed, non-empty and containing '@'.
/// Not RFC 5322 validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(raw: &str) -> Result<Self, InvalidEmail> {
        let email = raw.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(InvalidEmail);
        }
        Ok(Self(email.to_string()))
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_and_trims() {
        let email = SubscriberEmail::parse("  reader@example.com ").unwrap();
        assert_eq!(email.as_ref(), "reader@example.com");
    }

    #[test]
    fn test_parse_rejects_empty_and_missing_at() {
        assert_eq!(SubscriberEmail::parse(""), Err(InvalidEmail));
        assert_eq!(SubscriberEmail::parse("   "), Err(InvalidEmail));
        assert_eq!(SubscriberEmail::parse("reader.example.com"), Err(InvalidEmail));
    }
}
