use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewUserProfile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl Validate for NewUserProfile {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("username", &self.username))
            .check(rules::max_length("username", &self.username, 70))
            .check(rules::email_like("email", &self.email))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

impl Message {
    /// Payload for an answer: same pair of users, direction swapped.
    #[must_use]
    pub fn reply(&self, content: impl Into<String>) -> NewMessage {
        NewMessage {
            sender_id: self.receiver_id,
            receiver_id: self.sender_id,
            content: content.into(),
        }
    }

    /// Payload that passes the same content on to `receiver_id`.
    #[must_use]
    pub fn forward(&self, receiver_id: i64) -> NewMessage {
        NewMessage {
            sender_id: self.receiver_id,
            receiver_id,
            content: self.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewMessage {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> Message {
        Message {
            id: 1,
            sender_id: 10,
            receiver_id: 20,
            content: "Hello".into(),
            timestamp: Utc::now(),
            is_read: false,
        }
    }

    #[test]
    fn reply_swaps_direction() {
        let reply = message().reply("Hi back");
        assert_eq!((reply.sender_id, reply.receiver_id), (20, 10));
        assert_eq!(reply.content, "Hi back");
    }

    #[test]
    fn forward_sends_from_original_receiver() {
        let fwd = message().forward(30);
        assert_eq!((fwd.sender_id, fwd.receiver_id), (20, 30));
        assert_eq!(fwd.content, "Hello");
    }
}
