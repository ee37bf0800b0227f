//! User profiles and direct messages.

use chrono::Utc;
use lab_core::entities::{Message, NewMessage, NewUserProfile, UserProfile};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_bool, get_opt_string, parse_datetime};
use crate::service::LabService;

const MESSAGE_COLS: &str = "id, sender_id, receiver_id, content, timestamp, is_read";

fn row_to_profile(row: &libsql::Row) -> Result<UserProfile, DatabaseError> {
    Ok(UserProfile {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        bio: get_opt_string(row, 3)?,
    })
}

fn row_to_message(row: &libsql::Row) -> Result<Message, DatabaseError> {
    Ok(Message {
        id: row.get(0)?,
        sender_id: row.get(1)?,
        receiver_id: row.get(2)?,
        content: row.get(3)?,
        timestamp: parse_datetime(&row.get::<String>(4)?)?,
        is_read: get_bool(row, 5)?,
    })
}

impl LabService {
    pub async fn create_user_profile(
        &self,
        new: &NewUserProfile,
    ) -> Result<UserProfile, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO user_profiles (username, email, bio) VALUES (?1, ?2, ?3)",
                libsql::params![
                    new.username.as_str(),
                    new.email.as_str(),
                    new.bio.clone().map_or(libsql::Value::Null, Into::into)
                ],
            )
            .await?;
        Ok(UserProfile {
            id,
            username: new.username.clone(),
            email: new.email.clone(),
            bio: new.bio.clone(),
        })
    }

    pub async fn get_user_profile(&self, id: i64) -> Result<UserProfile, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, username, email, bio FROM user_profiles WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("UserProfile", id))?;
        row_to_profile(&row)
    }

    /// Send a message, stamped with the current time and unread.
    pub async fn send_message(&self, new: &NewMessage) -> Result<Message, DatabaseError> {
        let timestamp = Utc::now();
        let id = self
            .db()
            .insert(
                "INSERT INTO messages (sender_id, receiver_id, content, timestamp, is_read)
                 VALUES (?1, ?2, ?3, ?4, 0)",
                libsql::params![
                    new.sender_id,
                    new.receiver_id,
                    new.content.as_str(),
                    timestamp.to_rfc3339()
                ],
            )
            .await?;
        Ok(Message {
            id,
            sender_id: new.sender_id,
            receiver_id: new.receiver_id,
            content: new.content.clone(),
            timestamp,
            is_read: false,
        })
    }

    pub async fn get_message(&self, id: i64) -> Result<Message, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {MESSAGE_COLS} FROM messages WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Message", id))?;
        row_to_message(&row)
    }

    /// Messages received by a user, oldest first.
    pub async fn inbox(&self, receiver_id: i64) -> Result<Vec<Message>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {MESSAGE_COLS} FROM messages WHERE receiver_id = ?1 ORDER BY id"),
                [receiver_id],
            )
            .await?;
        collect_rows(rows, row_to_message).await
    }

    pub async fn mark_as_read(&self, message: &mut Message) -> Result<(), DatabaseError> {
        let updated = self
            .db()
            .execute("UPDATE messages SET is_read = 1 WHERE id = ?1", [message.id])
            .await?;
        if updated == 0 {
            return Err(DatabaseError::not_found("Message", message.id));
        }
        message.is_read = true;
        Ok(())
    }

    /// Answer `message`: the original receiver becomes the sender.
    pub async fn reply_to_message(
        &self,
        message: &Message,
        content: &str,
    ) -> Result<Message, DatabaseError> {
        self.send_message(&message.reply(content)).await
    }

    /// Pass `message`'s content from its receiver on to `receiver_id`.
    pub async fn forward_message(
        &self,
        message: &Message,
        receiver_id: i64,
    ) -> Result<Message, DatabaseError> {
        self.send_message(&message.forward(receiver_id)).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    async fn users(svc: &LabService) -> (UserProfile, UserProfile, UserProfile) {
        let make = |name: &str| NewUserProfile {
            username: name.into(),
            email: format!("{name}@example.com"),
            bio: None,
        };
        (
            svc.create_user_profile(&make("alice")).await.unwrap(),
            svc.create_user_profile(&make("bob")).await.unwrap(),
            svc.create_user_profile(&make("carol")).await.unwrap(),
        )
    }

    #[tokio::test]
    async fn reply_swaps_and_forward_relays() {
        let svc = test_service().await;
        let (alice, bob, carol) = users(&svc).await;
        let mut original = svc
            .send_message(&NewMessage {
                sender_id: alice.id,
                receiver_id: bob.id,
                content: "Hi Bob".into(),
            })
            .await
            .unwrap();

        svc.mark_as_read(&mut original).await.unwrap();
        assert!(svc.get_message(original.id).await.unwrap().is_read);

        let reply = svc.reply_to_message(&original, "Hi Alice").await.unwrap();
        assert_eq!((reply.sender_id, reply.receiver_id), (bob.id, alice.id));
        assert!(!reply.is_read);

        let forwarded = svc.forward_message(&original, carol.id).await.unwrap();
        assert_eq!((forwarded.sender_id, forwarded.receiver_id), (bob.id, carol.id));
        assert_eq!(forwarded.content, "Hi Bob");
        assert_eq!(svc.inbox(carol.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_username_rejected() {
        let svc = test_service().await;
        users(&svc).await;
        let err = svc
            .create_user_profile(&NewUserProfile {
                username: "alice".into(),
                email: "other@example.com".into(),
                bio: Some("again".into()),
            })
            .await
            .unwrap_err();
        let DatabaseError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(errors.has_field("username"));
    }

    #[tokio::test]
    async fn deleting_user_cascades_messages() {
        let svc = test_service().await;
        let (alice, bob, _) = users(&svc).await;
        svc.send_message(&NewMessage {
            sender_id: alice.id,
            receiver_id: bob.id,
            content: "bye".into(),
        })
        .await
        .unwrap();
        svc.db()
            .execute("DELETE FROM user_profiles WHERE id = ?1", [alice.id])
            .await
            .unwrap();
        assert_eq!(svc.db().count("messages").await.unwrap(), 0);
    }
}
