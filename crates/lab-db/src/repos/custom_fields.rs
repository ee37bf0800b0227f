//! Learners (coerced student IDs) and credit cards (masked numbers).

use lab_core::entities::{CreditCard, Learner, NewCreditCard, NewLearner};
use lab_core::fields::{MaskedCardNumber, StudentIdInput};

use crate::error::DatabaseError;
use crate::helpers::collect_rows;
use crate::service::LabService;

fn row_to_learner(row: &libsql::Row) -> Result<Learner, DatabaseError> {
    Ok(Learner {
        id: row.get(0)?,
        name: row.get(1)?,
        student_id: row.get(2)?,
    })
}

fn row_to_credit_card(row: &libsql::Row) -> Result<CreditCard, DatabaseError> {
    Ok(CreditCard {
        id: row.get(0)?,
        card_owner: row.get(1)?,
        card_number: MaskedCardNumber::from_stored(&row.get::<String>(2)?)?,
    })
}

impl LabService {
    pub async fn create_learner(&self, new: &NewLearner) -> Result<Learner, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO learners (name, student_id) VALUES (?1, ?2)",
                libsql::params![new.name.as_str(), new.student_id],
            )
            .await?;
        Ok(Learner {
            id,
            name: new.name.clone(),
            student_id: new.student_id,
        })
    }

    /// Coerce a loosely typed ID and store the learner.
    pub async fn enroll_learner(
        &self,
        name: &str,
        raw_id: &StudentIdInput,
    ) -> Result<Learner, DatabaseError> {
        let new = NewLearner::from_raw(name, raw_id)?;
        self.create_learner(&new).await
    }

    pub async fn list_learners(&self) -> Result<Vec<Learner>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT id, name, student_id FROM learners ORDER BY id", ())
            .await?;
        collect_rows(rows, row_to_learner).await
    }

    pub async fn create_credit_card(&self, new: &NewCreditCard) -> Result<CreditCard, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO credit_cards (card_owner, card_number) VALUES (?1, ?2)",
                libsql::params![new.card_owner.as_str(), new.card_number.masked()],
            )
            .await?;
        Ok(CreditCard {
            id,
            card_owner: new.card_owner.clone(),
            card_number: new.card_number.clone(),
        })
    }

    /// Mask a raw 16-digit number and store the card.
    pub async fn register_credit_card(
        &self,
        owner: &str,
        raw_number: &str,
    ) -> Result<CreditCard, DatabaseError> {
        let new = NewCreditCard::new(owner, raw_number)?;
        self.create_credit_card(&new).await
    }

    pub async fn list_credit_cards(&self) -> Result<Vec<CreditCard>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT id, card_owner, card_number FROM credit_cards ORDER BY id", ())
            .await?;
        collect_rows(rows, row_to_credit_card).await
    }
}
