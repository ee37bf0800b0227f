//! Workers with defaulted names.

use lab_core::entities::{NewWorker, Worker};

use crate::error::DatabaseError;
use crate::helpers::collect_rows;
use crate::service::LabService;

fn row_to_worker(row: &libsql::Row) -> Result<Worker, DatabaseError> {
    Ok(Worker {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        age: row.get(3)?,
        salary: row.get(4)?,
    })
}

impl LabService {
    pub async fn create_worker(&self, new: &NewWorker) -> Result<Worker, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO workers (first_name, last_name, age, salary) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    new.first_name.as_str(),
                    new.last_name.as_str(),
                    new.age.map_or(libsql::Value::Null, Into::into),
                    new.salary.map_or(libsql::Value::Null, Into::into)
                ],
            )
            .await?;
        Ok(Worker {
            id,
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            age: new.age,
            salary: new.salary,
        })
    }

    pub async fn list_workers(&self) -> Result<Vec<Worker>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, first_name, last_name, age, salary FROM workers ORDER BY id",
                (),
            )
            .await?;
        collect_rows(rows, row_to_worker).await
    }
}

#[cfg(test)]
mod tests {
    use lab_core::entities::{DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    #[tokio::test]
    async fn defaults_and_nullable_columns() {
        let svc = test_service().await;
        svc.create_worker(&NewWorker::default()).await.unwrap();
        svc.create_worker(&NewWorker {
            first_name: "Ana".into(),
            last_name: "Petrova".into(),
            age: Some(31),
            salary: Some(2400),
        })
        .await
        .unwrap();

        let workers = svc.list_workers().await.unwrap();
        assert_eq!(workers[0].first_name, DEFAULT_FIRST_NAME);
        assert_eq!(workers[0].last_name, DEFAULT_LAST_NAME);
        assert_eq!(workers[0].salary, None);
        assert_eq!(workers[1].age, Some(31));
    }
}
