//! Todo repository.

use lab_core::entities::{NewTodo, Todo, decode_shifted};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, format_date, get_bool, get_date};
use crate::service::LabService;

const SELECT_COLS: &str = "id, title, description, due_date, is_finished";

fn row_to_todo(row: &libsql::Row) -> Result<Todo, DatabaseError> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: get_date(row, 3)?,
        is_finished: get_bool(row, 4)?,
    })
}

impl LabService {
    pub async fn create_todo(&self, new: &NewTodo) -> Result<Todo, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO todos (title, description, due_date, is_finished)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    new.title.as_str(),
                    new.description.as_str(),
                    format_date(new.due_date),
                    i64::from(new.is_finished)
                ],
            )
            .await?;
        Ok(Todo {
            id,
            title: new.title.clone(),
            description: new.description.clone(),
            due_date: new.due_date,
            is_finished: new.is_finished,
        })
    }

    /// First todo with the given title, by id.
    pub async fn get_todo_by_title(&self, title: &str) -> Result<Todo, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM todos WHERE title = ?1 ORDER BY id LIMIT 1"),
                [title],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Todo", title))?;
        row_to_todo(&row)
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM todos ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_todo).await
    }

    pub async fn show_unfinished_tasks(&self) -> Result<String, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM todos WHERE is_finished = 0 ORDER BY id"),
                (),
            )
            .await?;
        Ok(collect_rows(rows, row_to_todo)
            .await?
            .iter()
            .map(Todo::reminder_line)
            .collect())
    }

    /// Mark every todo with an odd id as finished. Returns rows touched.
    pub async fn complete_odd_tasks(&self) -> Result<u64, DatabaseError> {
        self.db()
            .execute("UPDATE todos SET is_finished = 1 WHERE id % 2 = 1", ())
            .await
    }

    /// Decode `text` (every char shifted down by 3) into the description of
    /// the todo titled `title`.
    pub async fn encode_and_replace(
        &self,
        text: &str,
        title: &str,
    ) -> Result<Todo, DatabaseError> {
        let mut todo = self.get_todo_by_title(title).await?;
        todo.description = decode_shifted(text);
        self.db()
            .execute(
                "UPDATE todos SET description = ?1 WHERE id = ?2",
                libsql::params![todo.description.as_str(), todo.id],
            )
            .await?;
        Ok(todo)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    fn todo(title: &str, finished: bool) -> NewTodo {
        NewTodo {
            title: title.into(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2023, 10, 30).unwrap(),
            is_finished: finished,
        }
    }

    #[tokio::test]
    async fn unfinished_tasks_report() {
        let svc = test_service().await;
        svc.create_todo(&todo("Sample Task", false)).await.unwrap();
        svc.create_todo(&todo("Done", true)).await.unwrap();
        assert_eq!(
            svc.show_unfinished_tasks().await.unwrap(),
            "\nTask - Sample Task needs to be done until 2023-10-30!"
        );
    }

    #[tokio::test]
    async fn odd_ids_are_completed() {
        let svc = test_service().await;
        for title in ["a", "b", "c"] {
            svc.create_todo(&todo(title, false)).await.unwrap();
        }
        assert_eq!(svc.complete_odd_tasks().await.unwrap(), 2);
        let finished: Vec<bool> = svc
            .list_todos()
            .await
            .unwrap()
            .iter()
            .map(|t| t.is_finished)
            .collect();
        assert_eq!(finished, vec![true, false, true]);
    }

    #[tokio::test]
    async fn encode_and_replace_decodes_description() {
        let svc = test_service().await;
        svc.create_todo(&todo("Sample Task", false)).await.unwrap();
        svc.encode_and_replace("Zdvk#wkh#glvkhv$", "Sample Task")
            .await
            .unwrap();
        let stored = svc.get_todo_by_title("Sample Task").await.unwrap();
        assert_eq!(stored.description, "Wash the dishes!");
    }

    #[tokio::test]
    async fn encode_and_replace_missing_title() {
        let svc = test_service().await;
        let err = svc.encode_and_replace("abc", "Nope").await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }
}
