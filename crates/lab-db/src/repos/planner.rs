//! Planner tasks and their canned queries.

use lab_core::entities::{NewTask, Task};
use lab_core::enums::Priority;

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, format_date, get_bool, get_date, parse_enum};
use crate::service::LabService;
use crate::updates::SetClauses;
use crate::updates::task::TaskUpdate;

const SELECT_COLS: &str =
    "id, title, description, priority, is_completed, creation_date, completion_date";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority: parse_enum(&row.get::<String>(3)?)?,
        is_completed: get_bool(row, 4)?,
        creation_date: get_date(row, 5)?,
        completion_date: get_date(row, 6)?,
    })
}

impl LabService {
    pub async fn create_task(&self, new: &NewTask) -> Result<Task, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO tasks
                 (title, description, priority, is_completed, creation_date, completion_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    new.title.as_str(),
                    new.description.as_str(),
                    new.priority.as_str(),
                    i64::from(new.is_completed),
                    format_date(new.creation_date),
                    format_date(new.completion_date)
                ],
            )
            .await?;
        Ok(Task {
            id,
            title: new.title.clone(),
            description: new.description.clone(),
            priority: new.priority,
            is_completed: new.is_completed,
            creation_date: new.creation_date,
            completion_date: new.completion_date,
        })
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Task", id))?;
        row_to_task(&row)
    }

    /// Apply a partial update. The merged record is validated before anything is written.
    pub async fn update_task(&self, id: i64, update: TaskUpdate) -> Result<Task, DatabaseError> {
        let current = self.get_task(id).await?;
        Self::check(&NewTask {
            title: update.title.clone().unwrap_or(current.title),
            description: update.description.clone().unwrap_or(current.description),
            priority: update.priority.unwrap_or(current.priority),
            is_completed: update.is_completed.unwrap_or(current.is_completed),
            creation_date: current.creation_date,
            completion_date: update.completion_date.unwrap_or(current.completion_date),
        })?;

        let mut sets = SetClauses::default();
        if let Some(title) = update.title {
            sets.push("title", title);
        }
        if let Some(description) = update.description {
            sets.push("description", description);
        }
        if let Some(priority) = update.priority {
            sets.push("priority", priority.as_str());
        }
        if let Some(is_completed) = update.is_completed {
            sets.push("is_completed", i64::from(is_completed));
        }
        if let Some(date) = update.completion_date {
            sets.push("completion_date", format_date(date));
        }
        if sets.is_empty() {
            return self.get_task(id).await;
        }

        let (sql, params) = sets.into_update("tasks", id);
        self.db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        self.get_task(id).await
    }

    async fn tasks_where(
        &self,
        predicate: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<Task>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE {predicate} ORDER BY id"),
                libsql::params_from_iter(params),
            )
            .await?;
        collect_rows(rows, row_to_task).await
    }

    /// High priority, not completed, due after it was created.
    pub async fn ongoing_high_priority_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        self.tasks_where(
            "priority = ?1 AND is_completed = 0 AND completion_date > creation_date",
            vec![Priority::High.as_str().into()],
        )
        .await
    }

    pub async fn completed_mid_priority_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        self.tasks_where(
            "priority = ?1 AND is_completed = 1",
            vec![Priority::Medium.as_str().into()],
        )
        .await
    }

    /// Tasks whose title or description contains `query` (case-sensitive).
    pub async fn search_tasks(&self, query: &str) -> Result<Vec<Task>, DatabaseError> {
        self.tasks_where(
            "instr(title, ?1) > 0 OR instr(description, ?1) > 0",
            vec![query.into()],
        )
        .await
    }

    /// Completed tasks finished no earlier than `days` before their creation date.
    ///
    /// A negative `days` moves the bound after the creation date.
    pub async fn recent_completed_tasks(&self, days: i64) -> Result<Vec<Task>, DatabaseError> {
        // SQLite date modifiers need an explicit sign: "-5 days" / "+5 days".
        self.tasks_where(
            "is_completed = 1 AND completion_date >= date(creation_date, ?1)",
            vec![format!("{:+} days", days.saturating_neg()).into()],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;
    use crate::updates::task::TaskUpdateBuilder;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn task(title: &str, priority: Priority, done: bool, created: &str, due: &str) -> NewTask {
        NewTask {
            title: title.into(),
            description: format!("{title} description"),
            priority,
            is_completed: done,
            creation_date: date(created),
            completion_date: date(due),
        }
    }

    #[tokio::test]
    async fn priority_queries_split_the_two_tasks() {
        let svc = test_service().await;
        let ongoing = svc
            .create_task(&task("Ship", Priority::High, false, "2024-01-01", "2024-01-10"))
            .await
            .unwrap();
        let finished = svc
            .create_task(&task("Review", Priority::Medium, true, "2024-01-01", "2024-01-05"))
            .await
            .unwrap();

        assert_eq!(svc.ongoing_high_priority_tasks().await.unwrap(), vec![ongoing]);
        assert_eq!(svc.completed_mid_priority_tasks().await.unwrap(), vec![finished]);
    }

    #[tokio::test]
    async fn search_is_case_sensitive() {
        let svc = test_service().await;
        svc.create_task(&task("Deploy", Priority::Low, false, "2024-02-01", "2024-02-02"))
            .await
            .unwrap();
        assert_eq!(svc.search_tasks("ploy").await.unwrap().len(), 1);
        assert_eq!(svc.search_tasks("description").await.unwrap().len(), 1);
        assert!(svc.search_tasks("deploy").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn recent_completed_window() {
        let svc = test_service().await;
        svc.create_task(&task("Early", Priority::Low, true, "2024-03-10", "2024-03-05"))
            .await
            .unwrap();
        svc.create_task(&task("Too early", Priority::Low, true, "2024-03-10", "2024-02-01"))
            .await
            .unwrap();
        svc.create_task(&task("Open", Priority::Low, false, "2024-03-10", "2024-03-12"))
            .await
            .unwrap();

        let recent = svc.recent_completed_tasks(7).await.unwrap();
        let titles: Vec<&str> = recent.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Early"]);
    }

    #[tokio::test]
    async fn negative_window_moves_bound_forward() {
        let svc = test_service().await;
        svc.create_task(&task("Late", Priority::Low, true, "2024-01-01", "2024-01-10"))
            .await
            .unwrap();
        svc.create_task(&task("Quick", Priority::Low, true, "2024-01-01", "2024-01-03"))
            .await
            .unwrap();

        let recent = svc.recent_completed_tasks(-5).await.unwrap();
        let titles: Vec<&str> = recent.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Late"]);

        assert_eq!(svc.recent_completed_tasks(0).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_moves_task_between_queries() {
        let svc = test_service().await;
        let created = svc
            .create_task(&task("Ship", Priority::High, false, "2024-01-01", "2024-01-10"))
            .await
            .unwrap();

        let update = TaskUpdateBuilder::new()
            .priority(Priority::Medium)
            .is_completed(true)
            .build();
        let updated = svc.update_task(created.id, update).await.unwrap();
        assert_eq!(updated.priority, Priority::Medium);
        assert!(svc.ongoing_high_priority_tasks().await.unwrap().is_empty());
        assert_eq!(svc.completed_mid_priority_tasks().await.unwrap(), vec![updated]);

        let err = svc
            .update_task(created.id, TaskUpdateBuilder::new().title("").build())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }
}
