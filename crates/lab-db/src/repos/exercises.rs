//! Exercise queries.

use lab_core::entities::{Exercise, NewExercise};

use crate::error::DatabaseError;
use crate::helpers::collect_rows;
use crate::service::LabService;

const SELECT_COLS: &str = "id, name, category, difficulty_level, duration_minutes, repetitions";

fn row_to_exercise(row: &libsql::Row) -> Result<Exercise, DatabaseError> {
    Ok(Exercise {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        difficulty_level: row.get(3)?,
        duration_minutes: row.get(4)?,
        repetitions: row.get(5)?,
    })
}

impl LabService {
    pub async fn create_exercise(&self, new: &NewExercise) -> Result<Exercise, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO exercises (name, category, difficulty_level, duration_minutes, repetitions)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    new.name.as_str(),
                    new.category.as_str(),
                    new.difficulty_level,
                    new.duration_minutes,
                    new.repetitions
                ],
            )
            .await?;
        Ok(Exercise {
            id,
            name: new.name.clone(),
            category: new.category.clone(),
            difficulty_level: new.difficulty_level,
            duration_minutes: new.duration_minutes,
            repetitions: new.repetitions,
        })
    }

    async fn exercises_where(
        &self,
        predicate: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<Exercise>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM exercises WHERE {predicate} ORDER BY id"),
                libsql::params_from_iter(params),
            )
            .await?;
        collect_rows(rows, row_to_exercise).await
    }

    /// Longer than 30 minutes with difficulty 10 or more.
    pub async fn get_long_and_hard_exercises(&self) -> Result<Vec<Exercise>, DatabaseError> {
        self.exercises_where("duration_minutes > 30 AND difficulty_level >= 10", Vec::new())
            .await
    }

    /// Shorter than 15 minutes with difficulty below 5.
    pub async fn get_short_and_easy_exercises(&self) -> Result<Vec<Exercise>, DatabaseError> {
        self.exercises_where("duration_minutes < 15 AND difficulty_level < 5", Vec::new())
            .await
    }

    pub async fn get_exercises_within_duration(
        &self,
        min_duration: i64,
        max_duration: i64,
    ) -> Result<Vec<Exercise>, DatabaseError> {
        self.exercises_where(
            "duration_minutes BETWEEN ?1 AND ?2",
            vec![min_duration.into(), max_duration.into()],
        )
        .await
    }

    pub async fn get_exercises_with_difficulty_and_repetitions(
        &self,
        min_difficulty: i64,
        min_repetitions: i64,
    ) -> Result<Vec<Exercise>, DatabaseError> {
        self.exercises_where(
            "difficulty_level >= ?1 AND repetitions >= ?2",
            vec![min_difficulty.into(), min_repetitions.into()],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    async fn seed(svc: &LabService) {
        let rows = [
            ("Push ups", "Strength", 10, 31, 50),
            ("Stretch", "Mobility", 2, 10, 5),
            ("Plank", "Core", 5, 15, 1),
            ("Burpees", "Cardio", 8, 30, 20),
        ];
        for (name, category, difficulty_level, duration_minutes, repetitions) in rows {
            svc.create_exercise(&NewExercise {
                name: name.into(),
                category: category.into(),
                difficulty_level,
                duration_minutes,
                repetitions,
            })
            .await
            .unwrap();
        }
    }

    fn names(exercises: Vec<Exercise>) -> Vec<String> {
        exercises.into_iter().map(|e| e.name).collect()
    }

    #[tokio::test]
    async fn canned_filters() {
        let svc = test_service().await;
        seed(&svc).await;
        assert_eq!(names(svc.get_long_and_hard_exercises().await.unwrap()), vec!["Push ups"]);
        assert_eq!(names(svc.get_short_and_easy_exercises().await.unwrap()), vec!["Stretch"]);
    }

    #[tokio::test]
    async fn parameterised_filters_are_inclusive() {
        let svc = test_service().await;
        seed(&svc).await;
        assert_eq!(
            names(svc.get_exercises_within_duration(15, 30).await.unwrap()),
            vec!["Plank", "Burpees"]
        );
        assert_eq!(
            names(svc.get_exercises_with_difficulty_and_repetitions(8, 20).await.unwrap()),
            vec!["Push ups", "Burpees"]
        );
    }
}
