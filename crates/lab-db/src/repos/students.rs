//! Student registry repository.

use chrono::NaiveDate;
use lab_core::entities::{NewStudent, Student};

use crate::error::DatabaseError;
use crate::helpers::{
    collect_rows, finish_transaction, format_date, map_constraint_error, parse_optional_date,
};
use crate::service::LabService;

const SELECT_COLS: &str = "id, student_id, first_name, last_name, birth_date, email";

/// Domain every student email is moved to by [`LabService::update_students_emails`].
pub const STUDENT_EMAIL_DOMAIN: &str = "uni-students.com";

const INSERT_SQL: &str = "INSERT INTO students (student_id, first_name, last_name, birth_date, email)
     VALUES (?1, ?2, ?3, ?4, ?5)";

fn insert_params(new: &NewStudent) -> Vec<libsql::Value> {
    vec![
        new.student_id.clone().into(),
        new.first_name.clone().into(),
        new.last_name.clone().into(),
        new.birth_date
            .map_or(libsql::Value::Null, |d| format_date(d).into()),
        new.email.clone().into(),
    ]
}

fn row_to_student(row: &libsql::Row) -> Result<Student, DatabaseError> {
    Ok(Student {
        id: row.get(0)?,
        student_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        birth_date: parse_optional_date(row.get::<Option<String>>(4)?.as_deref())?,
        email: row.get(5)?,
    })
}

/// The four students seeded by [`LabService::add_students`].
#[must_use]
pub fn fixture_students() -> Vec<NewStudent> {
    let student = |code: &str, first: &str, last: &str, birth: Option<(i32, u32, u32)>| {
        NewStudent {
            student_id: code.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            birth_date: birth.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            email: format!(
                "{}.{}@university.com",
                first.to_lowercase(),
                last.to_lowercase()
            ),
        }
    };
    vec![
        student("FC5204", "John", "Doe", Some((1995, 5, 15))),
        student("FE0054", "Jane", "Smith", None),
        student("FH2014", "Alice", "Johnson", Some((1998, 2, 10))),
        student("FH2015", "Bob", "Wilson", Some((1996, 11, 25))),
    ]
}

impl LabService {
    pub async fn create_student(&self, new: &NewStudent) -> Result<Student, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(INSERT_SQL, libsql::params_from_iter(insert_params(new)))
            .await?;
        Ok(Student {
            id,
            student_id: new.student_id.clone(),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            birth_date: new.birth_date,
            email: new.email.clone(),
        })
    }

    /// Insert every payload in one transaction: either all rows land or none.
    pub async fn bulk_create_students(
        &self,
        students: &[NewStudent],
    ) -> Result<Vec<Student>, DatabaseError> {
        for student in students {
            Self::check(student)?;
        }
        let tx = self.db().conn().transaction().await?;
        let result = async {
            let mut created = Vec::with_capacity(students.len());
            for new in students {
                tx.execute(INSERT_SQL, libsql::params_from_iter(insert_params(new)))
                    .await
                    .map_err(map_constraint_error)?;
                created.push(Student {
                    id: tx.last_insert_rowid(),
                    student_id: new.student_id.clone(),
                    first_name: new.first_name.clone(),
                    last_name: new.last_name.clone(),
                    birth_date: new.birth_date,
                    email: new.email.clone(),
                });
            }
            Ok::<_, DatabaseError>(created)
        }
        .await;
        let created = finish_transaction(tx, result).await?;
        tracing::info!(count = created.len(), "students created");
        Ok(created)
    }

    /// Seed the registry with the four fixture students.
    pub async fn add_students(&self) -> Result<Vec<Student>, DatabaseError> {
        self.bulk_create_students(&fixture_students()).await
    }

    pub async fn get_student(&self, student_id: &str) -> Result<Student, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM students WHERE student_id = ?1"),
                [student_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Student", student_id))?;
        row_to_student(&row)
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM students ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_student).await
    }

    /// One `"\nStudent №..."` line per student, in id order.
    pub async fn get_students_info(&self) -> Result<String, DatabaseError> {
        Ok(self
            .list_students()
            .await?
            .iter()
            .map(Student::info_line)
            .collect())
    }

    /// Move every student email to [`STUDENT_EMAIL_DOMAIN`]. Returns rows touched.
    pub async fn update_students_emails(&self) -> Result<usize, DatabaseError> {
        let students = self.list_students().await?;
        for student in &students {
            self.db()
                .execute(
                    "UPDATE students SET email = ?1 WHERE id = ?2",
                    libsql::params![student.email_with_domain(STUDENT_EMAIL_DOMAIN), student.id],
                )
                .await?;
        }
        tracing::info!(count = students.len(), "student emails updated");
        Ok(students.len())
    }

    /// Delete every student. Returns the number of rows removed.
    pub async fn truncate_students(&self) -> Result<u64, DatabaseError> {
        let removed = self.db().execute("DELETE FROM students", ()).await?;
        tracing::info!(removed, "students truncated");
        Ok(removed)
    }
}
