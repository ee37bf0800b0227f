//! Programmers, projects and technologies (two many-to-many links).

use lab_core::entities::{
    NewProgrammer, NewProject, NewTechnology, Programmer, ProgrammerProfile, Project,
    ProjectWithTechnologies, Technology,
};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, finish_transaction, map_constraint_error};
use crate::service::LabService;

fn row_to_technology(row: &libsql::Row) -> Result<Technology, DatabaseError> {
    Ok(Technology {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

fn row_to_programmer(row: &libsql::Row) -> Result<Programmer, DatabaseError> {
    Ok(Programmer {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

impl LabService {
    pub async fn create_technology(&self, new: &NewTechnology) -> Result<Technology, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO technologies (name, description) VALUES (?1, ?2)",
                [new.name.as_str(), new.description.as_str()],
            )
            .await?;
        Ok(Technology {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
        })
    }

    /// Insert a project and link it to `technology_ids`. Unknown ids roll the whole insert back.
    pub async fn create_project(&self, new: &NewProject) -> Result<Project, DatabaseError> {
        Self::check(new)?;
        let tx = self.db().conn().transaction().await?;
        let result = async {
            tx.execute(
                "INSERT INTO projects (name, description) VALUES (?1, ?2)",
                [new.name.as_str(), new.description.as_str()],
            )
            .await
            .map_err(map_constraint_error)?;
            let id = tx.last_insert_rowid();
            for technology_id in &new.technology_ids {
                tx.execute(
                    "INSERT OR IGNORE INTO project_technologies (project_id, technology_id)
                     VALUES (?1, ?2)",
                    [id, *technology_id],
                )
                .await?;
            }
            Ok::<_, DatabaseError>(id)
        }
        .await;
        let id = finish_transaction(tx, result).await?;
        Ok(Project {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
        })
    }

    /// Insert a programmer and link them to `project_ids`.
    pub async fn create_programmer(&self, new: &NewProgrammer) -> Result<Programmer, DatabaseError> {
        Self::check(new)?;
        let tx = self.db().conn().transaction().await?;
        let result = async {
            tx.execute("INSERT INTO programmers (name) VALUES (?1)", [new.name.as_str()])
                .await
                .map_err(map_constraint_error)?;
            let id = tx.last_insert_rowid();
            for project_id in &new.project_ids {
                tx.execute(
                    "INSERT OR IGNORE INTO programmer_projects (programmer_id, project_id)
                     VALUES (?1, ?2)",
                    [id, *project_id],
                )
                .await?;
            }
            Ok::<_, DatabaseError>(id)
        }
        .await;
        let id = finish_transaction(tx, result).await?;
        Ok(Programmer {
            id,
            name: new.name.clone(),
        })
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name, description FROM projects WHERE id = ?1", [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Project", id))?;
        row_to_project(&row)
    }

    pub async fn get_programmer(&self, id: i64) -> Result<Programmer, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name FROM programmers WHERE id = ?1", [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Programmer", id))?;
        row_to_programmer(&row)
    }

    async fn project_technologies(&self, project_id: i64) -> Result<Vec<Technology>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT t.id, t.name, t.description FROM technologies t
                 JOIN project_technologies pt ON pt.technology_id = t.id
                 WHERE pt.project_id = ?1 ORDER BY t.id",
                [project_id],
            )
            .await?;
        collect_rows(rows, row_to_technology).await
    }

    /// Every project of a programmer, each with the technologies it uses.
    pub async fn get_projects_with_technologies(
        &self,
        programmer_id: i64,
    ) -> Result<Vec<ProjectWithTechnologies>, DatabaseError> {
        self.get_programmer(programmer_id).await?;
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT p.id, p.name, p.description FROM projects p
                 JOIN programmer_projects pp ON pp.project_id = p.id
                 WHERE pp.programmer_id = ?1 ORDER BY p.id",
                [programmer_id],
            )
            .await?;
        let projects = collect_rows(rows, row_to_project).await?;
        let mut out = Vec::with_capacity(projects.len());
        for project in projects {
            let technologies = self.project_technologies(project.id).await?;
            out.push(ProjectWithTechnologies {
                project,
                technologies,
            });
        }
        Ok(out)
    }

    /// Every programmer on a project, each with all of their projects and technologies.
    pub async fn get_programmers_with_technologies(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProgrammerProfile>, DatabaseError> {
        self.get_project(project_id).await?;
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT pr.id, pr.name FROM programmers pr
                 JOIN programmer_projects pp ON pp.programmer_id = pr.id
                 WHERE pp.project_id = ?1 ORDER BY pr.id",
                [project_id],
            )
            .await?;
        let programmers = collect_rows(rows, row_to_programmer).await?;
        let mut out = Vec::with_capacity(programmers.len());
        for programmer in programmers {
            let projects = self.get_projects_with_technologies(programmer.id).await?;
            out.push(ProgrammerProfile {
                programmer,
                projects,
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    async fn tech(svc: &LabService, name: &str) -> Technology {
        svc.create_technology(&NewTechnology {
            name: name.into(),
            description: String::new(),
        })
        .await
        .unwrap()
    }

    async fn project(svc: &LabService, name: &str, technology_ids: Vec<i64>) -> Project {
        svc.create_project(&NewProject {
            name: name.into(),
            description: String::new(),
            technology_ids,
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn nested_profiles() {
        let svc = test_service().await;
        let rust = tech(&svc, "Rust").await;
        let sql = tech(&svc, "SQL").await;
        let engine = project(&svc, "Engine", vec![rust.id]).await;
        let reports = project(&svc, "Reports", vec![sql.id, rust.id]).await;
        let ana = svc
            .create_programmer(&NewProgrammer {
                name: "Ana".into(),
                project_ids: vec![engine.id, reports.id],
            })
            .await
            .unwrap();
        svc.create_programmer(&NewProgrammer {
            name: "Boris".into(),
            project_ids: vec![reports.id],
        })
        .await
        .unwrap();

        let projects = svc.get_projects_with_technologies(ana.id).await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].technologies, vec![rust.clone(), sql.clone()]);

        let on_engine = svc.get_programmers_with_technologies(engine.id).await.unwrap();
        assert_eq!(on_engine.len(), 1);
        assert_eq!(on_engine[0].programmer, ana);
        assert_eq!(on_engine[0].projects[0].project, engine);

        let on_reports = svc.get_programmers_with_technologies(reports.id).await.unwrap();
        let names: Vec<&str> = on_reports.iter().map(|p| p.programmer.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Boris"]);
    }

    #[tokio::test]
    async fn unknown_link_rolls_back() {
        let svc = test_service().await;
        let err = svc
            .create_project(&NewProject {
                name: "Ghost".into(),
                description: String::new(),
                technology_ids: vec![999],
            })
            .await;
        assert!(err.is_err());
        assert_eq!(svc.db().count("projects").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let svc = test_service().await;
        let err = svc.get_programmers_with_technologies(42).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }
}
