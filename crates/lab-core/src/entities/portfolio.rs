//! Programmers, their projects and the technologies each project uses.
//! Both links are many-to-many.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Technology {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTechnology {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technology_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Programmer {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewProgrammer {
    pub name: String,
    #[serde(default)]
    pub project_ids: Vec<i64>,
}

/// A project with every technology it uses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectWithTechnologies {
    #[serde(flatten)]
    pub project: Project,
    pub technologies: Vec<Technology>,
}

/// A programmer with their projects, each carrying its technologies.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgrammerProfile {
    #[serde(flatten)]
    pub programmer: Programmer,
    pub projects: Vec<ProjectWithTechnologies>,
}

fn check_name(name: &str) -> Result<(), ValidationErrors> {
    Validator::new()
        .check(rules::required("name", name))
        .check(rules::max_length("name", name, 100))
        .finish()
}

impl Validate for NewTechnology {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_name(&self.name)
    }
}

impl Validate for NewProject {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_name(&self.name)
    }
}

impl Validate for NewProgrammer {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_name(&self.name)
    }
}
