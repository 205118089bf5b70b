use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    #[default]
    Open,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "E-commerce Platform")]
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Employee ids in order of assignment.
    #[schema(example = json!([1, 2]))]
    pub assigned_employees: Vec<u64>,
    #[schema(value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = "date")]
    pub deadline: NaiveDate,
    pub notes: Option<String>,
    pub comments: Option<String>,
}

/// Create/edit project form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    #[schema(example = "Data Warehouse")]
    pub name: String,
    #[schema(example = "Consolidate reporting data")]
    pub description: String,
    #[schema(value_type = Option<String>, format = "date", example = "2026-11-01")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date", example = "2026-12-15")]
    pub deadline: Option<NaiveDate>,
    pub assigned_employees: Vec<u64>,
    pub status: ProjectStatus,
    pub notes: Option<String>,
    pub comments: Option<String>,
}

impl ProjectDraft {
    /// Prefills the edit form from an existing project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            start_date: Some(project.start_date),
            deadline: Some(project.deadline),
            assigned_employees: project.assigned_employees.clone(),
            status: project.status,
            notes: project.notes.clone(),
            comments: project.comments.clone(),
        }
    }

    /// Assigns the employee if absent, unassigns if present.
    pub fn toggle_assignment(&mut self, employee_id: u64) {
        match self
            .assigned_employees
            .iter()
            .position(|id| *id == employee_id)
        {
            Some(index) => {
                self.assigned_employees.remove(index);
            }
            None => self.assigned_employees.push(employee_id),
        }
    }

    pub fn into_project(self, id: u64) -> Result<Project, ValidationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.start_date.is_none() {
            missing.push("startDate");
        }
        if self.deadline.is_none() {
            missing.push("deadline");
        }

        let (Some(start_date), Some(deadline)) = (self.start_date, self.deadline) else {
            return Err(ValidationError::missing(&missing));
        };
        if !missing.is_empty() {
            return Err(ValidationError::missing(&missing));
        }
        if start_date > deadline {
            return Err(ValidationError::DateOrder("startDate", "deadline"));
        }

        let mut assigned_employees = Vec::with_capacity(self.assigned_employees.len());
        for employee_id in self.assigned_employees {
            if !assigned_employees.contains(&employee_id) {
                assigned_employees.push(employee_id);
            }
        }

        Ok(Project {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
            assigned_employees,
            start_date,
            deadline,
            notes: non_blank(self.notes),
            comments: non_blank(self.comments),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
