use crate::{
    error::StoreError,
    model::project::{Project, ProjectDraft, ProjectStatus},
};
use chrono::{Days, NaiveDate};
use tracing::info;

pub struct ProjectBoard {
    projects: Vec<Project>,
    next_id: u64,
}

impl ProjectBoard {
    pub fn new(projects: Vec<Project>) -> Self {
        let next_id = projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self { projects, next_id }
    }

    /// Demo projects with deadlines relative to `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        let in_days = |n| today.checked_add_days(Days::new(n)).unwrap_or(today);

        Self::new(vec![
            Project {
                id: 1,
                name: "E-commerce Platform".into(),
                description: "Building a modern e-commerce platform with React and Node.js".into(),
                status: ProjectStatus::InProgress,
                assigned_employees: vec![1, 2],
                start_date: today,
                deadline: in_days(30),
                notes: None,
                comments: None,
            },
            Project {
                id: 2,
                name: "Mobile App Redesign".into(),
                description: "Complete redesign of the mobile application interface".into(),
                status: ProjectStatus::Planning,
                assigned_employees: vec![2, 3],
                start_date: today,
                deadline: in_days(45),
                notes: None,
                comments: None,
            },
        ])
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: u64) -> Result<&Project, StoreError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound { kind: "Project", id })
    }

    pub fn create(&mut self, draft: ProjectDraft) -> Result<Project, StoreError> {
        let id = self.next_id;
        let project = draft.into_project(id)?;
        self.next_id += 1;
        self.projects.push(project.clone());
        info!(project_id = id, name = %project.name, "Project created");
        Ok(project)
    }

    /// Replaces the project's fields with the draft; the id is kept.
    pub fn update(&mut self, id: u64, draft: ProjectDraft) -> Result<Project, StoreError> {
        let slot = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound { kind: "Project", id })?;
        *slot = draft.into_project(id)?;
        info!(project_id = id, "Project updated");
        Ok(slot.clone())
    }

    /// Flips one employee's assignment on an existing project.
    pub fn toggle_assignment(&mut self, id: u64, employee_id: u64) -> Result<Project, StoreError> {
        let mut draft = ProjectDraft::from_project(self.get(id)?);
        draft.toggle_assignment(employee_id);
        self.update(id, draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn draft(name: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.into(),
            description: "Internal tooling".into(),
            start_date: Some(today()),
            deadline: NaiveDate::from_ymd_opt(2026, 12, 1),
            ..Default::default()
        }
    }

    #[test]
    fn seed_deadlines_follow_today() {
        let board = ProjectBoard::seeded(today());
        assert_eq!(
            board.get(1).unwrap().deadline,
            NaiveDate::from_ymd_opt(2026, 11, 17).unwrap()
        );
        assert_eq!(board.get(2).unwrap().assigned_employees, vec![2, 3]);
    }

    #[test]
    fn update_keeps_id_and_replaces_fields() {
        let mut board = ProjectBoard::seeded(today());
        let mut d = draft("Platform v2");
        d.status = ProjectStatus::Completed;
        let updated = board.update(1, d).unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.status, ProjectStatus::Completed);
        assert_eq!(board.get(1).unwrap().name, "Platform v2");
        assert_eq!(board.list().len(), 2);
    }

    #[test]
    fn invalid_update_keeps_old_project() {
        let mut board = ProjectBoard::seeded(today());
        let before = board.get(2).unwrap().clone();
        let err = board.update(2, draft("  ")).unwrap_err();
        assert_eq!(err, StoreError::Invalid(ValidationError::missing(&["name"])));
        assert_eq!(board.get(2).unwrap(), &before);
    }

    #[test]
    fn create_uses_next_id() {
        let mut board = ProjectBoard::seeded(today());
        assert_eq!(board.create(draft("Payroll Sync")).unwrap().id, 3);
        assert!(matches!(
            board.update(9, draft("x")),
            Err(StoreError::NotFound { kind: "Project", id: 9 })
        ));
    }

    #[test]
    fn toggle_assignment_on_existing_project() {
        let mut board = ProjectBoard::seeded(today());
        assert_eq!(board.toggle_assignment(1, 3).unwrap().assigned_employees, vec![1, 2, 3]);
        assert_eq!(board.toggle_assignment(1, 1).unwrap().assigned_employees, vec![2, 3]);
    }
}
