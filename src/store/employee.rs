use crate::{
    error::StoreError,
    model::employee::{Department, Employee, EmployeeStatus, NewEmployee},
};
use tracing::info;

pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    // Only ever grows, so a removed id is never handed out again.
    next_id: u64,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        let next_id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { employees, next_id }
    }

    /// The three demo employees the dashboard starts with.
    pub fn seeded() -> Self {
        let seed = |id: u64, name: &str, email: &str, department: Department, position: &str| Employee {
            id,
            employee_code: format!("EMP{id:03}"),
            name: name.to_string(),
            email: email.to_string(),
            phone_number: format!("+1 (555) 010-{id:04}"),
            department,
            position: position.to_string(),
            date_of_birth: None,
            gender: None,
            status: EmployeeStatus::Active,
        };

        Self::new(vec![
            seed(
                1,
                "Sarah Johnson",
                "sarah.johnson@company.com",
                Department::Engineering,
                "Senior Developer",
            ),
            seed(
                2,
                "Michael Chen",
                "michael.chen@company.com",
                Department::Design,
                "UX Designer",
            ),
            seed(
                3,
                "Emily Rodriguez",
                "emily.rodriguez@company.com",
                Department::Marketing,
                "Marketing Manager",
            ),
        ])
    }

    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: u64) -> Result<&Employee, StoreError> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound { kind: "Employee", id })
    }

    /// Validates the form and appends the employee under a fresh id.
    pub fn add(&mut self, form: NewEmployee) -> Result<Employee, StoreError> {
        let id = self.next_id;
        let employee = form.into_employee(id)?;
        self.next_id += 1;
        self.employees.push(employee.clone());
        info!(employee_id = id, name = %employee.name, "Employee added");
        Ok(employee)
    }

    /// Marks the employee active or inactive. Inactive employees stay listed.
    pub fn set_status(&mut self, id: u64, status: EmployeeStatus) -> Result<Employee, StoreError> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound { kind: "Employee", id })?;
        employee.status = status;
        info!(employee_id = id, status = ?status, "Employee status changed");
        Ok(employee.clone())
    }

    /// Removes the employee. Their attendance records are left in place.
    pub fn remove(&mut self, id: u64) -> Result<Employee, StoreError> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound { kind: "Employee", id })?;
        let removed = self.employees.remove(index);
        info!(employee_id = id, "Employee removed");
        Ok(removed)
    }
}
