use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, EnumIter,
)]
pub enum Department {
    Engineering,
    Design,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    #[strum(serialize = "HR")]
    Hr,
    Finance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "employeeCode": "EMP001",
        "name": "Sarah Johnson",
        "email": "sarah.johnson@company.com",
        "phoneNumber": "+1 (555) 123-4567",
        "department": "Engineering",
        "position": "Senior Developer",
        "dateOfBirth": null,
        "gender": null,
        "status": "active"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "EMP001")]
    pub employee_code: String,

    #[schema(example = "Sarah Johnson")]
    pub name: String,

    #[schema(example = "sarah.johnson@company.com")]
    pub email: String,

    #[schema(example = "+1 (555) 123-4567")]
    pub phone_number: String,

    pub department: Department,

    /// Job title.
    #[schema(example = "Senior Developer")]
    pub position: String,

    #[schema(value_type = Option<String>, format = "date", example = "1990-05-15")]
    pub date_of_birth: Option<NaiveDate>,

    #[schema(example = "female", nullable = true)]
    pub gender: Option<String>,

    pub status: EmployeeStatus,
}

/// Add-employee form. Every field except date of birth and gender is required.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEmployee {
    #[schema(example = "EMP004")]
    pub employee_code: String,
    #[schema(example = "Priya Patel")]
    pub name: String,
    #[schema(example = "priya.patel@company.com", format = "email")]
    pub email: String,
    #[schema(example = "+1 (555) 222-3344")]
    pub phone_number: String,
    #[schema(example = "Sales")]
    pub department: String,
    #[schema(example = "Account Executive")]
    pub job_title: String,
    #[schema(value_type = Option<String>, format = "date")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

impl NewEmployee {
    /// Checks the form and builds the employee under `id`.
    pub fn into_employee(self, id: u64) -> Result<Employee, ValidationError> {
        let missing: Vec<&str> = [
            ("employeeCode", &self.employee_code),
            ("name", &self.name),
            ("email", &self.email),
            ("phoneNumber", &self.phone_number),
            ("department", &self.department),
            ("jobTitle", &self.job_title),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::missing(&missing));
        }

        let department: Department = self
            .department
            .trim()
            .parse()
            .map_err(|_| ValidationError::UnknownDepartment(self.department.clone()))?;

        Ok(Employee {
            id,
            employee_code: self.employee_code.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            department,
            position: self.job_title.trim().to_string(),
            date_of_birth: self.date_of_birth,
            gender: self
                .gender
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty()),
            status: EmployeeStatus::Active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn form() -> NewEmployee {
        NewEmployee {
            employee_code: "EMP004".into(),
            name: "Priya Patel".into(),
            email: "priya.patel@company.com".into(),
            phone_number: "555-0101".into(),
            department: "Sales".into(),
            job_title: "Account Executive".into(),
            date_of_birth: None,
            gender: Some("  ".into()),
        }
    }

    #[test]
    fn complete_form_becomes_active_employee() {
        let employee = form().into_employee(4).unwrap();
        assert_eq!(employee.id, 4);
        assert_eq!(employee.department, Department::Sales);
        assert_eq!(employee.position, "Account Executive");
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert_eq!(employee.gender, None);
    }

    #[test]
    fn blank_fields_are_listed() {
        let mut f = form();
        f.email = " ".into();
        f.job_title.clear();
        assert_eq!(
            f.into_employee(4),
            Err(ValidationError::missing(&["email", "jobTitle"]))
        );
    }

    #[test]
    fn unknown_department_is_rejected() {
        let mut f = form();
        f.department = "Legal".into();
        assert_eq!(
            f.into_employee(4),
            Err(ValidationError::UnknownDepartment("Legal".into()))
        );
    }

    #[test]
    fn departments_parse_by_display_name() {
        for department in Department::iter() {
            let parsed: Department = department.to_string().parse().unwrap();
            assert_eq!(parsed, department);
        }
        assert_eq!("HR".parse::<Department>().unwrap(), Department::Hr);
    }
}
