use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The signed-in employee's own profile, as shown on the self-service page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub personal: PersonalInfo,
    pub professional: ProfessionalInfo,
}

/// Personal details. Names, email and phone are required; the rest may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "+1 (555) 123-4567")]
    pub phone: String,
    #[schema(example = "123 Main St, City, State 12345")]
    pub address: String,
    #[schema(value_type = Option<String>, format = "date", example = "1990-05-15")]
    pub date_of_birth: Option<NaiveDate>,
    #[schema(example = "Jane Doe")]
    pub emergency_contact: String,
    #[schema(example = "+1 (555) 987-6543")]
    pub emergency_phone: String,
    #[schema(example = "Single")]
    pub marital_status: String,
    #[schema(example = "American")]
    pub nationality: String,
}

impl PersonalInfo {
    /// Trims every field and checks the required ones.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let missing: Vec<&str> = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::missing(&missing));
        }

        Ok(Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            date_of_birth: self.date_of_birth,
            emergency_contact: self.emergency_contact.trim().to_string(),
            emergency_phone: self.emergency_phone.trim().to_string(),
            marital_status: self.marital_status.trim().to_string(),
            nationality: self.nationality.trim().to_string(),
        })
    }
}

/// Employment details. Only the fields in [`ProfessionalUpdate`] are editable by the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalInfo {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "Software Developer")]
    pub position: String,
    #[schema(example = "Sarah Johnson")]
    pub manager: String,
    #[schema(value_type = String, format = "date", example = "2023-01-15")]
    pub start_date: NaiveDate,
    #[schema(example = "Full-time")]
    pub employment_type: String,
    #[schema(example = "New York Office")]
    pub work_location: String,
    #[schema(example = "$75,000")]
    pub salary: String,
    #[schema(example = "React, JavaScript, Python, Node.js")]
    pub skills: String,
    #[schema(example = "AWS Certified Developer")]
    pub certifications: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfessionalUpdate {
    #[schema(example = "Remote")]
    pub work_location: String,
    #[schema(example = "Rust, React")]
    pub skills: String,
    pub certifications: String,
}

impl ProfessionalInfo {
    /// Applies the employee-editable fields; work location may not be blanked.
    pub fn apply(&mut self, update: ProfessionalUpdate) -> Result<(), ValidationError> {
        if update.work_location.trim().is_empty() {
            return Err(ValidationError::missing(&["workLocation"]));
        }
        self.work_location = update.work_location.trim().to_string();
        self.skills = update.skills.trim().to_string();
        self.certifications = update.certifications.trim().to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal() -> PersonalInfo {
        PersonalInfo {
            first_name: " John ".into(),
            last_name: "Doe".into(),
            email: "john.doe@company.com".into(),
            phone: "+1 (555) 123-4567".into(),
            ..Default::default()
        }
    }

    #[test]
    fn personal_info_is_trimmed() {
        let info = personal().validated().unwrap();
        assert_eq!(info.first_name, "John");
        assert_eq!(info.address, "");
    }

    #[test]
    fn personal_info_lists_missing_fields() {
        let mut info = personal();
        info.last_name.clear();
        info.phone = "  ".into();
        assert_eq!(
            info.validated(),
            Err(ValidationError::missing(&["lastName", "phone"]))
        );
    }

    #[test]
    fn professional_update_keeps_fixed_fields() {
        let mut info = ProfessionalInfo {
            employee_id: "EMP001".into(),
            department: "Engineering".into(),
            position: "Software Developer".into(),
            manager: "Sarah Johnson".into(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            employment_type: "Full-time".into(),
            work_location: "New York Office".into(),
            salary: "$75,000".into(),
            skills: "React".into(),
            certifications: String::new(),
        };
        info.apply(ProfessionalUpdate {
            work_location: "Remote".into(),
            skills: "Rust, React".into(),
            certifications: " CKA ".into(),
        })
        .unwrap();
        assert_eq!(info.work_location, "Remote");
        assert_eq!(info.certifications, "CKA");
        assert_eq!(info.position, "Software Developer");

        assert!(info.apply(ProfessionalUpdate::default()).is_err());
        assert_eq!(info.work_location, "Remote");
    }
}
