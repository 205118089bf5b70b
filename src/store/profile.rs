use crate::{
    error::StoreError,
    model::profile::{PersonalInfo, ProfessionalInfo, ProfessionalUpdate, Profile},
};
use chrono::NaiveDate;
use tracing::info;

/// Holds the one profile the self-service page edits.
pub struct ProfileStore {
    profile: Profile,
}

impl ProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// The demo profile the self-service page starts with.
    pub fn seeded() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);

        Self::new(Profile {
            personal: PersonalInfo {
                first_name: "John".into(),
                last_name: "Doe".into(),
                email: "john.doe@company.com".into(),
                phone: "+1 (555) 123-4567".into(),
                address: "123 Main St, City, State 12345".into(),
                date_of_birth: Some(date(1990, 5, 15)),
                emergency_contact: "Jane Doe".into(),
                emergency_phone: "+1 (555) 987-6543".into(),
                marital_status: "Single".into(),
                nationality: "American".into(),
            },
            professional: ProfessionalInfo {
                employee_id: "EMP001".into(),
                department: "Engineering".into(),
                position: "Software Developer".into(),
                manager: "Sarah Johnson".into(),
                start_date: date(2023, 1, 15),
                employment_type: "Full-time".into(),
                work_location: "New York Office".into(),
                salary: "$75,000".into(),
                skills: "React, JavaScript, Python, Node.js".into(),
                certifications: "AWS Certified Developer".into(),
            },
        })
    }

    pub fn get(&self) -> &Profile {
        &self.profile
    }

    /// Replaces the personal section. Nothing changes on a validation error.
    pub fn update_personal(&mut self, info: PersonalInfo) -> Result<&Profile, StoreError> {
        self.profile.personal = info.validated()?;
        info!("Personal information updated");
        Ok(&self.profile)
    }

    pub fn update_professional(&mut self, update: ProfessionalUpdate) -> Result<&Profile, StoreError> {
        self.profile.professional.apply(update)?;
        info!(work_location = %self.profile.professional.work_location, "Professional information updated");
        Ok(&self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn seed_is_john_doe() {
        let store = ProfileStore::seeded();
        assert_eq!(store.get().personal.email, "john.doe@company.com");
        assert_eq!(store.get().professional.manager, "Sarah Johnson");
    }

    #[test]
    fn rejected_personal_update_keeps_old_values() {
        let mut store = ProfileStore::seeded();
        let mut info = store.get().personal.clone();
        info.email = String::new();
        info.address = "9 Elm St".into();

        assert_eq!(
            store.update_personal(info).unwrap_err(),
            StoreError::Invalid(ValidationError::missing(&["email"]))
        );
        assert_eq!(store.get().personal.address, "123 Main St, City, State 12345");
    }

    #[test]
    fn professional_update_changes_only_editable_fields() {
        let mut store = ProfileStore::seeded();
        let profile = store
            .update_professional(ProfessionalUpdate {
                work_location: "Remote".into(),
                skills: "Rust".into(),
                certifications: String::new(),
            })
            .unwrap();
        assert_eq!(profile.professional.work_location, "Remote");
        assert_eq!(profile.professional.salary, "$75,000");
    }
}
