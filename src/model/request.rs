use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RequestType {
    #[default]
    TimeOff,
    Update,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// A self-service request raised by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[schema(example = 3)]
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: RequestType,
    #[schema(example = "Summer Vacation")]
    pub title: String,
    pub description: String,
    #[schema(value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,
    pub priority: RequestPriority,
    pub status: RequestStatus,
    #[schema(value_type = String, format = "date")]
    pub submitted_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestDraft {
    #[serde(rename = "type")]
    pub kind: RequestType,
    #[schema(example = "Dentist appointment")]
    pub title: String,
    #[schema(example = "Half day off")]
    pub description: String,
    #[schema(value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,
    pub priority: RequestPriority,
}

impl RequestDraft {
    /// Validates the draft and files it as a pending request.
    pub fn into_request(self, id: u64, submitted: NaiveDate) -> Result<EmployeeRequest, ValidationError> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            let missing: Vec<&str> = [("title", &self.title), ("description", &self.description)]
                .into_iter()
                .filter(|(_, v)| v.trim().is_empty())
                .map(|(field, _)| field)
                .collect();
            return Err(ValidationError::missing(&missing));
        }

        if self.kind == RequestType::TimeOff && (self.start_date.is_none() || self.end_date.is_none()) {
            return Err(ValidationError::MissingDates);
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(ValidationError::DateOrder("startDate", "endDate"));
            }
        }

        Ok(EmployeeRequest {
            id,
            kind: self.kind,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            priority: self.priority,
            status: RequestStatus::Pending,
            submitted_date: submitted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn draft(kind: RequestType) -> RequestDraft {
        RequestDraft {
            kind,
            title: "Dentist".into(),
            description: "Half day".into(),
            ..Default::default()
        }
    }

    #[test]
    fn time_off_needs_both_dates() {
        let mut d = draft(RequestType::TimeOff);
        d.start_date = Some(day(20));
        assert_eq!(d.into_request(1, day(18)), Err(ValidationError::MissingDates));
    }

    #[test]
    fn update_requests_need_no_dates() {
        let request = draft(RequestType::Update).into_request(7, day(18)).unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.submitted_date, day(18));
        assert_eq!(request.priority, RequestPriority::Medium);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut d = draft(RequestType::Other);
        d.title = "   ".into();
        assert_eq!(
            d.into_request(1, day(18)),
            Err(ValidationError::missing(&["title"]))
        );
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut d = draft(RequestType::TimeOff);
        d.start_date = Some(day(25));
        d.end_date = Some(day(21));
        assert_eq!(
            d.into_request(1, day(18)),
            Err(ValidationError::DateOrder("startDate", "endDate"))
        );
    }

    #[test]
    fn kind_serializes_as_type() {
        let json = serde_json::to_value(draft(RequestType::TimeOff)).unwrap();
        assert_eq!(json["type"], "time-off");
    }
}
