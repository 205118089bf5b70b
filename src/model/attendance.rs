use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

/// One employee's attendance for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "employeeId": 1,
    "employeeName": "Sarah Johnson",
    "date": "2026-10-18",
    "checkIn": "09:05",
    "checkOut": null
}))]
pub struct AttendanceRecord {
    pub employee_id: u64,
    pub employee_name: String,
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    #[serde(with = "crate::utils::time_format")]
    #[schema(value_type = String, example = "09:05")]
    pub check_in: NaiveTime,
    #[serde(with = "crate::utils::time_format::option")]
    #[schema(value_type = Option<String>, example = "17:40")]
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    pub fn status(&self) -> AttendanceStatus {
        match self.check_out {
            Some(_) => AttendanceStatus::Completed,
            None => AttendanceStatus::SignedIn,
        }
    }
}

/// Composite store key, e.g. `1-2026-10-18`.
pub fn record_key(employee_id: u64, date: NaiveDate) -> String {
    format!("{}-{}", employee_id, date.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    NotSignedIn,
    SignedIn,
    Completed,
}

/// Derived view of a day's attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(with = "crate::utils::time_format::option")]
    #[schema(value_type = Option<String>, example = "09:00")]
    pub check_in: Option<NaiveTime>,
    #[serde(with = "crate::utils::time_format::option")]
    #[schema(value_type = Option<String>, example = "17:30")]
    pub check_out: Option<NaiveTime>,
    #[schema(example = "8h 30m")]
    pub total_hours: Option<String>,
}

impl AttendanceSummary {
    pub fn not_signed_in(employee_id: u64, date: NaiveDate) -> Self {
        Self {
            employee_id,
            date,
            status: AttendanceStatus::NotSignedIn,
            check_in: None,
            check_out: None,
            total_hours: None,
        }
    }

    pub fn of(record: &AttendanceRecord) -> Self {
        Self {
            employee_id: record.employee_id,
            date: record.date,
            status: record.status(),
            check_in: Some(record.check_in),
            check_out: record.check_out,
            total_hours: record
                .check_out
                .map(|out| format_duration(out.signed_duration_since(record.check_in).num_minutes())),
        }
    }
}

/// Formats a minute count as `"{h}h {m}m"`.
///
/// Division truncates toward zero, so a check-out before check-in comes
/// out negative (`-1200` is `"-20h 0m"`, `-90` is `"-1h -30m"`).
pub fn format_duration(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn record(check_in: NaiveTime, check_out: Option<NaiveTime>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: 1,
            employee_name: "Sarah Johnson".into(),
            date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            check_in,
            check_out,
        }
    }

    #[test]
    fn key_joins_id_and_iso_date() {
        let r = record(hm(9, 0), None);
        assert_eq!(record_key(r.employee_id, r.date), "1-2026-10-18");
    }

    #[test]
    fn full_day_totals_hours_and_minutes() {
        let summary = AttendanceSummary::of(&record(hm(9, 0), Some(hm(17, 30))));
        assert_eq!(summary.status, AttendanceStatus::Completed);
        assert_eq!(summary.total_hours.as_deref(), Some("8h 30m"));
    }

    #[test]
    fn open_day_has_no_total() {
        let summary = AttendanceSummary::of(&record(hm(9, 0), None));
        assert_eq!(summary.status, AttendanceStatus::SignedIn);
        assert_eq!(summary.total_hours, None);
    }

    #[test]
    fn overnight_record_yields_negative_total() {
        // Check-out on the following morning is read as the same day.
        let summary = AttendanceSummary::of(&record(hm(22, 0), Some(hm(2, 0))));
        assert_eq!(summary.total_hours.as_deref(), Some("-20h 0m"));

        assert_eq!(format_duration(-90), "-1h -30m");
    }

    #[test]
    fn persisted_shape_is_camel_case() {
        let json = serde_json::to_value(record(hm(9, 5), None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "employeeId": 1,
                "employeeName": "Sarah Johnson",
                "date": "2026-10-18",
                "checkIn": "09:05",
                "checkOut": null
            })
        );
    }

    #[test]
    fn status_names_are_screaming_snake() {
        assert_eq!(AttendanceStatus::NotSignedIn.to_string(), "NOT_SIGNED_IN");
        assert_eq!(
            serde_json::to_value(AttendanceStatus::SignedIn).unwrap(),
            "SIGNED_IN"
        );
    }
}
