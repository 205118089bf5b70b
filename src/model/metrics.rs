use crate::model::employee::Department;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeMetrics {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Sarah Johnson")]
    pub name: String,
    pub department: Department,
    /// Performance score out of 100
    #[schema(example = 92)]
    pub performance: u8,
    #[schema(example = 8)]
    pub projects: u32,
    /// Percentage of tasks finished on time
    #[schema(example = 95)]
    pub completion_rate: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMetrics {
    pub department: Department,
    #[schema(example = 89)]
    pub avg_performance: u8,
    #[schema(example = 24)]
    pub projects_completed: u32,
    /// Out of 5
    #[schema(example = 4.2)]
    pub satisfaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    /// Days
    #[schema(example = 14.5)]
    pub avg_project_completion: f64,
    /// Percent
    #[schema(example = 87.0)]
    pub employee_engagement: f64,
    /// Percent
    #[schema(example = 12.3)]
    pub productivity_growth: f64,
    /// Percent
    #[schema(example = 91.0)]
    pub team_efficiency: f64,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    /// Length of the trailing window in days.
    pub fn days(self) -> u32 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::Year => 365,
        }
    }
}

/// Metrics for one department (or all of them) over a time range.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    /// `null` when every department is included
    pub department: Option<Department>,
    pub time_range: TimeRange,
    #[schema(example = 30)]
    pub days: u32,
    pub employees: Vec<EmployeeMetrics>,
    pub teams: Vec<TeamMetrics>,
    pub kpis: Kpis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_ranges_parse_and_measure() {
        assert_eq!("quarter".parse::<TimeRange>().unwrap().days(), 90);
        assert_eq!(TimeRange::default(), TimeRange::Month);
        assert_eq!(TimeRange::Week.to_string(), "week");
        assert!("decade".parse::<TimeRange>().is_err());
    }
}
