use crate::model::{
    employee::Department,
    metrics::{EmployeeMetrics, Kpis, MetricsReport, TeamMetrics, TimeRange},
};

/// Read-only performance figures behind the metrics page.
pub struct PerformanceBoard {
    employees: Vec<EmployeeMetrics>,
    teams: Vec<TeamMetrics>,
    kpis: Kpis,
}

impl PerformanceBoard {
    pub fn seeded() -> Self {
        let employee = |id: u64, name: &str, department, performance, projects, completion_rate| {
            EmployeeMetrics {
                id,
                name: name.to_string(),
                department,
                performance,
                projects,
                completion_rate,
            }
        };
        let team = |department, avg_performance, projects_completed, satisfaction| TeamMetrics {
            department,
            avg_performance,
            projects_completed,
            satisfaction,
        };

        Self {
            employees: vec![
                employee(1, "Sarah Johnson", Department::Engineering, 92, 8, 95),
                employee(2, "Michael Chen", Department::Design, 88, 6, 90),
                employee(3, "Emily Rodriguez", Department::Marketing, 85, 4, 88),
            ],
            teams: vec![
                team(Department::Engineering, 89, 24, 4.2),
                team(Department::Design, 87, 18, 4.5),
                team(Department::Marketing, 84, 12, 4.1),
            ],
            kpis: Kpis {
                avg_project_completion: 14.5,
                employee_engagement: 87.0,
                productivity_growth: 12.3,
                team_efficiency: 91.0,
            },
        }
    }

    /// Employees and teams of `department`, or everything when `None`.
    /// The KPIs are organisation-wide and never filtered.
    pub fn report(&self, department: Option<Department>, time_range: TimeRange) -> MetricsReport {
        let included = |d: Department| department.is_none_or(|wanted| wanted == d);

        MetricsReport {
            department,
            time_range,
            days: time_range.days(),
            employees: self
                .employees
                .iter()
                .filter(|e| included(e.department))
                .cloned()
                .collect(),
            teams: self
                .teams
                .iter()
                .filter(|t| included(t.department))
                .cloned()
                .collect(),
            kpis: self.kpis.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_organisation_by_default() {
        let report = PerformanceBoard::seeded().report(None, TimeRange::default());
        assert_eq!(report.employees.len(), 3);
        assert_eq!(report.teams.len(), 3);
        assert_eq!(report.days, 30);
    }

    #[test]
    fn department_filter_applies_to_people_and_teams() {
        let report = PerformanceBoard::seeded().report(Some(Department::Design), TimeRange::Week);
        assert_eq!(report.employees.len(), 1);
        assert_eq!(report.employees[0].name, "Michael Chen");
        assert_eq!(report.teams[0].avg_performance, 87);
        assert_eq!(report.kpis.team_efficiency, 91.0);
    }

    #[test]
    fn department_without_data_is_empty() {
        let report = PerformanceBoard::seeded().report(Some(Department::Finance), TimeRange::Year);
        assert!(report.employees.is_empty());
        assert!(report.teams.is_empty());
        assert_eq!(report.days, 365);
    }
}
