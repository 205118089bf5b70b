use crate::api::attendance::{AttendanceRow, DailySheetResponse, HistoryResponse, ToggleResponse};
use crate::api::employee::{EmployeeListResponse, EmployeeResponse};
use crate::api::profile::ProfileResponse;
use crate::api::project::{ProjectListResponse, ProjectResponse};
use crate::api::request::RequestListResponse;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
use crate::model::employee::{Department, Employee, EmployeeStatus, NewEmployee};
use crate::model::metrics::{EmployeeMetrics, Kpis, MetricsReport, TeamMetrics, TimeRange};
use crate::model::profile::{PersonalInfo, ProfessionalInfo, ProfessionalUpdate, Profile};
use crate::model::project::{Project, ProjectDraft, ProjectStatus};
use crate::model::request::{
    EmployeeRequest, RequestDraft, RequestPriority, RequestStatus, RequestType,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PeopleFlow HR API",
        version = "0.1.0",
        description = r#"
## PeopleFlow

Backend of the PeopleFlow HR dashboard.

### Key Features
- **Employee Management**
  - List, add, view and remove employees
- **Attendance Tracking**
  - One toggle per employee per day: sign in, then sign out
  - Daily attendance sheet with total hours worked
- **Project Assignments**
  - Create and edit projects, assign employees
- **Self-Service**
  - Personal and professional profile
  - Time-off, information update and other requests, with approval
- **Performance Metrics**
  - Per-employee and per-department figures with company KPIs

### Storage
Attendance is written to a local key-value store on every change.
Everything else is kept in memory and reset on restart.

### Response Format
- JSON bodies, camelCase fields
- Errors carry a `message`
"#,
    ),
    paths(
        crate::api::attendance::daily_sheet,
        crate::api::attendance::toggle,
        crate::api::attendance::status_of,
        crate::api::attendance::history,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,
        crate::api::employee::activate_employee,
        crate::api::employee::deactivate_employee,

        crate::api::project::list_projects,
        crate::api::project::create_project,
        crate::api::project::get_project,
        crate::api::project::update_project,
        crate::api::project::toggle_assignment,

        crate::api::request::list_requests,
        crate::api::request::submit_request,
        crate::api::request::delete_request,
        crate::api::request::approve_request,
        crate::api::request::reject_request,

        crate::api::profile::get_profile,
        crate::api::profile::update_personal,
        crate::api::profile::update_professional,

        crate::api::metrics::performance_report,
    ),
    components(
        schemas(
            AttendanceRecord,
            AttendanceStatus,
            AttendanceSummary,
            AttendanceRow,
            DailySheetResponse,
            ToggleResponse,
            HistoryResponse,
            Department,
            Employee,
            EmployeeStatus,
            NewEmployee,
            EmployeeListResponse,
            EmployeeResponse,
            Project,
            ProjectDraft,
            ProjectStatus,
            ProjectListResponse,
            ProjectResponse,
            EmployeeRequest,
            RequestDraft,
            RequestType,
            RequestPriority,
            RequestStatus,
            RequestListResponse,
            Profile,
            PersonalInfo,
            ProfessionalInfo,
            ProfessionalUpdate,
            ProfileResponse,
            EmployeeMetrics,
            TeamMetrics,
            Kpis,
            TimeRange,
            MetricsReport,
        )
    ),
    tags(
        (name = "Attendance", description = "Daily sign-in and sign-out"),
        (name = "Employee", description = "Employee directory"),
        (name = "Project", description = "Projects and assignments"),
        (name = "Request", description = "Employee self-service requests"),
        (name = "Profile", description = "Employee self-service profile"),
        (name = "Metrics", description = "Performance metrics")
    )
)]
pub struct ApiDoc;

/// Paths are declared under `/api`; this moves them under the configured prefix.
pub fn api_doc(prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let prefix = prefix.trim_end_matches('/');
    doc.paths.paths = std::mem::take(&mut doc.paths.paths)
        .into_iter()
        .map(|(path, item)| {
            let rest = path.strip_prefix("/api").unwrap_or(&path);
            (format!("{prefix}{rest}"), item)
        })
        .collect();
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in [
            "/api/attendance",
            "/api/attendance/{employee_id}",
            "/api/attendance/{employee_id}/toggle",
            "/api/employees",
            "/api/employees/{employee_id}",
            "/api/projects",
            "/api/projects/{project_id}",
            "/api/projects/{project_id}/assignments/{employee_id}",
            "/api/requests",
            "/api/requests/{request_id}",
            "/api/requests/{request_id}/approve",
            "/api/requests/{request_id}/reject",
            "/api/attendance/{employee_id}/history",
            "/api/employees/{employee_id}/activate",
            "/api/employees/{employee_id}/deactivate",
            "/api/profile",
            "/api/profile/personal",
            "/api/profile/professional",
            "/api/metrics",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }

    #[test]
    fn documented_paths_follow_the_configured_prefix() {
        let doc = api_doc("/hr/v1/");
        assert!(doc.paths.paths.contains_key("/hr/v1/metrics"));
        assert!(doc.paths.paths.contains_key("/hr/v1/attendance/{employee_id}/toggle"));
        assert!(!doc.paths.paths.keys().any(|p| p.starts_with("/api/")));
        assert_eq!(api_doc("/api").paths.paths.len(), ApiDoc::openapi().paths.paths.len());
    }
}
