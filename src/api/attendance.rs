use crate::{
    error::ApiError,
    model::{
        attendance::{AttendanceRecord, AttendanceSummary},
        employee::Department,
    },
    state::{AppState, lock},
};
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// Calendar day, defaults to today
    #[param(value_type = Option<String>, example = "2026-10-18")]
    pub date: Option<NaiveDate>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRow {
    #[schema(example = "Sarah Johnson")]
    pub employee_name: String,
    pub department: Department,
    pub attendance: AttendanceSummary,
}

#[derive(Serialize, ToSchema)]
pub struct DailySheetResponse {
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    pub data: Vec<AttendanceRow>,
    /// Records stored for the day, including those of removed employees
    #[schema(example = 2)]
    pub recorded: usize,
}

#[derive(Serialize, ToSchema)]
pub struct ToggleResponse {
    #[schema(example = "Sarah Johnson signed in at 09:05")]
    pub message: String,
    /// `signed_in`, `signed_out` or `already_completed`
    #[schema(example = "signed_in")]
    pub outcome: String,
    pub record: AttendanceRecord,
    pub attendance: AttendanceSummary,
}

/// Attendance sheet for every employee on a day
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(DateQuery),
    responses(
        (status = 200, description = "One row per employee", body = DailySheetResponse)
    ),
    tag = "Attendance"
)]
pub async fn daily_sheet(
    state: web::Data<AppState>,
    query: web::Query<DateQuery>,
) -> actix_web::Result<impl Responder> {
    let date = query.date.unwrap_or_else(|| state.clock.today());

    // Directory before attendance, always.
    let employees = lock(&state.employees)?;
    let attendance = lock(&state.attendance)?;

    let data = employees
        .list()
        .iter()
        .zip(attendance.daily_sheet(date, employees.list()))
        .map(|(employee, summary)| AttendanceRow {
            employee_name: employee.name.clone(),
            department: employee.department,
            attendance: summary,
        })
        .collect();

    Ok(HttpResponse::Ok().json(DailySheetResponse {
        date,
        data,
        recorded: attendance.records_on(date).count(),
    }))
}

/// Sign an employee in, or out if already signed in today
#[utoipa::path(
    post,
    path = "/api/attendance/{employee_id}/toggle",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance advanced, or notice that the day is complete", body = ToggleResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee 9 not found"
        })),
        (status = 500, description = "Attendance could not be saved", body = Object, example = json!({
            "message": "Internal Server Error"
        }))
    ),
    tag = "Attendance"
)]
pub async fn toggle(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    let employee_name = lock(&state.employees)?
        .get(employee_id)
        .map_err(ApiError::from)?
        .name
        .clone();

    let mut attendance = lock(&state.attendance)?;
    let outcome = attendance
        .toggle(employee_id, &employee_name)
        .map_err(ApiError::from)?;
    let summary = attendance.status_of(employee_id, outcome.record().date);

    Ok(HttpResponse::Ok().json(ToggleResponse {
        message: outcome.message(),
        outcome: outcome.kind().to_string(),
        record: outcome.record().clone(),
        attendance: summary,
    }))
}

/// Attendance status of one employee
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee ID"),
        DateQuery
    ),
    responses(
        (status = 200, description = "Status, times and total hours", body = AttendanceSummary)
    ),
    tag = "Attendance"
)]
pub async fn status_of(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    query: web::Query<DateQuery>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let attendance = lock(&state.attendance)?;
    let summary = match query.date {
        Some(date) => attendance.status_of(employee_id, date),
        None => attendance.status_today(employee_id),
    };
    Ok(HttpResponse::Ok().json(summary))
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    #[schema(example = 1)]
    pub employee_id: u64,
    pub data: Vec<AttendanceRecord>,
    #[schema(example = 12)]
    pub total: usize,
}

/// Every stored day of one employee, oldest first
///
/// Works for removed employees too; their records are never deleted.
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}/history",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance records of the employee", body = HistoryResponse)
    ),
    tag = "Attendance"
)]
pub async fn history(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let data = lock(&state.attendance)?.history(employee_id);

    Ok(HttpResponse::Ok().json(HistoryResponse {
        employee_id,
        total: data.len(),
        data,
    }))
}
