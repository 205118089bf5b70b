use crate::{
    error::ApiError,
    model::employee::{Employee, EmployeeStatus, NewEmployee},
    state::{AppState, lock},
};
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeFilter {
    /// Only employees with this status
    pub status: Option<EmployeeStatus>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
    #[schema(example = 3)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = "Employee Priya Patel added successfully!")]
    pub message: String,
    pub data: Employee,
}

/// List employees
#[utoipa::path(
    get,
    path = "/api/employees",
    params(EmployeeFilter),
    responses(
        (status = 200, description = "Employees in directory order", body = EmployeeListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    state: web::Data<AppState>,
    filter: web::Query<EmployeeFilter>,
) -> actix_web::Result<impl Responder> {
    let employees = lock(&state.employees)?;
    let data: Vec<Employee> = employees
        .list()
        .iter()
        .filter(|e| filter.status.is_none_or(|s| e.status == s))
        .cloned()
        .collect();

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        total: data.len(),
        data,
    }))
}

/// Add Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = NewEmployee,
    responses(
        (status = 200, description = "Employee added", body = EmployeeResponse),
        (status = 400, description = "Required field missing or unknown department", body = Object, example = json!({
            "message": "Please fill in all required fields: email"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    state: web::Data<AppState>,
    payload: web::Json<NewEmployee>,
) -> actix_web::Result<impl Responder> {
    let employee = lock(&state.employees)?
        .add(payload.into_inner())
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(EmployeeResponse {
        message: format!("Employee {} added successfully!", employee.name),
        data: employee,
    }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee 9 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employees = lock(&state.employees)?;
    let employee = employees.get(path.into_inner()).map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Remove Employee
///
/// Attendance history of the employee is kept.
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully removed", body = Object, example = json!({
            "message": "Employee removed successfully"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee 9 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    lock(&state.employees)?
        .remove(employee_id)
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee removed successfully"
    })))
}

/// Mark an employee inactive
///
/// The employee stays in the directory and keeps their attendance.
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}/deactivate",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deactivated", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee 9 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn deactivate_employee(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    change_status(&state, path.into_inner(), EmployeeStatus::Inactive)
}

/// Mark an employee active again
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}/activate",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee activated", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee 9 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn activate_employee(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    change_status(&state, path.into_inner(), EmployeeStatus::Active)
}

fn change_status(
    state: &AppState,
    id: u64,
    status: EmployeeStatus,
) -> actix_web::Result<HttpResponse> {
    let employee = lock(&state.employees)?
        .set_status(id, status)
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(EmployeeResponse {
        message: format!("{} is now {}", employee.name, employee.status),
        data: employee,
    }))
}
