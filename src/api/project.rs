use crate::{
    error::ApiError,
    model::project::{Project, ProjectDraft},
    state::{AppState, lock},
};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ProjectListResponse {
    pub data: Vec<Project>,
    #[schema(example = 2)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct ProjectResponse {
    #[schema(example = "Project \"Data Warehouse\" created successfully!")]
    pub message: String,
    pub data: Project,
}

/// List projects
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "All projects", body = ProjectListResponse)
    ),
    tag = "Project"
)]
pub async fn list_projects(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let data = lock(&state.projects)?.list().to_vec();
    Ok(HttpResponse::Ok().json(ProjectListResponse {
        total: data.len(),
        data,
    }))
}

/// Create project
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = ProjectDraft,
    responses(
        (status = 200, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Required field missing", body = Object, example = json!({
            "message": "Please fill in all required fields: deadline"
        }))
    ),
    tag = "Project"
)]
pub async fn create_project(
    state: web::Data<AppState>,
    payload: web::Json<ProjectDraft>,
) -> actix_web::Result<impl Responder> {
    let project = lock(&state.projects)?
        .create(payload.into_inner())
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(ProjectResponse {
        message: format!("Project \"{}\" created successfully!", project.name),
        data: project,
    }))
}

/// Get project by ID
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    params(
        ("project_id" = u64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 404, description = "Project not found")
    ),
    tag = "Project"
)]
pub async fn get_project(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let projects = lock(&state.projects)?;
    let project = projects.get(path.into_inner()).map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(project))
}

/// Update project
#[utoipa::path(
    put,
    path = "/api/projects/{project_id}",
    params(
        ("project_id" = u64, Path, description = "Project ID")
    ),
    request_body = ProjectDraft,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, description = "Required field missing"),
        (status = 404, description = "Project not found")
    ),
    tag = "Project"
)]
pub async fn update_project(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    payload: web::Json<ProjectDraft>,
) -> actix_web::Result<impl Responder> {
    let project = lock(&state.projects)?
        .update(path.into_inner(), payload.into_inner())
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(ProjectResponse {
        message: format!("Project \"{}\" updated successfully!", project.name),
        data: project,
    }))
}

/// Assign or unassign an employee
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/assignments/{employee_id}",
    params(
        ("project_id" = u64, Path, description = "Project ID"),
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Assignment flipped", body = ProjectResponse),
        (status = 404, description = "Project or employee not found")
    ),
    tag = "Project"
)]
pub async fn toggle_assignment(
    state: web::Data<AppState>,
    path: web::Path<(u64, u64)>,
) -> actix_web::Result<impl Responder> {
    let (project_id, employee_id) = path.into_inner();

    // Only current employees can be assigned; unassigning works for anyone.
    let is_employee = lock(&state.employees)?.get(employee_id).is_ok();

    let mut projects = lock(&state.projects)?;
    let assigned = projects
        .get(project_id)
        .map_err(ApiError::from)?
        .assigned_employees
        .contains(&employee_id);
    if !assigned && !is_employee {
        return Err(ApiError::NotFound(format!("Employee {employee_id} not found")).into());
    }

    let project = projects
        .toggle_assignment(project_id, employee_id)
        .map_err(ApiError::from)?;
    let verb = if assigned { "unassigned from" } else { "assigned to" };

    Ok(HttpResponse::Ok().json(ProjectResponse {
        message: format!("Employee {employee_id} {verb} \"{}\"", project.name),
        data: project,
    }))
}
