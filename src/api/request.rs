use crate::{
    error::ApiError,
    model::request::{EmployeeRequest, RequestDraft, RequestStatus},
    state::{AppState, lock},
};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct RequestListResponse {
    pub data: Vec<EmployeeRequest>,
    #[schema(example = 2)]
    pub total: usize,
}

/// List self-service requests, newest first
#[utoipa::path(
    get,
    path = "/api/requests",
    responses(
        (status = 200, description = "Submitted requests", body = RequestListResponse)
    ),
    tag = "Request"
)]
pub async fn list_requests(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let data = lock(&state.requests)?.list().to_vec();
    Ok(HttpResponse::Ok().json(RequestListResponse {
        total: data.len(),
        data,
    }))
}

/// Submit a request
#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = RequestDraft,
    responses(
        (status = 200, description = "Request submitted as Pending", body = Object, example = json!({
            "message": "Request submitted successfully!",
            "data": {"id": 3, "type": "time-off", "status": "Pending"}
        })),
        (status = 400, description = "Missing title, description or time-off dates", body = Object, example = json!({
            "message": "Please select start and end dates for time-off requests"
        }))
    ),
    tag = "Request"
)]
pub async fn submit_request(
    state: web::Data<AppState>,
    payload: web::Json<RequestDraft>,
) -> actix_web::Result<impl Responder> {
    let today = state.clock.today();
    let request = lock(&state.requests)?
        .submit(payload.into_inner(), today)
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Request submitted successfully!",
        "data": request
    })))
}

/// Delete a request
#[utoipa::path(
    delete,
    path = "/api/requests/{request_id}",
    params(
        ("request_id" = u64, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Request deleted", body = Object, example = json!({
            "message": "Request deleted successfully!"
        })),
        (status = 404, description = "Request not found")
    ),
    tag = "Request"
)]
pub async fn delete_request(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    lock(&state.requests)?
        .delete(path.into_inner())
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Request deleted successfully!"
    })))
}

/// Approve a pending request
#[utoipa::path(
    put,
    path = "/api/requests/{request_id}/approve",
    params(
        ("request_id" = u64, Path, description = "ID of the request to approve")
    ),
    responses(
        (status = 200, description = "Request approved", body = Object, example = json!({
            "message": "Request approved",
            "data": {"id": 1, "status": "Approved"}
        })),
        (status = 400, description = "Request already processed", body = Object, example = json!({
            "message": "Request 2 has already been processed"
        })),
        (status = 404, description = "Request not found")
    ),
    tag = "Request"
)]
pub async fn approve_request(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    review(&state, path.into_inner(), RequestStatus::Approved, "Request approved")
}

/// Reject a pending request
#[utoipa::path(
    put,
    path = "/api/requests/{request_id}/reject",
    params(
        ("request_id" = u64, Path, description = "ID of the request to reject")
    ),
    responses(
        (status = 200, description = "Request rejected", body = Object, example = json!({
            "message": "Request rejected",
            "data": {"id": 1, "status": "Rejected"}
        })),
        (status = 400, description = "Request already processed", body = Object, example = json!({
            "message": "Request 2 has already been processed"
        })),
        (status = 404, description = "Request not found")
    ),
    tag = "Request"
)]
pub async fn reject_request(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    review(&state, path.into_inner(), RequestStatus::Rejected, "Request rejected")
}

fn review(
    state: &AppState,
    id: u64,
    decision: RequestStatus,
    message: &str,
) -> actix_web::Result<HttpResponse> {
    let request = lock(&state.requests)?
        .review(id, decision)
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": message,
        "data": request
    })))
}
