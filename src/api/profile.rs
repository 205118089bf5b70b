use crate::{
    error::ApiError,
    model::profile::{PersonalInfo, ProfessionalUpdate, Profile},
    state::{AppState, lock},
};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "Personal information updated successfully!")]
    pub message: String,
    pub data: Profile,
}

/// Self-service profile
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Personal and professional information", body = Profile)
    ),
    tag = "Profile"
)]
pub async fn get_profile(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let profile = lock(&state.profile)?.get().clone();
    Ok(HttpResponse::Ok().json(profile))
}

/// Update personal information
#[utoipa::path(
    put,
    path = "/api/profile/personal",
    request_body = PersonalInfo,
    responses(
        (status = 200, description = "Personal information replaced", body = ProfileResponse),
        (status = 400, description = "Required field missing", body = Object, example = json!({
            "message": "Please fill in all required fields: phone"
        }))
    ),
    tag = "Profile"
)]
pub async fn update_personal(
    state: web::Data<AppState>,
    payload: web::Json<PersonalInfo>,
) -> actix_web::Result<impl Responder> {
    let mut store = lock(&state.profile)?;
    let profile = store
        .update_personal(payload.into_inner())
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(ProfileResponse {
        message: "Personal information updated successfully!".into(),
        data: profile.clone(),
    }))
}

/// Update the employee-editable professional fields
#[utoipa::path(
    put,
    path = "/api/profile/professional",
    request_body = ProfessionalUpdate,
    responses(
        (status = 200, description = "Editable fields updated", body = ProfileResponse),
        (status = 400, description = "Work location missing", body = Object, example = json!({
            "message": "Please fill in all required fields: workLocation"
        }))
    ),
    tag = "Profile"
)]
pub async fn update_professional(
    state: web::Data<AppState>,
    payload: web::Json<ProfessionalUpdate>,
) -> actix_web::Result<impl Responder> {
    let mut store = lock(&state.profile)?;
    let profile = store
        .update_professional(payload.into_inner())
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(ProfileResponse {
        message: "Professional information updated successfully!".into(),
        data: profile.clone(),
    }))
}
