use crate::{
    error::{ApiError, ValidationError},
    model::{
        employee::Department,
        metrics::{MetricsReport, TimeRange},
    },
    state::AppState,
};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct MetricsFilter {
    /// Department name, or `all`
    #[param(example = "Engineering")]
    pub department: Option<String>,
    /// `week`, `month` (default), `quarter` or `year`
    #[param(value_type = Option<String>, example = "month")]
    pub time_range: Option<TimeRange>,
}

impl MetricsFilter {
    fn department(&self) -> Result<Option<Department>, ValidationError> {
        match self.department.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(name) => name
                .parse()
                .map(Some)
                .map_err(|_| ValidationError::UnknownDepartment(name.to_string())),
        }
    }
}

/// Performance metrics
#[utoipa::path(
    get,
    path = "/api/metrics",
    params(MetricsFilter),
    responses(
        (status = 200, description = "Employee and team performance with KPIs", body = MetricsReport),
        (status = 400, description = "Unknown department", body = Object, example = json!({
            "message": "Unknown department: Legal"
        }))
    ),
    tag = "Metrics"
)]
pub async fn performance_report(
    state: web::Data<AppState>,
    query: web::Query<MetricsFilter>,
) -> actix_web::Result<impl Responder> {
    let department = query.department().map_err(ApiError::from)?;
    let report: MetricsReport = state
        .metrics
        .report(department, query.time_range.unwrap_or_default());
    Ok(HttpResponse::Ok().json(report))
}
