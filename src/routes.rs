use crate::{
    api::{attendance, employee, metrics, profile, project, request},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{Scope, web};
use std::sync::Arc;

pub type Limiter = Governor<PeerIpKeyExtractor, NoOpMiddleware>;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: Arc<Limiter>) {
    cfg.service(api_scope(&config.api_prefix).wrap(limiter));
}

/// Per-IP limiter shared by every worker.
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<Arc<Limiter>> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limit of {requests_per_min} per minute"))?;
    Ok(Arc::new(Governor::new(&cfg)))
}

/// All API resources under `prefix`, without rate limiting.
pub fn api_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .service(
            web::scope("/attendance")
                // /attendance
                .service(web::resource("").route(web::get().to(attendance::daily_sheet)))
                // /attendance/{employee_id}
                .service(web::resource("/{employee_id}").route(web::get().to(attendance::status_of)))
                // /attendance/{employee_id}/toggle
                .service(
                    web::resource("/{employee_id}/toggle")
                        .route(web::post().to(attendance::toggle)),
                )
                // /attendance/{employee_id}/history
                .service(
                    web::resource("/{employee_id}/history")
                        .route(web::get().to(attendance::history)),
                ),
        )
        .service(
            web::scope("/employees")
                .service(
                    web::resource("")
                        .route(web::get().to(employee::list_employees))
                        .route(web::post().to(employee::create_employee)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(employee::get_employee))
                        .route(web::delete().to(employee::delete_employee)),
                )
                .service(
                    web::resource("/{id}/activate")
                        .route(web::put().to(employee::activate_employee)),
                )
                .service(
                    web::resource("/{id}/deactivate")
                        .route(web::put().to(employee::deactivate_employee)),
                ),
        )
        .service(
            web::scope("/projects")
                .service(
                    web::resource("")
                        .route(web::get().to(project::list_projects))
                        .route(web::post().to(project::create_project)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(project::get_project))
                        .route(web::put().to(project::update_project)),
                )
                .service(
                    web::resource("/{id}/assignments/{employee_id}")
                        .route(web::post().to(project::toggle_assignment)),
                ),
        )
        .service(
            web::scope("/requests")
                .service(
                    web::resource("")
                        .route(web::get().to(request::list_requests))
                        .route(web::post().to(request::submit_request)),
                )
                .service(web::resource("/{id}").route(web::delete().to(request::delete_request)))
                .service(
                    web::resource("/{id}/approve").route(web::put().to(request::approve_request)),
                )
                .service(
                    web::resource("/{id}/reject").route(web::put().to(request::reject_request)),
                ),
        )
        .service(
            web::scope("/profile")
                .service(web::resource("").route(web::get().to(profile::get_profile)))
                .service(
                    web::resource("/personal").route(web::put().to(profile::update_personal)),
                )
                .service(
                    web::resource("/professional")
                        .route(web::put().to(profile::update_professional)),
                ),
        )
        // /metrics
        .service(web::resource("/metrics").route(web::get().to(metrics::performance_report)))
}
