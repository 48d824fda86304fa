pub mod form_handlers;
pub mod meeting_handlers;

use actix_web::{
    Error, HttpResponse, web,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, header},
    middleware::{Next, from_fn},
};

use crate::errors::AppError;

fn has_json_body(req: &ServiceRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

/// Form mutations under `/api` must be JSON; reads pass through untouched.
async fn json_posts_only(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if req.method() != Method::POST || has_json_body(&req) {
        return next.call(req).await.map(|res| res.map_into_left_body());
    }
    log::debug!("Rejecting {} {} without a JSON body", req.method(), req.path());
    let rejection = AppError::BadRequest("Content-Type must be application/json".to_string());
    Ok(req.error_response(rejection).map_into_right_body())
}

/// Fallback for every unrouted path.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}

/// Configure all routes. Expects `web::Data<CalendarHandle>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(meeting_handlers::page));
    cfg.service(
        web::scope("/api")
            .wrap(from_fn(json_posts_only))
            .route("/meetings", web::get().to(meeting_handlers::list))
            .route("/form", web::get().to(form_handlers::state))
            .route("/form/input", web::post().to(form_handlers::input))
            .route("/form/suggestion", web::post().to(form_handlers::select_suggestion))
            .route("/form/submit", web::post().to(form_handlers::submit)),
    );
}
