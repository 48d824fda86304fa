use actix_web::{web, HttpResponse};

use crate::calendar::service::CalendarHandle;
use crate::errors::{render, AppError};
use crate::templates_structs::MeetingsPageTemplate;

/// GET / - meeting list and the form as it currently stands.
pub async fn page(calendar: web::Data<CalendarHandle>) -> Result<HttpResponse, AppError> {
    let meetings = calendar.meetings().await?;
    let state = calendar.form().await?;
    render(MeetingsPageTemplate::build(&meetings, &state))
}

/// GET /api/meetings - every accepted meeting in insertion order.
pub async fn list(calendar: web::Data<CalendarHandle>) -> Result<HttpResponse, AppError> {
    let meetings = calendar.meetings().await?;
    Ok(HttpResponse::Ok().json(meetings))
}
