use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::calendar::service::CalendarHandle;
use crate::errors::AppError;
use crate::models::meeting::Field;

/// Body of input and suggestion requests. `field` is the wire name.
#[derive(Debug, Deserialize)]
pub struct FieldInput {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

impl FieldInput {
    fn parse(self) -> Result<(Field, String), AppError> {
        let field = self
            .field
            .parse::<Field>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok((field, self.value))
    }
}

/// GET /api/form
pub async fn state(calendar: web::Data<CalendarHandle>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(calendar.form().await?))
}

/// POST /api/form/input - a keystroke.
pub async fn input(
    calendar: web::Data<CalendarHandle>,
    body: web::Json<FieldInput>,
) -> Result<HttpResponse, AppError> {
    let (field, value) = body.into_inner().parse()?;
    Ok(HttpResponse::Ok().json(calendar.input(field, value).await?))
}

/// POST /api/form/suggestion - a suggestion was picked. Only name and email
/// fields have suggestions to pick from.
pub async fn select_suggestion(
    calendar: web::Data<CalendarHandle>,
    body: web::Json<FieldInput>,
) -> Result<HttpResponse, AppError> {
    let (field, value) = body.into_inner().parse()?;
    if !field.is_suggestible() {
        return Err(AppError::BadRequest(format!("{field} has no suggestions")));
    }
    Ok(HttpResponse::Ok().json(calendar.select_suggestion(field, value).await?))
}

/// POST /api/form/submit - 201 with the new meeting, or 422 with the
/// per-field errors.
pub async fn submit(calendar: web::Data<CalendarHandle>) -> Result<HttpResponse, AppError> {
    match calendar.submit().await? {
        Ok(meeting) => Ok(HttpResponse::Created().json(meeting)),
        Err(errors) => Ok(HttpResponse::UnprocessableEntity()
            .json(serde_json::json!({ "errors": errors }))),
    }
}
