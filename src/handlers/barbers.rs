// src/handlers/barbers.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveTime;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{common::error::AppError, config::AppState, middleware::auth::AuthContext};

// Payload de criação e de edição. Expediente e dias de trabalho são
// opcionais: na criação caem nos defaults da plataforma, na edição
// ficam como estão.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarberPayload {
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub active: Option<bool>,
    #[schema(value_type = Option<String>, example = "09:00:00")]
    pub work_start: Option<NaiveTime>,
    #[schema(value_type = Option<String>, example = "19:00:00")]
    pub work_end: Option<NaiveTime>,
    #[schema(example = json!(["segunda", "terca"]))]
    pub weekdays: Option<Vec<String>>,
}

impl BarberPayload {
    fn required_name(&self) -> Result<&str, AppError> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(AppError::InvalidPayload("Nome é obrigatório")),
        }
    }
}

// GET /api/barbers
pub async fn list_barbers(
    State(app_state): State<AppState>,
    ctx: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let barbers = app_state
        .catalog_service
        .list_barbers(ctx.tenant_id()?)
        .await?;

    Ok((StatusCode::OK, Json(barbers)))
}

// POST /api/barbers
pub async fn create_barber(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Json(payload): Json<BarberPayload>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.required_name()?;

    let barber = app_state
        .catalog_service
        .create_barber(
            ctx.tenant_id()?,
            name,
            payload.photo_url.as_deref(),
            payload.bio.as_deref(),
            payload.active,
            payload.work_start,
            payload.work_end,
            payload.weekdays.clone(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(barber)))
}

// PUT /api/barbers/{id}
pub async fn update_barber(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<BarberPayload>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.required_name()?;

    let barber = app_state
        .catalog_service
        .update_barber(
            ctx.tenant_id()?,
            id,
            name,
            payload.photo_url.as_deref(),
            payload.bio.as_deref(),
            payload.active,
            payload.work_start,
            payload.work_end,
            payload.weekdays.clone(),
        )
        .await?;

    Ok((StatusCode::OK, Json(barber)))
}

// DELETE /api/barbers/{id}
pub async fn delete_barber(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .catalog_service
        .delete_barber(ctx.tenant_id()?, id)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}
