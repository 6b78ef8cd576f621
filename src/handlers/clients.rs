// src/handlers/clients.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{common::error::AppError, config::AppState, middleware::auth::AuthContext};

// Payload de criação e de edição
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

impl ClientPayload {
    // Nome e telefone são obrigatórios
    fn required(&self) -> Result<(&str, &str), AppError> {
        match (self.name.as_deref(), self.phone.as_deref()) {
            (Some(name), Some(phone)) if !name.is_empty() && !phone.is_empty() => {
                Ok((name, phone))
            }
            _ => Err(AppError::InvalidPayload("Nome e telefone são obrigatórios")),
        }
    }
}

// GET /api/clients
pub async fn list_clients(
    State(app_state): State<AppState>,
    ctx: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let clients = app_state
        .client_service
        .list_clients(ctx.tenant_id()?)
        .await?;

    Ok((StatusCode::OK, Json(clients)))
}

// POST /api/clients
pub async fn create_client(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    let (name, phone) = payload.required()?;

    let client = app_state
        .client_service
        .create_client(
            ctx.tenant_id()?,
            name,
            phone,
            payload.email.as_deref(),
            payload.notes.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(client)))
}

// PUT /api/clients/{id}
pub async fn update_client(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    let (name, phone) = payload.required()?;

    let client = app_state
        .client_service
        .update_client(
            ctx.tenant_id()?,
            id,
            name,
            phone,
            payload.email.as_deref(),
            payload.notes.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(client)))
}

// DELETE /api/clients/{id}
pub async fn delete_client(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .client_service
        .delete_client(ctx.tenant_id()?, id)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}
