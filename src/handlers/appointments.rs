// src/handlers/appointments.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthContext,
    models::scheduling::{Appointment, AppointmentStatus},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListAppointmentsQuery {
    // Restringe a agenda a um barbeiro
    pub barber_id: Option<Uuid>,
    // Restringe a um único dia (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
}

// GET /api/appointments
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Appointments",
    params(ListAppointmentsQuery),
    responses(
        (status = 200, description = "Agenda ordenada por início", body = Vec<Appointment>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_appointments(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Query(query): Query<ListAppointmentsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let appointments = app_state
        .scheduling_service
        .list_appointments(ctx.tenant_id()?, query.barber_id, query.date)
        .await?;

    Ok((StatusCode::OK, Json(appointments)))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentPayload {
    pub client_id: Option<Uuid>,
    pub barber_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    // O fim NÃO é aceito aqui: sempre derivado da duração do serviço
    #[schema(value_type = Option<String>, example = "2024-01-01T10:00:00")]
    pub starts_at: Option<NaiveDateTime>,
}

// POST /api/appointments
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Appointments",
    request_body = CreateAppointmentPayload,
    responses(
        (status = 201, description = "Agendamento criado", body = Appointment),
        (status = 400, description = "Dados inválidos ou serviço inativo"),
        (status = 409, description = "Conflito de horário para o barbeiro")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Json(payload): Json<CreateAppointmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Os quatro campos são obrigatórios
    let (client_id, barber_id, service_id, starts_at) = match (
        payload.client_id,
        payload.barber_id,
        payload.service_id,
        payload.starts_at,
    ) {
        (Some(c), Some(b), Some(s), Some(t)) => (c, b, s, t),
        _ => {
            return Err(AppError::InvalidPayload(
                "clientId, barberId, serviceId e startsAt são obrigatórios",
            ));
        }
    };

    let appointment = app_state
        .scheduling_service
        .create_appointment(ctx.tenant_id()?, client_id, barber_id, service_id, starts_at)
        .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentPayload {
    pub status: Option<AppointmentStatus>,
    // Quando presente, o fim é recalculado com a duração do serviço
    #[schema(value_type = Option<String>, example = "2024-01-01T14:00:00")]
    pub starts_at: Option<NaiveDateTime>,
}

// PUT /api/appointments/{id}
#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    request_body = UpdateAppointmentPayload,
    params(
        ("id" = Uuid, Path, description = "ID do agendamento")
    ),
    responses(
        (status = 200, description = "Agendamento atualizado", body = Appointment),
        (status = 404, description = "Agendamento não encontrado"),
        (status = 409, description = "Conflito de horário para o barbeiro")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_appointment(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let status = payload
        .status
        .ok_or(AppError::InvalidPayload("Status é obrigatório para edição"))?;

    let appointment = app_state
        .scheduling_service
        .update_appointment(ctx.tenant_id()?, id, status, payload.starts_at)
        .await?;

    Ok((StatusCode::OK, Json(appointment)))
}

// DELETE /api/appointments/{id}
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    params(
        ("id" = Uuid, Path, description = "ID do agendamento")
    ),
    responses(
        (status = 200, description = "Agendamento excluído"),
        (status = 404, description = "Agendamento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_appointment(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .scheduling_service
        .delete_appointment(ctx.tenant_id()?, id)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}
