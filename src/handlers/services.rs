// src/handlers/services.rs
//
// Serviços oferecidos pela barbearia (corte, barba, ...).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{common::error::AppError, config::AppState, middleware::auth::AuthContext};

// Payload de criação e de edição
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_min: Option<i32>,
    #[schema(value_type = Option<f64>, example = 45.0)]
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub active: Option<bool>,
}

impl ServicePayload {
    // Nome, duração e preço são obrigatórios; a duração precisa ser
    // positiva, pois é dela que o fim dos agendamentos deriva.
    fn required(&self) -> Result<(&str, i32, Decimal), AppError> {
        let (name, duration_min, price) =
            match (self.name.as_deref(), self.duration_min, self.price) {
                (Some(name), Some(duration), Some(price)) if !name.is_empty() => {
                    (name, duration, price)
                }
                _ => {
                    return Err(AppError::InvalidPayload(
                        "Nome, duração e preço são obrigatórios",
                    ));
                }
            };

        if duration_min <= 0 {
            return Err(AppError::InvalidPayload(
                "A duração deve ser um número positivo de minutos",
            ));
        }

        Ok((name, duration_min, price))
    }
}

// GET /api/services
pub async fn list_services(
    State(app_state): State<AppState>,
    ctx: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let services = app_state
        .catalog_service
        .list_services(ctx.tenant_id()?)
        .await?;

    Ok((StatusCode::OK, Json(services)))
}

// POST /api/services
pub async fn create_service(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Json(payload): Json<ServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    let (name, duration_min, price) = payload.required()?;

    let service = app_state
        .catalog_service
        .create_service(
            ctx.tenant_id()?,
            name,
            payload.description.as_deref(),
            duration_min,
            price,
            payload.category.as_deref(),
            payload.active,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(service)))
}

// PUT /api/services/{id}
pub async fn update_service(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(payload): Json<ServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    let (name, duration_min, price) = payload.required()?;

    let service = app_state
        .catalog_service
        .update_service(
            ctx.tenant_id()?,
            id,
            name,
            payload.description.as_deref(),
            duration_min,
            price,
            payload.category.as_deref(),
            payload.active,
        )
        .await?;

    Ok((StatusCode::OK, Json(service)))
}

// DELETE /api/services/{id}
pub async fn delete_service(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .catalog_service
        .delete_service(ctx.tenant_id()?, id)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn payload(duration_min: Option<i32>) -> ServicePayload {
        ServicePayload {
            name: Some("Corte".to_string()),
            description: None,
            duration_min,
            price: Some(Decimal::new(4500, 2)),
            category: None,
            active: None,
        }
    }

    #[test]
    fn campos_obrigatorios() {
        assert!(payload(Some(30)).required().is_ok());
        assert!(payload(None).required().is_err());

        let sem_nome = ServicePayload {
            name: None,
            ..payload(Some(30))
        };
        assert!(sem_nome.required().is_err());
    }

    #[test]
    fn duracao_precisa_ser_positiva() {
        assert!(payload(Some(0)).required().is_err());
        assert!(payload(Some(-15)).required().is_err());
        assert!(payload(Some(1)).required().is_ok());
    }
}
