// src/handlers/tenancy.rs
//
// Superfície do superadmin: provisionamento de lojas. Quem não é
// superadmin recebe 401, como em qualquer outra falha de identidade.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthContext,
    models::tenancy::{ProvisionTenantPayload, Tenant, TenantSummary},
};

// GET /api/admin/tenants
#[utoipa::path(
    get,
    path = "/api/admin/tenants",
    tag = "Admin",
    responses(
        (status = 200, description = "Todas as lojas com contagens", body = Vec<TenantSummary>),
        (status = 401, description = "Apenas superadmin")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tenants(
    State(app_state): State<AppState>,
    ctx: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    ctx.require_superadmin()?;

    let tenants = app_state.tenant_service.list_tenants().await?;

    Ok((StatusCode::OK, Json(tenants)))
}

// POST /api/admin/tenants
#[utoipa::path(
    post,
    path = "/api/admin/tenants",
    tag = "Admin",
    request_body = ProvisionTenantPayload,
    responses(
        (status = 201, description = "Loja e dono criados", body = Tenant),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Apenas superadmin")
    ),
    security(("api_jwt" = []))
)]
pub async fn provision_tenant(
    State(app_state): State<AppState>,
    ctx: AuthContext,
    Json(payload): Json<ProvisionTenantPayload>,
) -> Result<impl IntoResponse, AppError> {
    ctx.require_superadmin()?;

    payload.validate().map_err(AppError::ValidationError)?;

    let tenant = app_state.tenant_service.provision_tenant(&payload).await?;

    Ok((StatusCode::CREATED, Json(tenant)))
}
