// src/models/tenancy.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// ---
// Tenant (a "Barbearia")
// ---
// A conta principal; raiz do isolamento de dados.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub plan: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// Tenant + contagem de entidades, para o painel do superadmin
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantSummary {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub plan: String,
    pub status: String,
    pub created_at: DateTime<Utc>,

    pub users_count: i64,
    pub clients_count: i64,
    pub barbers_count: i64,
    pub services_count: i64,
    pub appointments_count: i64,
}

// Provisionamento pelo superadmin: loja + dono em uma chamada.
// A senha do dono chega já com hash (contrato herdado do painel).
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionTenantPayload {
    #[validate(length(min = 1, message = "O nome da barbearia é obrigatório."))]
    pub shop_name: String,

    #[validate(length(min = 1, message = "O CNPJ é obrigatório."))]
    pub tax_id: String,

    pub phone: Option<String>,
    pub address: Option<String>,

    #[schema(example = "basic")]
    pub plan: Option<String>,

    #[validate(length(min = 1, message = "O nome do dono é obrigatório."))]
    pub owner_name: String,

    #[validate(email(message = "O e-mail do dono é inválido."))]
    pub owner_email: String,

    #[validate(length(min = 1, message = "O hash da senha do dono é obrigatório."))]
    pub owner_password_hash: String,
}
