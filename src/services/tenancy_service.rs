// src/services/tenancy_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    config::SchedulingDefaults,
    db::{TenantRepository, UserRepository},
    models::auth::Role,
    models::tenancy::{ProvisionTenantPayload, Tenant, TenantSummary},
};

// Superfície administrativa do superadmin: provisionamento de lojas.
#[derive(Clone)]
pub struct TenantService {
    tenant_repo: TenantRepository,
    user_repo: UserRepository,
    defaults: SchedulingDefaults,
    pool: PgPool,
}

impl TenantService {
    pub fn new(
        tenant_repo: TenantRepository,
        user_repo: UserRepository,
        defaults: SchedulingDefaults,
        pool: PgPool,
    ) -> Self {
        Self {
            tenant_repo,
            user_repo,
            defaults,
            pool,
        }
    }

    pub async fn list_tenants(&self) -> Result<Vec<TenantSummary>, AppError> {
        self.tenant_repo.list_with_counts().await
    }

    // Cria a loja e o seu dono atomicamente. A senha do dono já chega
    // com hash — o painel administrativo faz o hashing do lado dele.
    pub async fn provision_tenant(
        &self,
        payload: &ProvisionTenantPayload,
    ) -> Result<Tenant, AppError> {
        let mut tx = self.pool.begin().await?;

        let tenant = self
            .tenant_repo
            .create_tenant(
                &mut *tx,
                &payload.shop_name,
                &payload.tax_id,
                payload.phone.as_deref(),
                payload.address.as_deref(),
                payload.plan.as_deref().unwrap_or(&self.defaults.plan),
            )
            .await?;

        self.user_repo
            .create_user(
                &mut *tx,
                Some(tenant.id),
                &payload.owner_name,
                &payload.owner_email,
                &payload.owner_password_hash,
                Role::Owner,
            )
            .await?;

        tx.commit().await?;

        tracing::info!("🏪 Loja provisionada pelo superadmin: {}", tenant.id);

        Ok(tenant)
    }
}
