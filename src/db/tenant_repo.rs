// src/db/tenant_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::tenancy::{Tenant, TenantSummary},
};

#[derive(Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Cria a barbearia. `status` nasce 'active' pelo default do banco.
    pub async fn create_tenant<'e, E>(
        &self,
        executor: E,
        name: &str,
        tax_id: &str,
        phone: Option<&str>,
        address: Option<&str>,
        plan: &str,
    ) -> Result<Tenant, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO tenants (name, tax_id, phone, address, plan)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, tax_id, phone, address, plan, status, created_at
            "#,
        )
        .bind(name)
        .bind(tax_id)
        .bind(phone)
        .bind(address)
        .bind(plan)
        .fetch_one(executor)
        .await?;

        Ok(tenant)
    }

    // Painel do superadmin: todas as lojas com contagem de registros.
    pub async fn list_with_counts(&self) -> Result<Vec<TenantSummary>, AppError> {
        let tenants = sqlx::query_as::<_, TenantSummary>(
            r#"
            SELECT
                t.id, t.name, t.tax_id, t.plan, t.status, t.created_at,
                (SELECT COUNT(*) FROM users u WHERE u.tenant_id = t.id)        AS users_count,
                (SELECT COUNT(*) FROM clients c WHERE c.tenant_id = t.id)      AS clients_count,
                (SELECT COUNT(*) FROM barbers b WHERE b.tenant_id = t.id)      AS barbers_count,
                (SELECT COUNT(*) FROM services s WHERE s.tenant_id = t.id)     AS services_count,
                (SELECT COUNT(*) FROM appointments a WHERE a.tenant_id = t.id) AS appointments_count
            FROM tenants t
            ORDER BY t.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tenants)
    }
}
