// src/db/catalog_repo.rs
//
// O catálogo da barbearia: barbeiros e serviços oferecidos.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::scheduling::{Barber, Service},
};

const BARBER_COLUMNS: &str =
    "id, tenant_id, name, photo_url, bio, active, work_start, work_end, weekdays, created_at";
const SERVICE_COLUMNS: &str =
    "id, tenant_id, name, description, duration_min, price, category, active, created_at";

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  BARBEIROS
    // =========================================================================

    pub async fn list_barbers(&self, tenant_id: Uuid) -> Result<Vec<Barber>, AppError> {
        let barbers = sqlx::query_as::<_, Barber>(&format!(
            "SELECT {BARBER_COLUMNS} FROM barbers WHERE tenant_id = $1 ORDER BY created_at DESC"
        ))
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(barbers)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_barber<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        name: &str,
        photo_url: Option<&str>,
        bio: Option<&str>,
        active: bool,
        work_start: NaiveTime,
        work_end: NaiveTime,
        weekdays: &[String],
    ) -> Result<Barber, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let barber = sqlx::query_as::<_, Barber>(&format!(
            r#"
            INSERT INTO barbers (tenant_id, name, photo_url, bio, active, work_start, work_end, weekdays)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {BARBER_COLUMNS}
            "#
        ))
        .bind(tenant_id)
        .bind(name)
        .bind(photo_url)
        .bind(bio)
        .bind(active)
        .bind(work_start)
        .bind(work_end)
        .bind(weekdays)
        .fetch_one(executor)
        .await?;

        Ok(barber)
    }

    // Campos com default só mudam quando enviados (COALESCE);
    // foto e bio aceitam null para limpar.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_barber<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
        name: &str,
        photo_url: Option<&str>,
        bio: Option<&str>,
        active: Option<bool>,
        work_start: Option<NaiveTime>,
        work_end: Option<NaiveTime>,
        weekdays: Option<&[String]>,
    ) -> Result<Option<Barber>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let barber = sqlx::query_as::<_, Barber>(&format!(
            r#"
            UPDATE barbers
            SET name = $3,
                photo_url = $4,
                bio = $5,
                active = COALESCE($6, active),
                work_start = COALESCE($7, work_start),
                work_end = COALESCE($8, work_end),
                weekdays = COALESCE($9, weekdays)
            WHERE id = $1 AND tenant_id = $2
            RETURNING {BARBER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(tenant_id)
        .bind(name)
        .bind(photo_url)
        .bind(bio)
        .bind(active)
        .bind(work_start)
        .bind(work_end)
        .bind(weekdays)
        .fetch_optional(executor)
        .await?;

        Ok(barber)
    }

    pub async fn delete_barber<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM barbers WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    // Tranca a linha do barbeiro durante o agendamento: duas reservas
    // concorrentes para o mesmo barbeiro serializam aqui.
    pub async fn lock_barber<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Uuid>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let locked = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM barbers WHERE id = $1 AND tenant_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(executor)
        .await?;

        Ok(locked)
    }

    // =========================================================================
    //  SERVIÇOS
    // =========================================================================

    pub async fn list_services(&self, tenant_id: Uuid) -> Result<Vec<Service>, AppError> {
        let services = sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE tenant_id = $1 ORDER BY created_at DESC"
        ))
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_service<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        name: &str,
        description: Option<&str>,
        duration_min: i32,
        price: Decimal,
        category: &str,
        active: bool,
    ) -> Result<Service, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let service = sqlx::query_as::<_, Service>(&format!(
            r#"
            INSERT INTO services (tenant_id, name, description, duration_min, price, category, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {SERVICE_COLUMNS}
            "#
        ))
        .bind(tenant_id)
        .bind(name)
        .bind(description)
        .bind(duration_min)
        .bind(price)
        .bind(category)
        .bind(active)
        .fetch_one(executor)
        .await?;

        Ok(service)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_service<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        duration_min: i32,
        price: Decimal,
        category: Option<&str>,
        active: Option<bool>,
    ) -> Result<Option<Service>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let service = sqlx::query_as::<_, Service>(&format!(
            r#"
            UPDATE services
            SET name = $3,
                description = $4,
                duration_min = $5,
                price = $6,
                category = COALESCE($7, category),
                active = COALESCE($8, active)
            WHERE id = $1 AND tenant_id = $2
            RETURNING {SERVICE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(tenant_id)
        .bind(name)
        .bind(description)
        .bind(duration_min)
        .bind(price)
        .bind(category)
        .bind(active)
        .fetch_optional(executor)
        .await?;

        Ok(service)
    }

    pub async fn delete_service<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM services WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    // Usado na criação de agendamento: o serviço precisa existir na
    // loja E estar ativo.
    pub async fn find_active_service<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Service>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let service = sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE id = $1 AND tenant_id = $2 AND active = TRUE"
        ))
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(executor)
        .await?;

        Ok(service)
    }

    // Usado na edição: o agendamento guarda o serviço original, que
    // pode já ter sido desativado — aqui não filtramos por `active`.
    pub async fn find_service<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Service>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let service = sqlx::query_as::<_, Service>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE id = $1 AND tenant_id = $2"
        ))
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(executor)
        .await?;

        Ok(service)
    }
}
