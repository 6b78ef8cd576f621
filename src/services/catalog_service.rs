// src/services/catalog_service.rs

use chrono::NaiveTime;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::SchedulingDefaults,
    db::CatalogRepository,
    models::scheduling::{Barber, Service},
};

// Barbeiros e serviços. Os defaults (expediente, dias de trabalho,
// categoria) são aplicados AQUI, na fronteira, a partir de uma única
// estrutura nomeada — as queries nunca improvisam fallback.
#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
    defaults: SchedulingDefaults,
    pool: PgPool,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository, defaults: SchedulingDefaults, pool: PgPool) -> Self {
        Self { repo, defaults, pool }
    }

    // =========================================================================
    //  BARBEIROS
    // =========================================================================

    pub async fn list_barbers(&self, tenant_id: Uuid) -> Result<Vec<Barber>, AppError> {
        self.repo.list_barbers(tenant_id).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_barber(
        &self,
        tenant_id: Uuid,
        name: &str,
        photo_url: Option<&str>,
        bio: Option<&str>,
        active: Option<bool>,
        work_start: Option<NaiveTime>,
        work_end: Option<NaiveTime>,
        weekdays: Option<Vec<String>>,
    ) -> Result<Barber, AppError> {
        self.repo
            .create_barber(
                &self.pool,
                tenant_id,
                name,
                photo_url,
                bio,
                active.unwrap_or(true),
                work_start.unwrap_or(self.defaults.work_start),
                work_end.unwrap_or(self.defaults.work_end),
                &weekdays.unwrap_or_else(|| self.defaults.weekdays.clone()),
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_barber(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        name: &str,
        photo_url: Option<&str>,
        bio: Option<&str>,
        active: Option<bool>,
        work_start: Option<NaiveTime>,
        work_end: Option<NaiveTime>,
        weekdays: Option<Vec<String>>,
    ) -> Result<Barber, AppError> {
        self.repo
            .update_barber(
                &self.pool,
                tenant_id,
                id,
                name,
                photo_url,
                bio,
                active,
                work_start,
                work_end,
                weekdays.as_deref(),
            )
            .await?
            .ok_or(AppError::BarberNotFound)
    }

    pub async fn delete_barber(&self, tenant_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_barber(&self.pool, tenant_id, id).await?;
        if deleted == 0 {
            return Err(AppError::BarberNotFound);
        }
        Ok(())
    }

    // =========================================================================
    //  SERVIÇOS
    // =========================================================================

    pub async fn list_services(&self, tenant_id: Uuid) -> Result<Vec<Service>, AppError> {
        self.repo.list_services(tenant_id).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_service(
        &self,
        tenant_id: Uuid,
        name: &str,
        description: Option<&str>,
        duration_min: i32,
        price: Decimal,
        category: Option<&str>,
        active: Option<bool>,
    ) -> Result<Service, AppError> {
        self.repo
            .create_service(
                &self.pool,
                tenant_id,
                name,
                description,
                duration_min,
                price,
                category.unwrap_or(&self.defaults.service_category),
                active.unwrap_or(true),
            )
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_service(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        duration_min: i32,
        price: Decimal,
        category: Option<&str>,
        active: Option<bool>,
    ) -> Result<Service, AppError> {
        self.repo
            .update_service(
                &self.pool,
                tenant_id,
                id,
                name,
                description,
                duration_min,
                price,
                category,
                active,
            )
            .await?
            .ok_or(AppError::ServiceNotFound)
    }

    pub async fn delete_service(&self, tenant_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete_service(&self.pool, tenant_id, id).await?;
        if deleted == 0 {
            return Err(AppError::ServiceNotFound);
        }
        Ok(())
    }
}
