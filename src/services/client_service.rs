// src/services/client_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, db::ClientRepository, models::scheduling::Client};

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
    pool: PgPool,
}

impl ClientService {
    pub fn new(repo: ClientRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn list_clients(&self, tenant_id: Uuid) -> Result<Vec<Client>, AppError> {
        self.repo.list(tenant_id).await
    }

    pub async fn create_client(
        &self,
        tenant_id: Uuid,
        name: &str,
        phone: &str,
        email: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Client, AppError> {
        self.repo
            .create(&self.pool, tenant_id, name, phone, email, notes)
            .await
    }

    pub async fn update_client(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        name: &str,
        phone: &str,
        email: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Client, AppError> {
        self.repo
            .update(&self.pool, tenant_id, id, name, phone, email, notes)
            .await?
            .ok_or(AppError::ClientNotFound)
    }

    pub async fn delete_client(&self, tenant_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(&self.pool, tenant_id, id).await?;
        if deleted == 0 {
            return Err(AppError::ClientNotFound);
        }
        Ok(())
    }
}
