// src/config.rs

use chrono::NaiveTime;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        AppointmentRepository, CatalogRepository, ClientRepository, TenantRepository,
        UserRepository,
    },
    services::{AuthService, CatalogService, ClientService, SchedulingService, TenantService},
};

// Defaults de cadastro, reunidos numa única estrutura nomeada e
// aplicados na fronteira dos serviços (nunca espalhados pelas queries).
#[derive(Debug, Clone)]
pub struct SchedulingDefaults {
    // Expediente padrão de um barbeiro recém-cadastrado
    pub work_start: NaiveTime,
    pub work_end: NaiveTime,
    // Dias de atendimento padrão (domingo de folga)
    pub weekdays: Vec<String>,
    // Categoria padrão de um serviço
    pub service_category: String,
    // Plano inicial de uma loja recém-criada
    pub plan: String,
}

impl Default for SchedulingDefaults {
    fn default() -> Self {
        Self {
            work_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            work_end: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            weekdays: ["segunda", "terca", "quarta", "quinta", "sexta", "sabado"]
                .map(String::from)
                .to_vec(),
            service_category: "corte".to_string(),
            plan: "basic".to_string(),
        }
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub defaults: SchedulingDefaults,
    pub auth_service: AuthService,
    pub tenant_service: TenantService,
    pub client_service: ClientService,
    pub catalog_service: CatalogService,
    pub scheduling_service: SchedulingService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        let defaults = SchedulingDefaults::default();

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let tenant_repo = TenantRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let appointment_repo = AppointmentRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo.clone(),
            tenant_repo.clone(),
            jwt_secret,
            db_pool.clone(),
        );
        let tenant_service = TenantService::new(
            tenant_repo,
            user_repo,
            defaults.clone(),
            db_pool.clone(),
        );
        let client_service = ClientService::new(client_repo, db_pool.clone());
        let catalog_service =
            CatalogService::new(catalog_repo.clone(), defaults.clone(), db_pool.clone());
        let scheduling_service =
            SchedulingService::new(appointment_repo, catalog_repo, db_pool.clone());

        Ok(Self {
            db_pool,
            defaults,
            auth_service,
            tenant_service,
            client_service,
            catalog_service,
            scheduling_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_de_cadastro() {
        let d = SchedulingDefaults::default();
        assert_eq!(d.work_start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(d.work_end, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        // Seis dias de atendimento; domingo fora
        assert_eq!(d.weekdays.len(), 6);
        assert!(!d.weekdays.contains(&"domingo".to_string()));
        assert_eq!(d.service_category, "corte");
        assert_eq!(d.plan, "basic");
    }
}
