// Cria o usuário superadmin da plataforma (sem tenant).
//
// Uso:
//   SUPERADMIN_EMAIL=... SUPERADMIN_PASSWORD=... cargo run --bin create_superadmin

use sqlx::postgres::PgPoolOptions;
use std::{env, time::Duration};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).compact().init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
    let email = env::var("SUPERADMIN_EMAIL").expect("SUPERADMIN_EMAIL deve ser definido");
    let password = env::var("SUPERADMIN_PASSWORD").expect("SUPERADMIN_PASSWORD deve ser definida");
    let name = env::var("SUPERADMIN_NAME").unwrap_or_else(|_| "Admin Master".to_string());

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&database_url)
        .await?;

    let password_hash = bcrypt::hash(&password, 12)?;

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO users (tenant_id, name, email, password_hash, role)
        VALUES (NULL, $1, $2, $3, 'superadmin')
        RETURNING id
        "#,
    )
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&pool)
    .await?;

    tracing::info!("✅ Superadmin criado: {} ({})", id, email);

    Ok(())
}
