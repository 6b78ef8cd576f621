// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{TenantRepository, UserRepository},
    middleware::auth::AuthContext,
    models::auth::{Claims, Role, User},
    models::tenancy::Tenant,
};

// Tokens expiram em 8 horas — um turno de trabalho.
const TOKEN_TTL_HOURS: i64 = 8;

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    tenant_repo: TenantRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(
        user_repo: UserRepository,
        tenant_repo: TenantRepository,
        jwt_secret: String,
        pool: PgPool,
    ) -> Self {
        Self {
            user_repo,
            tenant_repo,
            jwt_secret,
            pool,
        }
    }

    // Registro público: cria a barbearia E o seu dono numa única
    // transação. Se a criação do usuário falhar, a loja é desfeita.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        shop_name: &str,
        tax_id: &str,
        default_plan: &str,
    ) -> Result<(Tenant, User), AppError> {
        // Hashing fora da transação (não toca no banco e é pesado)
        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let mut tx = self.pool.begin().await?;

        let tenant = self
            .tenant_repo
            .create_tenant(&mut *tx, shop_name, tax_id, None, None, default_plan)
            .await?;

        let owner = self
            .user_repo
            .create_user(
                &mut *tx,
                Some(tenant.id),
                name,
                email,
                &hashed_password,
                Role::Owner,
            )
            .await?;

        tx.commit().await?;

        tracing::info!("🏪 Nova barbearia registrada: {}", tenant.id);

        Ok((tenant, owner))
    }

    // E-mail desconhecido, usuário desativado e senha errada respondem
    // todos o mesmo 401.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .filter(|u| u.active)
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(&user)
    }

    // Decodifica o Bearer e monta o contexto explícito que percorre o
    // restante da requisição. Não consulta o banco.
    pub fn decode_token(&self, token: &str) -> Result<AuthContext, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        AuthContext::from_claims(token_data.claims)
    }

    // Para o /me: carrega o usuário do contexto atual
    pub async fn find_user(&self, id: uuid::Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    pub fn create_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(TOKEN_TTL_HOURS);

        let claims = Claims {
            sub: user.id,
            tenant_id: user.tenant_id,
            role: user.role,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    // Pool "preguiçosa": nunca conecta de fato — suficiente para
    // exercitar os caminhos que não tocam o banco.
    fn service(secret: &str) -> AuthService {
        let pool = PgPool::connect_lazy("postgres://localhost/teste").unwrap();
        AuthService::new(
            UserRepository::new(pool.clone()),
            TenantRepository::new(pool.clone()),
            secret.to_string(),
            pool,
        )
    }

    fn user(tenant_id: Option<Uuid>, role: Role) -> User {
        let now: DateTime<Utc> = Utc::now();
        User {
            id: Uuid::new_v4(),
            tenant_id,
            name: "Zé".to_string(),
            email: "ze@barbearia.com".to_string(),
            password_hash: String::new(),
            role,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn token_ida_e_volta_preserva_identidade() {
        let svc = service("segredo-de-teste");
        let dono = user(Some(Uuid::new_v4()), Role::Owner);

        let token = svc.create_token(&dono).unwrap();
        let ctx = svc.decode_token(&token).unwrap();

        assert_eq!(ctx.user_id, dono.id);
        assert_eq!(ctx.tenant_id, dono.tenant_id);
        assert_eq!(ctx.role, Role::Owner);
    }

    #[tokio::test]
    async fn token_de_superadmin_nao_carrega_loja() {
        let svc = service("segredo-de-teste");
        let admin = user(None, Role::Superadmin);

        let token = svc.create_token(&admin).unwrap();
        let ctx = svc.decode_token(&token).unwrap();

        assert!(ctx.tenant_id.is_none());
        assert!(ctx.require_superadmin().is_ok());
    }

    #[tokio::test]
    async fn segredo_errado_rejeita_token() {
        let svc = service("segredo-a");
        let outro = service("segredo-b");
        let token = svc
            .create_token(&user(Some(Uuid::new_v4()), Role::Owner))
            .unwrap();

        assert!(matches!(
            outro.decode_token(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn lixo_nao_e_token() {
        let svc = service("segredo-de-teste");
        assert!(matches!(
            svc.decode_token("nem.um.jwt"),
            Err(AppError::InvalidToken)
        ));
    }
}
