// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::auth::{Claims, Role},
};

// A identidade resolvida a partir do token Bearer. É passada
// EXPLICITAMENTE para cada operação do core — nenhuma camada lê
// credenciais de estado global.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub role: Role,
}

impl AuthContext {
    // Um token sem tenant só é aceitável para superadmin.
    pub fn from_claims(claims: Claims) -> Result<Self, AppError> {
        if claims.tenant_id.is_none() && claims.role != Role::Superadmin {
            return Err(AppError::InvalidToken);
        }
        Ok(Self {
            user_id: claims.sub,
            tenant_id: claims.tenant_id,
            role: claims.role,
        })
    }

    // A loja do chamador. Toda query das entidades de agendamento é
    // amarrada a este id.
    pub fn tenant_id(&self) -> Result<Uuid, AppError> {
        self.tenant_id.ok_or(AppError::Unauthorized)
    }

    pub fn require_superadmin(&self) -> Result<(), AppError> {
        if self.role != Role::Superadmin {
            return Err(AppError::Unauthorized);
        }
        Ok(())
    }
}

// O middleware em si: valida o Bearer e injeta o AuthContext na requisição.
pub async fn auth_guard(
    State(app_state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let headers = request.headers();
    let auth_header = headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok());

    if let Some(auth_header) = auth_header {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            let ctx = app_state.auth_service.decode_token(token.trim())?;

            request.extensions_mut().insert(ctx);
            return Ok(next.run(request).await);
        }
    }

    Err(AppError::InvalidToken)
}

// Extrator para obter o contexto autenticado diretamente nos handlers
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(tenant_id: Option<Uuid>, role: Role) -> Claims {
        Claims {
            sub: Uuid::new_v4(),
            tenant_id,
            role,
            exp: usize::MAX,
            iat: 0,
        }
    }

    #[test]
    fn staff_sem_tenant_e_token_invalido() {
        assert!(AuthContext::from_claims(claims(None, Role::Staff)).is_err());
        assert!(AuthContext::from_claims(claims(None, Role::Owner)).is_err());
        assert!(AuthContext::from_claims(claims(None, Role::Superadmin)).is_ok());
    }

    #[test]
    fn tenant_id_exige_loja() {
        let com_loja =
            AuthContext::from_claims(claims(Some(Uuid::new_v4()), Role::Owner)).unwrap();
        assert!(com_loja.tenant_id().is_ok());

        // Superadmin não carrega loja: operações tenant-scoped o rejeitam
        let sem_loja = AuthContext::from_claims(claims(None, Role::Superadmin)).unwrap();
        assert!(matches!(sem_loja.tenant_id(), Err(AppError::Unauthorized)));
    }

    #[test]
    fn somente_superadmin_passa_no_guard_administrativo() {
        let admin = AuthContext::from_claims(claims(None, Role::Superadmin)).unwrap();
        assert!(admin.require_superadmin().is_ok());

        let dono = AuthContext::from_claims(claims(Some(Uuid::new_v4()), Role::Owner)).unwrap();
        assert!(matches!(
            dono.require_superadmin(),
            Err(AppError::Unauthorized)
        ));
    }
}
