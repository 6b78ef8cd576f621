use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
// A taxonomia é fixa: 401, 400, 404, 409 e 500 — nada além disso
// vaza para o cliente.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Validação de regra de negócio com mensagem própria
    // (ex: "Status é obrigatório para edição")
    #[error("{0}")]
    InvalidPayload(&'static str),

    #[error("Serviço inválido")]
    InvalidService,

    #[error("Barbeiro inválido")]
    InvalidBarber,

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Não autorizado")]
    Unauthorized,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Cliente não encontrado")]
    ClientNotFound,

    #[error("Barbeiro não encontrado")]
    BarberNotFound,

    #[error("Serviço não encontrado")]
    ServiceNotFound,

    #[error("Agendamento não encontrado")]
    AppointmentNotFound,

    // Agendamento sobreposto para o mesmo barbeiro — rejeição dura,
    // nunca enfileirada ou repetida.
    #[error("Conflito de horário para este barbeiro")]
    ScheduleConflict,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    // O status HTTP correspondente. Acesso cross-tenant responde o
    // MESMO 404 de um registro inexistente — nunca confirmamos que o
    // dado existe em outra loja.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidPayload(_)
            | AppError::InvalidService
            | AppError::InvalidBarber => StatusCode::BAD_REQUEST,

            AppError::InvalidCredentials
            | AppError::InvalidToken
            | AppError::Unauthorized => StatusCode::UNAUTHORIZED,

            AppError::UserNotFound
            | AppError::ClientNotFound
            | AppError::BarberNotFound
            | AppError::ServiceNotFound
            | AppError::AppointmentNotFound => StatusCode::NOT_FOUND,

            AppError::EmailAlreadyExists | AppError::ScheduleConflict => StatusCode::CONFLICT,

            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Retorna todos os detalhes da validação, campo a campo.
        if let AppError::ValidationError(errors) = &self {
            let mut details = std::collections::HashMap::new();
            for (field, field_errors) in errors.field_errors() {
                let messages: Vec<String> = field_errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect();
                details.insert(field.to_string(), messages);
            }
            let body = Json(json!({
                "error": "Um ou mais campos são inválidos.",
                "details": details,
            }));
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        let status = self.status_code();

        // Erros 5xx são logados com o detalhe interno e respondidos
        // com uma mensagem opaca.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Erro Interno do Servidor: {}", self);
            "Ocorreu um erro inesperado.".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomia_de_status() {
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::InvalidPayload("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidService.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::AppointmentNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::ScheduleConflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InternalServerError(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn conflito_vira_409_na_resposta() {
        let resp = AppError::ScheduleConflict.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn erro_interno_vira_500() {
        let resp = AppError::InternalServerError(anyhow::anyhow!("detalhe interno")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
