use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::schema::Entity;

/// Quantos registros de uma relação bloqueante ainda apontam para o alvo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Dependents {
    #[schema(example = "products.supplier_id")]
    pub relation: String,
    pub count: i64,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Corpo da requisição inválido: {0}")]
    InvalidPayload(String),

    #[error("Registro duplicado para os campos {fields:?}")]
    UniqueConstraintViolation { fields: Vec<String> },

    #[error("{} ainda possui registros dependentes", .entity.label())]
    ReferentialIntegrity {
        entity: Entity,
        dependents: Vec<Dependents>,
    },

    #[error("{} não encontrado", .0.label())]
    NotFound(Entity),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}

impl AppError {
    /// Erro de validação de um único campo, para checagens feitas fora do `Validate`.
    pub fn field(field: &'static str, code: &'static str, message: &str) -> Self {
        let mut errors = validator::ValidationErrors::new();
        let mut err = validator::ValidationError::new(code);
        err.message = Some(message.to_string().into());
        errors.add(field, err);
        AppError::ValidationError(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| match &e.message {
                            Some(m) => m.to_string(),
                            None => e.code.to_string(),
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": "Um ou mais campos são inválidos.",
                        "details": details,
                    }),
                )
            }
            AppError::InvalidPayload(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "Corpo da requisição inválido.",
                    "details": { "body": [message] },
                }),
            ),
            AppError::UniqueConstraintViolation { fields } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "Já existe um registro com estes valores.",
                    "fields": fields,
                }),
            ),
            AppError::ReferentialIntegrity { entity, dependents } => (
                StatusCode::CONFLICT,
                json!({
                    "error": format!("{} não pode ser removido: existem registros dependentes.", entity.label()),
                    "dependents": dependents,
                }),
            ),
            AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{} não encontrado.", entity.label()) }),
            ),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Ocorreu um erro inesperado." }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
