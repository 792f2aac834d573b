use crate::common::error::{AppError, Dependents};
use crate::models::schema::{self, Entity};

// Códigos SQLSTATE do Postgres que a API trata como erro do cliente
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

/// Operação que gerou o erro de banco.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DbOp {
    Write,
    Delete(Entity),
}

/// Traduz um erro do sqlx para o nosso `AppError`.
pub(crate) fn map_db_error(e: sqlx::Error, op: DbOp) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            let fields = db_err
                .constraint()
                .and_then(schema::unique_constraint_fields)
                .map(|fields| fields.iter().map(|f| f.to_string()).collect())
                .unwrap_or_default();
            return AppError::UniqueConstraintViolation { fields };
        }

        match (db_err.code().as_deref(), op) {
            // Alguém passou a apontar para o registro entre a contagem e o DELETE
            (Some(FOREIGN_KEY_VIOLATION), DbOp::Delete(entity)) => {
                let relation = db_err.table().unwrap_or("?").to_string();
                return AppError::ReferentialIntegrity {
                    entity,
                    dependents: vec![Dependents { relation, count: 1 }],
                };
            }
            (Some(FOREIGN_KEY_VIOLATION), DbOp::Write) => {
                return AppError::field("body", "reference", "Registro referenciado não existe.");
            }
            (Some(CHECK_VIOLATION), _) => {
                tracing::warn!(constraint = ?db_err.constraint(), "check constraint violada");
                return AppError::field("body", "check", "Valor fora do permitido.");
            }
            _ => {}
        }
    }
    AppError::DatabaseError(e)
}

/// Converte a busca opcional em 404 da entidade pedida.
pub(crate) fn found<T>(row: Option<T>, entity: Entity) -> Result<T, AppError> {
    row.ok_or(AppError::NotFound(entity))
}

/// Escapa `%`, `_` e `\` para que o termo seja buscado literalmente num LIKE.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
