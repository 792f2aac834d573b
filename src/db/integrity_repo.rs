// src/db/integrity_repo.rs

// Consultas genéricas sobre a tabela de relações: existência de registros
// referenciados e contagem de dependentes.

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::schema::{Entity, Relation},
};

#[derive(Clone)]
pub struct IntegrityRepository {
    pool: PgPool,
}

impl IntegrityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn exists<'e, E>(&self, executor: E, entity: Entity, id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // Nomes de tabela vêm da tabela estática em models::schema
        let sql = format!("SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)", entity.table());
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(executor)
            .await?;
        Ok(exists)
    }

    /// Quantos ids de `ids` existem em `entity`.
    pub async fn count_existing<'e, E>(&self, executor: E, entity: Entity, ids: &[Uuid]) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ANY($1)", entity.table());
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(ids)
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    pub async fn count_dependents<'e, E>(&self, executor: E, relation: &Relation, id: Uuid) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE {} = $1", relation.table, relation.column);
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}
