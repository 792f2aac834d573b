// src/db/crm_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::{
        db_utils::{escape_like, map_db_error, DbOp},
        error::AppError,
    },
    models::{
        crm::{Client, ClientPayload},
        schema::Entity,
    },
};

#[derive(Clone)]
pub struct CrmRepository {
    pool: PgPool,
}

impl CrmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Lista os clientes; com `query`, filtra por nome (ILIKE).
    pub async fn list_clients<'e, E>(&self, executor: E, query: Option<&str>) -> Result<Vec<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let search_term = query.map(|q| format!("%{}%", escape_like(q)));

        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT * FROM clients
            WHERE ($1::text IS NULL OR name ILIKE $1 ESCAPE '\')
            ORDER BY name ASC
            "#,
        )
        .bind(search_term)
        .fetch_all(executor)
        .await?;

        Ok(clients)
    }

    pub async fn find_client<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(client)
    }

    pub async fn create_client<'e, E>(&self, executor: E, data: &ClientPayload) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // registered_at fica com o DEFAULT NOW() do banco
        sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, phone, email, referred_by_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(data.referred_by_id)
        .fetch_one(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn update_client<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        data: &ClientPayload,
    ) -> Result<Option<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = $2, phone = $3, email = $4, referred_by_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(data.referred_by_id)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn delete_client<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| map_db_error(e, DbOp::Delete(Entity::Client)))?;
        Ok(result.rows_affected())
    }
}
