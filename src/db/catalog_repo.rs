// src/db/catalog_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::{
        db_utils::{map_db_error, DbOp},
        error::AppError,
    },
    models::{
        catalog::{Cocktail, CocktailPayload, Product, ProductPayload, Supplier, SupplierPayload},
        schema::Entity,
    },
};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // =========================================================================
    //  FORNECEDORES
    // =========================================================================

    pub async fn list_suppliers<'e, E>(&self, executor: E) -> Result<Vec<Supplier>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let suppliers = sqlx::query_as::<_, Supplier>("SELECT * FROM suppliers ORDER BY name ASC")
            .fetch_all(executor)
            .await?;
        Ok(suppliers)
    }

    pub async fn find_supplier<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Supplier>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let supplier = sqlx::query_as::<_, Supplier>("SELECT * FROM suppliers WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(supplier)
    }

    pub async fn create_supplier<'e, E>(&self, executor: E, data: &SupplierPayload) -> Result<Supplier, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (name, tax_id, email, phone, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.tax_id)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .fetch_one(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn update_supplier<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        data: &SupplierPayload,
    ) -> Result<Option<Supplier>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Supplier>(
            r#"
            UPDATE suppliers
            SET name = $2, tax_id = $3, email = $4, phone = $5, address = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.tax_id)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn delete_supplier<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| map_db_error(e, DbOp::Delete(Entity::Supplier)))?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  PRODUTOS
    // =========================================================================

    pub async fn list_products<'e, E>(&self, executor: E) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY name ASC")
            .fetch_all(executor)
            .await?;
        Ok(products)
    }

    pub async fn find_product<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(product)
    }

    pub async fn create_product<'e, E>(&self, executor: E, data: &ProductPayload) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, supplier_id, stock, minimum_stock)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(data.supplier_id)
        .bind(data.stock)
        .bind(data.minimum_stock)
        .fetch_one(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn update_product<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        data: &ProductPayload,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, price = $3, supplier_id = $4, stock = $5, minimum_stock = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.price)
        .bind(data.supplier_id)
        .bind(data.stock)
        .bind(data.minimum_stock)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn delete_product<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| map_db_error(e, DbOp::Delete(Entity::Product)))?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  COQUETÉIS
    // =========================================================================

    pub async fn list_cocktails<'e, E>(&self, executor: E) -> Result<Vec<Cocktail>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cocktails = sqlx::query_as::<_, Cocktail>("SELECT * FROM cocktails ORDER BY name ASC")
            .fetch_all(executor)
            .await?;
        Ok(cocktails)
    }

    pub async fn find_cocktail<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Cocktail>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cocktail = sqlx::query_as::<_, Cocktail>("SELECT * FROM cocktails WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(cocktail)
    }

    pub async fn create_cocktail<'e, E>(&self, executor: E, data: &CocktailPayload) -> Result<Cocktail, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Cocktail>(
            r#"
            INSERT INTO cocktails (name, ingredients, container, cost_price, sale_price, supplier_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.ingredients)
        .bind(data.container)
        .bind(data.cost_price)
        .bind(data.sale_price)
        .bind(data.supplier_id)
        .fetch_one(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn update_cocktail<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        data: &CocktailPayload,
    ) -> Result<Option<Cocktail>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Cocktail>(
            r#"
            UPDATE cocktails
            SET name = $2, ingredients = $3, container = $4,
                cost_price = $5, sale_price = $6, supplier_id = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.ingredients)
        .bind(data.container)
        .bind(data.cost_price)
        .bind(data.sale_price)
        .bind(data.supplier_id)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn delete_cocktail<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM cocktails WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| map_db_error(e, DbOp::Delete(Entity::Cocktail)))?;
        Ok(result.rows_affected())
    }
}
