// src/db/staff_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::{
        db_utils::{map_db_error, DbOp},
        error::AppError,
    },
    models::{
        schema::Entity,
        staff::{Employee, EmployeePayload, Service, ServicePayload, ServiceRow},
    },
};

// Serviço + funcionários vinculados, agregados num UUID[]
const SERVICE_SELECT: &str = r#"
    SELECT s.*,
           COALESCE(
               array_agg(se.employee_id ORDER BY se.employee_id) FILTER (WHERE se.employee_id IS NOT NULL),
               '{}'
           ) AS employee_ids
    FROM services s
    LEFT JOIN service_employees se ON se.service_id = s.id
"#;

#[derive(Clone)]
pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // =========================================================================
    //  FUNCIONÁRIOS
    // =========================================================================

    pub async fn list_employees<'e, E>(&self, executor: E) -> Result<Vec<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY name ASC")
            .fetch_all(executor)
            .await?;
        Ok(employees)
    }

    pub async fn find_employee<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(employee)
    }

    pub async fn create_employee<'e, E>(&self, executor: E, data: &EmployeePayload) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, daily_rate, role, cpf, email, supervisor_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.daily_rate)
        .bind(data.role)
        .bind(&data.cpf)
        .bind(&data.email)
        .bind(data.supervisor_id)
        .fetch_one(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn update_employee<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        data: &EmployeePayload,
    ) -> Result<Option<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = $2, daily_rate = $3, role = $4, cpf = $5, email = $6, supervisor_id = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.daily_rate)
        .bind(data.role)
        .bind(&data.cpf)
        .bind(&data.email)
        .bind(data.supervisor_id)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn delete_employee<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| map_db_error(e, DbOp::Delete(Entity::Employee)))?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  SERVIÇOS
    // =========================================================================

    pub async fn list_services<'e, E>(&self, executor: E) -> Result<Vec<ServiceRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{SERVICE_SELECT} GROUP BY s.id ORDER BY s.name ASC");
        let services = sqlx::query_as::<_, ServiceRow>(&sql)
            .fetch_all(executor)
            .await?;
        Ok(services)
    }

    pub async fn find_service<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<ServiceRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{SERVICE_SELECT} WHERE s.id = $1 GROUP BY s.id");
        let service = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(service)
    }

    pub async fn create_service<'e, E>(&self, executor: E, data: &ServicePayload) -> Result<Service, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (name, hourly_rate, role)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.hourly_rate)
        .bind(data.role)
        .fetch_one(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn update_service<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        data: &ServicePayload,
    ) -> Result<Option<Service>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET name = $2, hourly_rate = $3, role = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.hourly_rate)
        .bind(data.role)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    /// Substitui os funcionários vinculados ao serviço.
    pub async fn set_service_employees(
        &self,
        conn: &mut sqlx::PgConnection,
        service_id: Uuid,
        employee_ids: &[Uuid],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM service_employees WHERE service_id = $1")
            .bind(service_id)
            .execute(&mut *conn)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO service_employees (service_id, employee_id)
            SELECT $1, UNNEST($2::uuid[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(service_id)
        .bind(employee_ids)
        .execute(&mut *conn)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))?;

        Ok(())
    }

    pub async fn delete_service<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| map_db_error(e, DbOp::Delete(Entity::Service)))?;
        Ok(result.rows_affected())
    }
}
