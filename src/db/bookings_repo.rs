// src/db/bookings_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::{
        db_utils::{map_db_error, DbOp},
        error::AppError,
    },
    models::{
        bookings::{
            Event, EventPayload, EventRow, Package, PackagePayload, Reservation, ReservationPayload,
            ReservationRow,
        },
        schema::Entity,
    },
};

// Reserva + preço por pessoa do pacote, para o total estimado
const RESERVATION_SELECT: &str = r#"
    SELECT r.*, p.price_per_person AS package_price
    FROM reservations r
    LEFT JOIN packages p ON p.id = r.package_id
"#;

const EVENT_SELECT: &str = r#"
    SELECT e.*,
           COALESCE(
               array_agg(ep.package_id ORDER BY ep.package_id) FILTER (WHERE ep.package_id IS NOT NULL),
               '{}'
           ) AS package_ids
    FROM events e
    LEFT JOIN event_packages ep ON ep.event_id = e.id
"#;

#[derive(Clone)]
pub struct BookingsRepository {
    pool: PgPool,
}

impl BookingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // =========================================================================
    //  PACOTES
    // =========================================================================

    pub async fn list_packages<'e, E>(&self, executor: E) -> Result<Vec<Package>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let packages = sqlx::query_as::<_, Package>("SELECT * FROM packages ORDER BY name ASC")
            .fetch_all(executor)
            .await?;
        Ok(packages)
    }

    pub async fn find_package<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Package>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let package = sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(package)
    }

    pub async fn create_package<'e, E>(&self, executor: E, data: &PackagePayload) -> Result<Package, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Package>(
            r#"
            INSERT INTO packages (name, cocktail_id, product_id, service_id, duration_hours, price_per_person)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.cocktail_id)
        .bind(data.product_id)
        .bind(data.service_id)
        .bind(data.duration_hours)
        .bind(data.price_per_person)
        .fetch_one(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn update_package<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        data: &PackagePayload,
    ) -> Result<Option<Package>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Package>(
            r#"
            UPDATE packages
            SET name = $2, cocktail_id = $3, product_id = $4, service_id = $5,
                duration_hours = $6, price_per_person = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.cocktail_id)
        .bind(data.product_id)
        .bind(data.service_id)
        .bind(data.duration_hours)
        .bind(data.price_per_person)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn delete_package<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| map_db_error(e, DbOp::Delete(Entity::Package)))?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  RESERVAS
    // =========================================================================

    pub async fn list_reservations<'e, E>(&self, executor: E) -> Result<Vec<ReservationRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{RESERVATION_SELECT} ORDER BY r.date ASC");
        let reservations = sqlx::query_as::<_, ReservationRow>(&sql)
            .fetch_all(executor)
            .await?;
        Ok(reservations)
    }

    pub async fn find_reservation<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<ReservationRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{RESERVATION_SELECT} WHERE r.id = $1");
        let reservation = sqlx::query_as::<_, ReservationRow>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(reservation)
    }

    pub async fn create_reservation<'e, E>(
        &self,
        executor: E,
        data: &ReservationPayload,
    ) -> Result<Reservation, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (client_id, package_id, date, guest_count, employee_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.client_id)
        .bind(data.package_id)
        .bind(data.date)
        .bind(data.guest_count)
        .bind(data.employee_id)
        .fetch_one(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn update_reservation<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        data: &ReservationPayload,
    ) -> Result<Option<Reservation>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET client_id = $2, package_id = $3, date = $4, guest_count = $5, employee_id = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.client_id)
        .bind(data.package_id)
        .bind(data.date)
        .bind(data.guest_count)
        .bind(data.employee_id)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn delete_reservation<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| map_db_error(e, DbOp::Delete(Entity::Reservation)))?;
        Ok(result.rows_affected())
    }

    // =========================================================================
    //  EVENTOS
    // =========================================================================

    pub async fn list_events<'e, E>(&self, executor: E) -> Result<Vec<EventRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{EVENT_SELECT} GROUP BY e.id ORDER BY e.scheduled_at DESC");
        let events = sqlx::query_as::<_, EventRow>(&sql)
            .fetch_all(executor)
            .await?;
        Ok(events)
    }

    pub async fn find_event<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<EventRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{EVENT_SELECT} WHERE e.id = $1 GROUP BY e.id");
        let event = sqlx::query_as::<_, EventRow>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(event)
    }

    pub async fn create_event<'e, E>(
        &self,
        executor: E,
        data: &EventPayload,
        scheduled_at: DateTime<Utc>,
    ) -> Result<Event, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (client_id, scheduled_at, paid, payment_method, location, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.client_id)
        .bind(scheduled_at)
        .bind(data.paid)
        .bind(data.payment_method)
        .bind(&data.location)
        .bind(&data.notes)
        .fetch_one(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    pub async fn update_event<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        data: &EventPayload,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Event>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET client_id = $2, scheduled_at = COALESCE($3, scheduled_at), paid = $4,
                payment_method = $5, location = $6, notes = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.client_id)
        .bind(scheduled_at)
        .bind(data.paid)
        .bind(data.payment_method)
        .bind(&data.location)
        .bind(&data.notes)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))
    }

    /// Substitui os pacotes contratados no evento.
    pub async fn set_event_packages(
        &self,
        conn: &mut sqlx::PgConnection,
        event_id: Uuid,
        package_ids: &[Uuid],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM event_packages WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *conn)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO event_packages (event_id, package_id)
            SELECT $1, UNNEST($2::uuid[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(event_id)
        .bind(package_ids)
        .execute(&mut *conn)
        .await
        .map_err(|e| map_db_error(e, DbOp::Write))?;

        Ok(())
    }

    pub async fn delete_event<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| map_db_error(e, DbOp::Delete(Entity::Event)))?;
        Ok(result.rows_affected())
    }
}
