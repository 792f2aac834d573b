// src/services/bookings_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::{db_utils::found, error::AppError},
    db::BookingsRepository,
    models::{
        bookings::{
            EventPayload, EventView, PackagePayload, PackageView, ReservationPayload, ReservationView,
        },
        schema::Entity,
    },
    services::integrity_service::IntegrityService,
};

#[derive(Clone)]
pub struct BookingsService {
    repo: BookingsRepository,
    integrity: IntegrityService,
}

impl BookingsService {
    pub fn new(repo: BookingsRepository, integrity: IntegrityService) -> Self {
        Self { repo, integrity }
    }

    // =========================================================================
    //  PACOTES
    // =========================================================================

    pub async fn list_packages(&self) -> Result<Vec<PackageView>, AppError> {
        let packages = self.repo.list_packages(self.repo.pool()).await?;
        Ok(packages.into_iter().map(PackageView::from).collect())
    }

    pub async fn get_package(&self, id: Uuid) -> Result<PackageView, AppError> {
        let package = self.repo.find_package(self.repo.pool(), id).await?;
        Ok(found(package, Entity::Package)?.into())
    }

    async fn check_package_references(&self, data: &PackagePayload) -> Result<(), AppError> {
        self.integrity
            .ensure_references(&[
                ("cocktailId", Entity::Cocktail, Some(data.cocktail_id)),
                ("productId", Entity::Product, Some(data.product_id)),
                ("serviceId", Entity::Service, Some(data.service_id)),
            ])
            .await
    }

    pub async fn create_package(&self, data: PackagePayload) -> Result<PackageView, AppError> {
        self.check_package_references(&data).await?;

        // (name, cocktail_id) é UNIQUE: conflito vira 409 em map_db_error
        let package = self.repo.create_package(self.repo.pool(), &data).await?;
        tracing::info!(id = %package.id, "pacote criado");
        Ok(package.into())
    }

    pub async fn update_package(&self, id: Uuid, data: PackagePayload) -> Result<PackageView, AppError> {
        self.check_package_references(&data).await?;

        let package = self.repo.update_package(self.repo.pool(), id, &data).await?;
        let package = found(package, Entity::Package)?;
        tracing::info!(id = %id, "pacote atualizado");
        Ok(package.into())
    }

    pub async fn delete_package(&self, id: Uuid) -> Result<(), AppError> {
        self.integrity.ensure_deletable(Entity::Package, id).await?;
        if self.repo.delete_package(self.repo.pool(), id).await? == 0 {
            return Err(AppError::NotFound(Entity::Package));
        }
        tracing::info!(id = %id, "pacote removido");
        Ok(())
    }

    // =========================================================================
    //  RESERVAS
    // =========================================================================

    pub async fn list_reservations(&self) -> Result<Vec<ReservationView>, AppError> {
        let reservations = self.repo.list_reservations(self.repo.pool()).await?;
        Ok(reservations.into_iter().map(ReservationView::from).collect())
    }

    pub async fn get_reservation(&self, id: Uuid) -> Result<ReservationView, AppError> {
        let reservation = self.repo.find_reservation(self.repo.pool(), id).await?;
        Ok(found(reservation, Entity::Reservation)?.into())
    }

    async fn check_reservation_references(&self, data: &ReservationPayload) -> Result<(), AppError> {
        self.integrity
            .ensure_references(&[
                ("clientId", Entity::Client, Some(data.client_id)),
                ("packageId", Entity::Package, data.package_id),
                ("employeeId", Entity::Employee, data.employee_id),
            ])
            .await
    }

    pub async fn create_reservation(&self, data: ReservationPayload) -> Result<ReservationView, AppError> {
        self.check_reservation_references(&data).await?;

        let mut tx = self.repo.pool().begin().await?;
        let reservation = self.repo.create_reservation(&mut *tx, &data).await?;
        let row = self.repo.find_reservation(&mut *tx, reservation.id).await?;
        tx.commit().await?;

        tracing::info!(id = %reservation.id, date = %reservation.date, "reserva criada");
        Ok(found(row, Entity::Reservation)?.into())
    }

    pub async fn update_reservation(&self, id: Uuid, data: ReservationPayload) -> Result<ReservationView, AppError> {
        self.check_reservation_references(&data).await?;

        let mut tx = self.repo.pool().begin().await?;
        let Some(reservation) = self.repo.update_reservation(&mut *tx, id, &data).await? else {
            return Err(AppError::NotFound(Entity::Reservation));
        };
        let row = self.repo.find_reservation(&mut *tx, reservation.id).await?;
        tx.commit().await?;

        tracing::info!(id = %id, date = %reservation.date, "reserva atualizada");
        Ok(found(row, Entity::Reservation)?.into())
    }

    pub async fn delete_reservation(&self, id: Uuid) -> Result<(), AppError> {
        if self.repo.delete_reservation(self.repo.pool(), id).await? == 0 {
            return Err(AppError::NotFound(Entity::Reservation));
        }
        tracing::info!(id = %id, "reserva removida");
        Ok(())
    }

    // =========================================================================
    //  EVENTOS (N:N com pacotes)
    // =========================================================================

    pub async fn list_events(&self) -> Result<Vec<EventView>, AppError> {
        let events = self.repo.list_events(self.repo.pool()).await?;
        Ok(events.into_iter().map(EventView::from).collect())
    }

    pub async fn get_event(&self, id: Uuid) -> Result<EventView, AppError> {
        let event = self.repo.find_event(self.repo.pool(), id).await?;
        Ok(found(event, Entity::Event)?.into())
    }

    async fn check_event_references(&self, data: &EventPayload) -> Result<(), AppError> {
        self.integrity
            .ensure_references(&[("clientId", Entity::Client, Some(data.client_id))])
            .await?;
        self.integrity
            .ensure_all_exist("packageIds", Entity::Package, &data.package_ids)
            .await
    }

    pub async fn create_event(&self, data: EventPayload) -> Result<EventView, AppError> {
        self.check_event_references(&data).await?;
        let scheduled_at = data.scheduled_at.unwrap_or_else(Utc::now);

        let mut tx = self.repo.pool().begin().await?;
        let event = self.repo.create_event(&mut *tx, &data, scheduled_at).await?;
        self.repo.set_event_packages(&mut *tx, event.id, &data.package_ids).await?;
        let row = self.repo.find_event(&mut *tx, event.id).await?;
        tx.commit().await?;

        tracing::info!(id = %event.id, paid = event.paid, "evento criado");
        Ok(found(row, Entity::Event)?.into())
    }

    pub async fn update_event(&self, id: Uuid, data: EventPayload) -> Result<EventView, AppError> {
        self.check_event_references(&data).await?;

        let mut tx = self.repo.pool().begin().await?;
        let Some(event) = self.repo.update_event(&mut *tx, id, &data, data.scheduled_at).await? else {
            return Err(AppError::NotFound(Entity::Event));
        };
        self.repo.set_event_packages(&mut *tx, event.id, &data.package_ids).await?;
        let row = self.repo.find_event(&mut *tx, event.id).await?;
        tx.commit().await?;

        tracing::info!(id = %id, paid = event.paid, "evento atualizado");
        Ok(found(row, Entity::Event)?.into())
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<(), AppError> {
        self.integrity.ensure_deletable(Entity::Event, id).await?;
        if self.repo.delete_event(self.repo.pool(), id).await? == 0 {
            return Err(AppError::NotFound(Entity::Event));
        }
        tracing::info!(id = %id, "evento removido");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use rust_decimal::{dec, Decimal};

    use super::*;
    use crate::{
        config::AppState,
        models::{
            bookings::PaymentMethod,
            catalog::{CocktailPayload, ContainerType, ProductPayload},
            crm::ClientPayload,
            staff::{ServicePayload, ServiceRole},
        },
        services::test_support::{create_supplier, test_state},
    };

    // Coquetel, produto e serviço prontos para compor um pacote.
    async fn package_payload(state: &AppState, name: &str) -> PackagePayload {
        let supplier = create_supplier(state).await;
        let product = state
            .catalog_service
            .create_product(ProductPayload {
                name: "Gelo".to_string(),
                price: dec!(10.00),
                supplier_id: supplier.id,
                stock: 100,
                minimum_stock: 10,
            })
            .await
            .unwrap();
        let cocktail = state
            .catalog_service
            .create_cocktail(CocktailPayload {
                name: "Mojito".to_string(),
                ingredients: None,
                container: ContainerType::LongDrink,
                cost_price: dec!(6.00),
                sale_price: dec!(18.00),
                supplier_id: None,
            })
            .await
            .unwrap();
        let service = state
            .staff_service
            .create_service(ServicePayload {
                name: "Open bar".to_string(),
                hourly_rate: dec!(80.00),
                role: ServiceRole::Bartender,
                employee_ids: Vec::new(),
            })
            .await
            .unwrap();

        PackagePayload {
            name: name.to_string(),
            cocktail_id: cocktail.cocktail.id,
            product_id: product.product.id,
            service_id: service.service.id,
            duration_hours: 4,
            price_per_person: dec!(50.00),
        }
    }

    async fn create_client(state: &AppState) -> Uuid {
        state
            .crm_service
            .create_client(ClientPayload {
                name: "Maria da Silva".to_string(),
                phone: "11988887777".to_string(),
                email: format!("{}@teste.com", Uuid::new_v4().simple()),
                referred_by_id: None,
            })
            .await
            .unwrap()
            .client
            .id
    }

    #[tokio::test]
    async fn package_name_is_unique_per_cocktail() {
        let Some(state) = test_state().await else { return };
        let service = &state.bookings_service;

        let payload = package_payload(&state, "Festa Premium").await;
        let package = service.create_package(payload.clone()).await.unwrap();
        assert_eq!(package.duration_minutes, 240);
        assert_eq!(package.estimated_total, dec!(500));

        match service.create_package(payload).await {
            Err(AppError::UniqueConstraintViolation { fields }) => {
                assert_eq!(fields, vec!["name", "cocktailId"]);
            }
            other => panic!("esperava conflito, veio {other:?}"),
        }
    }

    #[tokio::test]
    async fn reservation_total_follows_package_price() {
        let Some(state) = test_state().await else { return };
        let service = &state.bookings_service;

        let package = service
            .create_package(package_payload(&state, "Aniversário").await)
            .await
            .unwrap();
        let client_id = create_client(&state).await;

        let reservation = service
            .create_reservation(ReservationPayload {
                client_id,
                package_id: Some(package.package.id),
                date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                guest_count: 12,
                employee_id: None,
            })
            .await
            .unwrap();
        assert_eq!(reservation.estimated_total, dec!(600));
        assert_eq!(reservation.weekday, "sexta-feira");

        // Sem o pacote a reserva continua, sem valor estimado
        service.delete_package(package.package.id).await.unwrap();
        let reservation = service.get_reservation(reservation.reservation.id).await.unwrap();
        assert_eq!(reservation.reservation.package_id, None);
        assert_eq!(reservation.estimated_total, Decimal::ZERO);
    }

    #[tokio::test]
    async fn client_with_events_cannot_be_deleted() {
        let Some(state) = test_state().await else { return };
        let service = &state.bookings_service;

        let package = service
            .create_package(package_payload(&state, "Casamento").await)
            .await
            .unwrap();
        let client_id = create_client(&state).await;

        let event = service
            .create_event(EventPayload {
                client_id,
                scheduled_at: None,
                paid: false,
                payment_method: PaymentMethod::Pix,
                location: "Salão Azul".to_string(),
                notes: String::new(),
                package_ids: vec![package.package.id, package.package.id],
            })
            .await
            .unwrap();
        assert_eq!(event.package_ids, vec![package.package.id]);
        assert_eq!(event.payment_status, "Pendente");

        let result = state.crm_service.delete_client(client_id).await;
        assert!(matches!(
            result,
            Err(AppError::ReferentialIntegrity { entity: Entity::Client, .. })
        ));

        service.delete_event(event.event.id).await.unwrap();
        state.crm_service.delete_client(client_id).await.unwrap();
    }

    #[tokio::test]
    async fn event_update_without_date_keeps_schedule() {
        let Some(state) = test_state().await else { return };
        let service = &state.bookings_service;
        let client_id = create_client(&state).await;

        let mut payload = EventPayload {
            client_id,
            scheduled_at: Some(Utc.with_ymd_and_hms(2030, 12, 24, 20, 0, 0).unwrap()),
            paid: false,
            payment_method: PaymentMethod::Credit,
            location: "Salão Azul".to_string(),
            notes: String::new(),
            package_ids: Vec::new(),
        };
        let event = service.create_event(payload.clone()).await.unwrap();

        payload.scheduled_at = None;
        payload.paid = true;
        let updated = service.update_event(event.event.id, payload).await.unwrap();
        assert!(updated.event.paid);
        assert_eq!(updated.event.scheduled_at, event.event.scheduled_at);
        assert_eq!(updated.formatted_date, "24/12/2030 17:00");
    }

    #[tokio::test]
    async fn second_reservation_on_same_day_is_a_conflict() {
        let Some(state) = test_state().await else { return };
        let service = &state.bookings_service;
        let client_id = create_client(&state).await;

        let payload = ReservationPayload {
            client_id,
            package_id: None,
            date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            guest_count: 4,
            employee_id: None,
        };
        service.create_reservation(payload.clone()).await.unwrap();

        match service.create_reservation(payload).await {
            Err(AppError::UniqueConstraintViolation { fields }) => {
                assert_eq!(fields, vec!["clientId", "date"]);
            }
            other => panic!("esperava conflito, veio {other:?}"),
        }
    }

    #[tokio::test]
    async fn event_with_unknown_package_is_invalid() {
        let Some(state) = test_state().await else { return };
        let client_id = create_client(&state).await;

        let result = state
            .bookings_service
            .create_event(EventPayload {
                client_id,
                scheduled_at: None,
                paid: true,
                payment_method: PaymentMethod::Cash,
                location: "Terraço".to_string(),
                notes: String::new(),
                package_ids: vec![Uuid::new_v4()],
            })
            .await;
        let Err(AppError::ValidationError(errors)) = result else {
            panic!("esperava erro de validação");
        };
        assert!(errors.field_errors().contains_key("packageIds"));
    }
}
