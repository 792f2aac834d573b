// src/services/staff_service.rs

use uuid::Uuid;

use crate::{
    common::{db_utils::found, error::AppError},
    db::StaffRepository,
    models::{
        schema::Entity,
        staff::{EmployeePayload, EmployeeView, ServicePayload, ServiceView},
    },
    services::integrity_service::IntegrityService,
};

#[derive(Clone)]
pub struct StaffService {
    repo: StaffRepository,
    integrity: IntegrityService,
}

impl StaffService {
    pub fn new(repo: StaffRepository, integrity: IntegrityService) -> Self {
        Self { repo, integrity }
    }

    // =========================================================================
    //  FUNCIONÁRIOS
    // =========================================================================

    pub async fn list_employees(&self) -> Result<Vec<EmployeeView>, AppError> {
        let employees = self.repo.list_employees(self.repo.pool()).await?;
        Ok(employees.into_iter().map(EmployeeView::from).collect())
    }

    pub async fn get_employee(&self, id: Uuid) -> Result<EmployeeView, AppError> {
        let employee = self.repo.find_employee(self.repo.pool(), id).await?;
        Ok(found(employee, Entity::Employee)?.into())
    }

    pub async fn create_employee(&self, data: EmployeePayload) -> Result<EmployeeView, AppError> {
        self.integrity
            .ensure_references(&[("supervisorId", Entity::Employee, data.supervisor_id)])
            .await?;

        let employee = self.repo.create_employee(self.repo.pool(), &data).await?;
        tracing::info!(id = %employee.id, role = ?employee.role, "funcionário criado");
        Ok(employee.into())
    }

    pub async fn update_employee(&self, id: Uuid, data: EmployeePayload) -> Result<EmployeeView, AppError> {
        if data.supervisor_id == Some(id) {
            return Err(AppError::field(
                "supervisorId",
                "self_reference",
                "Um funcionário não pode ser supervisor de si mesmo.",
            ));
        }
        self.integrity
            .ensure_references(&[("supervisorId", Entity::Employee, data.supervisor_id)])
            .await?;

        let employee = self.repo.update_employee(self.repo.pool(), id, &data).await?;
        let employee = found(employee, Entity::Employee)?;
        tracing::info!(id = %id, role = ?employee.role, "funcionário atualizado");
        Ok(employee.into())
    }

    pub async fn delete_employee(&self, id: Uuid) -> Result<(), AppError> {
        self.integrity.ensure_deletable(Entity::Employee, id).await?;
        if self.repo.delete_employee(self.repo.pool(), id).await? == 0 {
            return Err(AppError::NotFound(Entity::Employee));
        }
        tracing::info!(id = %id, "funcionário removido");
        Ok(())
    }

    // =========================================================================
    //  SERVIÇOS (N:N com funcionários)
    // =========================================================================

    pub async fn list_services(&self) -> Result<Vec<ServiceView>, AppError> {
        let services = self.repo.list_services(self.repo.pool()).await?;
        Ok(services.into_iter().map(ServiceView::from).collect())
    }

    pub async fn get_service(&self, id: Uuid) -> Result<ServiceView, AppError> {
        let service = self.repo.find_service(self.repo.pool(), id).await?;
        Ok(found(service, Entity::Service)?.into())
    }

    pub async fn create_service(&self, data: ServicePayload) -> Result<ServiceView, AppError> {
        self.integrity
            .ensure_all_exist("employeeIds", Entity::Employee, &data.employee_ids)
            .await?;

        let mut tx = self.repo.pool().begin().await?;

        let service = self.repo.create_service(&mut *tx, &data).await?;
        self.repo.set_service_employees(&mut *tx, service.id, &data.employee_ids).await?;
        let row = self.repo.find_service(&mut *tx, service.id).await?;

        tx.commit().await?;

        tracing::info!(id = %service.id, employees = data.employee_ids.len(), "serviço criado");
        Ok(found(row, Entity::Service)?.into())
    }

    pub async fn update_service(&self, id: Uuid, data: ServicePayload) -> Result<ServiceView, AppError> {
        self.integrity
            .ensure_all_exist("employeeIds", Entity::Employee, &data.employee_ids)
            .await?;

        let mut tx = self.repo.pool().begin().await?;

        let Some(service) = self.repo.update_service(&mut *tx, id, &data).await? else {
            return Err(AppError::NotFound(Entity::Service));
        };
        self.repo.set_service_employees(&mut *tx, service.id, &data.employee_ids).await?;
        let row = self.repo.find_service(&mut *tx, service.id).await?;

        tx.commit().await?;

        tracing::info!(id = %id, employees = data.employee_ids.len(), "serviço atualizado");
        Ok(found(row, Entity::Service)?.into())
    }

    pub async fn delete_service(&self, id: Uuid) -> Result<(), AppError> {
        self.integrity.ensure_deletable(Entity::Service, id).await?;
        if self.repo.delete_service(self.repo.pool(), id).await? == 0 {
            return Err(AppError::NotFound(Entity::Service));
        }
        tracing::info!(id = %id, "serviço removido");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::{
        models::staff::{EmployeeRole, ServiceRole},
        services::test_support::test_state,
    };

    fn employee_payload(name: &str) -> EmployeePayload {
        EmployeePayload {
            name: name.to_string(),
            daily_rate: dec!(250.00),
            role: EmployeeRole::Bartender,
            cpf: None,
            email: None,
            supervisor_id: None,
        }
    }

    #[tokio::test]
    async fn employee_cannot_supervise_themself() {
        let Some(state) = test_state().await else { return };
        let service = &state.staff_service;

        let employee = service.create_employee(employee_payload("Ana Silva")).await.unwrap();
        assert_eq!(employee.professional_email, "ana.silva@bar.com");

        let mut payload = employee_payload("Ana Silva");
        payload.supervisor_id = Some(employee.employee.id);
        let Err(AppError::ValidationError(errors)) = service.update_employee(employee.employee.id, payload).await
        else {
            panic!("esperava erro de validação");
        };
        assert!(errors.field_errors().contains_key("supervisorId"));
    }

    #[tokio::test]
    async fn supervisor_removal_leaves_subordinate_unsupervised() {
        let Some(state) = test_state().await else { return };
        let service = &state.staff_service;

        let manager = service.create_employee(employee_payload("Carlos Souza")).await.unwrap();
        let mut payload = employee_payload("Bruno Lima");
        payload.supervisor_id = Some(manager.employee.id);
        let subordinate = service.create_employee(payload).await.unwrap();
        assert_eq!(subordinate.employee.supervisor_id, Some(manager.employee.id));

        service.delete_employee(manager.employee.id).await.unwrap();
        let subordinate = service.get_employee(subordinate.employee.id).await.unwrap();
        assert_eq!(subordinate.employee.supervisor_id, None);
    }

    #[tokio::test]
    async fn service_employees_are_replaced_on_update() {
        let Some(state) = test_state().await else { return };
        let service = &state.staff_service;

        let first = service.create_employee(employee_payload("Ana Silva")).await.unwrap();
        let second = service.create_employee(employee_payload("Bruno Lima")).await.unwrap();

        let mut payload = ServicePayload {
            name: "Coquetelaria".to_string(),
            hourly_rate: dec!(40.00),
            role: ServiceRole::FloorChef,
            employee_ids: vec![first.employee.id],
        };
        let created = service.create_service(payload.clone()).await.unwrap();
        assert_eq!(created.employee_ids, vec![first.employee.id]);
        assert_eq!(created.estimated_daily_cost, dec!(320));
        assert!(created.is_managerial);

        payload.employee_ids = vec![second.employee.id];
        let updated = service.update_service(created.service.id, payload).await.unwrap();
        assert_eq!(updated.employee_ids, vec![second.employee.id]);
    }
}
