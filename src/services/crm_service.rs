// src/services/crm_service.rs

use uuid::Uuid;

use crate::{
    common::{db_utils::found, error::AppError},
    db::CrmRepository,
    models::{
        crm::{ClientPayload, ClientView},
        schema::Entity,
    },
    services::integrity_service::IntegrityService,
};

#[derive(Clone)]
pub struct CrmService {
    repo: CrmRepository,
    integrity: IntegrityService,
}

impl CrmService {
    pub fn new(repo: CrmRepository, integrity: IntegrityService) -> Self {
        Self { repo, integrity }
    }

    pub async fn list_clients(&self, query: Option<&str>) -> Result<Vec<ClientView>, AppError> {
        // "?q=" vazio lista todos
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let clients = self.repo.list_clients(self.repo.pool(), query).await?;
        Ok(clients.into_iter().map(ClientView::from).collect())
    }

    pub async fn get_client(&self, id: Uuid) -> Result<ClientView, AppError> {
        let client = self.repo.find_client(self.repo.pool(), id).await?;
        Ok(found(client, Entity::Client)?.into())
    }

    pub async fn create_client(&self, data: ClientPayload) -> Result<ClientView, AppError> {
        self.integrity
            .ensure_references(&[("referredById", Entity::Client, data.referred_by_id)])
            .await?;

        let client = self.repo.create_client(self.repo.pool(), &data).await?;
        tracing::info!(id = %client.id, "cliente criado");
        Ok(client.into())
    }

    pub async fn update_client(&self, id: Uuid, data: ClientPayload) -> Result<ClientView, AppError> {
        if data.referred_by_id == Some(id) {
            return Err(AppError::field(
                "referredById",
                "self_reference",
                "Um cliente não pode indicar a si mesmo.",
            ));
        }
        self.integrity
            .ensure_references(&[("referredById", Entity::Client, data.referred_by_id)])
            .await?;

        let client = self.repo.update_client(self.repo.pool(), id, &data).await?;
        let client = found(client, Entity::Client)?;
        tracing::info!(id = %id, "cliente atualizado");
        Ok(client.into())
    }

    /// Reservas do cliente caem junto (CASCADE); eventos bloqueiam a remoção.
    pub async fn delete_client(&self, id: Uuid) -> Result<(), AppError> {
        self.integrity.ensure_deletable(Entity::Client, id).await?;
        if self.repo.delete_client(self.repo.pool(), id).await? == 0 {
            return Err(AppError::NotFound(Entity::Client));
        }
        tracing::info!(id = %id, "cliente removido");
        Ok(())
    }
}
