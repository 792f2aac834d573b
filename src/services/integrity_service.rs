// src/services/integrity_service.rs

use std::collections::BTreeSet;

use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::{
    common::error::{AppError, Dependents},
    db::IntegrityRepository,
    models::schema::{blocking_relations, Entity},
};

/// Uma referência recebida num payload: (campo na API, tabela alvo, id).
pub type Reference = (&'static str, Entity, Option<Uuid>);

#[derive(Clone)]
pub struct IntegrityService {
    repo: IntegrityRepository,
}

impl IntegrityService {
    pub fn new(repo: IntegrityRepository) -> Self {
        Self { repo }
    }

    /// Garante que cada id informado existe. Ids ausentes (None) são ignorados.
    pub async fn ensure_references(&self, references: &[Reference]) -> Result<(), AppError> {
        let mut errors = ValidationErrors::new();
        let mut missing = false;

        for &(field, entity, id) in references {
            let Some(id) = id else { continue };
            if !self.repo.exists(self.repo.pool(), entity, id).await? {
                errors.add(field, missing_reference(entity));
                missing = true;
            }
        }

        if missing {
            return Err(AppError::ValidationError(errors));
        }
        Ok(())
    }

    /// Mesma checagem para listas (relações N:N).
    pub async fn ensure_all_exist(&self, field: &'static str, entity: Entity, ids: &[Uuid]) -> Result<(), AppError> {
        let distinct: Vec<Uuid> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        if distinct.is_empty() {
            return Ok(());
        }

        let found = self.repo.count_existing(self.repo.pool(), entity, &distinct).await?;
        if found != distinct.len() as i64 {
            let mut errors = ValidationErrors::new();
            errors.add(field, missing_reference(entity));
            return Err(AppError::ValidationError(errors));
        }
        Ok(())
    }

    /// Recusa a remoção se alguma relação RESTRICT ainda aponta para o registro.
    pub async fn ensure_deletable(&self, entity: Entity, id: Uuid) -> Result<(), AppError> {
        let mut dependents = Vec::new();
        for relation in blocking_relations(entity) {
            let count = self.repo.count_dependents(self.repo.pool(), relation, id).await?;
            dependents.push(Dependents { relation: relation.name(), count });
        }
        check_deletable(entity, id, dependents)
    }
}

pub fn check_deletable(entity: Entity, id: Uuid, dependents: Vec<Dependents>) -> Result<(), AppError> {
    let blocking: Vec<Dependents> = dependents.into_iter().filter(|d| d.count > 0).collect();
    if blocking.is_empty() {
        return Ok(());
    }

    tracing::warn!(entity = entity.table(), id = %id, ?blocking, "remoção bloqueada por dependentes");
    Err(AppError::ReferentialIntegrity { entity, dependents: blocking })
}

fn missing_reference(entity: Entity) -> ValidationError {
    let mut err = ValidationError::new("reference");
    err.message = Some(format!("{} não encontrado.", entity.label()).into());
    err
}
