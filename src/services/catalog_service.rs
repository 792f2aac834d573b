// src/services/catalog_service.rs

use uuid::Uuid;

use crate::{
    common::{db_utils::found, error::AppError},
    db::CatalogRepository,
    models::{
        catalog::{
            CocktailPayload, CocktailView, ProductPayload, ProductView, SupplierPayload, SupplierView,
        },
        schema::Entity,
    },
    services::integrity_service::IntegrityService,
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
    integrity: IntegrityService,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository, integrity: IntegrityService) -> Self {
        Self { repo, integrity }
    }

    // =========================================================================
    //  FORNECEDORES
    // =========================================================================

    pub async fn list_suppliers(&self) -> Result<Vec<SupplierView>, AppError> {
        let suppliers = self.repo.list_suppliers(self.repo.pool()).await?;
        Ok(suppliers.into_iter().map(SupplierView::from).collect())
    }

    pub async fn get_supplier(&self, id: Uuid) -> Result<SupplierView, AppError> {
        let supplier = self.repo.find_supplier(self.repo.pool(), id).await?;
        Ok(found(supplier, Entity::Supplier)?.into())
    }

    pub async fn create_supplier(&self, data: SupplierPayload) -> Result<SupplierView, AppError> {
        let data = data.normalized();
        let supplier = self.repo.create_supplier(self.repo.pool(), &data).await?;
        tracing::info!(id = %supplier.id, "fornecedor criado");
        Ok(supplier.into())
    }

    pub async fn update_supplier(&self, id: Uuid, data: SupplierPayload) -> Result<SupplierView, AppError> {
        let data = data.normalized();
        let supplier = self.repo.update_supplier(self.repo.pool(), id, &data).await?;
        let supplier = found(supplier, Entity::Supplier)?;
        tracing::info!(id = %id, "fornecedor atualizado");
        Ok(supplier.into())
    }

    pub async fn delete_supplier(&self, id: Uuid) -> Result<(), AppError> {
        self.integrity.ensure_deletable(Entity::Supplier, id).await?;
        if self.repo.delete_supplier(self.repo.pool(), id).await? == 0 {
            return Err(AppError::NotFound(Entity::Supplier));
        }
        tracing::info!(id = %id, "fornecedor removido");
        Ok(())
    }

    // =========================================================================
    //  PRODUTOS
    // =========================================================================

    pub async fn list_products(&self) -> Result<Vec<ProductView>, AppError> {
        let products = self.repo.list_products(self.repo.pool()).await?;
        Ok(products.into_iter().map(ProductView::from).collect())
    }

    pub async fn get_product(&self, id: Uuid) -> Result<ProductView, AppError> {
        let product = self.repo.find_product(self.repo.pool(), id).await?;
        Ok(found(product, Entity::Product)?.into())
    }

    pub async fn create_product(&self, data: ProductPayload) -> Result<ProductView, AppError> {
        self.integrity
            .ensure_references(&[("supplierId", Entity::Supplier, Some(data.supplier_id))])
            .await?;

        let product = self.repo.create_product(self.repo.pool(), &data).await?;
        tracing::info!(id = %product.id, "produto criado");
        if product.needs_restock() {
            tracing::debug!(id = %product.id, stock = product.stock, "produto abaixo do estoque mínimo");
        }
        Ok(product.into())
    }

    pub async fn update_product(&self, id: Uuid, data: ProductPayload) -> Result<ProductView, AppError> {
        self.integrity
            .ensure_references(&[("supplierId", Entity::Supplier, Some(data.supplier_id))])
            .await?;

        let product = self.repo.update_product(self.repo.pool(), id, &data).await?;
        let product = found(product, Entity::Product)?;
        tracing::info!(id = %id, stock = product.stock, "produto atualizado");
        Ok(product.into())
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        self.integrity.ensure_deletable(Entity::Product, id).await?;
        if self.repo.delete_product(self.repo.pool(), id).await? == 0 {
            return Err(AppError::NotFound(Entity::Product));
        }
        tracing::info!(id = %id, "produto removido");
        Ok(())
    }

    // =========================================================================
    //  COQUETÉIS
    // =========================================================================

    pub async fn list_cocktails(&self) -> Result<Vec<CocktailView>, AppError> {
        let cocktails = self.repo.list_cocktails(self.repo.pool()).await?;
        Ok(cocktails.into_iter().map(CocktailView::from).collect())
    }

    pub async fn get_cocktail(&self, id: Uuid) -> Result<CocktailView, AppError> {
        let cocktail = self.repo.find_cocktail(self.repo.pool(), id).await?;
        Ok(found(cocktail, Entity::Cocktail)?.into())
    }

    pub async fn create_cocktail(&self, data: CocktailPayload) -> Result<CocktailView, AppError> {
        self.integrity
            .ensure_references(&[("supplierId", Entity::Supplier, data.supplier_id)])
            .await?;

        let cocktail = self.repo.create_cocktail(self.repo.pool(), &data).await?;
        tracing::info!(id = %cocktail.id, "coquetel criado");
        Ok(cocktail.into())
    }

    pub async fn update_cocktail(&self, id: Uuid, data: CocktailPayload) -> Result<CocktailView, AppError> {
        self.integrity
            .ensure_references(&[("supplierId", Entity::Supplier, data.supplier_id)])
            .await?;

        let cocktail = self.repo.update_cocktail(self.repo.pool(), id, &data).await?;
        let cocktail = found(cocktail, Entity::Cocktail)?;
        tracing::info!(id = %id, "coquetel atualizado");
        Ok(cocktail.into())
    }

    pub async fn delete_cocktail(&self, id: Uuid) -> Result<(), AppError> {
        self.integrity.ensure_deletable(Entity::Cocktail, id).await?;
        if self.repo.delete_cocktail(self.repo.pool(), id).await? == 0 {
            return Err(AppError::NotFound(Entity::Cocktail));
        }
        tracing::info!(id = %id, "coquetel removido");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::{
        models::catalog::ContainerType,
        services::test_support::{create_supplier, supplier_payload, test_state},
    };

    fn product_payload(supplier_id: Uuid) -> ProductPayload {
        ProductPayload {
            name: "Vodka".to_string(),
            price: dec!(89.90),
            supplier_id,
            stock: 2,
            minimum_stock: 5,
        }
    }

    #[tokio::test]
    async fn supplier_with_products_is_protected() {
        let Some(state) = test_state().await else { return };
        let service = &state.catalog_service;

        let supplier = create_supplier(&state).await;
        let product = service.create_product(product_payload(supplier.id)).await.unwrap();
        assert!(product.needs_restock);

        match service.delete_supplier(supplier.id).await {
            Err(AppError::ReferentialIntegrity { entity, dependents }) => {
                assert_eq!(entity, Entity::Supplier);
                assert_eq!(dependents.len(), 1);
                assert_eq!(dependents[0].relation, "products.supplier_id");
                assert_eq!(dependents[0].count, 1);
            }
            other => panic!("esperava erro referencial, veio {other:?}"),
        }

        service.delete_product(product.product.id).await.unwrap();
        service.delete_supplier(supplier.id).await.unwrap();
        assert!(matches!(
            service.get_supplier(supplier.id).await,
            Err(AppError::NotFound(Entity::Supplier))
        ));
    }

    #[tokio::test]
    async fn cocktail_loses_supplier_when_supplier_is_removed() {
        let Some(state) = test_state().await else { return };
        let service = &state.catalog_service;

        let supplier = create_supplier(&state).await;
        let cocktail = service
            .create_cocktail(CocktailPayload {
                name: "Caipirinha".to_string(),
                ingredients: Some("cachaça, limão, açúcar".to_string()),
                container: ContainerType::OnTheRocks,
                cost_price: dec!(8.00),
                sale_price: dec!(20.00),
                supplier_id: Some(supplier.id),
            })
            .await
            .unwrap();
        assert_eq!(cocktail.profit_margin, dec!(1.5));

        service.delete_supplier(supplier.id).await.unwrap();
        let cocktail = service.get_cocktail(cocktail.cocktail.id).await.unwrap();
        assert_eq!(cocktail.cocktail.supplier_id, None);
    }

    #[tokio::test]
    async fn duplicate_tax_id_is_a_conflict() {
        let Some(state) = test_state().await else { return };
        let service = &state.catalog_service;

        let first = supplier_payload("Distribuidora Sol");
        let mut second = supplier_payload("Distribuidora Lua");
        second.tax_id = first.tax_id.clone();

        service.create_supplier(first).await.unwrap();
        match service.create_supplier(second).await {
            Err(AppError::UniqueConstraintViolation { fields }) => assert_eq!(fields, vec!["taxId"]),
            other => panic!("esperava conflito, veio {other:?}"),
        }
    }

    #[tokio::test]
    async fn punctuated_and_bare_tax_id_are_the_same_supplier() {
        let Some(state) = test_state().await else { return };
        let service = &state.catalog_service;

        let mut first = supplier_payload("Distribuidora Sol");
        let digits = first.tax_id.clone();
        first.tax_id = format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2], &digits[2..5], &digits[5..8], &digits[8..12], &digits[12..14]
        );
        let mut second = supplier_payload("Distribuidora Lua");
        second.tax_id = digits.clone();

        let created = service.create_supplier(first).await.unwrap();
        assert_eq!(created.supplier.tax_id, digits);

        match service.create_supplier(second).await {
            Err(AppError::UniqueConstraintViolation { fields }) => assert_eq!(fields, vec!["taxId"]),
            other => panic!("esperava conflito, veio {other:?}"),
        }
    }

    #[tokio::test]
    async fn product_with_unknown_supplier_is_invalid() {
        let Some(state) = test_state().await else { return };

        let result = state.catalog_service.create_product(product_payload(Uuid::new_v4())).await;
        let Err(AppError::ValidationError(errors)) = result else {
            panic!("esperava erro de validação");
        };
        assert!(errors.field_errors().contains_key("supplierId"));
    }
}
