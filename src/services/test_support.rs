// src/services/test_support.rs

// Apoio aos testes que precisam de um Postgres de verdade. Sem
// TEST_DATABASE_URL os testes retornam cedo.

use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::{
    config::AppState,
    models::catalog::{Supplier, SupplierPayload},
};

pub async fn test_state() -> Option<AppState> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();
    Some(AppState::from_pool(pool))
}

/// CNPJ e e-mail aleatórios para não colidir com dados de outros testes.
pub fn supplier_payload(name: &str) -> SupplierPayload {
    let digits = Uuid::new_v4().as_u128() % 100_000_000_000_000;
    SupplierPayload {
        name: name.to_string(),
        tax_id: format!("{digits:014}"),
        email: format!("{}@teste.com", Uuid::new_v4().simple()),
        phone: "11999990000".to_string(),
        address: None,
    }
}

pub async fn create_supplier(state: &AppState) -> Supplier {
    state
        .catalog_service
        .create_supplier(supplier_payload("Distribuidora Teste"))
        .await
        .unwrap()
        .supplier
}
