// src/handlers/catalog.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, extract::AppJson},
    config::AppState,
    models::catalog::{
        CocktailPayload, CocktailView, ProductPayload, ProductView, SupplierPayload, SupplierView,
    },
};

// =============================================================================
//  FORNECEDORES
// =============================================================================

// GET /api/suppliers
#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = "Catalog",
    responses(
        (status = 200, description = "Lista de fornecedores", body = Vec<SupplierView>)
    )
)]
pub async fn list_suppliers(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let suppliers = app_state.catalog_service.list_suppliers().await?;
    Ok((StatusCode::OK, Json(suppliers)))
}

// GET /api/suppliers/{id}
#[utoipa::path(
    get,
    path = "/api/suppliers/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "ID do fornecedor")),
    responses(
        (status = 200, description = "Fornecedor encontrado", body = SupplierView),
        (status = 404, description = "Fornecedor não encontrado")
    )
)]
pub async fn get_supplier(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let supplier = app_state.catalog_service.get_supplier(id).await?;
    Ok((StatusCode::OK, Json(supplier)))
}

// POST /api/suppliers
#[utoipa::path(
    post,
    path = "/api/suppliers",
    tag = "Catalog",
    request_body = SupplierPayload,
    responses(
        (status = 201, description = "Fornecedor criado", body = SupplierView),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "CNPJ ou e-mail já cadastrado")
    )
)]
pub async fn create_supplier(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<SupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let supplier = app_state.catalog_service.create_supplier(payload).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

// PUT /api/suppliers/{id}
#[utoipa::path(
    put,
    path = "/api/suppliers/{id}",
    tag = "Catalog",
    request_body = SupplierPayload,
    params(("id" = Uuid, Path, description = "ID do fornecedor")),
    responses(
        (status = 200, description = "Fornecedor atualizado", body = SupplierView),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Fornecedor não encontrado"),
        (status = 409, description = "CNPJ ou e-mail já cadastrado")
    )
)]
pub async fn update_supplier(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<SupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let supplier = app_state.catalog_service.update_supplier(id, payload).await?;
    Ok((StatusCode::OK, Json(supplier)))
}

// DELETE /api/suppliers/{id}
#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "ID do fornecedor")),
    responses(
        (status = 204, description = "Fornecedor removido"),
        (status = 404, description = "Fornecedor não encontrado"),
        (status = 409, description = "Fornecedor possui produtos vinculados")
    )
)]
pub async fn delete_supplier(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_supplier(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  PRODUTOS
// =============================================================================

// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Catalog",
    responses(
        (status = 200, description = "Lista de produtos", body = Vec<ProductView>)
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.catalog_service.list_products().await?;
    Ok((StatusCode::OK, Json(products)))
}

// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = ProductView),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state.catalog_service.get_product(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Catalog",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = ProductView),
        (status = 400, description = "Dados inválidos ou fornecedor inexistente")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state.catalog_service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

// PUT /api/products/{id}
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Catalog",
    request_body = ProductPayload,
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto atualizado", body = ProductView),
        (status = 400, description = "Dados inválidos ou fornecedor inexistente"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state.catalog_service.update_product(id, payload).await?;
    Ok((StatusCode::OK, Json(product)))
}

// DELETE /api/products/{id}
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 404, description = "Produto não encontrado"),
        (status = 409, description = "Produto usado em pacotes")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  COQUETÉIS
// =============================================================================

// GET /api/cocktails
#[utoipa::path(
    get,
    path = "/api/cocktails",
    tag = "Catalog",
    responses(
        (status = 200, description = "Lista de coquetéis", body = Vec<CocktailView>)
    )
)]
pub async fn list_cocktails(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cocktails = app_state.catalog_service.list_cocktails().await?;
    Ok((StatusCode::OK, Json(cocktails)))
}

// GET /api/cocktails/{id}
#[utoipa::path(
    get,
    path = "/api/cocktails/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "ID do coquetel")),
    responses(
        (status = 200, description = "Coquetel encontrado", body = CocktailView),
        (status = 404, description = "Coquetel não encontrado")
    )
)]
pub async fn get_cocktail(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let cocktail = app_state.catalog_service.get_cocktail(id).await?;
    Ok((StatusCode::OK, Json(cocktail)))
}

// POST /api/cocktails
#[utoipa::path(
    post,
    path = "/api/cocktails",
    tag = "Catalog",
    request_body = CocktailPayload,
    responses(
        (status = 201, description = "Coquetel criado", body = CocktailView),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_cocktail(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CocktailPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cocktail = app_state.catalog_service.create_cocktail(payload).await?;
    Ok((StatusCode::CREATED, Json(cocktail)))
}

// PUT /api/cocktails/{id}
#[utoipa::path(
    put,
    path = "/api/cocktails/{id}",
    tag = "Catalog",
    request_body = CocktailPayload,
    params(("id" = Uuid, Path, description = "ID do coquetel")),
    responses(
        (status = 200, description = "Coquetel atualizado", body = CocktailView),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Coquetel não encontrado")
    )
)]
pub async fn update_cocktail(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<CocktailPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cocktail = app_state.catalog_service.update_cocktail(id, payload).await?;
    Ok((StatusCode::OK, Json(cocktail)))
}

// DELETE /api/cocktails/{id}
#[utoipa::path(
    delete,
    path = "/api/cocktails/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "ID do coquetel")),
    responses(
        (status = 204, description = "Coquetel removido"),
        (status = 404, description = "Coquetel não encontrado"),
        (status = 409, description = "Coquetel usado em pacotes")
    )
)]
pub async fn delete_cocktail(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_cocktail(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
