// src/handlers/staff.rs

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
    models::staff::{EmployeePayload, EmployeeView, ServicePayload, ServiceView},
};

// =============================================================================
//  FUNCIONÁRIOS
// =============================================================================

// GET /api/employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Staff",
    responses(
        (status = 200, description = "Lista de funcionários", body = Vec<EmployeeView>)
    )
)]
pub async fn list_employees(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let employees = app_state.staff_service.list_employees().await?;
    Ok((StatusCode::OK, Json(employees)))
}

// GET /api/employees/{id}
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Staff",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    responses(
        (status = 200, description = "Funcionário encontrado", body = EmployeeView),
        (status = 404, description = "Funcionário não encontrado")
    )
)]
pub async fn get_employee(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let employee = app_state.staff_service.get_employee(id).await?;
    Ok((StatusCode::OK, Json(employee)))
}

// POST /api/employees
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Staff",
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Funcionário criado", body = EmployeeView),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "CPF ou e-mail já cadastrado")
    )
)]
pub async fn create_employee(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<EmployeePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let employee = app_state.staff_service.create_employee(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

// PUT /api/employees/{id}
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "Staff",
    request_body = EmployeePayload,
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    responses(
        (status = 200, description = "Funcionário atualizado", body = EmployeeView),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Funcionário não encontrado"),
        (status = 409, description = "CPF ou e-mail já cadastrado")
    )
)]
pub async fn update_employee(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<EmployeePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let employee = app_state.staff_service.update_employee(id, payload).await?;
    Ok((StatusCode::OK, Json(employee)))
}

// DELETE /api/employees/{id}
// Subordinados ficam sem supervisor; reservas ficam sem responsável.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Staff",
    params(("id" = Uuid, Path, description = "ID do funcionário")),
    responses(
        (status = 204, description = "Funcionário removido"),
        (status = 404, description = "Funcionário não encontrado")
    )
)]
pub async fn delete_employee(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.staff_service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  SERVIÇOS
// =============================================================================

// GET /api/services
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Staff",
    responses(
        (status = 200, description = "Lista de serviços", body = Vec<ServiceView>)
    )
)]
pub async fn list_services(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let services = app_state.staff_service.list_services().await?;
    Ok((StatusCode::OK, Json(services)))
}

// GET /api/services/{id}
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "Staff",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Serviço encontrado", body = ServiceView),
        (status = 404, description = "Serviço não encontrado")
    )
)]
pub async fn get_service(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = app_state.staff_service.get_service(id).await?;
    Ok((StatusCode::OK, Json(service)))
}

// POST /api/services
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Staff",
    request_body = ServicePayload,
    responses(
        (status = 201, description = "Serviço criado", body = ServiceView),
        (status = 400, description = "Dados inválidos ou funcionário inexistente")
    )
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = app_state.staff_service.create_service(payload).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

// PUT /api/services/{id}
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "Staff",
    request_body = ServicePayload,
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Serviço atualizado", body = ServiceView),
        (status = 400, description = "Dados inválidos ou funcionário inexistente"),
        (status = 404, description = "Serviço não encontrado")
    )
)]
pub async fn update_service(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<ServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = app_state.staff_service.update_service(id, payload).await?;
    Ok((StatusCode::OK, Json(service)))
}

// DELETE /api/services/{id}
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "Staff",
    params(("id" = Uuid, Path, description = "ID do serviço")),
    responses(
        (status = 204, description = "Serviço removido"),
        (status = 404, description = "Serviço não encontrado"),
        (status = 409, description = "Serviço usado em pacotes")
    )
)]
pub async fn delete_service(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.staff_service.delete_service(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
