// src/handlers/bookings.rs

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
    models::bookings::{
        EventPayload, EventView, PackagePayload, PackageView, ReservationPayload, ReservationView,
    },
};

// =============================================================================
//  PACOTES
// =============================================================================

// GET /api/packages
#[utoipa::path(
    get,
    path = "/api/packages",
    tag = "Bookings",
    responses(
        (status = 200, description = "Lista de pacotes", body = Vec<PackageView>)
    )
)]
pub async fn list_packages(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let packages = app_state.bookings_service.list_packages().await?;
    Ok((StatusCode::OK, Json(packages)))
}

// GET /api/packages/{id}
#[utoipa::path(
    get,
    path = "/api/packages/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID do pacote")),
    responses(
        (status = 200, description = "Pacote encontrado", body = PackageView),
        (status = 404, description = "Pacote não encontrado")
    )
)]
pub async fn get_package(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let package = app_state.bookings_service.get_package(id).await?;
    Ok((StatusCode::OK, Json(package)))
}

// POST /api/packages
#[utoipa::path(
    post,
    path = "/api/packages",
    tag = "Bookings",
    request_body = PackagePayload,
    responses(
        (status = 201, description = "Pacote criado", body = PackageView),
        (status = 400, description = "Dados inválidos ou referência inexistente"),
        (status = 409, description = "Já existe pacote com este nome para o coquetel")
    )
)]
pub async fn create_package(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<PackagePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let package = app_state.bookings_service.create_package(payload).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

// PUT /api/packages/{id}
#[utoipa::path(
    put,
    path = "/api/packages/{id}",
    tag = "Bookings",
    request_body = PackagePayload,
    params(("id" = Uuid, Path, description = "ID do pacote")),
    responses(
        (status = 200, description = "Pacote atualizado", body = PackageView),
        (status = 400, description = "Dados inválidos ou referência inexistente"),
        (status = 404, description = "Pacote não encontrado"),
        (status = 409, description = "Já existe pacote com este nome para o coquetel")
    )
)]
pub async fn update_package(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<PackagePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let package = app_state.bookings_service.update_package(id, payload).await?;
    Ok((StatusCode::OK, Json(package)))
}

// DELETE /api/packages/{id}
#[utoipa::path(
    delete,
    path = "/api/packages/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID do pacote")),
    responses(
        (status = 204, description = "Pacote removido"),
        (status = 404, description = "Pacote não encontrado")
    )
)]
pub async fn delete_package(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.bookings_service.delete_package(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  RESERVAS
// =============================================================================

// GET /api/reservations
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = "Bookings",
    responses(
        (status = 200, description = "Lista de reservas", body = Vec<ReservationView>)
    )
)]
pub async fn list_reservations(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = app_state.bookings_service.list_reservations().await?;
    Ok((StatusCode::OK, Json(reservations)))
}

// GET /api/reservations/{id}
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Reserva encontrada", body = ReservationView),
        (status = 404, description = "Reserva não encontrada")
    )
)]
pub async fn get_reservation(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = app_state.bookings_service.get_reservation(id).await?;
    Ok((StatusCode::OK, Json(reservation)))
}

// POST /api/reservations
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = "Bookings",
    request_body = ReservationPayload,
    responses(
        (status = 201, description = "Reserva criada", body = ReservationView),
        (status = 400, description = "Dados inválidos ou referência inexistente"),
        (status = 409, description = "Cliente já possui reserva nesta data")
    )
)]
pub async fn create_reservation(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ReservationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let reservation = app_state.bookings_service.create_reservation(payload).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

// PUT /api/reservations/{id}
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    tag = "Bookings",
    request_body = ReservationPayload,
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Reserva atualizada", body = ReservationView),
        (status = 400, description = "Dados inválidos ou referência inexistente"),
        (status = 404, description = "Reserva não encontrada"),
        (status = 409, description = "Cliente já possui reserva nesta data")
    )
)]
pub async fn update_reservation(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<ReservationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let reservation = app_state.bookings_service.update_reservation(id, payload).await?;
    Ok((StatusCode::OK, Json(reservation)))
}

// DELETE /api/reservations/{id}
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses(
        (status = 204, description = "Reserva removida"),
        (status = 404, description = "Reserva não encontrada")
    )
)]
pub async fn delete_reservation(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.bookings_service.delete_reservation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  EVENTOS
// =============================================================================

// GET /api/events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Bookings",
    responses(
        (status = 200, description = "Lista de eventos", body = Vec<EventView>)
    )
)]
pub async fn list_events(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let events = app_state.bookings_service.list_events().await?;
    Ok((StatusCode::OK, Json(events)))
}

// GET /api/events/{id}
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 200, description = "Evento encontrado", body = EventView),
        (status = 404, description = "Evento não encontrado")
    )
)]
pub async fn get_event(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let event = app_state.bookings_service.get_event(id).await?;
    Ok((StatusCode::OK, Json(event)))
}

// POST /api/events
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "Bookings",
    request_body = EventPayload,
    responses(
        (status = 201, description = "Evento criado", body = EventView),
        (status = 400, description = "Dados inválidos ou referência inexistente")
    )
)]
pub async fn create_event(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<EventPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let event = app_state.bookings_service.create_event(payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

// PUT /api/events/{id}
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = "Bookings",
    request_body = EventPayload,
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 200, description = "Evento atualizado", body = EventView),
        (status = 400, description = "Dados inválidos ou referência inexistente"),
        (status = 404, description = "Evento não encontrado")
    )
)]
pub async fn update_event(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<EventPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let event = app_state.bookings_service.update_event(id, payload).await?;
    Ok((StatusCode::OK, Json(event)))
}

// DELETE /api/events/{id}
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID do evento")),
    responses(
        (status = 204, description = "Evento removido"),
        (status = 404, description = "Evento não encontrado")
    )
)]
pub async fn delete_event(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.bookings_service.delete_event(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
