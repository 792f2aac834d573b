// src/routes.rs

use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn app(app_state: AppState) -> Router {
    let catalog_routes = Router::new()
        .route("/suppliers"
               ,get(handlers::catalog::list_suppliers)
               .post(handlers::catalog::create_supplier)
        )
        .route("/suppliers/{id}"
               ,get(handlers::catalog::get_supplier)
               .put(handlers::catalog::update_supplier)
               .delete(handlers::catalog::delete_supplier)
        )
        .route("/products"
               ,get(handlers::catalog::list_products)
               .post(handlers::catalog::create_product)
        )
        .route("/products/{id}"
               ,get(handlers::catalog::get_product)
               .put(handlers::catalog::update_product)
               .delete(handlers::catalog::delete_product)
        )
        .route("/cocktails"
               ,get(handlers::catalog::list_cocktails)
               .post(handlers::catalog::create_cocktail)
        )
        .route("/cocktails/{id}"
               ,get(handlers::catalog::get_cocktail)
               .put(handlers::catalog::update_cocktail)
               .delete(handlers::catalog::delete_cocktail)
        );

    let staff_routes = Router::new()
        .route("/employees"
               ,get(handlers::staff::list_employees)
               .post(handlers::staff::create_employee)
        )
        .route("/employees/{id}"
               ,get(handlers::staff::get_employee)
               .put(handlers::staff::update_employee)
               .delete(handlers::staff::delete_employee)
        )
        .route("/services"
               ,get(handlers::staff::list_services)
               .post(handlers::staff::create_service)
        )
        .route("/services/{id}"
               ,get(handlers::staff::get_service)
               .put(handlers::staff::update_service)
               .delete(handlers::staff::delete_service)
        );

    let crm_routes = Router::new()
        .route("/clients"
               ,get(handlers::crm::list_clients)
               .post(handlers::crm::create_client)
        )
        .route("/clients/{id}"
               ,get(handlers::crm::get_client)
               .put(handlers::crm::update_client)
               .delete(handlers::crm::delete_client)
        );

    let bookings_routes = Router::new()
        .route("/packages"
               ,get(handlers::bookings::list_packages)
               .post(handlers::bookings::create_package)
        )
        .route("/packages/{id}"
               ,get(handlers::bookings::get_package)
               .put(handlers::bookings::update_package)
               .delete(handlers::bookings::delete_package)
        )
        .route("/reservations"
               ,get(handlers::bookings::list_reservations)
               .post(handlers::bookings::create_reservation)
        )
        .route("/reservations/{id}"
               ,get(handlers::bookings::get_reservation)
               .put(handlers::bookings::update_reservation)
               .delete(handlers::bookings::delete_reservation)
        )
        .route("/events"
               ,get(handlers::bookings::list_events)
               .post(handlers::bookings::create_event)
        )
        .route("/events/{id}"
               ,get(handlers::bookings::get_event)
               .put(handlers::bookings::update_event)
               .delete(handlers::bookings::delete_event)
        );

    let api_routes = Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(catalog_routes)
        .merge(staff_routes)
        .merge(crm_routes)
        .merge(bookings_routes);

    Router::new()
        .nest("/api", api_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
