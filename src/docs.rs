// src/docs.rs

use utoipa::OpenApi;
use crate::common;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Catalog ---
        handlers::catalog::list_suppliers,
        handlers::catalog::get_supplier,
        handlers::catalog::create_supplier,
        handlers::catalog::update_supplier,
        handlers::catalog::delete_supplier,
        handlers::catalog::list_products,
        handlers::catalog::get_product,
        handlers::catalog::create_product,
        handlers::catalog::update_product,
        handlers::catalog::delete_product,
        handlers::catalog::list_cocktails,
        handlers::catalog::get_cocktail,
        handlers::catalog::create_cocktail,
        handlers::catalog::update_cocktail,
        handlers::catalog::delete_cocktail,

        // --- Staff ---
        handlers::staff::list_employees,
        handlers::staff::get_employee,
        handlers::staff::create_employee,
        handlers::staff::update_employee,
        handlers::staff::delete_employee,
        handlers::staff::list_services,
        handlers::staff::get_service,
        handlers::staff::create_service,
        handlers::staff::update_service,
        handlers::staff::delete_service,

        // --- CRM ---
        handlers::crm::list_clients,
        handlers::crm::get_client,
        handlers::crm::create_client,
        handlers::crm::update_client,
        handlers::crm::delete_client,

        // --- Bookings ---
        handlers::bookings::list_packages,
        handlers::bookings::get_package,
        handlers::bookings::create_package,
        handlers::bookings::update_package,
        handlers::bookings::delete_package,
        handlers::bookings::list_reservations,
        handlers::bookings::get_reservation,
        handlers::bookings::create_reservation,
        handlers::bookings::update_reservation,
        handlers::bookings::delete_reservation,
        handlers::bookings::list_events,
        handlers::bookings::get_event,
        handlers::bookings::create_event,
        handlers::bookings::update_event,
        handlers::bookings::delete_event,
    ),
    components(
        schemas(
            // --- Erros ---
            models::schema::Entity,
            common::error::Dependents,

            // --- Catalog ---
            models::catalog::ContainerType,
            models::catalog::Supplier,
            models::catalog::Product,
            models::catalog::Cocktail,
            models::catalog::SupplierPayload,
            models::catalog::ProductPayload,
            models::catalog::CocktailPayload,
            models::catalog::SupplierView,
            models::catalog::ProductView,
            models::catalog::CocktailView,

            // --- Staff ---
            models::staff::EmployeeRole,
            models::staff::ServiceRole,
            models::staff::Employee,
            models::staff::Service,
            models::staff::EmployeePayload,
            models::staff::ServicePayload,
            models::staff::EmployeeView,
            models::staff::ServiceView,

            // --- CRM ---
            models::crm::Client,
            models::crm::ClientPayload,
            models::crm::ClientView,

            // --- Bookings ---
            models::bookings::PaymentMethod,
            models::bookings::Package,
            models::bookings::Reservation,
            models::bookings::Event,
            models::bookings::PackagePayload,
            models::bookings::ReservationPayload,
            models::bookings::EventPayload,
            models::bookings::PackageView,
            models::bookings::ReservationView,
            models::bookings::EventView,
        )
    ),
    tags(
        (name = "Catalog", description = "Fornecedores, Produtos e Coquetéis"),
        (name = "Staff", description = "Funcionários e Serviços"),
        (name = "CRM", description = "Clientes e Indicações"),
        (name = "Bookings", description = "Pacotes, Reservas e Eventos")
    )
)]
pub struct ApiDoc;
