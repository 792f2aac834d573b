pub mod bookings_service;
pub use bookings_service::BookingsService;
pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod crm_service;
pub use crm_service::CrmService;
pub mod integrity_service;
pub use integrity_service::IntegrityService;
pub mod staff_service;
pub use staff_service::StaffService;

#[cfg(test)]
pub mod test_support;
