pub mod bookings_repo;
pub use bookings_repo::BookingsRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod crm_repo;
pub use crm_repo::CrmRepository;
pub mod integrity_repo;
pub use integrity_repo::IntegrityRepository;
pub mod staff_repo;
pub use staff_repo::StaffRepository;
