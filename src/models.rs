pub mod bookings;
pub mod catalog;
pub mod crm;
pub mod schema;
pub mod staff;
pub mod validators;
