pub mod bookings;
pub mod catalog;
pub mod crm;
pub mod staff;
