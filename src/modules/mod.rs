pub mod bookings;
pub mod contact;
pub mod gallery;
pub mod intake;
pub mod services;
