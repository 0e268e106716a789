mod booking_repository;
mod contact_repository;
mod gallery_repository;
mod intake_repository;
mod service_repository;

pub use booking_repository::BookingRepository;
pub use contact_repository::ContactRepository;
pub use gallery_repository::GalleryRepository;
pub use intake_repository::IntakeRepository;
pub use service_repository::ServiceRepository;
