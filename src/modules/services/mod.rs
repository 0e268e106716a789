pub mod handlers;
pub mod routes;

pub use routes::services_routes;
