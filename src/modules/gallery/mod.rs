pub mod handlers;
pub mod routes;

pub use routes::gallery_routes;
