mod tracing;

pub use tracing::request_span_middleware;
