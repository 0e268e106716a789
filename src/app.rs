use axum::{
    extract::State,
    handler::HandlerWithoutStateExt,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::path::Path;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

use crate::app_state::AppState;
use crate::middleware::request_span_middleware;
use crate::modules::bookings::bookings_routes;
use crate::modules::contact::contact_routes;
use crate::modules::gallery::gallery_routes;
use crate::modules::intake::intake_routes;
use crate::modules::services::services_routes;

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .merge(services_routes())
        .merge(bookings_routes())
        .merge(contact_routes())
        .merge(gallery_routes())
        .merge(intake_routes());

    let origins: Vec<HeaderValue> = state
        .env
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE]);

    // Static frontend with SPA-style fallback: exact files first, then
    // "page" -> page.html, then index.html.
    let frontend_dir = state.env.app.frontend_dir.clone();
    let spa_fallback = {
        let dir = frontend_dir.clone();
        move |uri: Uri| {
            let dir = dir.clone();
            async move { serve_frontend_page(&dir, uri).await }
        }
    };
    let static_site = ServeDir::new(&frontend_dir).not_found_service(spa_fallback.into_service());

    Router::new()
        .nest("/api", api)
        .fallback_service(static_site)
        .layer(middleware::from_fn(request_span_middleware))
        .layer(cors)
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "healthy",
        Err(err) => {
            tracing::warn!("Database health check failed: {err}");
            "unhealthy"
        }
    };

    Json(json!({
        "status": "healthy",
        "business": state.env.business.name,
        "database": db_status,
    }))
}

async fn serve_frontend_page(dir: &str, uri: Uri) -> Response {
    let dir = Path::new(dir);
    let path = uri.path().trim_matches('/');

    // Extensionless paths like /services resolve to services.html.
    if !path.is_empty() && !path.contains('.') {
        if let Ok(html) = tokio::fs::read_to_string(dir.join(format!("{path}.html"))).await {
            return Html(html).into_response();
        }
    }

    match tokio::fs::read_to_string(dir.join("index.html")).await {
        Ok(html) => Html(html).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
