use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Page type
        // ========================================
        .route("/api/page_type", get(handlers::a001_page_type::list_all))
        .route(
            "/api/page_type/:id",
            get(handlers::a001_page_type::get_by_id).delete(handlers::a001_page_type::delete),
        )
        .route(
            "/api/page_type/:id/available_attributes",
            get(handlers::a001_page_type::available_attributes),
        )
        .route(
            "/api/page_type/:id/update",
            post(handlers::a001_page_type::update),
        )
        .route(
            "/api/page_type/:id/attributes/assign",
            post(handlers::a001_page_type::assign_attributes),
        )
        .route(
            "/api/page_type/:id/attributes/unassign",
            post(handlers::a001_page_type::unassign_attributes),
        )
        .route(
            "/api/page_type/:id/metadata",
            post(handlers::a001_page_type::update_metadata),
        )
        .route(
            "/api/page_type/:id/private_metadata",
            post(handlers::a001_page_type::update_private_metadata),
        )
        // ========================================
        // A002 Attribute
        // ========================================
        .route("/api/attribute/:id", get(handlers::a002_attribute::get_by_id))
}
