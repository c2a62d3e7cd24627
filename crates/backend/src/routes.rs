use axum::{routing::get, Router};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Order handlers
        .route(
            "/orders",
            get(handlers::a001_order::list_all).post(handlers::a001_order::create),
        )
        .route(
            "/orders/:order_id",
            get(handlers::a001_order::get_by_id)
                .put(handlers::a001_order::update)
                .delete(handlers::a001_order::delete),
        )
}
